#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

// Without this import we get the following error:
// error[E0599]: no method named `abs` found for type `f64` in the current scope
#[allow(unused_imports)]
use num_traits::float::FloatCore;

// Wrap core:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use core::{
        cmp,
        convert,
        default,
        fmt,
        hash,
        num,
        ops,
        f32,
        f64,
    };

    pub use alloc::string;
    pub use alloc::vec::Vec;
}
