// \file src/macros.rs
//! macros for operator traits

macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, &other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(self, &other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, other)
            }
        }
    };
}

// Forward everything to ref-ref, when reusing storage is not helpful
macro_rules! forward_all_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_val_ref_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
    };
}

/// Implement a ref-ref operator with a `*_with_context` method, rounding
/// to the merged context of the operands
macro_rules! impl_binop_with_context {
    (impl $imp:ident::$method:ident => $with_context:ident) => {
        impl<'a, 'b> $imp<&'b BigFloat> for &'a BigFloat {
            type Output = BigFloat;

            #[inline]
            fn $method(self, rhs: &BigFloat) -> BigFloat {
                let ctx = Context::merge(&self.ctx, &rhs.ctx);
                self.$with_context(rhs, &ctx)
            }
        }

        forward_all_binop_to_ref_ref!(impl $imp for BigFloat, $method);
    };
}
