use std::env;
use std::fs;
use std::io;
use std::num::NonZeroU64;
use std::path::Path;

/// Environment variable overriding the precision of default contexts
const PRECISION_VAR: &str = "RUST_BIGFLOAT_DEFAULT_PRECISION";

/// Bits in the mantissa of an f64
const F64_PRECISION: u64 = 53;

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-env-changed={}", PRECISION_VAR);

    match env::var_os("OUT_DIR") {
        Some(outdir) => write_default_precision(Path::new(&outdir).join("default_precision.rs").as_path()),
        None => Ok(()),
    }
}

/// Write `const DEFAULT_PRECISION: u64 = N;` to `path`, leaving an
/// up-to-date file untouched so it does not force a rebuild
fn write_default_precision(path: &Path) -> io::Result<()> {
    let precision = match env::var(PRECISION_VAR) {
        Ok(value) => match value.trim().parse::<NonZeroU64>() {
            Ok(prec) => prec.get(),
            Err(_) => panic!("${} must be an integer greater than zero, got {:?}", PRECISION_VAR, value),
        },
        Err(_) => F64_PRECISION,
    };

    let contents = format!("const DEFAULT_PRECISION: u64 = {};", precision);
    if fs::read_to_string(path).ok().as_deref() != Some(contents.as_str()) {
        fs::write(path, contents)?;
    }
    Ok(())
}
