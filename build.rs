//! Locates the system cairo library and emits the link directives.
//!
//! Resolution order:
//! 1. `CAIRO_LIB_DIR` environment variable (expected to contain `libcairo.so`
//!    or the platform equivalent),
//! 2. a development `libcairo.so`/`libcairo.dylib` in the usual library
//!    directories,
//! 3. a versioned `libcairo.so.2` runtime library, shimmed through a symlink
//!    in `OUT_DIR` so that `-lcairo` resolves even without the `-dev` package.

use std::env;
use std::path::{Path, PathBuf};

const LIB_DIRS: &[&str] = &[
    "/usr/lib/x86_64-linux-gnu",
    "/usr/lib/aarch64-linux-gnu",
    "/usr/lib64",
    "/usr/lib",
    "/usr/local/lib",
    "/lib/x86_64-linux-gnu",
    "/lib/aarch64-linux-gnu",
    "/opt/homebrew/lib",
];

fn main() {
    println!("cargo:rerun-if-env-changed=CAIRO_LIB_DIR");

    if let Ok(dir) = env::var("CAIRO_LIB_DIR") {
        println!("cargo:rustc-link-search=native={dir}");
        println!("cargo:rustc-link-lib=cairo");
        return;
    }

    let unversioned = if cfg!(target_os = "macos") {
        "libcairo.dylib"
    } else {
        "libcairo.so"
    };

    for dir in LIB_DIRS {
        if Path::new(dir).join(unversioned).exists() {
            println!("cargo:rustc-link-search=native={dir}");
            println!("cargo:rustc-link-lib=cairo");
            return;
        }
    }

    // No development symlink installed; point a shim at the runtime library.
    for dir in LIB_DIRS {
        let versioned = Path::new(dir).join("libcairo.so.2");
        if versioned.exists() {
            let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
            let shim = out_dir.join("libcairo.so");
            if !shim.exists() {
                #[cfg(unix)]
                std::os::unix::fs::symlink(&versioned, &shim)
                    .expect("failed to create libcairo.so shim");
            }
            println!("cargo:rustc-link-search=native={}", out_dir.display());
            println!("cargo:rustc-link-lib=cairo");
            return;
        }
    }

    // Fall back to the plain link directive and let the linker report the
    // missing library with its usual diagnostics.
    println!("cargo:rustc-link-lib=cairo");
}
