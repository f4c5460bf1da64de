//! Build script to compile the C kernel variants.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_kernels_active)");

    // Probe for a usable C compiler before committing to the C variants.
    let compiler = match cc::Build::new().try_get_compiler() {
        Ok(compiler) => compiler,
        Err(_) => {
            println!("cargo:warning=No C compiler found. C kernel variants disabled.");
            return;
        }
    };

    let compiler_name = if compiler.is_like_clang() {
        "Clang"
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=Unrecognized C compiler. C kernel variants disabled.");
        return;
    };

    let mut build = cc::Build::new();
    let mut found_any = false;
    for file in glob::glob("src/**/*.c")
        .expect("glob pattern is valid")
        .filter_map(|entry| entry.ok())
    {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
        found_any = true;
    }
    if !found_any {
        return;
    }

    // Keep C at the same ISA baseline as the Rust side so the comparison
    // stays about the compilers, not the flags. No -ffast-math: reordered
    // accumulation would break exact agreement with the reference kernels.
    build.opt_level(3);

    let rustflags = env::var("CARGO_ENCODED_RUSTFLAGS")
        .or_else(|_| env::var("RUSTFLAGS"))
        .unwrap_or_default();
    if rustflags.contains("target-cpu=native") {
        build.flag_if_supported("-march=native");
    }

    build.compile("kernels_c");

    println!("cargo:rustc-cfg=c_kernels_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
