use std::env;

/// Used when `TWS_BACKEND_BASE` is not set for the build.
const DEFAULT_BACKEND_BASE: &str = "http://localhost:5000";

fn main() {
    // Bake the backend address into the WASM binary; there is no runtime config.
    let backend_base =
        env::var("TWS_BACKEND_BASE").unwrap_or_else(|_| DEFAULT_BACKEND_BASE.to_string());
    println!("cargo:rustc-env=TWS_BACKEND_BASE={}", backend_base.trim());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=TWS_BACKEND_BASE");
}
