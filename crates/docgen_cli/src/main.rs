//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `docgen_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from any
    // embedding UI runtime.
    println!("docgen_core ping={}", docgen_core::ping());
    println!("docgen_core version={}", docgen_core::core_version());
    println!(
        "docgen_core store_configured={}",
        docgen_core::StoreConfig::from_env().is_configured()
    );
    println!(
        "docgen_core genai_configured={}",
        docgen_core::GeneratorConfig::from_env().is_configured()
    );
}
