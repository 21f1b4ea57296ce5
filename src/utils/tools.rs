use log::info;

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    // Info système (Rust version, OS)
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    // Versions injectées par build.rs (absentes si cargo metadata a échoué)
    let image_version = option_env!("DEP_VERSION_IMAGE").unwrap_or("Unknown");
    let rand_version = option_env!("DEP_VERSION_RAND").unwrap_or("Unknown");
    let glam_version = option_env!("DEP_VERSION_GLAM").unwrap_or("Unknown");

    info!("Rust core dependancies");
    info!("  image version: {}", image_version);
    info!("  rand  version: {}", rand_version);
    info!("  glam  version: {}", glam_version);
}
