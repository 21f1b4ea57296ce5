// build.rs
use cargo_metadata::MetadataCommand;
use std::collections::HashSet;

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    // Récupère la metadata du projet ; en cas d'échec on garde les valeurs "Unknown"
    let metadata = match MetadataCommand::new().exec() {
        Ok(metadata) => metadata,
        Err(e) => {
            println!("cargo:warning=⚪ cargo metadata indisponible : {}", e);
            return;
        }
    };

    // Ensemble des crates qui nous intéressent
    let tracked = HashSet::from(["image", "rand", "glam"]);

    for package in &metadata.packages {
        if tracked.contains(package.name.as_str()) {
            println!(
                "cargo:rustc-env=DEP_VERSION_{}={}",
                package.name.to_uppercase(),
                package.version
            );
        }
    }
}
