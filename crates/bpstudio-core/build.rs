use std::env;
use std::path::PathBuf;

fn main() {
    // CARGO_MANIFEST_DIR for bpstudio-core is crates/bpstudio-core, so the
    // workspace root is two levels up.
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let crate_path = PathBuf::from(&manifest_dir);

    let repo_root = crate_path
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map_or_else(|| crate_path.clone(), std::path::Path::to_path_buf);

    println!(
        "cargo:rustc-env=BPSTUDIO_REPO_ROOT={}",
        repo_root.to_string_lossy()
    );

    println!("cargo:rerun-if-changed=build.rs");
}
