use std::{
    env, fs,
    path::{Path, PathBuf},
};

const SOURCE_ROOT_ENV: &str = "QUILL_SOURCE_ROOT";
const EXPORTED_ENV: &str = "QUILL_BUILD_SOURCE_ROOT";

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));

    println!("cargo:rerun-if-env-changed={SOURCE_ROOT_ENV}");
    println!("cargo:rerun-if-changed=build.rs");

    let source_root = match env::var(SOURCE_ROOT_ENV) {
        Ok(value) => value,
        Err(_) => workspace_manifest(&manifest_dir)
            .and_then(|manifest| {
                emit_rerun_if_exists(&manifest);
                metadata_source_root(&manifest)
            })
            .unwrap_or_default(),
    };

    println!("cargo:rustc-env={EXPORTED_ENV}={source_root}");
}

/// Walks up from the crate directory to the first manifest declaring `[workspace]`.
fn workspace_manifest(manifest_dir: &Path) -> Option<PathBuf> {
    manifest_dir
        .ancestors()
        .map(|dir| dir.join("Cargo.toml"))
        .find(|candidate| {
            fs::read_to_string(candidate)
                .ok()
                .and_then(|text| toml::from_str::<toml::Table>(&text).ok())
                .is_some_and(|table| table.contains_key("workspace"))
        })
}

fn metadata_source_root(manifest: &Path) -> Option<String> {
    let text = fs::read_to_string(manifest).ok()?;
    let table = toml::from_str::<toml::Table>(&text).ok()?;

    table
        .get("workspace")?
        .get("metadata")?
        .get("quill")?
        .get("source_root")?
        .as_str()
        .map(str::to_owned)
}

fn emit_rerun_if_exists(path: &Path) {
    if path.exists() {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}
