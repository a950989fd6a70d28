//! Build script for the storefront crate.
//!
//! Fingerprints the stylesheet so templates can link to a content-addressed
//! file name.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    fingerprint_stylesheet();
}

/// Copy main.css to `static/css/derived/main.<hash>.css`.
///
/// The short hash is exported as `CSS_HASH` for `env!("CSS_HASH")`.
fn fingerprint_stylesheet() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let source = Path::new(&manifest_dir).join("static/css/main.css");

    println!("cargo:rerun-if-changed={}", source.display());

    let content = match fs::read(&source) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read main.css: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
            return;
        }
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short = &digest[..8];
    println!("cargo:rustc-env=CSS_HASH={short}");

    let derived = Path::new(&manifest_dir).join("static/css/derived");
    fs::create_dir_all(&derived).expect("failed to create static/css/derived");
    fs::copy(&source, derived.join(format!("main.{short}.css")))
        .expect("failed to write fingerprinted stylesheet");
}
