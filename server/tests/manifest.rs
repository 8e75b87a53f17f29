//! Manifest checks: every declared cargo feature is gated on somewhere.

use std::fs;
use std::path::Path;

fn declared_features(manifest: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut in_features = false;
    for line in manifest.lines().map(str::trim) {
        if line.starts_with('[') {
            in_features = line == "[features]";
            continue;
        }
        if in_features {
            if let Some((name, _)) = line.split_once('=') {
                out.push(name.trim().to_string());
            }
        }
    }
    out
}

fn sources(dir: &Path, out: &mut String) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push_str(&fs::read_to_string(&path).unwrap_or_default());
        }
    }
}

#[test]
fn feature_parser_reads_features_table() {
    let manifest = "[package]\nname = \"x\"\n\n[features]\ndefault = []\nssr = []\n\n[dependencies]\naxum = \"0.8\"\n";
    assert_eq!(declared_features(manifest), vec!["default", "ssr"]);
}

#[test]
fn every_feature_is_gated_on() {
    let manifest = fs::read_to_string("Cargo.toml").unwrap();
    assert!(manifest.contains("name = \"server\""), "run from the crate root");

    let mut code = String::new();
    sources(Path::new("src"), &mut code);
    let unused: Vec<String> = declared_features(&manifest)
        .into_iter()
        .filter(|f| f != "default")
        .filter(|f| !code.contains(&format!("feature = \"{f}\"")))
        .collect();
    assert!(unused.is_empty(), "features nothing checks: {unused:?}");
}
