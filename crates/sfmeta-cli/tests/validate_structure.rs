//! Integration tests: `sfmeta validate` against temporary repository trees.

use std::path::Path;

use sfmeta_cli::style::Palette;
use sfmeta_cli::validate::{validate_with, ValidateArgs};
use sfmeta_core::CiEnvironment;

/// Create `metadata/types/<name>.json` for each type and
/// `force-app/main/default/<dir>/` for each directory.
fn scaffold(root: &Path, types: &[&str], dirs: &[&str]) {
    let types_dir = root.join("metadata").join("types");
    std::fs::create_dir_all(&types_dir).unwrap();
    for name in types {
        std::fs::write(types_dir.join(format!("{name}.json")), b"{}").unwrap();
    }
    let deploy_dir = root.join("force-app").join("main").join("default");
    std::fs::create_dir_all(&deploy_dir).unwrap();
    for dir in dirs {
        std::fs::create_dir_all(deploy_dir.join(dir)).unwrap();
    }
}

fn run(root: &Path, ci: &CiEnvironment) -> (u8, String) {
    let mut buf = Vec::new();
    let code = validate_with(&ValidateArgs::default(), root, Palette::plain(), ci, &mut buf)
        .expect("validate should not fail operationally");
    (code, String::from_utf8(buf).unwrap())
}

#[test]
fn apex_registry_flags_unknown_directory() {
    let dir = tempfile::tempdir().unwrap();
    scaffold(
        dir.path(),
        &["ApexClass", "ApexTrigger"],
        &["classes", "Triggers", "UnknownType"],
    );
    let output = dir.path().join("github_output");
    let ci = CiEnvironment {
        github_actions: true,
        output_path: Some(output.clone()),
    };

    let (code, text) = run(dir.path(), &ci);
    assert_eq!(code, 1, "output:\n{text}");

    assert!(text.contains("✓ classes - Valid metadata type"));
    assert!(text.contains("✓ Triggers - Valid metadata type"));
    assert!(text.contains("✗ UnknownType - Invalid metadata type"));
    assert!(text.contains("Total directories checked: 3"));
    assert!(text.contains("Valid directories: 2"));
    assert!(text.contains("Invalid directories: 1"));
    assert!(text.contains("Invalid directories found:\n  - UnknownType\n"));
    assert!(text.trim_end().ends_with(
        "Validation failed! Some directories in force-app/main/default are not valid Salesforce metadata types."
    ));

    // Listing order is file-system dependent, so check membership per line.
    let outputs = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = outputs.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "has_errors=true");
    assert_eq!(lines[1], r#"invalid_dirs=["UnknownType"]"#);
    assert!(lines[2].starts_with("valid_dirs=["));
    assert!(lines[2].contains(r#""classes""#));
    assert!(lines[2].contains(r#""Triggers""#));
}

#[test]
fn all_valid_directories_pass() {
    let dir = tempfile::tempdir().unwrap();
    scaffold(
        dir.path(),
        &["ApexClass", "CustomObject", "lwc"],
        &["classes", "objects", "lwc"],
    );

    let (code, text) = run(dir.path(), &CiEnvironment::disabled());
    assert_eq!(code, 0, "output:\n{text}");
    assert!(text.contains("Invalid directories: 0"));
    assert!(!text.contains("Invalid directories found:"));
    assert!(text.contains("Validation successful!"));
}

#[test]
fn fallback_registry_is_used_when_types_dir_missing() {
    let dir = tempfile::tempdir().unwrap();
    let deploy = dir.path().join("force-app/main/default");
    std::fs::create_dir_all(deploy.join("lwc")).unwrap();
    std::fs::create_dir_all(deploy.join("flexipages")).unwrap();
    std::fs::create_dir_all(deploy.join("classes")).unwrap();

    let (code, text) = run(dir.path(), &CiEnvironment::disabled());

    assert!(text.contains("Warning: metadata/types directory not found at"));
    assert!(text.contains("Using fallback list."));
    // The fallback holds directory names, so aliased names no longer match.
    assert!(text.contains("✓ lwc - Valid metadata type"));
    assert!(text.contains("✓ flexipages - Valid metadata type"));
    assert!(text.contains("✗ classes - Invalid metadata type"));
    assert_eq!(code, 1);
}

#[test]
fn missing_deployment_path_passes_regardless() {
    let dir = tempfile::tempdir().unwrap();
    let types_dir = dir.path().join("metadata/types");
    std::fs::create_dir_all(&types_dir).unwrap();
    let output = dir.path().join("github_output");
    let ci = CiEnvironment {
        github_actions: true,
        output_path: Some(output.clone()),
    };

    let (code, text) = run(dir.path(), &ci);
    assert_eq!(code, 0);
    assert!(text.contains("Warning: force-app/main/default directory not found at"));
    assert!(!output.exists(), "no outputs are published without a scan");
}

#[test]
fn plain_files_in_deployment_path_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path(), &["ApexClass"], &["classes"]);
    std::fs::write(
        dir.path().join("force-app/main/default/package.xml"),
        b"<Package/>",
    )
    .unwrap();

    let (code, text) = run(dir.path(), &CiEnvironment::disabled());
    assert_eq!(code, 0);
    assert!(text.contains("Total directories checked: 1"));
    assert!(!text.contains("package.xml"));
}
