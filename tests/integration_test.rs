/// Integration tests for the synchronization library
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use addon_sync::prelude::*;

/// Lay out an addon embedded two levels below a parent project root.
fn embedded_addon(parent_manifest: &str, addon_manifest: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let addon_dir = temp_dir.path().join("lib").join("my-addon");
    fs::create_dir_all(&addon_dir).unwrap();
    fs::write(temp_dir.path().join("package.json"), parent_manifest).unwrap();
    fs::write(addon_dir.join("package.json"), addon_manifest).unwrap();
    (temp_dir, addon_dir)
}

#[test]
fn test_sync_happy_path_round_trip() {
    let (temp_dir, addon_dir) = embedded_addon(
        r#"{
  "name": "parent-project",
  "devDependencies": {
    "b": "1.5",
    "c": "3.0"
  }
}"#,
        r#"{"name": "my-addon", "devDependencies": {"a": "1.0", "b": "2.0"}}"#,
    );

    let source = Manifest::load(&addon_dir.join("package.json")).unwrap();
    let mut target = Manifest::load(&temp_dir.path().join("package.json")).unwrap();

    let changes = sync_manifests(&source, &mut target).unwrap();
    target.write().unwrap();

    assert_eq!(
        changes,
        vec![
            DependencyChange::Added {
                name: "a".to_string(),
                version: "1.0".to_string(),
            },
            DependencyChange::Overridden {
                name: "b".to_string(),
                old: "1.5".to_string(),
                new: "2.0".to_string(),
            },
        ]
    );

    let written = fs::read_to_string(temp_dir.path().join("package.json")).unwrap();
    assert_eq!(
        written,
        r#"{
  "name": "parent-project",
  "devDependencies": {
    "a": "1.0",
    "b": "2.0",
    "c": "3.0"
  }
}
"#
    );
}

#[test]
fn test_sync_replay_emits_no_changes() {
    let (temp_dir, addon_dir) = embedded_addon(
        r#"{"devDependencies": {"b": "1.5", "c": "3.0"}}"#,
        r#"{"devDependencies": {"a": "1.0", "b": "2.0"}}"#,
    );
    let target_path = temp_dir.path().join("package.json");

    let source = Manifest::load(&addon_dir.join("package.json")).unwrap();

    let mut target = Manifest::load(&target_path).unwrap();
    let first_changes = sync_manifests(&source, &mut target).unwrap();
    target.write().unwrap();
    assert_eq!(first_changes.len(), 2);
    let first_written = fs::read_to_string(&target_path).unwrap();

    let mut target = Manifest::load(&target_path).unwrap();
    let second_changes = sync_manifests(&source, &mut target).unwrap();
    target.write().unwrap();
    assert!(second_changes.is_empty());
    assert_eq!(fs::read_to_string(&target_path).unwrap(), first_written);
}

#[test]
fn test_sync_disjoint_mappings_lose_no_keys() {
    let (temp_dir, addon_dir) = embedded_addon(
        r#"{"devDependencies": {"c": "3.0", "d": "4.0"}}"#,
        r#"{"devDependencies": {"a": "1.0", "b": "2.0"}}"#,
    );

    let source = Manifest::load(&addon_dir.join("package.json")).unwrap();
    let mut target = Manifest::load(&temp_dir.path().join("package.json")).unwrap();
    sync_manifests(&source, &mut target).unwrap();

    let deps = target.dev_dependencies().unwrap();
    let names: Vec<&str> = deps.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_sync_source_parse_error_surfaces_before_write() {
    let (temp_dir, addon_dir) = embedded_addon(
        r#"{"devDependencies": {"b": "1.5"}}"#,
        "this is not json at all",
    );
    let target_path = temp_dir.path().join("package.json");
    let original = fs::read_to_string(&target_path).unwrap();

    let result = Manifest::load(&addon_dir.join("package.json"));
    assert!(result.is_err());

    // Nothing was written because the source never parsed.
    assert_eq!(fs::read_to_string(&target_path).unwrap(), original);
}

#[test]
fn test_sync_missing_dev_dependencies_field_is_fatal() {
    let (temp_dir, addon_dir) = embedded_addon(
        r#"{"name": "parent-project"}"#,
        r#"{"devDependencies": {"a": "1.0"}}"#,
    );

    let source = Manifest::load(&addon_dir.join("package.json")).unwrap();
    let mut target = Manifest::load(&temp_dir.path().join("package.json")).unwrap();

    let result = sync_manifests(&source, &mut target);
    assert!(result.is_err());
    let err = format!("{}", result.unwrap_err());
    assert!(err.contains("devDependencies"));
}

#[test]
fn test_sync_preserves_unrelated_manifest_members() {
    let (temp_dir, addon_dir) = embedded_addon(
        r#"{
  "name": "parent-project",
  "version": "4.2.0",
  "scripts": {
    "build": "ember build"
  },
  "dependencies": {
    "lodash": "^4.0.0"
  },
  "devDependencies": {}
}"#,
        r#"{"devDependencies": {"a": "1.0"}}"#,
    );

    let source = Manifest::load(&addon_dir.join("package.json")).unwrap();
    let mut target = Manifest::load(&temp_dir.path().join("package.json")).unwrap();
    sync_manifests(&source, &mut target).unwrap();
    target.write().unwrap();

    let written = fs::read_to_string(temp_dir.path().join("package.json")).unwrap();
    assert!(written.contains("\"version\": \"4.2.0\""));
    assert!(written.contains("\"build\": \"ember build\""));
    assert!(written.contains("\"lodash\": \"^4.0.0\""));
    // Member order untouched: name before scripts before devDependencies
    let name_pos = written.find("\"name\"").unwrap();
    let scripts_pos = written.find("\"scripts\"").unwrap();
    let deps_pos = written.find("\"devDependencies\"").unwrap();
    assert!(name_pos < scripts_pos);
    assert!(scripts_pos < deps_pos);
}

#[test]
fn test_stylesheet_rewrite_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let css_path = temp_dir.path().join("fonts.css");
    fs::write(
        &css_path,
        "@font-face {\n  \
         src: url(font.eot?t=12345);\n  \
         src: url(font.eot?t=12345#iefix) format('embedded-opentype'),\n       \
         url(font.woff?t=12345#iefix) format('woff'),\n       \
         url(font.ttf?t=12345) format('truetype');\n}\n",
    )
    .unwrap();

    let replaced = rewrite_stylesheet(&css_path).unwrap();
    assert_eq!(replaced, 4);

    let written = fs::read_to_string(&css_path).unwrap();
    assert!(written.contains("url(font.woff#iefix) format('woff')"));
    assert!(written.contains("url(font.ttf) format('truetype')"));
    assert!(!written.contains("?t="));
}

#[test]
fn test_stylesheet_rewrite_is_idempotent_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let css_path = temp_dir.path().join("fonts.css");
    fs::write(&css_path, "src: url(font.woff?t=9#iefix);\n").unwrap();

    let first = rewrite_stylesheet(&css_path).unwrap();
    assert_eq!(first, 1);
    let after_first = fs::read_to_string(&css_path).unwrap();

    let second = rewrite_stylesheet(&css_path).unwrap();
    assert_eq!(second, 0);
    assert_eq!(fs::read_to_string(&css_path).unwrap(), after_first);
}

#[test]
fn test_config_discovery_overrides_target() {
    let temp_dir = TempDir::new().unwrap();
    let addon_dir = temp_dir.path().join("my-addon");
    fs::create_dir_all(&addon_dir).unwrap();
    fs::write(
        addon_dir.join("addon-sync.config.yml"),
        "target_manifest: ../custom.json\nquiet: true\n",
    )
    .unwrap();

    let config = discover_config(&addon_dir).unwrap().unwrap();
    assert_eq!(
        config.target_manifest.as_deref(),
        Some(Path::new("../custom.json"))
    );
    assert_eq!(config.quiet, Some(true));
}
