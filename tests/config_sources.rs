//! Tests for config loading, `source` includes, and resolution against a fake environment.

use gumo_logging::Config;
use gumo_logging::Error;
use gumo_logging::OutputFormat;
use gumo_logging::config::GeneralConfig;
use gumo_logging::fmt::ModeSetting;
use std::fs;
use tempfile::TempDir;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn missing_file_gives_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn parses_general_section() {
    let config = Config::from_toml(
        r#"
[general]
project_id = "from-file"
mode = "json"
source_location = false
"#,
    )
    .unwrap();

    assert_eq!(
        config.general,
        GeneralConfig {
            project_id: Some("from-file".to_string()),
            mode: ModeSetting::Structured,
            source_location: false,
        }
    );

    let settings = config.resolve_with(no_env);
    assert_eq!(settings.project_id, "from-file");
    assert_eq!(settings.format, OutputFormat::Structured);
    assert!(!settings.source_location);
}

#[test]
fn environment_project_wins_over_file() {
    let config = Config::from_toml("[general]\nproject_id = \"file\"\n").unwrap();
    let settings = config.resolve_with(|name| {
        (name == "GOOGLE_CLOUD_PROJECT").then(|| "env".to_string())
    });
    assert_eq!(settings.project_id, "env");
}

#[test]
fn empty_project_variable_is_ignored() {
    let settings = Config::default().resolve_with(|name| {
        (name == "GOOGLE_CLOUD_PROJECT").then(String::new)
    });
    assert_eq!(settings.project_id, "<unknown-project>");
}

#[test]
fn custom_env_variable_names() {
    let config = Config::from_toml(
        r#"
[env]
project_var = "MY_PROJECT"
platform_var = "K_SERVICE"
"#,
    )
    .unwrap();

    let settings = config.resolve_with(|name| match name {
        "MY_PROJECT" => Some("svc-project".to_string()),
        "K_SERVICE" => Some("api".to_string()),
        _ => None,
    });
    assert_eq!(settings.project_id, "svc-project");
    assert!(settings.format.is_structured());
}

#[test]
fn text_mode_ignores_platform_signal() {
    let config = Config::from_toml("[general]\nmode = \"text\"\n").unwrap();
    let settings = config.resolve_with(|_| Some("set".to_string()));
    assert_eq!(settings.format, OutputFormat::Text);
}

#[test]
fn invalid_mode_is_a_parse_error() {
    let err = Config::from_toml("[general]\nmode = \"loud\"\n").unwrap_err();
    assert!(matches!(err, Error::ConfigParse { path: None, .. }));
}

#[test]
fn load_with_sources_fills_unset_fields() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");
    let child_path = tmp_dir.path().join("child.toml");

    let base_content = format!(
        r#"
source = "{}"

[general]
mode = "text"
"#,
        child_path.display()
    );
    fs::write(&base_path, base_content).unwrap();

    fs::write(
        &child_path,
        r#"
[general]
project_id = "shared"
mode = "structured"
"#,
    )
    .unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert_eq!(config.general.project_id.as_deref(), Some("shared"));
    assert_eq!(config.general.mode, ModeSetting::Text);
}

#[test]
fn load_with_missing_source_is_ignored() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");

    let base_content = format!(
        r#"
source = "{}"

[general]
project_id = "base"
"#,
        tmp_dir.path().join("missing.toml").display()
    );
    fs::write(&base_path, base_content).unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert_eq!(config.general.project_id.as_deref(), Some("base"));
}

#[test]
fn load_with_cyclic_sources_errors() {
    let tmp_dir = TempDir::new().unwrap();
    let a_path = tmp_dir.path().join("a.toml");
    let b_path = tmp_dir.path().join("b.toml");

    let a_content = format!(r#"source = "{}""#, b_path.display());
    let b_content = format!(r#"source = "{}""#, a_path.display());
    fs::write(&a_path, a_content).unwrap();
    fs::write(&b_path, b_content).unwrap();

    let err = Config::load_from(&a_path).unwrap_err();
    assert!(matches!(err, Error::CyclicInclude(_)));
}

#[test]
fn parse_error_names_the_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("broken.toml");
    fs::write(&path, "[general]\nmode = 3\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(&err, Error::ConfigParse { path: Some(p), .. } if p == &path));
    assert!(err.to_string().contains("broken.toml"), "{err}");
}

#[test]
fn relative_source_is_taken_from_including_dir() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("logging.toml");
    fs::create_dir(tmp_dir.path().join("conf.d")).unwrap();
    fs::write(
        tmp_dir.path().join("conf.d").join("project.toml"),
        "[general]\nproject_id = \"relative\"\n",
    )
    .unwrap();
    fs::write(&base_path, "source = \"conf.d/project.toml\"\n").unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert_eq!(config.general.project_id.as_deref(), Some("relative"));
}

#[test]
fn shared_source_included_twice_is_not_a_cycle() {
    let tmp_dir = TempDir::new().unwrap();
    let dir = tmp_dir.path();
    fs::write(dir.join("common.toml"), "[general]\nproject_id = \"common\"\n").unwrap();
    fs::write(dir.join("left.toml"), "source = \"common.toml\"\n").unwrap();
    fs::write(dir.join("right.toml"), "source = \"common.toml\"\n").unwrap();
    fs::write(
        dir.join("root.toml"),
        "source = \"left.toml\"\nsource = \"right.toml\"\n",
    )
    .unwrap();

    let config = Config::load_from(&dir.join("root.toml")).unwrap();
    assert_eq!(config.general.project_id.as_deref(), Some("common"));
}
