//! Project-local TOML loading through the full figment chain.

use agenda_config::AgendaConfig;
use figment::{
    Jail,
    providers::{Format, Toml},
};
use pretty_assertions::assert_eq;

const PROJECT_TOML: &str = r#"
[notion]
token = "secret_from_toml"
timeout_secs = 12

[databases]
university = "uni-from-toml"
personal = "personal-from-toml"
"#;

#[test]
fn project_toml_is_loaded() {
    Jail::expect_with(|jail| {
        jail.create_dir(".agenda")?;
        jail.create_file(".agenda/config.toml", PROJECT_TOML)?;

        let config = AgendaConfig::load().expect("config loads");
        assert_eq!(config.notion.token, "secret_from_toml");
        assert_eq!(config.notion.timeout_secs, 12);
        assert_eq!(config.notion.base_url, "https://api.notion.com/v1");
        assert_eq!(config.databases.university, "uni-from-toml");
        assert_eq!(config.databases.work, "");
        Ok(())
    });
}

#[test]
fn env_overrides_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".agenda")?;
        jail.create_file(".agenda/config.toml", PROJECT_TOML)?;
        jail.set_env("PERSONAL_DB_ID", "personal-from-env");

        let config = AgendaConfig::load().expect("config loads");
        assert_eq!(config.databases.personal, "personal-from-env");
        assert_eq!(config.databases.university, "uni-from-toml");
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".agenda")?;
        jail.create_file(".agenda/config.toml", "[notion]\ntimeout_secs = \"soon\"\n")?;

        let result = AgendaConfig::load();
        assert!(matches!(result, Err(agenda_config::ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn extra_providers_layer_on_top() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("override.toml");
    std::fs::write(&path, "[notion]\nbase_url = \"http://127.0.0.1:9999\"\n").expect("write");

    let config: AgendaConfig = AgendaConfig::figment()
        .merge(Toml::file(&path))
        .extract()
        .expect("config extracts");
    assert_eq!(config.notion.base_url, "http://127.0.0.1:9999");
}
