use agenda_config::AgendaConfig;
use agenda_core::DatabaseRef;

/// Emit warnings for settings that silently fell back to defaults.
pub fn warn_unconfigured(config: &AgendaConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &AgendaConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.notion.is_configured() && has_env_prefix(&env_keys, "AGENDA_NOTION") {
        warnings.push(
            "Notion token is empty while AGENDA_NOTION* env vars exist. Use double underscores (example: AGENDA_NOTION__TOKEN)."
                .to_string(),
        );
    }

    let missing = config.databases.missing();
    if !missing.is_empty() {
        let names = missing
            .iter()
            .copied()
            .map(DatabaseRef::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let hint = if has_env_prefix(&env_keys, "AGENDA_DATABASES") {
            " Use double underscores (example: AGENDA_DATABASES__WORK)."
        } else {
            ""
        };
        warnings.push(format!(
            "No database id configured for {names}; commands targeting {} will fail.{hint}",
            if missing.len() == DatabaseRef::ALL.len() {
                "any database"
            } else {
                "them"
            }
        ));
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use agenda_config::{AgendaConfig, DatabasesConfig, NotionConfig};
    use pretty_assertions::assert_eq;

    use super::collect_unconfigured_warnings;

    fn configured() -> AgendaConfig {
        AgendaConfig {
            notion: NotionConfig {
                token: "secret_x".to_string(),
                ..Default::default()
            },
            databases: DatabasesConfig {
                university: "uni".to_string(),
                work: "work".to_string(),
                personal: "personal".to_string(),
            },
        }
    }

    #[test]
    fn warns_for_single_underscore_env_keys() {
        let warnings = collect_unconfigured_warnings(
            &AgendaConfig::default(),
            vec![
                ("AGENDA_NOTION_TOKEN".to_string(), "secret_x".to_string()),
                ("AGENDA_DATABASES_WORK".to_string(), "work".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("AGENDA_NOTION__TOKEN"));
        assert!(warnings[1].contains("University, Work, Personal"));
        assert!(warnings[1].contains("AGENDA_DATABASES__WORK"));
    }

    #[test]
    fn names_only_missing_databases() {
        let mut config = configured();
        config.databases.personal = String::new();

        let warnings = collect_unconfigured_warnings(&config, Vec::new());

        assert_eq!(
            warnings,
            vec!["No database id configured for Personal; commands targeting them will fail."]
        );
    }

    #[test]
    fn does_not_warn_when_fully_configured() {
        let warnings = collect_unconfigured_warnings(
            &configured(),
            vec![("AGENDA_NOTION__TOKEN".to_string(), "secret_x".to_string())],
        );

        assert!(warnings.is_empty());
    }
}
