//! Config command handler

use std::collections::BTreeMap;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::target::TargetPath;

use super::args::{drive_key_letter, is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;
    let value = validate_config_value(key, value)?;

    let mut config = store.load().await?;
    set_value(&mut config, key, &value);

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;
    match get_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value("target", config.target.as_deref().unwrap_or(NOT_SET));
    presenter.key_value(
        "language_file",
        config.language_file.as_deref().unwrap_or(NOT_SET),
    );

    let names = config
        .codecs
        .as_ref()
        .map(|codecs| {
            codecs
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| NOT_SET.to_string());
    presenter.key_value("codecs", &names);

    for (letter, root) in config.drives.iter().flatten() {
        presenter.key_value(&format!("drives.{}", letter), root);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!(
            "Unknown key. Valid keys: {}, drives.<LETTER>",
            VALID_CONFIG_KEYS.join(", ")
        ),
    })
}

/// Validate a config value, returning the value to store
fn validate_config_value(key: &str, value: &str) -> Result<String, ConfigError> {
    match key {
        "target" => {
            // An empty target clears the remembered folder
            let bounded = TargetPath::bound_input(value);
            if !bounded.is_empty() {
                bounded
                    .parse::<TargetPath>()
                    .map_err(|e| ConfigError::ValidationError {
                        key: key.to_string(),
                        message: e.to_string(),
                    })?;
            }
            Ok(bounded)
        }
        "language_file" => Ok(value.to_string()),
        _ => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Drive root must not be empty".to_string(),
                });
            }
            Ok(value.to_string())
        }
    }
}

fn set_value(config: &mut AppConfig, key: &str, value: &str) {
    match key {
        "target" => config.target = Some(value.to_string()),
        "language_file" => config.language_file = Some(value.to_string()),
        _ => {
            if let Some(letter) = drive_key_letter(key) {
                config
                    .drives
                    .get_or_insert_with(BTreeMap::new)
                    .insert(letter.to_string(), value.to_string());
            }
        }
    }
}

fn get_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "target" => config.target.clone(),
        "language_file" => config.language_file.clone(),
        _ => {
            let letter = drive_key_letter(key)?;
            config.drive_roots().get(&letter).cloned()
        }
    }
}
