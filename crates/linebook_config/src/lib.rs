// --- File: crates/linebook_config/src/lib.rs ---
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use std::env;
use tracing::{info, warn};

pub mod env_vars;
pub mod models;
pub use models::*;

use env_vars::{get_config_prefix, inject_env_vars, CONFIG_SEPARATOR, SECRET_MARKER};

/// Loads the configuration from `config/default`, `config/<RUN_ENV>` and
/// `LINEBOOK__*` environment variables, then resolves `secret_from_env` markers.
///
/// The directory can be moved with `LINEBOOK_CONFIG_DIR`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("LINEBOOK_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    info!(%run_env, %config_dir, "loading configuration");

    let builder = Config::builder()
        .add_source(File::with_name(&format!("{config_dir}/default")).required(false))
        .add_source(File::with_name(&format!("{config_dir}/{run_env}")).required(false));

    build_config(builder)
}

/// Loads the configuration from an inline TOML document plus the environment.
pub fn load_config_from_str(toml: &str) -> Result<AppConfig, ConfigError> {
    let builder = Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
    build_config(builder)
}

fn build_config(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(&get_config_prefix())
            .separator(CONFIG_SEPARATOR)
            .try_parsing(true),
    );

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_overrides(raw_config)
}

/// Resolves `secret_from_env` markers and the platform `PORT` variable.
pub fn apply_env_overrides(config: AppConfig) -> Result<AppConfig, ConfigError> {
    let mut json = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;

    let missing = inject_env_vars(&mut json);
    if !missing.is_empty() {
        warn!(?missing, "configuration still contains unresolved secrets");
    }

    let mut config: AppConfig = serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to rebuild config: {err}")))?;

    clear_unresolved_optionals(&mut config);

    if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        config.server.port = port;
    }

    Ok(config)
}

/// Optional fields whose marker found no variable count as unset, so
/// `google.key_path` is used when no inline key JSON is provided.
fn clear_unresolved_optionals(config: &mut AppConfig) {
    fn clear(field: &mut Option<String>) {
        if field.as_deref() == Some(SECRET_MARKER) {
            *field = None;
        }
    }

    if let Some(google) = config.google.as_mut() {
        clear(&mut google.service_account_json);
        clear(&mut google.key_path);
    }
    if let Some(line) = config.line.as_mut() {
        clear(&mut line.api_base_url);
    }
    if let Some(sheets) = config.sheets.as_mut() {
        clear(&mut sheets.api_base_url);
    }
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file once per process and returns its path.
///
/// `DOTENV_OVERRIDE` wins over a first CLI argument starting with `.env`,
/// which wins over the default `.env`.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
