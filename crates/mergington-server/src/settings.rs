//! Layered configuration: built-in defaults, then the TOML file, then
//! `MERGINGTON_*` environment variables, then command-line overrides.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File, Map};

use crate::{SeedMode, ServerConfig};

/// Prefix for environment overrides, e.g. `MERGINGTON_PORT=9000`.
pub const ENV_PREFIX: &str = "MERGINGTON";

/// Resolve the [`ServerConfig`].
///
/// `file` may be missing. `env` replaces the process environment when set.
/// `seed_mode` is the `--seed-mode` flag and beats every other layer.
pub fn load_settings(
  file: PathBuf,
  env: Option<Map<String, String>>,
  seed_mode: Option<SeedMode>,
) -> Result<ServerConfig, ConfigError> {
  Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8000)?
    .set_default("store_path", "mergington.db")?
    .set_default("static_dir", "static")?
    .set_default("seed_mode", SeedMode::default().to_string())?
    .set_default("connect_timeout_secs", 5)?
    .add_source(File::from(file).required(false))
    .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true).source(env))
    .set_override_option("seed_mode", seed_mode.map(|m| m.to_string()))?
    .build()?
    .try_deserialize()
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::time::Duration;

  fn no_file() -> PathBuf { PathBuf::from("does-not-exist.toml") }

  fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
    Some(pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect())
  }

  fn temp_toml(contents: &str) -> PathBuf {
    let path = std::env::temp_dir()
      .join(format!("mergington-settings-{}-{}.toml", std::process::id(), contents.len()));
    std::fs::write(&path, contents).unwrap();
    path
  }

  #[test]
  fn defaults_apply_without_file_or_env() {
    let cfg = load_settings(no_file(), env(&[]), None).unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.store_path, PathBuf::from("mergington.db"));
    assert_eq!(cfg.static_dir, PathBuf::from("static"));
    assert_eq!(cfg.seed_mode, SeedMode::IfEmpty);
    assert_eq!(cfg.connect_timeout(), Duration::from_secs(5));
  }

  #[test]
  fn environment_overrides_defaults() {
    let cfg = load_settings(
      no_file(),
      env(&[
        ("MERGINGTON_PORT", "9000"),
        ("MERGINGTON_SEED_MODE", "reset"),
        ("MERGINGTON_CONNECT_TIMEOUT_SECS", "2"),
      ]),
      None,
    )
    .unwrap();
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.seed_mode, SeedMode::Reset);
    assert_eq!(cfg.connect_timeout(), Duration::from_secs(2));
  }

  #[test]
  fn flag_overrides_environment() {
    let cfg = load_settings(
      no_file(),
      env(&[("MERGINGTON_SEED_MODE", "reset")]),
      Some(SeedMode::Skip),
    )
    .unwrap();
    assert_eq!(cfg.seed_mode, SeedMode::Skip);
  }

  #[test]
  fn file_sits_between_defaults_and_environment() {
    let path = temp_toml("port = 8100\nseed_mode = \"skip\"\nhost = \"0.0.0.0\"\n");
    let cfg  = load_settings(path.clone(), env(&[("MERGINGTON_PORT", "8200")]), None).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8200);
    assert_eq!(cfg.seed_mode, SeedMode::Skip);
  }

  #[test]
  fn unknown_seed_mode_is_rejected() {
    let err = load_settings(no_file(), env(&[("MERGINGTON_SEED_MODE", "sometimes")]), None);
    assert!(err.is_err());
  }
}
