//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "answer-router";
const PROJECT_FILES: [&str; 2] = ["answer-router.toml", ".answer-router.toml"];

/// Environment variables and the keys they set
const ENV_KEYS: [(&str, &str); 3] = [
    ("API_BASE", "api.base_url"),
    ("OPENAI_API_KEY", "api.api_key"),
    ("MODEL_NAME", "api.model"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `API_BASE`, `OPENAI_API_KEY`, `MODEL_NAME`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./answer-router.toml` or `./.answer-router.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/answer-router/config.toml`
    /// 5. Default values
    ///
    /// Command-line flags are applied on top by the binary.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// The merged provider chain, before extraction
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Self::env_provider())
    }

    /// Defaults plus environment only (for `--no-config`)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        Self::figment_without_files().extract().map_err(Box::new)
    }

    pub fn figment_without_files() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env_provider())
    }

    /// Maps the conventional variable names onto `[api]` keys
    pub fn env_provider() -> Env {
        Env::raw()
            .only(&ENV_KEYS.map(|(var, _)| var))
            .map(|var| {
                ENV_KEYS
                    .iter()
                    .find(|(name, _)| var.as_str().eq_ignore_ascii_case(name))
                    .map(|(_, key)| (*key).into())
                    .unwrap_or_else(|| var.as_str().to_string().into())
            })
    }

    /// `$XDG_CONFIG_HOME/answer-router/config.toml`, or the platform equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for `--show-config`)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        for (var, key) in ENV_KEYS {
            let state = if std::env::var_os(var).is_some() {
                "SET  "
            } else {
                "     "
            };
            println!("  [{}] Env:     {} -> {}", state, var, key);
        }

        if let Some(path) = config_path {
            let state = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{}] Explicit: {}", state, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./answer-router.toml or ./.answer-router.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let state = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", state, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use router_domain::TaskDomain;

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.to_string_lossy().contains("answer-router"));
    }

    #[test]
    fn test_defaults_when_no_files() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config: FileConfig = ConfigLoader::figment_without_files().extract()?;
            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_project_file_and_explicit_file_merge() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "answer-router.toml",
                r#"
[api]
model = "project-model"

[pipeline]
math_samples = 5
"#,
            )?;
            jail.create_file(
                "override.toml",
                r#"
[pipeline]
math_samples = 7
classification_fallback = "MATH"
"#,
            )?;

            let config: FileConfig =
                ConfigLoader::figment(Some(Path::new("override.toml"))).extract()?;
            assert_eq!(config.api.model, "project-model");
            assert_eq!(config.pipeline.math_samples, 7);
            assert_eq!(config.pipeline.classification_fallback, TaskDomain::Math);
            assert_eq!(config.pipeline.prediction_samples, 3);
            Ok(())
        });
    }

    #[test]
    fn test_environment_overrides_files() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(".answer-router.toml", "[api]\nmodel = \"from-file\"\n")?;
            jail.set_env("MODEL_NAME", "from-env");
            jail.set_env("API_BASE", "http://127.0.0.1:9000/v1");
            jail.set_env("UNRELATED", "ignored");

            let config: FileConfig = ConfigLoader::figment(None).extract()?;
            assert_eq!(config.api.model, "from-env");
            assert_eq!(config.api.base_url, "http://127.0.0.1:9000/v1");
            assert_eq!(config.api.api_key, "cse476");
            Ok(())
        });
    }

    #[test]
    fn test_no_config_still_reads_environment() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("answer-router.toml", "[api]\nmodel = \"ignored\"\n")?;
            jail.set_env("OPENAI_API_KEY", "sk-test");

            let config: FileConfig = ConfigLoader::figment_without_files().extract()?;
            assert_eq!(config.api.model, "bens_model");
            assert_eq!(config.api.api_key, "sk-test");
            Ok(())
        });
    }
}
