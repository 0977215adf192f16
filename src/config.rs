use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::llm::gemini::{DEFAULT_API_KEY_ENV, DEFAULT_MODEL, GEMINI_API_URL};
use crate::llm::{GeminiConfig, GenerationSettings};
use crate::router::{self, AgentSettings};
use crate::tools;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub llm: LlmConfig,
    pub resolver: SamplingConfig,
    pub summarizer: SamplingConfig,
    pub funifier: SamplingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub base_url: String,
    pub timeout_ms: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: GEMINI_API_URL.to_string(),
            timeout_ms: None,
        }
    }
}

impl LlmConfig {
    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout: self.timeout_ms.map(Duration::from_millis),
        }
    }
}

/// Per-call sampling overrides; unset fields keep the call's defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl SamplingConfig {
    pub fn apply(&self, defaults: GenerationSettings) -> GenerationSettings {
        GenerationSettings {
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_output_tokens: self.max_output_tokens.unwrap_or(defaults.max_output_tokens),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir
                .join(project_name)
                .join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!(
                            "Failed to load config from {}: {}",
                            primary_config.display(),
                            e
                        );
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Sampling settings for every model call, defaults filled in
    pub fn agent_settings(&self) -> AgentSettings {
        AgentSettings {
            resolver: self.resolver.apply(router::defaults::RESOLVER),
            summarizer: self.summarizer.apply(tools::defaults::SUMMARIZER),
            funifier: self.funifier.apply(tools::defaults::FUNIFIER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.model, "gemini-1.5-flash");
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert!(config.llm.timeout_ms.is_none());
        assert_eq!(config.agent_settings(), AgentSettings::default());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("toolroute.yml");
        fs::write(
            &path,
            r#"
llm:
  model: gemini-1.5-pro
  timeout_ms: 30000
funifier:
  max_output_tokens: 200
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.llm.model, "gemini-1.5-pro");
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(
            config.llm.gemini_config().timeout,
            Some(Duration::from_millis(30000))
        );

        let settings = config.agent_settings();
        assert_eq!(settings.funifier, GenerationSettings::new(0.7, 200));
        assert_eq!(settings.summarizer, GenerationSettings::new(0.1, 150));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yml");
        fs::write(&path, "llm: [not, a, map").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_sampling_config_apply() {
        let overrides = SamplingConfig {
            temperature: Some(0.3),
            max_output_tokens: None,
        };
        let applied = overrides.apply(GenerationSettings::new(0.1, 100));
        assert_eq!(applied, GenerationSettings::new(0.3, 100));

        let none = SamplingConfig::default().apply(GenerationSettings::new(0.7, 150));
        assert_eq!(none, GenerationSettings::new(0.7, 150));
    }

    #[test]
    fn test_gemini_config_from_llm_config() {
        let llm = LlmConfig {
            base_url: "http://localhost:9999".to_string(),
            ..LlmConfig::default()
        };
        let gemini = llm.gemini_config();
        assert_eq!(gemini.model, DEFAULT_MODEL);
        assert_eq!(gemini.base_url, "http://localhost:9999");
        assert!(gemini.timeout.is_none());
    }
}
