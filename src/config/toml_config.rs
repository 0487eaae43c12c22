use crate::core::{AnagramInput, OutputFormat};
use crate::utils::error::{KataError, Result};
use crate::utils::validation::{validate_non_negative, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::Path;

/// Environment variable naming a TOML file that overrides the built-in inputs.
pub const CONFIG_ENV_VAR: &str = "SMALL_KATA_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KataConfig {
    pub reverse_words: ReverseWordsConfig,
    pub anagram: AnagramConfig,
    pub largest_digit: LargestDigitConfig,
    pub propagate: PropagateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseWordsConfig {
    pub sentence: String,
}

impl Default for ReverseWordsConfig {
    fn default() -> Self {
        Self {
            sentence: "java developer full stack".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnagramConfig {
    pub left: String,
    pub right: String,
}

impl Default for AnagramConfig {
    fn default() -> Self {
        Self {
            left: "listen".to_string(),
            right: "silent".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LargestDigitConfig {
    pub number: i32,
}

impl Default for LargestDigitConfig {
    fn default() -> Self {
        Self { number: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagateConfig {
    pub sequence: Vec<i32>,
}

impl Default for PropagateConfig {
    fn default() -> Self {
        Self {
            sequence: vec![28, 7, 30, 84, 29, 74, 50, 37, 85, 74, 60, 63, 65, 90, 82],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl KataConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KataError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KataError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads the file named by `SMALL_KATA_CONFIG`, or the built-in inputs when unset.
    pub fn load() -> Result<Self> {
        match config_path_from_env(std::env::var(CONFIG_ENV_VAR))? {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// 替換環境變數 (例如 ${KATA_SENTENCE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KataError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn anagram_input(&self) -> AnagramInput {
        AnagramInput {
            left: self.anagram.left.clone(),
            right: self.anagram.right.clone(),
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format
    }
}

fn config_path_from_env(var: std::result::Result<String, VarError>) -> Result<Option<String>> {
    match var {
        Ok(path) => {
            validate_path(CONFIG_ENV_VAR, &path)?;
            Ok(Some(path))
        }
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(KataError::InvalidConfigValueError {
            field: CONFIG_ENV_VAR.to_string(),
            value: raw.to_string_lossy().into_owned(),
            reason: "Path is not valid UTF-8".to_string(),
        }),
    }
}

impl Validate for KataConfig {
    fn validate(&self) -> Result<()> {
        validate_non_negative("largest_digit.number", self.largest_digit.number)
    }
}
