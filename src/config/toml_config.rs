use crate::core::{ratings, text};
use crate::domain::model::{CaseMode, RatedItem};
use crate::utils::error::{DrillError, Result};
use crate::utils::logger;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrillConfig {
    #[serde(default)]
    pub filters: FiltersConfig,
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltersConfig {
    #[serde(default = "default_min_rating")]
    pub min_rating: f64,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            min_rating: default_min_rating(),
        }
    }
}

fn default_min_rating() -> f64 {
    ratings::MIN_RATING
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default)]
    pub case: CaseMode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl DrillConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy();
        validation::validate_path("config", &path_str)?;

        tracing::debug!("Loading config from {}", path_str);
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DrillError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MIN_RATING})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn min_rating(&self) -> f64 {
        self.filters.min_rating
    }

    pub fn case_mode(&self) -> CaseMode {
        self.format.case
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose
    }

    /// Installs the compact logger at the configured verbosity.
    pub fn init_logging(&self) -> bool {
        logger::init_logger(self.verbose())
    }

    pub fn apply_rating_filter(&self, items: &[RatedItem]) -> Vec<RatedItem> {
        ratings::filter_by_min_rating(items, self.min_rating())
    }

    pub fn apply_format(&self, input: &str) -> String {
        text::format_string(input, self.case_mode())
    }
}

impl Validate for DrillConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_finite("filters.min_rating", self.filters.min_rating)?;
        validation::validate_range("filters.min_rating", self.filters.min_rating, 0.0, 5.0)?;
        Ok(())
    }
}
