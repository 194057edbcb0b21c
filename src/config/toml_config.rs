use crate::domain::ports::FormDefaults;
use crate::utils::error::{Result, TipError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults file loaded from TOML. Every section and field is optional;
/// anything absent falls back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub form: Option<FormSection>,
    pub display: Option<DisplaySection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSection {
    pub tip_percent: Option<u8>,
    pub split_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySection {
    pub currency: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TipError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TipError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Replaces ${VAR_NAME} with the environment value; unknown variables are
    // left as-is so the later parse reports them in context.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(form) = &self.form {
            if let Some(tip) = form.tip_percent {
                crate::utils::validation::validate_range("form.tip_percent", tip, 0, 100)?;
            }
            if let Some(split) = form.split_count {
                crate::utils::validation::validate_minimum("form.split_count", split, 1)?;
            }
        }

        if let Some(display) = &self.display {
            if let Some(currency) = &display.currency {
                crate::utils::validation::validate_non_empty_string(
                    "display.currency",
                    currency,
                )?;
            }
        }

        Ok(())
    }

    pub fn tip_percent(&self) -> u8 {
        self.form
            .as_ref()
            .and_then(|f| f.tip_percent)
            .unwrap_or(0)
    }

    pub fn split_count(&self) -> u32 {
        self.form
            .as_ref()
            .and_then(|f| f.split_count)
            .unwrap_or(1)
    }

    pub fn currency(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.currency.as_deref())
            .unwrap_or("$")
    }
}

impl FormDefaults for TomlConfig {
    fn tip_percent(&self) -> u8 {
        self.tip_percent()
    }

    fn split_count(&self) -> u32 {
        self.split_count()
    }

    fn currency_symbol(&self) -> &str {
        self.currency()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[form]
tip_percent = 15
split_count = 2

[display]
currency = "$"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.tip_percent(), 15);
        assert_eq!(config.split_count(), 2);
        assert_eq!(config.currency(), "$");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.tip_percent(), 0);
        assert_eq!(config.split_count(), 1);
        assert_eq!(config.currency(), "$");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_TIPSPLIT_CURRENCY", "kr");

        let toml_content = r#"
[display]
currency = "${TEST_TIPSPLIT_CURRENCY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.currency(), "kr");

        std::env::remove_var("TEST_TIPSPLIT_CURRENCY");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[form]
tip_percent = 100
split_count = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tip_percent_over_range_fails_validation() {
        let toml_content = r#"
[form]
tip_percent = 101
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[form]
tip_percent = 18
split_count = 3

[display]
currency = "USD "
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.tip_percent(), 18);
        assert_eq!(config.split_count(), 3);
        assert_eq!(config.currency(), "USD ");
    }
}
