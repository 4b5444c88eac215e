use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SelectError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub session: SessionConfig,
    pub domain: Option<DomainConfig>,
    pub data: Option<DataConfig>,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainConfig {
    pub min_bound: Option<f64>,
    pub max_bound: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub values_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub report_filename: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SelectError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SelectError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitute `${VAR_NAME}` references with environment values; unknown
    /// variables are left as-is so the validation error names them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("session.name", &self.session.name)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;

        if let Some(file) = self.values_file() {
            validation::validate_file_extensions(
                "data.values_file",
                &[file.to_string()],
                &["json"],
            )?;
        }

        let bounds = self
            .domain
            .as_ref()
            .map(|d| (d.min_bound, d.max_bound))
            .unwrap_or((None, None));
        match bounds {
            (Some(min), Some(max)) => {
                validation::validate_bounds("domain.min_bound/domain.max_bound", min, max)?
            }
            (Some(_), None) => {
                return Err(SelectError::MissingConfigError {
                    field: "domain.max_bound".to_string(),
                })
            }
            (None, Some(_)) => {
                return Err(SelectError::MissingConfigError {
                    field: "domain.min_bound".to_string(),
                })
            }
            (None, None) => {
                if self.values_file().is_none() {
                    return Err(SelectError::MissingConfigError {
                        field: "data.values_file".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn values_file(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.values_file.as_deref())
    }

    pub fn explicit_bounds(&self) -> Option<(f64, f64)> {
        let domain = self.domain.as_ref()?;
        match (domain.min_bound, domain.max_bound) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    pub fn output_path(&self) -> &str {
        &self.load.output_path
    }

    pub fn report_filename(&self) -> &str {
        self.load
            .report_filename
            .as_deref()
            .unwrap_or("highlight_report.json")
    }
}

impl ConfigProvider for TomlConfig {
    fn session_name(&self) -> &str {
        &self.session.name
    }

    fn values_file(&self) -> Option<&str> {
        self.values_file()
    }

    fn explicit_bounds(&self) -> Option<(f64, f64)> {
        self.explicit_bounds()
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn report_filename(&self) -> &str {
        self.report_filename()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
