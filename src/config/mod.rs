pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::{Result, SelectError};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pathway-select")]
#[command(about = "Interactive range selection and highlighting over pathway data values")]
pub struct CliConfig {
    /// TOML configuration file; flags below override its values
    #[arg(long)]
    pub config: Option<String>,

    /// JSON file with the data points to highlight
    #[arg(long)]
    pub values_file: Option<String>,

    /// Explicit lower domain bound (requires --max-bound)
    #[arg(long)]
    pub min_bound: Option<f64>,

    /// Explicit upper domain bound (requires --min-bound)
    #[arg(long)]
    pub max_bound: Option<f64>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Session name recorded in the highlight report
    #[arg(long, default_value = "highlight")]
    pub session_name: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn session_name(&self) -> &str {
        &self.session_name
    }

    fn values_file(&self) -> Option<&str> {
        self.values_file.as_deref()
    }

    fn explicit_bounds(&self) -> Option<(f64, f64)> {
        match (self.min_bound, self.max_bound) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("session_name", &self.session_name)?;

        if let Some(file) = &self.values_file {
            validation::validate_file_extensions("values_file", &[file.clone()], &["json"])?;
        }

        match (self.min_bound, self.max_bound) {
            (Some(min), Some(max)) => validation::validate_bounds("min_bound/max_bound", min, max)?,
            (Some(_), None) => {
                return Err(SelectError::MissingConfigError {
                    field: "max_bound".to_string(),
                })
            }
            (None, Some(_)) => {
                return Err(SelectError::MissingConfigError {
                    field: "min_bound".to_string(),
                })
            }
            (None, None) => {}
        }

        // Without a data set the domain cannot be derived, so explicit
        // bounds become mandatory.
        if self.values_file.is_none() && self.explicit_bounds().is_none() {
            return Err(SelectError::MissingConfigError {
                field: "values_file".to_string(),
            });
        }

        Ok(())
    }
}
