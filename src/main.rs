use clap::Parser;
use pathway_select::app::console::{ConsoleEvents, ConsoleView};
use pathway_select::core::highlight;
use pathway_select::core::session::SessionOutcome;
use pathway_select::domain::model::{RangeSelection, ValueDomain};
use pathway_select::domain::ports::ConfigProvider;
use pathway_select::utils::error::ErrorSeverity;
use pathway_select::utils::{logger, validation::Validate};
use pathway_select::{CliConfig, LocalStorage, RangeSelector, SelectError, SessionEngine, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting pathway-select");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML");
                    std::process::exit(1);
                }
            };
            apply_cli_overrides(&mut config, &cli);
            run_validated(&config)
        }
        None => run_validated(&cli),
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Selection session failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

/// Command-line flags win over the configuration file, field by field.
fn apply_cli_overrides(config: &mut TomlConfig, cli: &CliConfig) {
    if let Some(file) = &cli.values_file {
        config.data = Some(pathway_select::config::toml_config::DataConfig {
            values_file: Some(file.clone()),
        });
        tracing::info!("🔧 Values file overridden to: {}", file);
    }

    if let (Some(min), Some(max)) = (cli.min_bound, cli.max_bound) {
        config.domain = Some(pathway_select::config::toml_config::DomainConfig {
            min_bound: Some(min),
            max_bound: Some(max),
        });
        tracing::info!("🔧 Domain bounds overridden to: [{}, {}]", min, max);
    }
}

fn run_validated<C: ConfigProvider + Validate>(config: &C) -> pathway_select::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e);
    }
    tracing::info!("✅ Configuration validated");

    run_highlight_session(config)
}

fn run_highlight_session<C: ConfigProvider>(config: &C) -> pathway_select::Result<()> {
    let input_storage = LocalStorage::new(".".to_string());

    let points = match config.values_file() {
        Some(path) => Some(highlight::load_data_points(&input_storage, path)?),
        None => None,
    };

    let domain = match config.explicit_bounds() {
        Some((min, max)) => ValueDomain::new(min, max)?,
        None => {
            let points = points.as_ref().ok_or_else(|| SelectError::MissingConfigError {
                field: "values_file".to_string(),
            })?;
            let values: Vec<f64> = points.iter().map(|p| p.value).collect();
            ValueDomain::from_values(&values)?
        }
    };

    tracing::info!(
        "Value domain: [{}, {}]",
        domain.min_bound,
        domain.max_bound
    );
    println!("Choose range of interest for data values");

    let mut selector = RangeSelector::new(domain);
    let stdin = std::io::stdin();
    let mut engine = SessionEngine::new(
        ConsoleEvents::new(stdin.lock()),
        ConsoleView::new(std::io::stdout()),
    );

    match engine.run(&mut selector)? {
        SessionOutcome::Confirmed(selection) => {
            println!(
                "✅ Range selected: [{}, {}]",
                format_bound(selection.min),
                format_bound(selection.max)
            );

            if let Some(points) = &points {
                let report = highlight::build_report(config.session_name(), points, &selection);
                let output_storage = LocalStorage::new(config.output_path().to_string());
                highlight::write_report(&output_storage, config.report_filename(), &report)?;

                println!(
                    "📁 Report saved to: {}/{}",
                    config.output_path(),
                    config.report_filename()
                );
            }
        }
        SessionOutcome::Cancelled => {
            println!("Selection cancelled.");
        }
    }

    Ok(())
}

fn format_bound(value: f64) -> String {
    if value == RangeSelection::UNBOUNDED_MIN || value == RangeSelection::UNBOUNDED_MAX {
        "unbounded".to_string()
    } else {
        format!("{}", value)
    }
}
