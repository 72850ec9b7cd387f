//! lens-builder - Guided terminal editor for custom lens documents.
//!
//! Prompts go to stderr so that stdout carries only the exported document.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use lens_builder::adapters::{serializer_for, LocalExportStorage, TerminalWizard, WizardError};
use lens_builder::application::{ExportLensCommand, ExportLensHandler};
use lens_builder::config::{AppConfig, ConfigError, LoggingConfig};
use lens_builder::domain::editor::LensBuilder;
use lens_builder::ports::ExportError;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    init_tracing(&config.logging);

    match run(&config) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "lens-builder failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = logging
        .env_filter()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(config: &AppConfig) -> Result<ExitCode, AppError> {
    let mut builder = LensBuilder::with_default_version(&config.lens.default_version);
    let stdin = io::stdin();
    let mut wizard = TerminalWizard::new(stdin.lock(), io::stderr());

    let Some(lens) = wizard.run(&mut builder)? else {
        info!("no lens completed; nothing exported");
        return Ok(ExitCode::from(1));
    };

    let serializer = serializer_for(config.export.format, config.export.pretty);
    let mut handler = ExportLensHandler::new(serializer);
    if let Some(dir) = &config.export.output_dir {
        handler = handler.with_storage(Arc::new(LocalExportStorage::new(dir)));
    }

    let result = handler.handle(ExportLensCommand {
        lens,
        base_filename: config.export.base_filename.clone(),
    })?;

    match result.location {
        Some(path) => eprintln!("Lens written to {}", path.display()),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(result.exported.content.as_bytes())?;
            if !result.exported.content.ends_with('\n') {
                writeln!(stdout)?;
            }
            stdout.flush()?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
