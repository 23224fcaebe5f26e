//! Application orchestrator.
//! Builds the config from CLI args, initializes logging, runs the staging
//! pipeline and turns its report into stdout lines and an exit code.

use anyhow::Result;
use std::process::ExitCode;
use tracing::{debug, error, info};

use get_files::cli::Args;
use get_files::output as out;
use get_files::{Diagnostic, StageError, stage};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<ExitCode> {
    let cfg = args.to_config();

    // Keep the guard alive until we return so buffered file logs get flushed.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json_logs).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting get_files: {:?}", args);

    match stage::run(&cfg) {
        Ok(report) => {
            for d in &report.diagnostics {
                out::print_user(&d.to_string());
            }
            info!(outcome = ?report.outcome, skipped = report.diagnostics.len(), "Run completed");
            out::print_status(&report.outcome.to_string(), true);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let Some(se) = e.downcast_ref::<StageError>() else {
                error!(error = ?e, "Staging failed");
                return Err(e);
            };
            let code = se.code();
            match se {
                StageError::MissingFolders(names) => {
                    error!(code, kind = "missing_folders", folders = ?names, "Folders not found");
                    for name in names {
                        out::print_user(&Diagnostic::MissingFolder(name.clone()).to_string());
                    }
                    out::print_status(&se.to_string(), false);
                }
                StageError::SourceNotFound(path) => {
                    error!(code, kind = "source_not_found", path = %path.display(), "Invalid source");
                    out::print_error(&se.to_string());
                }
                StageError::SourceNotDirectory(path) => {
                    error!(code, kind = "source_not_directory", path = %path.display(), "Invalid source");
                    out::print_error(&se.to_string());
                }
                StageError::InvalidOutputName(name) => {
                    error!(code, kind = "invalid_output", output = %name, "Invalid output name");
                    out::print_error(&se.to_string());
                }
                StageError::NoFoldersRequested => {
                    error!(code, kind = "no_folders", "No folders requested");
                    out::print_error(&se.to_string());
                }
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
