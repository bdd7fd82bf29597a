//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{FitcoachError, FitcoachResult};
use crate::export::{export_log_csv, export_user_json, export_user_yaml};
use crate::services::TrackerService;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (food log only)
    Csv,
    /// JSON format (profile and history)
    Json,
    /// YAML format (profile and history, human-readable)
    Yaml,
}

/// Arguments for the export command
#[derive(Args)]
pub struct ExportArgs {
    /// Output file path (stdout when omitted)
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(tracker: &TrackerService<'_>, args: ExportArgs) -> FitcoachResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FitcoachError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(tracker, &mut writer, args.format, args.pretty)?;
            writer.flush().map_err(|e| FitcoachError::Export(e.to_string()))?;
            eprintln!("Exported {} to: {}", tracker.user_id(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_export(tracker, &mut writer, args.format, args.pretty)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    tracker: &TrackerService<'_>,
    writer: &mut W,
    format: ExportFormat,
    pretty: bool,
) -> FitcoachResult<()> {
    match format {
        ExportFormat::Csv => {
            export_log_csv(tracker, writer)?;
        }
        ExportFormat::Json => export_user_json(tracker, writer, pretty)?,
        ExportFormat::Yaml => export_user_yaml(tracker, writer)?,
    }
    Ok(())
}
