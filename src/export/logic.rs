// src/export/logic.rs

use crate::core::AttendanceService;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::RecapExport;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// High-level recap export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write today's recap to `file`.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    pub fn export(
        service: &AttendanceService,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force, &mut io::stdin().lock())?;

        let (today, recap) = service.dated_recap()?;
        let rows: Vec<RecapExport> = recap
            .iter()
            .map(|entry| RecapExport::from_entry(today, entry))
            .collect();

        if rows.is_empty() {
            warning("No students in the roster, nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}
