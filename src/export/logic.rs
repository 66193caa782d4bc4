// src/export/logic.rs

use crate::core::filter::apply_exclusion;
use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::record::ActivityRecord;
use crate::ui::messages::warning;
use crate::utils::path::{prefixed_file_name, with_extension};
use std::path::PathBuf;

/// Prefix given to the default file name of a keyword-filtered export.
const FILTERED_PREFIX: &str = "filtered_";

/// What to export and where.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    /// Explicit output path; `None` uses `default_file`.
    pub file: Option<&'a str>,
    pub default_file: &'a str,
    /// Drop rows whose description contains this keyword.
    pub exclude: Option<&'a str>,
    /// Highlighted in XLSX output.
    pub highlight: Option<&'a str>,
    pub force: bool,
}

impl ExportRequest<'_> {
    /// Final output path: the format extension is appended when missing and
    /// a filtered export to the default name gets the `filtered_` prefix.
    pub fn output_path(&self) -> PathBuf {
        let ext = self.format.as_str();
        match self.file {
            Some(f) => with_extension(f, ext),
            None => {
                let base = with_extension(self.default_file, ext);
                if self.exclude.is_some() {
                    prefixed_file_name(&base, FILTERED_PREFIX)
                } else {
                    base
                }
            }
        }
    }
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the stored records. Returns the written path, or `None` when
    /// nothing was left to export.
    pub fn export(pool: &mut DbPool, req: &ExportRequest) -> AppResult<Option<PathBuf>> {
        let records: Vec<ActivityRecord> = load_records(pool)?
            .into_iter()
            .map(|s| s.record)
            .collect();

        Self::export_records(records, req)
    }

    /// Export an in-memory record set.
    pub fn export_records(
        records: Vec<ActivityRecord>,
        req: &ExportRequest,
    ) -> AppResult<Option<PathBuf>> {
        let records = apply_exclusion(records, req.exclude);

        if records.is_empty() {
            warning("No records to export.");
            return Ok(None);
        }

        let path = req.output_path();
        ensure_writable(&path, req.force)?;
        ensure_parent_dir(&path)?;

        match req.format {
            ExportFormat::Csv => export_csv(&records, &path)?,
            ExportFormat::Json => export_json(&records, &path)?,
            ExportFormat::Xlsx => export_xlsx(&records, &path, req.highlight)?,
        }

        Ok(Some(path))
    }
}
