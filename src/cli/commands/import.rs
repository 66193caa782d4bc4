use crate::cli::commands::read_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::core::parser::{ParsedReport, parse_report};
use crate::db::models::SOURCE_REPORT;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, note, success, warning};
use crate::ui::records::print_records;

/// Import a multi-lane report (date and shift scanned from the text).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, dry_run } = cmd {
        let text = read_report(file.as_ref())?;

        if text.trim().is_empty() {
            warning("Paste a report first: the input is empty.");
            return Ok(());
        }

        let parsed = parse_report(&text);
        store_parsed(&parsed, cfg, *dry_run, SOURCE_REPORT)?;
    }
    Ok(())
}

/// Shared tail of `import` and `lane`: show, then append unless dry-run.
pub(crate) fn store_parsed(
    parsed: &ParsedReport,
    cfg: &Config,
    dry_run: bool,
    source: &str,
) -> AppResult<()> {
    if parsed.is_empty() {
        warning("No valid activities found in the report.");
        return Ok(());
    }

    info(format!(
        "Date: {} | Shift: {}",
        parsed.header.date, parsed.header.shift
    ));
    print_records(&parsed.records, Some(&cfg.exclude_keyword));

    if dry_run {
        note("Dry run: nothing saved.");
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database)?;
    let added = ImportLogic::apply(&mut pool, parsed, source)?;

    success(format!(
        "Added {added} rows. Shift: {}",
        parsed.header.shift
    ));
    Ok(())
}
