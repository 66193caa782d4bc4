use crate::cli::commands::import::store_parsed;
use crate::cli::commands::read_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::parser::parse_lane_report;
use crate::db::models::SOURCE_LANE;
use crate::errors::{AppError, AppResult};
use crate::models::lane::Lane;
use crate::ui::messages::warning;

/// Import activities for one lane; date and lane come from the command line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Lane {
        date,
        lane,
        shift,
        file,
        dry_run,
    } = cmd
    {
        if date.trim().is_empty() {
            return Err(AppError::InvalidDate(date.clone()));
        }
        let lane = Lane::from_label(lane)?;

        let text = read_report(file.as_ref())?;
        if text.trim().is_empty() {
            warning("Paste a report first: the input is empty.");
            return Ok(());
        }

        let parsed = parse_lane_report(&text, date, lane, shift.as_deref());
        store_parsed(&parsed, cfg, *dry_run, SOURCE_LANE)?;
    }
    Ok(())
}
