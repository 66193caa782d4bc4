use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_records, load_records_by_date};
use crate::errors::AppResult;
use crate::models::record::ActivityRecord;
use crate::ui::messages::info;
use crate::ui::records::print_records;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let stored = match date {
            Some(d) => load_records_by_date(&mut pool, d)?,
            None => load_records(&mut pool)?,
        };

        if stored.is_empty() {
            match date {
                Some(d) => info(format!("No records for {d}.")),
                None => info("No records yet."),
            }
            return Ok(());
        }

        let records: Vec<ActivityRecord> = stored.into_iter().map(|s| s.record).collect();
        print_records(&records, Some(&cfg.exclude_keyword));
    }
    Ok(())
}
