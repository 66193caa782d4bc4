use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::{DeleteLogic, DeleteTarget};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { all, force, date } = cmd {
        let target = match (all, date) {
            (true, _) => DeleteTarget::All,
            (false, Some(d)) => DeleteTarget::Date(d.clone()),
            (false, None) => return Err(AppError::InvalidDate(String::new())),
        };

        //
        // Confirmation prompt
        //
        let prompt = match &target {
            DeleteTarget::All => "Delete ALL records? This action is irreversible.".to_string(),
            DeleteTarget::Date(d) => {
                format!("Delete all records for {d}? This action is irreversible.")
            }
        };

        if !*force && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let removed = DeleteLogic::apply(&mut pool, &target)?;

        match target {
            DeleteTarget::All => success(format!("All records deleted ({removed} rows).")),
            DeleteTarget::Date(d) => success(format!("Records for {d} deleted ({removed} rows).")),
        }
    }

    Ok(())
}
