use crate::cli::commands::resolve_keyword;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::apply_exclusion;
use crate::core::pareto::{pareto, pareto_by_lane};
use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::AppResult;
use crate::models::record::ActivityRecord;
use crate::ui::messages::{header, info};
use crate::ui::records::print_pareto;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pareto {
        exclude,
        all,
        by_lane,
    } = cmd
    {
        // the configured keyword is left out unless --all is given
        let exclude = if *all {
            None
        } else {
            Some(
                resolve_keyword(exclude.as_ref(), cfg)
                    .unwrap_or_else(|| cfg.exclude_keyword.clone()),
            )
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let records: Vec<ActivityRecord> = load_records(&mut pool)?
            .into_iter()
            .map(|s| s.record)
            .collect();
        let records = apply_exclusion(records, exclude.as_deref());

        if records.is_empty() {
            info("No records for the Pareto report.");
            return Ok(());
        }

        match &exclude {
            Some(k) => header(format!("Pareto (without '{k}')")),
            None => header("Pareto"),
        }
        print_pareto(&pareto(&records));

        if *by_lane {
            for (lane, rows) in pareto_by_lane(&records) {
                println!();
                header(format!("Lane {lane}"));
                print_pareto(&rows);
            }
        }
    }
    Ok(())
}
