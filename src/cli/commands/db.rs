use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::maintenance;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

/// `db --migrate | --info | --check | --vacuum`, run in that order when combined.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        info("Applying pending migrations...");
        maintenance::migrate(&pool)?;
        success("Store schema is up to date.");
    }

    if *show_info {
        print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        match maintenance::integrity_check(&pool)? {
            Ok(()) => success("Integrity check passed."),
            Err(problem) => error(format!("Integrity check failed: {problem}")),
        }
    }

    if *vacuum {
        maintenance::vacuum(&pool)?;
        success(format!("Compacted {}", cfg.database));
    }

    if !(*migrate || *show_info || *check || *vacuum) {
        info("Nothing to do: pass --migrate, --info, --check or --vacuum.");
    }

    Ok(())
}
