use crate::cli::commands::resolve_keyword;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        exclude,
        force,
    } = cmd
    {
        let exclude = resolve_keyword(exclude.as_ref(), cfg);

        let req = ExportRequest {
            format: *format,
            file: file.as_deref(),
            default_file: &cfg.export_file,
            exclude: exclude.as_deref(),
            highlight: Some(&cfg.exclude_keyword),
            force: *force,
        };

        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(path) = ExportLogic::export(&mut pool, &req)? {
            let message = match &exclude {
                Some(k) => format!("Exported to {} without '{k}'", path.display()),
                None => format!("Exported to {}", path.display()),
            };
            write_log(&pool.conn, "export", format.as_str(), &message)?;
        }
    }
    Ok(())
}
