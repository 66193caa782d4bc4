pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod lane;
pub mod list;
pub mod log;
pub mod pareto;

use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use std::io::{self, Read, Write};

/// `--exclude` given without a value means the configured keyword.
pub(crate) fn resolve_keyword(arg: Option<&String>, cfg: &Config) -> Option<String> {
    arg.map(|k| {
        if k.trim().is_empty() {
            cfg.exclude_keyword.clone()
        } else {
            k.clone()
        }
    })
}

/// Report text from a file, or from stdin when no file is given.
pub(crate) fn read_report(file: Option<&String>) -> AppResult<String> {
    match file {
        Some(f) => Ok(std::fs::read_to_string(expand_tilde(f))?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Ask a yes/no confirmation from the user.
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    crate::ui::messages::warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
