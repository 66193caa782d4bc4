use crate::db::pool::DbPool;
use crate::db::queries::{count_records, distinct_dates, load_records};
use crate::errors::AppResult;
use crate::models::lane::Lane;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL RECORDS
    //
    let count = count_records(pool)?;
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATES
    //
    let dates = distinct_dates(pool)?;
    let fmt_dates = if dates.is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        dates.join(", ")
    };
    println!("{}• Dates:{} {}", CYAN, RESET, fmt_dates);

    //
    // 4) RECORDS PER LANE
    //
    let records = load_records(pool)?;
    for lane in [Lane::A, Lane::B, Lane::Trucking] {
        let n = records.iter().filter(|r| r.record.lane == lane).count();
        println!("{}• Lane {}:{} {}", CYAN, lane, RESET, n);
    }

    println!();
    Ok(())
}
