/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Rows mentioning the configured keyword stand out in listings.
pub const HIGHLIGHT: &str = "\x1b[45;97m";

/// Returns GREY for zero-length activities (single-time lines),
/// and RESET otherwise.
pub fn color_for_duration(hours: f64) -> &'static str {
    if hours > 0.0 { RESET } else { GREY }
}
