//! ANSI color helper utilities for terminal output.

use crate::models::TaskStatus;
use crate::ui::messages::colors_enabled;

pub const RESET: &str = "\x1b[0m";

pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const ORANGE: &str = "\x1b[38;5;208m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// Completed → green, In progress → orange, Not started → default.
pub fn color_for_status(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => GREEN,
        TaskStatus::InProgress => ORANGE,
        TaskStatus::NotStarted => RESET,
    }
}

/// Wrap `text` in the given color unless colors are off.
pub fn paint(color: &str, text: &str) -> String {
    if colors_enabled() && color != RESET {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn colorize_status(status: TaskStatus) -> String {
    paint(color_for_status(status), status.label())
}
