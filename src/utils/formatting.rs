//! Formatting utilities used for CLI output.

use unicode_width::UnicodeWidthStr;

pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Text bar like `[######----] 60%`, used for the dashboard charts.
pub fn progress_bar(done: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return format!("[{}]   -", "-".repeat(width));
    }
    let filled = (done * width + total / 2) / total;
    let pct = done * 100 / total;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled.min(width)),
        "-".repeat(width.saturating_sub(filled)),
        pct
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_rounds_to_width() {
        assert_eq!(progress_bar(1, 2, 10), "[#####-----]  50%");
        assert_eq!(progress_bar(3, 3, 4), "[####] 100%");
        assert_eq!(progress_bar(0, 0, 3), "[---]   -");
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("7", 3), "  7");
    }
}
