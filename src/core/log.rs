use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::ui::messages::info;
use crate::utils::colors::{BLUE, GREEN, MAGENTA, RED, WHITE, YELLOW, paint};

const MAX_TARGET_WIDTH: usize = 40;

/// ANSI color for an operation name.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "add" | "task" => GREEN,
        "archive" => RED,
        "edit" | "status" => YELLOW,
        "unarchive" => MAGENTA,
        "backup" | "init" => BLUE,
        _ => WHITE,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &JsonStore) -> AppResult<()> {
        let entries = store.log_entries();
        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries.iter().map(|e| e.operation.len()).max().unwrap_or(4);
        let target_w = entries
            .iter()
            .map(|e| e.target.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_TARGET_WIDTH);

        println!("📜 Internal log:\n");

        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or_else(|_| e.date.clone());

            let target = truncate(&e.target, MAX_TARGET_WIDTH);
            let color = color_for_operation(&e.operation);

            println!(
                "{:>id_w$}: {} | {} {:<target_w$} => {}",
                e.id,
                date,
                paint(color, &format!("{:<op_w$}", e.operation)),
                target,
                e.message,
            );
        }

        Ok(())
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncates_long_targets() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
