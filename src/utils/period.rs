use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

/// Parse a period expression into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = |why: &str| AppError::InvalidPeriod(format!("{p}: {why}"));

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid("start and end must have same format"));
        }

        let (from, _) = single(start).map_err(|_| invalid("invalid start"))?;
        let (_, to) = single(end).map_err(|_| invalid("invalid end"))?;
        if from > to {
            return Err(invalid("start is after end"));
        }
        Ok((from, to))
    } else {
        single(p.trim()).map_err(|_| invalid("unsupported format"))
    }
}

fn single(s: &str) -> Result<(NaiveDate, NaiveDate), ()> {
    if !s.is_ascii() {
        return Err(());
    }
    match s.len() {
        // YYYY
        4 => {
            let y: i32 = s.parse().map_err(|_| ())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or(())?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or(())?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = s[0..4].parse().map_err(|_| ())?;
            if &s[4..5] != "-" {
                return Err(());
            }
            let m: u32 = s[5..7].parse().map_err(|_| ())?;
            let last = month_last_day(y, m).ok_or(())?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or(())?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or(())?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ())?;
            Ok((d, d))
        }
        _ => Err(()),
    }
}
