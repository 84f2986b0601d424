use crate::domain::model::WatchlistEntry;
use crate::utils::error::{AlertError, Result};

/// Parses a comma-separated watchlist string of `CODE:TARGET` items.
///
/// Segments that are empty after trimming are skipped, so trailing commas are
/// harmless. Order is preserved and duplicates are kept; each duplicate is
/// evaluated independently by the runner. An input that is empty or
/// all-whitespace yields an empty list, which the runner treats as "nothing
/// to do" rather than an error.
pub fn parse(raw: &str) -> Result<Vec<WatchlistEntry>> {
    let mut entries = Vec::new();

    for segment in raw.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let (code, target) = segment.split_once(':').ok_or_else(|| invalid(segment, "missing ':' separator"))?;

        let code = code.trim();
        if code.is_empty() {
            return Err(invalid(segment, "empty stock code"));
        }

        let target = target.trim();
        if target.is_empty() {
            return Err(invalid(segment, "empty target price"));
        }

        let target: f64 = target
            .parse()
            .map_err(|_| invalid(segment, "target price is not a number"))?;

        entries.push(WatchlistEntry {
            code: code.to_string(),
            target,
        });
    }

    Ok(entries)
}

fn invalid(segment: &str, reason: &str) -> AlertError {
    AlertError::InvalidEntry {
        segment: segment.to_string(),
        reason: reason.to_string(),
    }
}
