//! Calendar-date parsing, normalization and contiguous-range grouping
//!
//! The older booking clients emit dates as `dd/MM/yyyy` while the newer
//! ones use ISO `yyyy-MM-dd`. All dates normalize to [`NaiveDate`] at
//! this boundary; the rest of the crate never compares date strings.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

const ISO_FORMAT: &str = "%Y-%m-%d";
const LEGACY_FORMAT: &str = "%d/%m/%Y";

/// Parse a date string produced by any of the upstream clients.
///
/// ISO is tried first, then the legacy day-first format. Anything else
/// yields `None`; callers treat an unparseable date as "no overlap"
/// rather than failing a booking flow.
pub fn parse_flexible(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, ISO_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, LEGACY_FORMAT))
        .ok()
}

/// Normalize a raw date-string list into sorted, deduplicated dates.
///
/// Malformed entries are skipped (logged at `warn`), never fatal:
/// under-counting commitments is the safer failure direction for a
/// booking flow.
pub fn normalize_dates(raw: &[String]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = raw
        .iter()
        .filter_map(|s| {
            let parsed = parse_flexible(s);
            if parsed.is_none() {
                tracing::warn!(date = %s, "skipping unparseable date");
            }
            parsed
        })
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Serde deserializer for date lists arriving in either accepted format.
pub fn deserialize_date_list<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw
        .iter()
        .filter_map(|s| {
            let parsed = parse_flexible(s);
            if parsed.is_none() {
                tracing::warn!(date = %s, "skipping unparseable booking date");
            }
            parsed
        })
        .collect())
}

/// A maximal run of strictly-consecutive calendar dates
///
/// Drawn from a larger, possibly-disjoint date set; each group is
/// persisted as one independent booking record bounded by `start_date`
/// and `end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateGroup {
    pub dates: Vec<NaiveDate>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateGroup {
    fn from_run(dates: Vec<NaiveDate>) -> Self {
        // callers guarantee a non-empty, sorted run
        let start_date = dates[0];
        let end_date = dates[dates.len() - 1];
        Self {
            dates,
            start_date,
            end_date,
        }
    }
}

/// Partition dates into maximal contiguous runs.
///
/// Input is sorted and deduplicated first; a gap other than exactly one
/// calendar day starts a new group. A user selecting Mon/Tue/Wed plus
/// the following Fri/Sat in one action therefore gets two groups with
/// correct bounds, never one record spanning a false six-day range.
pub fn group_contiguous_dates(dates: &[NaiveDate]) -> Vec<DateGroup> {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut groups = Vec::new();
    let mut run: Vec<NaiveDate> = Vec::new();

    for date in sorted {
        if let Some(&prev) = run.last() {
            if (date - prev).num_days() != 1 {
                groups.push(DateGroup::from_run(std::mem::take(&mut run)));
            }
        }
        run.push(date);
    }
    if !run.is_empty() {
        groups.push(DateGroup::from_run(run));
    }
    groups
}
