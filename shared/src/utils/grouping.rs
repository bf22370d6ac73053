//! Grouping of time-ordered entries into calendar-day buckets
//!
//! Entries are expected to arrive already sorted (the log endpoints return
//! newest-first); consecutive entries sharing a calendar day collapse into
//! one group, preserving the input order within and across groups.

use chrono::NaiveDate;
use serde::Serialize;

/// A run of consecutive entries that fall on the same calendar day
#[derive(Debug, Clone, Serialize)]
pub struct DayGroup<T> {
    /// The calendar day (UTC)
    pub day: NaiveDate,
    /// Entries for that day, in input order
    pub items: Vec<T>,
}

/// Group consecutive entries by the calendar day extracted with `day_of`
pub fn group_by_day<T, F>(entries: Vec<T>, day_of: F) -> Vec<DayGroup<T>>
where
    F: Fn(&T) -> NaiveDate,
{
    let mut groups: Vec<DayGroup<T>> = Vec::new();
    for entry in entries {
        let day = day_of(&entry);
        match groups.last_mut() {
            Some(last) if last.day == day => last.items.push(entry),
            _ => groups.push(DayGroup {
                day,
                items: vec![entry],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let groups = group_by_day(Vec::<(NaiveDate, u32)>::new(), |e| e.0);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_consecutive_days_grouped() {
        let entries = vec![
            (day(2024, 3, 2), 1),
            (day(2024, 3, 2), 2),
            (day(2024, 3, 1), 3),
        ];
        let groups = group_by_day(entries, |e| e.0);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].day, day(2024, 3, 2));
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].items, vec![(day(2024, 3, 1), 3)]);
    }

    #[test]
    fn test_non_adjacent_same_day_stays_split() {
        // Grouping is by consecutive runs; callers pass sorted input
        let entries = vec![
            (day(2024, 3, 2), 1),
            (day(2024, 3, 1), 2),
            (day(2024, 3, 2), 3),
        ];
        let groups = group_by_day(entries, |e| e.0);
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_order_preserved_within_group() {
        let entries = vec![
            (day(2024, 3, 2), 3),
            (day(2024, 3, 2), 1),
            (day(2024, 3, 2), 2),
        ];
        let groups = group_by_day(entries, |e| e.0);
        assert_eq!(groups.len(), 1);
        let values: Vec<u32> = groups[0].items.iter().map(|e| e.1).collect();
        assert_eq!(values, vec![3, 1, 2]);
    }
}
