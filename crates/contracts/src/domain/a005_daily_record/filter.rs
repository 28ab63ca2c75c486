use super::aggregate::DailyRecord;
use crate::shared::dates::calendar_date;

/// Filter panel of the records table. Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub from_date: String,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub to_date: String,
    pub source_type: String,
    pub branch: String,
}

impl RecordFilter {
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    pub fn active_count(&self) -> usize {
        [&self.from_date, &self.to_date, &self.source_type, &self.branch]
            .iter()
            .filter(|v| !v.is_empty())
            .count()
    }

    pub fn matches(&self, record: &DailyRecord) -> bool {
        if !self.is_active() {
            return true;
        }

        if !self.from_date.is_empty() || !self.to_date.is_empty() {
            // Zero-padded ISO dates order correctly as strings.
            let date = calendar_date(record.date.as_deref().unwrap_or_default());
            if !self.from_date.is_empty() && date.as_str() < self.from_date.as_str() {
                return false;
            }
            if !self.to_date.is_empty() && date.as_str() > self.to_date.as_str() {
                return false;
            }
        }

        if !self.source_type.is_empty()
            && record.source_type.as_deref() != Some(self.source_type.as_str())
        {
            return false;
        }

        if !self.branch.is_empty() && record.branch_id.as_deref() != Some(self.branch.as_str()) {
            return false;
        }

        true
    }

    pub fn apply(&self, records: &[DailyRecord]) -> Vec<DailyRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: Option<&str>, source_type: &str, branch: &str) -> DailyRecord {
        DailyRecord {
            date: date.map(str::to_string),
            source_type: Some(source_type.to_string()),
            branch_id: Some(branch.to_string()),
            ..Default::default()
        }
    }

    fn records() -> Vec<DailyRecord> {
        vec![
            record(Some("2024-04-30"), "1", "5"),
            record(Some("2024-05-01T10:00:00Z"), "1", "5"),
            record(Some("Fri, 10 May 2024 00:00:00 GMT"), "2", "5"),
            record(Some("2024-05-31"), "1", "6"),
            record(Some("2024-06-01"), "2", "6"),
        ]
    }

    fn dates(list: &[DailyRecord]) -> Vec<String> {
        list.iter()
            .map(|r| calendar_date(r.date.as_deref().unwrap_or_default()))
            .collect()
    }

    #[test]
    fn test_no_filter_returns_everything() {
        let filter = RecordFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&records()), records());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let filter = RecordFilter {
            from_date: "2024-05-01".into(),
            to_date: "2024-05-31".into(),
            ..Default::default()
        };
        assert_eq!(
            dates(&filter.apply(&records())),
            vec!["2024-05-01", "2024-05-10", "2024-05-31"]
        );
    }

    #[test]
    fn test_open_ended_ranges() {
        let from = RecordFilter { from_date: "2024-05-31".into(), ..Default::default() };
        assert_eq!(dates(&from.apply(&records())), vec!["2024-05-31", "2024-06-01"]);

        let to = RecordFilter { to_date: "2024-04-30".into(), ..Default::default() };
        assert_eq!(dates(&to.apply(&records())), vec!["2024-04-30"]);
    }

    #[test]
    fn test_equality_filters_intersect_with_dates() {
        let filter = RecordFilter {
            from_date: "2024-05-01".into(),
            source_type: "1".into(),
            branch: "5".into(),
            ..Default::default()
        };
        assert_eq!(dates(&filter.apply(&records())), vec!["2024-05-01"]);
        assert_eq!(filter.active_count(), 3);
    }

    #[test]
    fn test_record_without_date() {
        let list = vec![record(None, "1", "5")];

        let from = RecordFilter { from_date: "2024-01-01".into(), ..Default::default() };
        assert!(from.apply(&list).is_empty());

        // An empty date sorts before every bound, so only a lower bound drops it.
        let to = RecordFilter { to_date: "2024-01-01".into(), ..Default::default() };
        assert_eq!(to.apply(&list).len(), 1);
    }

    #[test]
    fn test_record_missing_filtered_field_does_not_match() {
        let list = vec![DailyRecord { date: Some("2024-05-01".into()), ..Default::default() }];
        let filter = RecordFilter { branch: "5".into(), ..Default::default() };
        assert!(filter.apply(&list).is_empty());
    }
}
