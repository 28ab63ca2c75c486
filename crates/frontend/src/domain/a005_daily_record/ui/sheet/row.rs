use contracts::domain::a001_source_type::aggregate::SourceType;
use contracts::domain::a005_daily_record::aggregate::DailyRecord;
use contracts::domain::a005_daily_record::fields::MeasurementField;

use crate::shared::date_utils::{format_date, format_datetime};

/// Column count of the records table: date, encoded at, source type, measurements.
pub const COLUMN_COUNT: usize = 3 + MeasurementField::COUNT;

/// A record rendered to display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecordRow {
    pub date: String,
    pub encoded_at: String,
    pub source_type: String,
    pub measurements: Vec<String>,
}

impl DailyRecordRow {
    /// Source types are shown by name when known, otherwise by raw value.
    pub fn new(record: &DailyRecord, source_types: &[SourceType]) -> Self {
        let raw_type = record.source_type.clone().unwrap_or_default();
        let source_type = source_types
            .iter()
            .find(|st| st.id == raw_type)
            .map(|st| st.source_type.clone())
            .unwrap_or(raw_type);

        Self {
            date: record.date.as_deref().map(format_date).unwrap_or_default(),
            encoded_at: record
                .encoded_at
                .as_deref()
                .map(format_datetime)
                .unwrap_or_default(),
            source_type,
            measurements: MeasurementField::ALL
                .into_iter()
                .map(|f| record.measurement(f).map(|v| v.to_string()).unwrap_or_default())
                .collect(),
        }
    }
}

pub fn table_headers() -> Vec<&'static str> {
    let mut headers = vec!["Date", "Encoded At", "Source Type"];
    headers.extend(MeasurementField::ALL.into_iter().map(MeasurementField::header));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well() -> Vec<SourceType> {
        vec![SourceType { id: "1".into(), source_type: "Well".into() }]
    }

    #[test]
    fn test_row_formats_record() {
        let record = DailyRecord {
            date: Some("2024-05-01".into()),
            encoded_at: Some("2024-05-01T01:30:00Z".into()),
            source_type: Some("1".into()),
            production_volume: Some(100.0),
            vfd_frequency: Some(59.5),
            ..Default::default()
        };
        let row = DailyRecordRow::new(&record, &well());

        assert_eq!(row.date, "May 01, 2024");
        assert_eq!(row.encoded_at, "May 01, 2024, 09:30:00 AM PHT");
        assert_eq!(row.source_type, "Well");
        assert_eq!(row.measurements.len(), MeasurementField::COUNT);
        assert_eq!(row.measurements[MeasurementField::ProductionVolume.index()], "100");
        assert_eq!(row.measurements[MeasurementField::VfdFrequency.index()], "59.5");
        assert_eq!(row.measurements[MeasurementField::SpotFlow.index()], "");
    }

    #[test]
    fn test_unknown_source_type_shows_raw_value() {
        let record = DailyRecord { source_type: Some("7".into()), ..Default::default() };
        let row = DailyRecordRow::new(&record, &well());
        assert_eq!(row.source_type, "7");
        assert_eq!(row.date, "");
    }

    #[test]
    fn test_row_matches_headers() {
        let row = DailyRecordRow::new(&DailyRecord::default(), &[]);
        assert_eq!(3 + row.measurements.len(), table_headers().len());
        assert_eq!(table_headers().len(), COLUMN_COUNT);
    }
}
