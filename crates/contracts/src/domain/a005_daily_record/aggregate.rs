use serde::{Deserialize, Serialize};

use super::fields::MeasurementField;
use crate::shared::serde_ids;

// ============================================================================
// Fetched record
// ============================================================================

/// Row of `GET /api/daily`.
///
/// Everything is optional: older rows miss columns and the backend is loose
/// about number vs. string. Measurements are read leniently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    #[serde(default, deserialize_with = "serde_ids::opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub encoded_at: Option<String>,
    #[serde(default, deserialize_with = "serde_ids::opt_id")]
    pub source_type: Option<String>,
    #[serde(default, deserialize_with = "serde_ids::opt_id")]
    pub source_name: Option<String>,
    #[serde(default, deserialize_with = "serde_ids::opt_id")]
    pub branch_id: Option<String>,
    #[serde(default, deserialize_with = "serde_ids::opt_i64")]
    pub area_id: Option<i64>,

    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub production_volume: Option<f64>,
    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub operation_hours: Option<f64>,
    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub service_interruption: Option<f64>,
    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub total_hours_service_interruption: Option<f64>,
    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub electricity_consumption: Option<f64>,
    #[serde(
        rename = "VFDFrequency",
        default,
        deserialize_with = "serde_ids::opt_f64"
    )]
    pub vfd_frequency: Option<f64>,
    /// Older rows spell the key `vfdFrequency`; some carry both.
    #[serde(
        rename = "vfdFrequency",
        default,
        skip_serializing,
        deserialize_with = "serde_ids::opt_f64"
    )]
    pub vfd_frequency_legacy: Option<f64>,
    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub spot_flow: Option<f64>,
    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub spot_pressure: Option<f64>,
    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub time_spot_measurements: Option<f64>,
    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub line_voltage1: Option<f64>,
    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub line_voltage2: Option<f64>,
    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub line_voltage3: Option<f64>,
    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub line_current1: Option<f64>,
    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub line_current2: Option<f64>,
    #[serde(default, deserialize_with = "serde_ids::opt_f64")]
    pub line_current3: Option<f64>,
}

impl DailyRecord {
    pub fn measurement(&self, field: MeasurementField) -> Option<f64> {
        match field {
            MeasurementField::ProductionVolume => self.production_volume,
            MeasurementField::OperationHours => self.operation_hours,
            MeasurementField::ServiceInterruption => self.service_interruption,
            MeasurementField::TotalHoursServiceInterruption => {
                self.total_hours_service_interruption
            }
            MeasurementField::ElectricityConsumption => self.electricity_consumption,
            MeasurementField::VfdFrequency => self.vfd_frequency.or(self.vfd_frequency_legacy),
            MeasurementField::SpotFlow => self.spot_flow,
            MeasurementField::SpotPressure => self.spot_pressure,
            MeasurementField::TimeSpotMeasurements => self.time_spot_measurements,
            MeasurementField::LineVoltage1 => self.line_voltage1,
            MeasurementField::LineVoltage2 => self.line_voltage2,
            MeasurementField::LineVoltage3 => self.line_voltage3,
            MeasurementField::LineCurrent1 => self.line_current1,
            MeasurementField::LineCurrent2 => self.line_current2,
            MeasurementField::LineCurrent3 => self.line_current3,
        }
    }
}

// ============================================================================
// Submission payload
// ============================================================================

/// Body of `POST /api/daily`.
///
/// Measurements are numbers. A NaN (malformed input) is serialized by
/// serde_json as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecordPayload {
    pub date: String,
    pub source_type: String,
    pub source_name: String,

    pub production_volume: f64,
    pub operation_hours: f64,
    pub service_interruption: f64,
    pub total_hours_service_interruption: f64,
    pub electricity_consumption: f64,
    #[serde(rename = "VFDFrequency")]
    pub vfd_frequency: f64,
    pub spot_flow: f64,
    pub spot_pressure: f64,
    pub time_spot_measurements: f64,
    pub line_voltage1: f64,
    pub line_voltage2: f64,
    pub line_voltage3: f64,
    pub line_current1: f64,
    pub line_current2: f64,
    pub line_current3: f64,

    pub is_active: bool,
    pub branch_id: String,
    pub area_id: Option<i64>,
}

impl DailyRecordPayload {
    /// Empty payload with every measurement at zero.
    pub fn new(date: String, source_type: String, source_name: String) -> Self {
        Self {
            date,
            source_type,
            source_name,
            production_volume: 0.0,
            operation_hours: 0.0,
            service_interruption: 0.0,
            total_hours_service_interruption: 0.0,
            electricity_consumption: 0.0,
            vfd_frequency: 0.0,
            spot_flow: 0.0,
            spot_pressure: 0.0,
            time_spot_measurements: 0.0,
            line_voltage1: 0.0,
            line_voltage2: 0.0,
            line_voltage3: 0.0,
            line_current1: 0.0,
            line_current2: 0.0,
            line_current3: 0.0,
            is_active: true,
            branch_id: String::new(),
            area_id: None,
        }
    }

    pub fn measurement_mut(&mut self, field: MeasurementField) -> &mut f64 {
        match field {
            MeasurementField::ProductionVolume => &mut self.production_volume,
            MeasurementField::OperationHours => &mut self.operation_hours,
            MeasurementField::ServiceInterruption => &mut self.service_interruption,
            MeasurementField::TotalHoursServiceInterruption => {
                &mut self.total_hours_service_interruption
            }
            MeasurementField::ElectricityConsumption => &mut self.electricity_consumption,
            MeasurementField::VfdFrequency => &mut self.vfd_frequency,
            MeasurementField::SpotFlow => &mut self.spot_flow,
            MeasurementField::SpotPressure => &mut self.spot_pressure,
            MeasurementField::TimeSpotMeasurements => &mut self.time_spot_measurements,
            MeasurementField::LineVoltage1 => &mut self.line_voltage1,
            MeasurementField::LineVoltage2 => &mut self.line_voltage2,
            MeasurementField::LineVoltage3 => &mut self.line_voltage3,
            MeasurementField::LineCurrent1 => &mut self.line_current1,
            MeasurementField::LineCurrent2 => &mut self.line_current2,
            MeasurementField::LineCurrent3 => &mut self.line_current3,
        }
    }
}
