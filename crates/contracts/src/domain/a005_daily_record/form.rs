//! Add-record form: draft state, branch derivation and submission checks.

use thiserror::Error;

use super::aggregate::DailyRecordPayload;
use super::fields::MeasurementField;
use crate::domain::a002_branch::aggregate::{find_branch, Branch};
use crate::domain::a003_source_name::aggregate::{find_source_name, SourceName};
use crate::shared::dates::is_iso_date_literal;
use crate::shared::number::coerce_number;

/// Draft of a daily record. Everything is text until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyForm {
    pub date: String,
    /// Selected source type id.
    pub source_type: String,
    /// Selected source name id.
    pub source_name: String,
    measurements: [String; MeasurementField::COUNT],
}

impl DailyForm {
    pub fn measurement(&self, field: MeasurementField) -> &str {
        &self.measurements[field.index()]
    }

    pub fn set_measurement(&mut self, field: MeasurementField, value: String) {
        self.measurements[field.index()] = value;
    }

    /// Value behind a required-field key. Unknown keys have no value.
    pub fn value_by_key(&self, key: &str) -> Option<&str> {
        match key {
            "date" => Some(&self.date),
            "sourceType" => Some(&self.source_type),
            "sourceName" => Some(&self.source_name),
            _ => MeasurementField::from_key(key).map(|f| self.measurement(f)),
        }
    }

    /// Clear every measurement the branch does not ask for.
    ///
    /// Disabled inputs cannot hold a value, so nothing typed before the
    /// required list changed survives into the payload.
    pub fn retain_enabled(&mut self, required_fields: &[String]) {
        for field in MeasurementField::ALL {
            if !is_enabled(required_fields, field) {
                self.measurements[field.index()].clear();
            }
        }
    }
}

/// A measurement input is editable only when the branch requires it.
pub fn is_enabled(required_fields: &[String], field: MeasurementField) -> bool {
    required_fields.iter().any(|k| k == field.key())
}

// ============================================================================
// Branch derivation
// ============================================================================

/// Branch and area implied by the selected source name.
///
/// This is what gets submitted; the filter-panel branch never is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchResolution {
    /// Empty when no source name is selected or it is unknown.
    pub effective_branch_id: String,
    pub area_id: Option<i64>,
}

impl BranchResolution {
    /// Branch of the selected source name; empty when there is none.
    pub fn effective_branch_id(form: &DailyForm, source_names: &[SourceName]) -> String {
        find_source_name(source_names, &form.source_name)
            .map(|sn| sn.branch_id.clone())
            .unwrap_or_default()
    }

    pub fn resolve(form: &DailyForm, source_names: &[SourceName], branches: &[Branch]) -> Self {
        let effective_branch_id = Self::effective_branch_id(form, source_names);

        // Zero is not a valid area.
        let area_id = find_branch(branches, &effective_branch_id)
            .and_then(|b| b.area_id)
            .filter(|id| *id != 0);

        Self {
            effective_branch_id,
            area_id,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.effective_branch_id.is_empty()
    }
}

// ============================================================================
// Submission
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Unable to determine branch. Please select a source name and try again.")]
    MissingBranch,
    #[error("Unable to determine source type. Please select a source type and try again.")]
    MissingSourceType,
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),
    #[error("Please select a valid date.")]
    InvalidDate,
}

/// Required keys whose form value is empty, in required-list order.
pub fn missing_required_fields(form: &DailyForm, required_fields: &[String]) -> Vec<String> {
    required_fields
        .iter()
        .filter(|key| form.value_by_key(key).map_or(true, str::is_empty))
        .cloned()
        .collect()
}

/// Validate the draft and build the POST body.
///
/// Checks run in a fixed order and the first failure wins: branch, source
/// type, required fields, date shape. Nothing here touches the network, so
/// an `Err` means no request is sent.
pub fn prepare_submission(
    form: &DailyForm,
    required_fields: &[String],
    resolution: &BranchResolution,
) -> Result<DailyRecordPayload, SubmitError> {
    if !resolution.is_resolved() {
        return Err(SubmitError::MissingBranch);
    }
    if form.source_type.is_empty() {
        return Err(SubmitError::MissingSourceType);
    }

    let missing = missing_required_fields(form, required_fields);
    if !missing.is_empty() {
        return Err(SubmitError::MissingRequiredFields(missing));
    }

    if !is_iso_date_literal(&form.date) {
        return Err(SubmitError::InvalidDate);
    }

    let mut payload = DailyRecordPayload::new(
        form.date.clone(),
        form.source_type.clone(),
        form.source_name.clone(),
    );
    for field in MeasurementField::ALL {
        *payload.measurement_mut(field) = coerce_number(form.measurement(field));
    }
    payload.is_active = true;
    payload.branch_id = resolution.effective_branch_id.clone();
    payload.area_id = resolution.area_id;

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn source_names() -> Vec<SourceName> {
        serde_json::from_value(json!([
            {"id": 12, "sourceName": "Well-12", "sourceTypeId": 1, "branchId": 5, "sourceTypeName": "Well"},
            {"id": 13, "sourceName": "Orphan", "sourceTypeId": 1, "branchId": 99, "sourceTypeName": "Well"}
        ]))
        .unwrap()
    }

    fn branches() -> Vec<Branch> {
        serde_json::from_value(json!([
            {"id": 5, "branchName": "Poblacion", "areaId": 3, "isActive": true},
            {"id": 6, "branchName": "Riverside", "areaId": 4, "isActive": true}
        ]))
        .unwrap()
    }

    fn required(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    fn well_12_form() -> DailyForm {
        let mut form = DailyForm {
            date: "2024-05-01".into(),
            source_type: "1".into(),
            source_name: "12".into(),
            ..Default::default()
        };
        form.set_measurement(MeasurementField::ProductionVolume, "100".into());
        form
    }

    #[test]
    fn test_resolution_follows_source_name_to_area() {
        let res = BranchResolution::resolve(&well_12_form(), &source_names(), &branches());
        assert_eq!(res.effective_branch_id, "5");
        assert_eq!(res.area_id, Some(3));
    }

    #[test]
    fn test_resolution_degrades_without_throwing() {
        let mut form = well_12_form();
        form.source_name = "13".into();
        let res = BranchResolution::resolve(&form, &source_names(), &branches());
        assert_eq!(res.effective_branch_id, "99");
        assert_eq!(res.area_id, None);

        form.source_name.clear();
        let res = BranchResolution::resolve(&form, &source_names(), &branches());
        assert!(!res.is_resolved());
        assert_eq!(res.area_id, None);

        let res = BranchResolution::resolve(&well_12_form(), &[], &branches());
        assert_eq!(res, BranchResolution::default());
    }

    #[test]
    fn test_missing_required_field_is_reported() {
        let form = well_12_form();
        let req = required(&["productionVolume", "operationHours"]);
        let res = BranchResolution::resolve(&form, &source_names(), &branches());

        let err = prepare_submission(&form, &req, &res).unwrap_err();
        assert_eq!(
            err,
            SubmitError::MissingRequiredFields(vec!["operationHours".to_string()])
        );
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: operationHours"
        );
    }

    #[test]
    fn test_complete_well_12_submission() {
        let mut form = well_12_form();
        form.set_measurement(MeasurementField::OperationHours, "8".into());
        let req = required(&["productionVolume", "operationHours"]);
        let res = BranchResolution::resolve(&form, &source_names(), &branches());

        let payload = prepare_submission(&form, &req, &res).unwrap();
        assert_eq!(payload.production_volume, 100.0);
        assert_eq!(payload.operation_hours, 8.0);
        assert_eq!(payload.branch_id, "5");
        assert_eq!(payload.area_id, Some(3));
        assert!(payload.is_active);
        assert_eq!(payload.date, "2024-05-01");
        assert_eq!(payload.source_type, "1");
        assert_eq!(payload.source_name, "12");

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["productionVolume"], json!(100.0));
        assert_eq!(value["operationHours"], json!(8.0));
    }

    #[test]
    fn test_branch_checked_before_source_type() {
        let form = DailyForm::default();
        let err = prepare_submission(&form, &[], &BranchResolution::default()).unwrap_err();
        assert_eq!(err, SubmitError::MissingBranch);
    }

    #[test]
    fn test_missing_source_type() {
        let mut form = well_12_form();
        form.source_type.clear();
        let res = BranchResolution::resolve(&form, &source_names(), &branches());
        assert_eq!(
            prepare_submission(&form, &[], &res).unwrap_err(),
            SubmitError::MissingSourceType
        );
    }

    #[test]
    fn test_invalid_date_shapes() {
        let res = BranchResolution::resolve(&well_12_form(), &source_names(), &branches());
        for date in ["", "2024-5-1", "05/01/2024", "2024-05-01T00:00"] {
            let mut form = well_12_form();
            form.date = date.into();
            assert_eq!(
                prepare_submission(&form, &[], &res).unwrap_err(),
                SubmitError::InvalidDate,
                "date {:?}",
                date
            );
        }
    }

    #[test]
    fn test_required_fields_checked_before_date() {
        let mut form = well_12_form();
        form.date.clear();
        let res = BranchResolution::resolve(&form, &source_names(), &branches());
        let err = prepare_submission(&form, &required(&["spotFlow"]), &res).unwrap_err();
        assert_eq!(err, SubmitError::MissingRequiredFields(vec!["spotFlow".into()]));
    }

    #[test]
    fn test_unknown_required_key_counts_as_missing() {
        let form = well_12_form();
        let res = BranchResolution::resolve(&form, &source_names(), &branches());
        let err = prepare_submission(&form, &required(&["chlorineResidual"]), &res).unwrap_err();
        assert_eq!(
            err,
            SubmitError::MissingRequiredFields(vec!["chlorineResidual".into()])
        );
    }

    #[test]
    fn test_non_numeric_input_is_sent_as_nan() {
        let mut form = well_12_form();
        form.set_measurement(MeasurementField::SpotPressure, "high".into());
        let res = BranchResolution::resolve(&form, &source_names(), &branches());
        let payload = prepare_submission(&form, &[], &res).unwrap();
        assert!(payload.spot_pressure.is_nan());
        assert_eq!(payload.spot_flow, 0.0);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["spotPressure"], serde_json::Value::Null);
    }

    #[test]
    fn test_retain_enabled_clears_disabled_inputs() {
        let mut form = well_12_form();
        form.set_measurement(MeasurementField::SpotFlow, "3".into());
        form.set_measurement(MeasurementField::OperationHours, "8".into());

        let req = required(&["operationHours"]);
        form.retain_enabled(&req);

        assert_eq!(form.measurement(MeasurementField::OperationHours), "8");
        assert_eq!(form.measurement(MeasurementField::SpotFlow), "");
        assert_eq!(form.measurement(MeasurementField::ProductionVolume), "");
        assert!(is_enabled(&req, MeasurementField::OperationHours));
        assert!(!is_enabled(&req, MeasurementField::SpotFlow));
        assert!(missing_required_fields(&form, &req).is_empty());
    }

    #[test]
    fn test_value_by_key() {
        let form = well_12_form();
        assert_eq!(form.value_by_key("date"), Some("2024-05-01"));
        assert_eq!(form.value_by_key("sourceName"), Some("12"));
        assert_eq!(form.value_by_key("productionVolume"), Some("100"));
        assert_eq!(form.value_by_key("VFDFrequency"), Some(""));
        assert_eq!(form.value_by_key("nope"), None);
    }
}
