//! Boundary validation for roster records.
//!
//! The engine trusts its inputs to be finite and non-negative with usage and
//! field-goal percentage on a 0-100 scale. Records coming from a provider or
//! from user edits are checked here first.

use crate::{
    cli::types::StatField,
    error::{Result, TrackerError},
};

use super::{InjuredPlayer, TeammateRecord};

const PERCENT_MAX: f64 = 100.0;

fn check(record: &str, field: &str, value: f64, max: Option<f64>) -> Result<()> {
    if !value.is_finite() {
        return Err(TrackerError::invalid(record, field, value, "not a finite number"));
    }
    if value < 0.0 {
        return Err(TrackerError::invalid(record, field, value, "must not be negative"));
    }
    if let Some(max) = max {
        if value > max {
            return Err(TrackerError::invalid(
                record,
                field,
                value,
                format!("must be at most {}", max),
            ));
        }
    }
    Ok(())
}

/// Check a single editable field value for a named record.
pub fn check_field_value(record: &str, field: StatField, value: f64) -> Result<()> {
    let max = field.is_percentage().then_some(PERCENT_MAX);
    check(record, &field.to_string(), value, max)
}

/// Validate one teammate: minutes, usage and every box score field.
pub fn validate_teammate(teammate: &TeammateRecord) -> Result<()> {
    check_field_value(&teammate.name, StatField::Minutes, teammate.current_minutes)?;
    check_field_value(&teammate.name, StatField::Usage, teammate.current_usage)?;
    for field in StatField::BOX_SCORE {
        check_field_value(&teammate.name, field, teammate.field(field))?;
    }
    Ok(())
}

/// Validate the injured player's own minutes and usage.
///
/// Teammates are checked one at a time with [`validate_teammate`] so a bad
/// teammate only costs its own slot. Zero minutes or usage pass validation;
/// the engine reports those as baseline errors per teammate.
pub fn validate_injury(injury: &InjuredPlayer) -> Result<()> {
    let record = injury.display_name();
    check(&record, "averageMinutes", injury.average_minutes, None)?;
    check(&record, "usageRate", injury.usage_rate, Some(PERCENT_MAX))
}
