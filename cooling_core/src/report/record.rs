//! Flat record written to the `.json` artifact.
//!
//! Key names are part of the output format and must not change. Note that
//! `daily_cost_saved_usd` holds the *annual* cost saving; downstream consumers
//! already read that key, so both the name and the value are kept as-is.

use chrono::{DateTime, Local, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::calculation::SavingsResult;
use crate::errors::{CoolingError, CoolingResult};

/// Serialized form of one calculation run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "timestamp": "2024-07-01T14:03:22-07:00",
///   "location": "Sacramento",
///   "building_type": "Medical Clinic",
///   "solar_reduction_kwh_day": 100.0,
///   "electricity_cost_per_kwh": 0.15,
///   "ac_cop": 4.0,
///   "shgc": 0.25,
///   "wwr": 0.4,
///   "transmission_factor": 0.8,
///   "time_lag_factor": 0.95,
///   "medical_equip_factor": 1.15,
///   "cooling_load_reduced_kwh_day": 21.85,
///   "electricity_saved_kwh_day": 5.4625,
///   "daily_cost_saved_usd": 299.071875
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    // metadata
    pub timestamp: String,
    pub location: String,
    pub building_type: String,

    // inputs
    #[serde(rename = "solar_reduction_kwh_day")]
    pub solar_reduction: f64,
    #[serde(rename = "electricity_cost_per_kwh")]
    pub electricity_cost: f64,
    pub ac_cop: f64,
    pub shgc: f64,
    pub wwr: f64,
    pub transmission_factor: f64,
    pub time_lag_factor: f64,
    pub medical_equip_factor: f64,

    // results
    #[serde(rename = "cooling_load_reduced_kwh_day")]
    pub cooling_load_reduced: f64,
    #[serde(rename = "electricity_saved_kwh_day")]
    pub electricity_saved: f64,
    #[serde(rename = "daily_cost_saved_usd")]
    pub daily_cost_saved: f64,
}

impl ResultRecord {
    /// Build a record from a result, stamping it with `now` in RFC 3339 form.
    pub fn new(result: &SavingsResult, now: &DateTime<Local>) -> Self {
        let assumptions = &result.assumptions;
        ResultRecord {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            location: assumptions.location.clone(),
            building_type: assumptions.building_type.to_string(),
            solar_reduction: result.total_solar_reduction,
            electricity_cost: assumptions.electricity_cost,
            ac_cop: assumptions.ac_cop,
            shgc: assumptions.shgc,
            wwr: assumptions.wwr,
            transmission_factor: assumptions.transmission_factor,
            time_lag_factor: assumptions.time_lag_factor,
            medical_equip_factor: assumptions.medical_equip_factor,
            cooling_load_reduced: result.cooling_load_reduced,
            electricity_saved: result.electricity_saved,
            daily_cost_saved: result.annual_cost_saved,
        }
    }

    /// Reject records holding infinite or NaN values. JSON has no encoding
    /// for them, so they would otherwise be written as `null`.
    pub fn ensure_finite(&self) -> CoolingResult<()> {
        let fields = [
            ("solar_reduction_kwh_day", self.solar_reduction),
            ("electricity_cost_per_kwh", self.electricity_cost),
            ("ac_cop", self.ac_cop),
            ("shgc", self.shgc),
            ("wwr", self.wwr),
            ("transmission_factor", self.transmission_factor),
            ("time_lag_factor", self.time_lag_factor),
            ("medical_equip_factor", self.medical_equip_factor),
            ("cooling_load_reduced_kwh_day", self.cooling_load_reduced),
            ("electricity_saved_kwh_day", self.electricity_saved),
            ("daily_cost_saved_usd", self.daily_cost_saved),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((key, value)) => Err(CoolingError::serialization(format!(
                "{} is not a finite number ({})",
                key, value
            ))),
            None => Ok(()),
        }
    }
}
