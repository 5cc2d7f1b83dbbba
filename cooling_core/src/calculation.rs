//! # Cooling Savings Calculation
//!
//! Turns a validated [`CoolingConfig`] into a [`SavingsResult`]:
//!
//! ```text
//! cooling_load_reduced = reduction × SHGC × transmission × time_lag × medical_equip
//! electricity_saved    = cooling_load_reduced / COP
//! annual_cost_saved    = electricity_saved × cost × 365
//! ```
//!
//! The annual figure assumes every day of the year saves as much as the input
//! day. There is no seasonality model.
//!
//! ## Example
//!
//! ```rust
//! use cooling_core::calculation::calculate;
//! use cooling_core::config::CoolingConfig;
//!
//! let result = calculate(&CoolingConfig::new(100.0, 0.15));
//! assert!((result.cooling_load_reduced - 21.85).abs() < 1e-9);
//! assert!((result.electricity_saved - 5.4625).abs() < 1e-9);
//! assert!((result.annual_cost_saved - 299.071875).abs() < 1e-9);
//! ```

use serde::Serialize;

use crate::config::{CoolingConfig, BUILDING_TYPE};

/// Days used to annualize the daily savings
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Unit labels attached to every result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Units {
    pub solar_radiation: &'static str,
    pub cooling_load: &'static str,
    pub electricity: &'static str,
    pub cost: &'static str,
    pub savings: &'static str,
}

/// The fixed unit-label map
pub const UNITS: Units = Units {
    solar_radiation: "kWh/day",
    cooling_load: "kWh/day",
    electricity: "kWh/day",
    cost: "$/kWh",
    savings: "$/year",
};

/// Inputs echoed back alongside the derived quantities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assumptions {
    pub units: Units,
    pub location: String,
    pub building_type: &'static str,
    pub ac_cop: f64,
    pub shgc: f64,
    pub wwr: f64,
    pub transmission_factor: f64,
    pub time_lag_factor: f64,
    pub medical_equip_factor: f64,
    pub electricity_cost: f64,
}

/// Result of one savings calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsResult {
    pub assumptions: Assumptions,

    /// Solar radiation reduction (kWh/day), copied from the input
    pub total_solar_reduction: f64,

    /// Cooling load avoided (kWh/day)
    pub cooling_load_reduced: f64,

    /// Electricity avoided at the chiller (kWh/day)
    pub electricity_saved: f64,

    /// Yearly cost saving ($/year)
    pub annual_cost_saved: f64,
}

/// Calculate cooling, electricity and cost savings.
///
/// The configuration must already have passed
/// [`validate`](crate::validation::validate); no further checks happen here.
pub fn calculate(config: &CoolingConfig) -> SavingsResult {
    let cooling_load_reduced = config.solar_reduction
        * config.shgc
        * config.transmission_factor
        * config.time_lag_factor
        * config.medical_equip_factor;

    let electricity_saved = cooling_load_reduced / config.ac_cop;
    let annual_cost_saved = electricity_saved * config.electricity_cost * DAYS_PER_YEAR;

    SavingsResult {
        total_solar_reduction: config.solar_reduction,
        cooling_load_reduced,
        electricity_saved,
        annual_cost_saved,
        assumptions: Assumptions {
            units: UNITS,
            location: config.location.clone(),
            building_type: BUILDING_TYPE,
            ac_cop: config.ac_cop,
            shgc: config.shgc,
            wwr: config.wwr,
            transmission_factor: config.transmission_factor,
            time_lag_factor: config.time_lag_factor,
            medical_equip_factor: config.medical_equip_factor,
            electricity_cost: config.electricity_cost,
        },
    }
}
