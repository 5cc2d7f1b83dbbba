//! # Input Validation
//!
//! Physical and domain checks that run before any computation. Rules are
//! evaluated in a fixed order and the first failure is reported, which keeps
//! the user-facing message reproducible:
//!
//! 1. solar radiation reduction > 0
//! 2. electricity cost > 0
//! 3. SHGC in (0, 1]
//! 4. WWR in (0, 1]
//! 5. COP > 0
//!
//! Transmission, time-lag and medical-equipment factors are not checked.
//! NaN fails every rule it is tested against.

use crate::config::CoolingConfig;
use crate::errors::{CoolingError, CoolingResult};

fn is_positive(value: f64) -> bool {
    value > 0.0
}

fn is_unit_fraction(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}

/// Validate a configuration.
///
/// # Returns
///
/// * `Ok(())` - All rules pass
/// * `Err(CoolingError::InvalidInput)` - The first rule that failed
///
/// # Example
///
/// ```rust
/// use cooling_core::config::CoolingConfig;
/// use cooling_core::validation::validate;
///
/// assert!(validate(&CoolingConfig::new(100.0, 0.15)).is_ok());
///
/// let err = validate(&CoolingConfig::new(-1.0, 0.15)).unwrap_err();
/// assert_eq!(err.to_string(), "InvalidInput: reduction must be positive");
/// ```
pub fn validate(config: &CoolingConfig) -> CoolingResult<()> {
    if !is_positive(config.solar_reduction) {
        return Err(CoolingError::invalid_input(
            "solar_reduction",
            config.solar_reduction.to_string(),
            "reduction must be positive",
        ));
    }
    if !is_positive(config.electricity_cost) {
        return Err(CoolingError::invalid_input(
            "electricity_cost",
            config.electricity_cost.to_string(),
            "cost must be positive",
        ));
    }
    if !is_unit_fraction(config.shgc) {
        return Err(CoolingError::invalid_input(
            "shgc",
            config.shgc.to_string(),
            "SHGC out of range",
        ));
    }
    if !is_unit_fraction(config.wwr) {
        return Err(CoolingError::invalid_input(
            "wwr",
            config.wwr.to_string(),
            "WWR out of range",
        ));
    }
    if !is_positive(config.ac_cop) {
        return Err(CoolingError::invalid_input(
            "ac_cop",
            config.ac_cop.to_string(),
            "COP must be positive",
        ));
    }
    Ok(())
}
