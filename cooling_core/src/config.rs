//! # Configuration
//!
//! `CoolingConfig` is the single input record of the pipeline. It is built
//! once per run by layering, lowest precedence first:
//!
//! 1. Built-in defaults ([`CoolingConfig::default`])
//! 2. An optional TOML settings file ([`Settings`])
//! 3. Command-line flags (applied by the CLI)
//!
//! The transmission, time-lag and medical-equipment factors are fixed for the
//! medical clinic building type and are not part of the settings schema.
//!
//! ## Settings File
//!
//! ```toml
//! location = "Fresno"
//! output_dir = "reports"
//! ac_cop = 3.5
//! shgc = 0.30
//! wwr = 0.35
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CoolingError, CoolingResult, OP_READ_FILE};

/// Building type label for every calculation in this tool
pub const BUILDING_TYPE: &str = "Medical Clinic";

/// Default building location label
pub const DEFAULT_LOCATION: &str = "Sacramento";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// Default AC coefficient of performance (ASHRAE 90.1-2019)
pub const DEFAULT_AC_COP: f64 = 4.0;

/// Default solar heat gain coefficient (CA Title 24 2022)
pub const DEFAULT_SHGC: f64 = 0.25;

/// Default window-to-wall ratio (DOE reference building)
pub const DEFAULT_WWR: f64 = 0.40;

/// Fraction of reduced radiation that would have reached the interior
pub const TRANSMISSION_FACTOR: f64 = 0.80;

/// Share of the heat gain that lands within the cooling period
pub const TIME_LAG_FACTOR: f64 = 0.95;

/// Extra sensible load multiplier from medical equipment
pub const MEDICAL_EQUIP_FACTOR: f64 = 1.15;

/// Input record for one savings calculation.
///
/// `solar_reduction` and `electricity_cost` default to zero so that a
/// configuration without them fails validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolingConfig {
    /// Free-text building location
    pub location: String,

    /// Directory that receives the JSON and CSV artifacts
    pub output_dir: PathBuf,

    /// Solar radiation reduction (kWh/day)
    pub solar_reduction: f64,

    /// Electricity unit cost ($/kWh)
    pub electricity_cost: f64,

    /// Air-conditioning coefficient of performance
    pub ac_cop: f64,

    /// Solar heat gain coefficient, (0, 1]
    pub shgc: f64,

    /// Window-to-wall ratio, (0, 1]
    pub wwr: f64,

    /// Fraction of reduced radiation that would have reached the interior
    pub transmission_factor: f64,

    /// Share of the heat gain that lands within the cooling period
    pub time_lag_factor: f64,

    /// Medical equipment load multiplier (>= 1)
    pub medical_equip_factor: f64,
}

impl Default for CoolingConfig {
    fn default() -> Self {
        CoolingConfig {
            location: DEFAULT_LOCATION.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            solar_reduction: 0.0,
            electricity_cost: 0.0,
            ac_cop: DEFAULT_AC_COP,
            shgc: DEFAULT_SHGC,
            wwr: DEFAULT_WWR,
            transmission_factor: TRANSMISSION_FACTOR,
            time_lag_factor: TIME_LAG_FACTOR,
            medical_equip_factor: MEDICAL_EQUIP_FACTOR,
        }
    }
}

impl CoolingConfig {
    /// Create a configuration with the two required inputs and defaults for
    /// everything else.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cooling_core::config::CoolingConfig;
    ///
    /// let config = CoolingConfig::new(100.0, 0.15);
    /// assert_eq!(config.location, "Sacramento");
    /// assert_eq!(config.ac_cop, 4.0);
    /// ```
    pub fn new(solar_reduction: f64, electricity_cost: f64) -> Self {
        CoolingConfig {
            solar_reduction,
            electricity_cost,
            ..CoolingConfig::default()
        }
    }

    /// Overlay every field present in `settings`.
    pub fn apply(&mut self, settings: &Settings) {
        if let Some(location) = &settings.location {
            self.location = location.clone();
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_dir = output_dir.clone();
        }
        if let Some(ac_cop) = settings.ac_cop {
            self.ac_cop = ac_cop;
        }
        if let Some(shgc) = settings.shgc {
            self.shgc = shgc;
        }
        if let Some(wwr) = settings.wwr {
            self.wwr = wwr;
        }
    }
}

/// Optional overrides read from a TOML settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub location: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub ac_cop: Option<f64>,
    pub shgc: Option<f64>,
    pub wwr: Option<f64>,
}

impl Settings {
    /// Parse settings from TOML text. `origin` names the source in errors.
    pub fn parse(content: &str, origin: &str) -> CoolingResult<Self> {
        toml::from_str(content).map_err(|e| CoolingError::config(origin, e.to_string()))
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> CoolingResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoolingError::file_error(OP_READ_FILE, path.display().to_string(), e.to_string())
        })?;
        let settings = Self::parse(&content, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings file");
        Ok(settings)
    }
}
