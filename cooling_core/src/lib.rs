//! # cooling_core - Solar Cooling Savings Engine
//!
//! `cooling_core` estimates the energy and cost saved when the solar heat
//! gain of a medical clinic is reduced. One measured input (daily solar
//! radiation reduction) and a handful of coefficients go through a fixed
//! pipeline:
//!
//! ```text
//! CoolingConfig ──validate──▶ CoolingConfig ──calculate──▶ SavingsResult ──save_results──▶ .json + .csv
//! ```
//!
//! Every step runs once per invocation, in order, on a single thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use cooling_core::{calculate, validate, CoolingConfig};
//!
//! let config = CoolingConfig::new(100.0, 0.15);
//! validate(&config)?;
//!
//! let result = calculate(&config);
//! assert!((result.annual_cost_saved - 299.071875).abs() < 1e-9);
//! # Ok::<(), cooling_core::CoolingError>(())
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Input record, defaults and settings-file overlay
//! - [`validation`] - Domain checks on the input record
//! - [`calculation`] - The savings formula
//! - [`report`] - JSON and CSV artifacts
//! - [`summary`] - Console report
//! - [`errors`] - Structured error types

pub mod calculation;
pub mod config;
pub mod errors;
pub mod report;
pub mod summary;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculation::{calculate, Assumptions, SavingsResult, Units, UNITS};
pub use config::{CoolingConfig, Settings, BUILDING_TYPE};
pub use errors::{CoolingError, CoolingResult};
pub use report::{load_record, save_results, save_results_at, ReportPaths, ResultRecord};
pub use summary::render_summary;
pub use validation::validate;
