//! Human-readable console report.

use crate::calculation::SavingsResult;

/// Render the console summary for a result.
///
/// Location, building type, the two required inputs and the three derived
/// quantities are always shown. `verbose` adds COP, SHGC and WWR to the inputs
/// block and appends the fixed derating factors.
pub fn render_summary(result: &SavingsResult, verbose: bool) -> String {
    let a = &result.assumptions;
    let units = &a.units;

    let mut lines = vec![
        String::new(),
        "Calculation Results (Daily):".to_string(),
        format!("Location: {}", a.location),
        format!("Building type: {}", a.building_type),
        String::new(),
        "Inputs:".to_string(),
        format!(
            "Total solar radiation reduction: {:.2} {}",
            result.total_solar_reduction, units.solar_radiation
        ),
        format!("Electricity cost: {:.3} {}", a.electricity_cost, units.cost),
    ];

    if verbose {
        lines.push(format!("AC COP: {:.1}", a.ac_cop));
        lines.push(format!("Solar Heat Gain Coefficient: {:.2}", a.shgc));
        lines.push(format!("Window-to-Wall Ratio: {:.2}", a.wwr));
    }

    lines.extend([
        String::new(),
        "Results:".to_string(),
        format!(
            "Total cooling load reduced: {:.2} {}",
            result.cooling_load_reduced, units.cooling_load
        ),
        format!(
            "Total electricity saved: {:.2} {}",
            result.electricity_saved, units.electricity
        ),
        format!(
            "Annual cost savings: {:.2} {}",
            result.annual_cost_saved, units.savings
        ),
    ]);

    if verbose {
        lines.extend([
            String::new(),
            "Detailed Assumptions:".to_string(),
            format!("Transmission Factor: {:.2}", a.transmission_factor),
            format!("Time Lag Factor: {:.2}", a.time_lag_factor),
            format!("Medical Equipment Factor: {:.2}", a.medical_equip_factor),
        ]);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
