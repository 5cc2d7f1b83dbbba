//! Header and data row for the `.csv` artifact.

use std::io::Write;

use super::record::ResultRecord;

/// Column headers, in output order
pub const HEADERS: [&str; 14] = [
    "Timestamp",
    "Location",
    "Building Type",
    "Solar Reduction (kWh/day)",
    "Electricity Cost ($/kWh)",
    "AC COP",
    "SHGC",
    "WWR",
    "Transmission Factor",
    "Time Lag Factor",
    "Medical Equipment Factor",
    "Cooling Load Reduced (kWh/day)",
    "Electricity Saved (kWh/day)",
    "Daily Cost Saved ($)",
];

/// Format a record as one CSV row with fixed precision per column.
pub fn data_row(record: &ResultRecord) -> [String; 14] {
    [
        record.timestamp.clone(),
        record.location.clone(),
        record.building_type.clone(),
        format!("{:.2}", record.solar_reduction),
        format!("{:.3}", record.electricity_cost),
        format!("{:.1}", record.ac_cop),
        format!("{:.2}", record.shgc),
        format!("{:.2}", record.wwr),
        format!("{:.2}", record.transmission_factor),
        format!("{:.2}", record.time_lag_factor),
        format!("{:.2}", record.medical_equip_factor),
        format!("{:.2}", record.cooling_load_reduced),
        format!("{:.2}", record.electricity_saved),
        format!("{:.2}", record.daily_cost_saved),
    ]
}

/// Write the header row and a single data row, then flush.
pub fn write_table<W: Write>(writer: W, record: &ResultRecord) -> csv::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADERS)?;
    csv.write_record(data_row(record))?;
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ResultRecord {
        ResultRecord {
            timestamp: "2024-07-01T14:03:22-07:00".to_string(),
            location: "Sacramento".to_string(),
            building_type: "Medical Clinic".to_string(),
            solar_reduction: 100.0,
            electricity_cost: 0.15,
            ac_cop: 4.0,
            shgc: 0.25,
            wwr: 0.4,
            transmission_factor: 0.8,
            time_lag_factor: 0.95,
            medical_equip_factor: 1.15,
            cooling_load_reduced: 21.85,
            electricity_saved: 5.4625,
            daily_cost_saved: 299.071875,
        }
    }

    #[test]
    fn test_row_precision() {
        let row = data_row(&sample_record());
        assert_eq!(row[3], "100.00");
        assert_eq!(row[4], "0.150");
        assert_eq!(row[5], "4.0");
        assert_eq!(row[6], "0.25");
        assert_eq!(row[7], "0.40");
        assert_eq!(row[8], "0.80");
        assert_eq!(row[9], "0.95");
        assert_eq!(row[10], "1.15");
        assert_eq!(row[11], "21.85");
        assert_eq!(row[12], "5.46");
        assert_eq!(row[13], "299.07");
    }

    #[test]
    fn test_table_layout() {
        let mut buffer = Vec::new();
        write_table(&mut buffer, &sample_record()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split(',').count(), 14);
        assert!(lines[0].starts_with("Timestamp,Location,Building Type,"));
        assert!(lines[0].ends_with("Daily Cost Saved ($)"));
        assert_eq!(
            lines[1],
            "2024-07-01T14:03:22-07:00,Sacramento,Medical Clinic,100.00,0.150,4.0,0.25,0.40,0.80,0.95,1.15,21.85,5.46,299.07"
        );
    }

    #[test]
    fn test_location_with_comma_is_quoted() {
        let mut record = sample_record();
        record.location = "Davis, CA".to_string();

        let mut buffer = Vec::new();
        write_table(&mut buffer, &record).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"Davis, CA\""));
    }
}
