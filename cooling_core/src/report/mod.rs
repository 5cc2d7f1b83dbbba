//! # Result Reporting
//!
//! Persists a [`SavingsResult`] as two sibling artifacts in an output
//! directory:
//!
//! - `solar_cooling_<stamp>.json` - the flat [`ResultRecord`], pretty-printed
//! - `solar_cooling_<stamp>.csv` - one header row plus one data row
//!
//! `<stamp>` is the local time with second resolution (`2024-07-01_140322`),
//! so files from earlier runs are left alone. Two runs inside the same second
//! write to the same names and the later one wins.
//!
//! The JSON file is written first. If it fails, the error is returned at once
//! and the CSV file is not attempted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cooling_core::calculation::calculate;
//! use cooling_core::config::CoolingConfig;
//! use cooling_core::report::save_results;
//! use std::path::Path;
//!
//! let result = calculate(&CoolingConfig::new(100.0, 0.15));
//! let paths = save_results(&result, Path::new("results"))?;
//! println!("wrote {}", paths.json.display());
//! # Ok::<(), cooling_core::errors::CoolingError>(())
//! ```

pub mod record;
pub mod table;

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::calculation::SavingsResult;
use crate::errors::{CoolingError, CoolingResult, OP_CREATE_DIR, OP_READ_FILE, OP_WRITE_FILE};

pub use record::ResultRecord;
pub use table::HEADERS;

/// Filename prefix shared by both artifacts
pub const FILE_PREFIX: &str = "solar_cooling_";

/// chrono format for the filename stamp
const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H%M%S";

/// Locations of the two artifacts written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
}

impl ReportPaths {
    /// Artifact paths for a run stamped at `now`.
    pub fn for_time(dir: &Path, now: &DateTime<Local>) -> Self {
        let stamp = now.format(FILE_STAMP_FORMAT);
        ReportPaths {
            json: dir.join(format!("{FILE_PREFIX}{stamp}.json")),
            csv: dir.join(format!("{FILE_PREFIX}{stamp}.csv")),
        }
    }
}

/// Save both artifacts using the current local time.
pub fn save_results(result: &SavingsResult, dir: &Path) -> CoolingResult<ReportPaths> {
    save_results_at(result, dir, Local::now())
}

/// Save both artifacts stamped with `now`.
///
/// # Returns
///
/// * `Ok(ReportPaths)` - Both files were written
/// * `Err(CoolingError::SerializationError)` - A value is infinite or NaN; nothing is written
/// * `Err(CoolingError::FileError)` - Directory creation or a write failed
pub fn save_results_at(
    result: &SavingsResult,
    dir: &Path,
    now: DateTime<Local>,
) -> CoolingResult<ReportPaths> {
    fs::create_dir_all(dir).map_err(|e| {
        CoolingError::file_error(OP_CREATE_DIR, dir.display().to_string(), e.to_string())
    })?;
    tracing::debug!(dir = %dir.display(), "output directory ready");

    let record = ResultRecord::new(result, &now);
    record.ensure_finite()?;
    let paths = ReportPaths::for_time(dir, &now);

    write_json(&paths.json, &record)?;
    tracing::info!(path = %paths.json.display(), "wrote JSON results");

    write_csv(&paths.csv, &record)?;
    tracing::info!(path = %paths.csv.display(), "wrote CSV results");

    Ok(paths)
}

/// Create `path` and hand a buffered writer to `body`, then flush and sync.
/// The handle is closed on every exit path when it goes out of scope.
fn write_file<F>(path: &Path, body: F) -> CoolingResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), Box<dyn Error>>,
{
    let write_err = |reason: String| {
        CoolingError::file_error(OP_WRITE_FILE, path.display().to_string(), reason)
    };

    let file = File::create(path).map_err(|e| write_err(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    body(&mut writer).map_err(|e| write_err(e.to_string()))?;
    writer.flush().map_err(|e| write_err(e.to_string()))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| write_err(e.to_string()))?;
    Ok(())
}

fn write_json(path: &Path, record: &ResultRecord) -> CoolingResult<()> {
    write_file(path, |writer| {
        serde_json::to_writer_pretty(&mut *writer, record)?;
        Ok(())
    })
}

fn write_csv(path: &Path, record: &ResultRecord) -> CoolingResult<()> {
    write_file(path, |writer| {
        table::write_table(&mut *writer, record)?;
        Ok(())
    })
}

/// Read a JSON artifact back into a [`ResultRecord`].
pub fn load_record(path: &Path) -> CoolingResult<ResultRecord> {
    let mut file = File::open(path).map_err(|e| {
        CoolingError::file_error(OP_READ_FILE, path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CoolingError::file_error(OP_READ_FILE, path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        CoolingError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate;
    use crate::config::CoolingConfig;
    use chrono::TimeZone;
    use std::env::temp_dir;

    fn temp_output_dir(name: &str) -> PathBuf {
        let dir = temp_dir().join(format!("solar_cooling_test_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 7, 1, 14, 3, 22).unwrap()
    }

    fn sample_result() -> SavingsResult {
        let mut config = CoolingConfig::new(100.0, 0.15);
        config.location = "Davis, CA".to_string();
        calculate(&config)
    }

    #[test]
    fn test_paths_share_stamp() {
        let paths = ReportPaths::for_time(Path::new("out"), &fixed_time());
        assert_eq!(paths.json, Path::new("out/solar_cooling_2024-07-01_140322.json"));
        assert_eq!(paths.csv, Path::new("out/solar_cooling_2024-07-01_140322.csv"));
    }

    #[test]
    fn test_save_creates_nested_directory() {
        let root = temp_output_dir("nested");
        let dir = root.join("a").join("b");

        let paths = save_results_at(&sample_result(), &dir, fixed_time()).unwrap();
        assert!(dir.is_dir());
        assert!(paths.json.is_file());
        assert!(paths.csv.is_file());

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_exactly_two_artifacts_with_same_suffix() {
        let dir = temp_output_dir("pair");
        save_results_at(&sample_result(), &dir, fixed_time()).unwrap();

        let mut names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "solar_cooling_2024-07-01_140322.csv".to_string(),
                "solar_cooling_2024-07-01_140322.json".to_string(),
            ]
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_earlier_runs_are_kept() {
        let dir = temp_output_dir("history");
        let later = Local.with_ymd_and_hms(2024, 7, 1, 14, 3, 23).unwrap();

        save_results_at(&sample_result(), &dir, fixed_time()).unwrap();
        save_results_at(&sample_result(), &dir, later).unwrap();

        assert_eq!(fs::read_dir(&dir).unwrap().count(), 4);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_json_artifact_roundtrip() {
        let dir = temp_output_dir("roundtrip");
        let result = sample_result();
        let paths = save_results_at(&result, &dir, fixed_time()).unwrap();

        let loaded = load_record(&paths.json).unwrap();
        assert_eq!(loaded, ResultRecord::new(&result, &fixed_time()));
        assert_eq!(loaded.location, "Davis, CA");
        assert_eq!(loaded.building_type, "Medical Clinic");
        assert!((loaded.cooling_load_reduced - result.cooling_load_reduced).abs() < 1e-12);
        assert!((loaded.daily_cost_saved - result.annual_cost_saved).abs() < 1e-12);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_json_is_two_space_indented() {
        let dir = temp_output_dir("indent");
        let paths = save_results_at(&sample_result(), &dir, fixed_time()).unwrap();

        let text = fs::read_to_string(&paths.json).unwrap();
        assert!(text.starts_with("{\n  \"timestamp\": "));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_csv_artifact_has_one_data_row() {
        let dir = temp_output_dir("csv");
        let paths = save_results_at(&sample_result(), &dir, fixed_time()).unwrap();

        let mut reader = csv::Reader::from_path(&paths.csv).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 14);
        assert_eq!(&headers[13], "Daily Cost Saved ($)");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "Davis, CA");
        assert_eq!(&rows[0][13], "299.07");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_directory_blocked_by_file() {
        let root = temp_output_dir("blocked");
        fs::create_dir_all(&root).unwrap();
        let blocker = root.join("not_a_dir");
        fs::write(&blocker, "x").unwrap();

        let err = save_results_at(&sample_result(), &blocker, fixed_time()).unwrap_err();
        match err {
            CoolingError::FileError { operation, .. } => assert_eq!(operation, OP_CREATE_DIR),
            other => panic!("expected FileError, got {:?}", other),
        }

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_json_failure_skips_csv() {
        let dir = temp_output_dir("json_blocked");
        let paths = ReportPaths::for_time(&dir, &fixed_time());
        // A directory where the JSON file should go makes File::create fail
        fs::create_dir_all(&paths.json).unwrap();

        let err = save_results_at(&sample_result(), &dir, fixed_time()).unwrap_err();
        match err {
            CoolingError::FileError { operation, path, .. } => {
                assert_eq!(operation, OP_WRITE_FILE);
                assert!(path.ends_with(".json"));
            }
            other => panic!("expected FileError, got {:?}", other),
        }
        assert!(!paths.csv.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_overflowing_result_is_not_written() {
        let dir = temp_output_dir("overflow");
        let mut config = CoolingConfig::new(100.0, 0.15);
        config.ac_cop = 1e-308;
        assert!(crate::validation::validate(&config).is_ok());

        let result = calculate(&config);
        assert!(result.electricity_saved.is_infinite());

        let err = save_results_at(&result, &dir, fixed_time()).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(err.to_string().contains("electricity_saved_kwh_day"));

        let paths = ReportPaths::for_time(&dir, &fixed_time());
        assert!(!paths.json.exists());
        assert!(!paths.csv.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_record() {
        let err = load_record(Path::new("/nonexistent/solar_cooling_x.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
