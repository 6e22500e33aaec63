use super::ReportSink;
use crate::base::Config;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the results of one accepted load step
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct SweepRecord {
    /// Axial stretch ratio
    pub k: f64,

    /// Axial resultant force
    pub tzz: f64,

    /// First invariant at the mid radius
    pub i1: f64,

    /// Second invariant at the mid radius
    pub i2: f64,

    /// Third invariant at the mid radius
    pub i3: f64,
}

/// Holds all records reported by a stretch sweep
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SweepResults {
    pub name: String,              // model name such as "B2"
    pub config: Config,            // input data
    pub records: Vec<SweepRecord>, // accepted steps
}

impl SweepResults {
    /// Allocates a new structure
    pub fn new(config: &Config) -> Self {
        SweepResults {
            name: format!("{}{}", config.model.letter(), config.n),
            config: config.clone(),
            records: Vec::new(),
        }
    }

    /// Returns the stretches of all records
    pub fn stretches(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.k).collect()
    }

    /// Returns the axial forces of all records
    pub fn forces(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.tzz).collect()
    }

    /// Reads a JSON file containing the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn from<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let results = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(results)
    }

    /// Writes a JSON file with the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

impl ReportSink for SweepResults {
    fn report(&mut self, record: &SweepRecord) -> Result<(), StrError> {
        self.records.push(*record);
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{SweepRecord, SweepResults};
    use crate::base::{Config, SampleParams, DEFAULT_TEST_DIR};
    use crate::util::ReportSink;

    #[test]
    fn new_and_report_work() {
        let config = SampleParams::config_reference(SampleParams::param_model_a(), 4);
        let mut results = SweepResults::new(&config);
        assert_eq!(results.name, "A4");
        assert_eq!(results.records.len(), 0);
        results
            .report(&SweepRecord {
                k: 1.1,
                tzz: 10.0,
                i1: 3.0,
                i2: 3.0,
                i3: 1.0,
            })
            .unwrap();
        results
            .report(&SweepRecord {
                k: 1.2,
                tzz: 20.0,
                i1: 3.1,
                i2: 3.2,
                i3: 1.0,
            })
            .unwrap();
        assert_eq!(results.stretches(), &[1.1, 1.2]);
        assert_eq!(results.forces(), &[10.0, 20.0]);
    }

    #[test]
    fn write_and_read_work() {
        let config = Config::new();
        let mut results = SweepResults::new(&config);
        results.records.push(SweepRecord {
            k: 1.01,
            tzz: 41.5,
            i1: 3.0,
            i2: 3.0,
            i3: 1.0,
        });
        let path = format!("{}/sweep_results.json", DEFAULT_TEST_DIR);
        results.write(&path).unwrap();
        let read = SweepResults::from(&path).unwrap();
        assert_eq!(read.name, "B2");
        assert_eq!(read.records, results.records);
        assert_eq!(read.config.n_steps, 400);
        assert_eq!(SweepResults::from("__not_found__.json").err(), Some("file not found"));
    }
}
