use super::SweepRecord;
use crate::base::Config;
use crate::StrError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Receives the records accepted by the stretch sweep
pub trait ReportSink {
    /// Persists one record
    fn report(&mut self, record: &SweepRecord) -> Result<(), StrError>;
}

/// Writes the accepted records to a text file, one line per step
///
/// Each line reads `k Tzz I1 = <I1> I2 = <I2>`.
pub struct TextReport {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl TextReport {
    /// Returns the name of the report file for a given configuration
    ///
    /// Example: `A2_lambda_2_mu_200_r1_2_r2_2.5.txt`
    pub fn file_name(config: &Config) -> String {
        let (name1, name2) = config.model.names();
        let (p1, p2) = config.model.values();
        format!(
            "{}{}_{}_{}_{}_{}_r1_{}_r2_{}.txt",
            config.model.letter(),
            config.n,
            name1,
            p1,
            name2,
            p2,
            config.r1,
            config.r2
        )
    }

    /// Creates the report file in `out_dir` (the directory is created if needed)
    pub fn new<P>(out_dir: &P, config: &Config) -> Result<Self, StrError>
    where
        P: AsRef<Path> + ?Sized,
    {
        let dir = out_dir.as_ref();
        fs::create_dir_all(dir).map_err(|_| "cannot create directory")?;
        let path = dir.join(TextReport::file_name(config));
        let file = File::create(&path).map_err(|_| "cannot create file")?;
        Ok(TextReport {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Returns the full path of the report file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes the buffered lines to the file
    pub fn flush(&mut self) -> Result<(), StrError> {
        self.writer.flush().map_err(|_| "cannot flush file")
    }
}

impl ReportSink for TextReport {
    fn report(&mut self, record: &SweepRecord) -> Result<(), StrError> {
        writeln!(
            &mut self.writer,
            "{} {} I1 = {} I2 = {}",
            record.k, record.tzz, record.i1, record.i2
        )
        .map_err(|_| "cannot write file")
    }
}

/// Forwards each record to several sinks
pub struct TeeSink<'a> {
    sinks: Vec<&'a mut dyn ReportSink>,
}

impl<'a> TeeSink<'a> {
    /// Allocates a new instance
    pub fn new(sinks: Vec<&'a mut dyn ReportSink>) -> Self {
        TeeSink { sinks }
    }
}

impl<'a> ReportSink for TeeSink<'a> {
    fn report(&mut self, record: &SweepRecord) -> Result<(), StrError> {
        for sink in self.sinks.iter_mut() {
            sink.report(record)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
