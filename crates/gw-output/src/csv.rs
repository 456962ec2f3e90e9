//! CSV path backend.
//!
//! ```csv
//! x,y
//! 1,1
//! 1,2
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path as FsPath;

use csv::Writer;
use gw_spatial::Path;
use tracing::debug;

use crate::writer::PathWriter;
use crate::{OutputError, OutputResult};

const HEADER: [&str; 2] = ["x", "y"];

/// Writes walks as `x,y` rows.
pub struct CsvPathWriter<W: Write = File> {
    inner:    Writer<W>,
    rows:     u64,
    finished: bool,
}

impl CsvPathWriter<File> {
    /// Create (or truncate) `file` and write the header row.
    pub fn create(file: &FsPath) -> OutputResult<Self> {
        Self::from_writer(File::create(file)?)
    }
}

impl<W: Write> CsvPathWriter<W> {
    /// Wrap any writer and write the header row.
    pub fn from_writer(w: W) -> OutputResult<Self> {
        let mut inner = Writer::from_writer(w);
        inner.write_record(HEADER)?;
        Ok(Self { inner, rows: 0, finished: false })
    }

    /// Coordinate rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush and hand back the wrapped writer.
    pub fn into_inner(self) -> OutputResult<W> {
        self.inner.into_inner().map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> PathWriter for CsvPathWriter<W> {
    fn write_path(&mut self, path: &Path) -> OutputResult<()> {
        for c in path.coords() {
            self.inner.write_record(&[c.x.to_string(), c.y.to_string()])?;
        }
        self.rows += path.coords().len() as u64;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        debug!(rows = self.rows, "csv path written");
        Ok(())
    }
}
