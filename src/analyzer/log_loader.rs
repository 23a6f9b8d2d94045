//! File I/O for sequential report reading.
//!
//! Wraps the report file in a buffered reader and hands out trimmed,
//! non-blank lines together with their 1-based line numbers. Blank lines are
//! skipped but still counted, so reported line numbers match the file as an
//! editor shows it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::AnalyzerError;

/// Buffer size for reading report files (8KB).
const BUFFER_SIZE: usize = 8 * 1024;

/// Sequential reader over a delivery-report file.
#[derive(Debug)]
pub struct LogLoader {
    reader: BufReader<File>,
    path: PathBuf,
    line_number: usize,
    line_buffer: String,
}

impl LogLoader {
    /// Open a report file for reading.
    ///
    /// # Parameters
    ///
    /// * `path` - Path to the report file
    ///
    /// # Returns
    ///
    /// `Ok(LogLoader)` if the file opens successfully,
    /// `Err(AnalyzerError::FileAccess)` otherwise.
    pub fn open(path: &Path) -> Result<Self, AnalyzerError> {
        let file = File::open(path).map_err(|source| AnalyzerError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            reader: BufReader::with_capacity(BUFFER_SIZE, file),
            path: path.to_path_buf(),
            line_number: 0,
            line_buffer: String::with_capacity(512),
        })
    }

    /// Read the next non-blank line from the report file.
    ///
    /// # Returns
    ///
    /// `Ok(Some((line_number, line)))` if a line is available, `Ok(None)` at
    /// EOF. An I/O failure after a successful open surfaces as
    /// `AnalyzerError::FileAccess` as well.
    pub fn next_line(&mut self) -> Result<Option<(usize, String)>, AnalyzerError> {
        loop {
            self.line_buffer.clear();

            let read = self
                .reader
                .read_line(&mut self.line_buffer)
                .map_err(|source| AnalyzerError::FileAccess {
                    path: self.path.clone(),
                    source,
                })?;

            if read == 0 {
                return Ok(None);
            }

            self.line_number += 1;
            let line = self.line_buffer.trim();
            if !line.is_empty() {
                return Ok(Some((self.line_number, line.to_string())));
            }
            log::debug!("Skipping blank line {}", self.line_number);
        }
    }
}
