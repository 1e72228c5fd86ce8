/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Plot sinks for 1D profiles

use super::errors::{EngineError, Result};
use std::io::Write;

/// Axis labels of a line plot
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl AxisLabels {
    pub fn new(x: &str, y: &str) -> Self {
        Self {
            x: x.to_string(),
            y: y.to_string(),
        }
    }
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self::new("z (A)", "V (eV)")
    }
}

/// Anything that can render or store an (x, y) line plot
pub trait PlotSink {
    fn plot(&mut self, x: &[f64], y: &[f64], labels: &AxisLabels) -> Result<()>;
}

/// Plot sink writing comma-separated `x,y` rows under a label header
#[derive(Debug)]
pub struct CsvProfileWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvProfileWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PlotSink for CsvProfileWriter<W> {
    fn plot(&mut self, x: &[f64], y: &[f64], labels: &AxisLabels) -> Result<()> {
        if x.len() != y.len() {
            return Err(EngineError::SinkError(format!(
                "x has {} points but y has {}",
                x.len(),
                y.len()
            )));
        }

        writeln!(self.writer, "{},{}", labels.x, labels.y)?;
        for (xi, yi) in x.iter().zip(y) {
            writeln!(self.writer, "{:.8},{:.8}", xi, yi)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
