//! Tabular view of a [`SeriesPair`] for on-screen display and export.

use std::io;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::*;
use crate::evaluator::round_to;
use crate::series::SeriesPair;

/// Decimal places shown in rendered and exported cells.
pub const DISPLAY_DECIMALS: i32 = 4;

/// Two labelled, row-aligned columns.
///
/// Serializes as `{ "<temperature label>": [...], "<pressure label>": [...] }`
/// with faulty pressures as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    temperature_label: String,
    pressure_label: String,
    temperature: Vec<f64>,
    pressure: Vec<Option<f64>>,
}

/// One table row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub temperature: f64,
    pub pressure: Option<f64>,
}

impl ResultTable {
    pub const DEFAULT_FILE_NAME: &'static str = "Vapour_Pressure_Data.csv";

    pub fn temperature_label(&self) -> &str { &self.temperature_label }
    pub fn pressure_label(&self) -> &str { &self.pressure_label }

    pub fn temperatures(&self) -> &[f64] { &self.temperature }
    pub fn pressures(&self) -> &[Option<f64>] { &self.pressure }

    pub fn len(&self) -> usize { self.temperature.len() }
    pub fn is_empty(&self) -> bool { self.temperature.is_empty() }

    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.temperature
            .iter()
            .zip(&self.pressure)
            .map(|(&temperature, &pressure)| Row { temperature, pressure })
    }

    /// Write the table as CSV with a header row.  Faulty pressures are
    /// empty cells.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([self.temperature_label.as_str(), self.pressure_label.as_str()])?;
        for row in self.rows() {
            let pressure = row.pressure.map(cell).unwrap_or_default();
            wtr.write_record([cell(row.temperature), pressure])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// CSV export as a string.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| AntoineError::InvalidInput(format!("CSV output is not UTF-8: {e}")))
    }
}

fn cell(value: f64) -> String {
    round_to(value, DISPLAY_DECIMALS).to_string()
}

impl From<&SeriesPair> for ResultTable {
    fn from(pair: &SeriesPair) -> Self {
        Self {
            temperature_label: pair.x_label(),
            pressure_label: pair.y_label(),
            temperature: pair.temperature.clone(),
            pressure: pair.pressure.values(),
        }
    }
}

impl From<SeriesPair> for ResultTable {
    fn from(pair: SeriesPair) -> Self {
        Self {
            temperature_label: pair.x_label(),
            pressure_label: pair.y_label(),
            pressure: pair.pressure.values(),
            temperature: pair.temperature,
        }
    }
}

impl Serialize for ResultTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&self.temperature_label, &self.temperature)?;
        map.serialize_entry(&self.pressure_label, &self.pressure)?;
        map.end()
    }
}

impl std::fmt::Display for ResultTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let t_cells: Vec<String> = self.temperature.iter().map(|&t| cell(t)).collect();
        let p_cells: Vec<String> = self
            .pressure
            .iter()
            .map(|p| p.map(cell).unwrap_or_else(|| "—".to_string()))
            .collect();

        let width = |header: &str, cells: &[String]| {
            cells
                .iter()
                .map(|c| c.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        };
        let tw = width(&self.temperature_label, &t_cells);
        let pw = width(&self.pressure_label, &p_cells);

        write!(f, "{:>tw$}  {:>pw$}", self.temperature_label, self.pressure_label)?;
        for (t, p) in t_cells.iter().zip(&p_cells) {
            write!(f, "\n{t:>tw$}  {p:>pw$}")?;
        }
        Ok(())
    }
}
