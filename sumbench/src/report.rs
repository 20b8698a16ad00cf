//! Fixed-width result tables.

use std::fmt;
use std::io::{self, Write};

use crate::element::ElementWidth;
use crate::harness::Measurement;
use crate::kernels::KernelKind;

/// Width of the `=`/`-` separator lines.
pub const TABLE_WIDTH: usize = 103;

/// One (kernel, size) result.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRow {
    pub size: usize,
    pub result: u64,
    pub cycles: u64,
    pub clock_ghz: f64,
    pub adds_per_cycle: f64,
}

impl BenchRow {
    pub fn new(size: usize, result: u64, measurement: &Measurement) -> Self {
        Self {
            size,
            result,
            cycles: measurement.min_cycles,
            clock_ghz: measurement.clock_ghz(),
            adds_per_cycle: measurement.adds_per_cycle(size),
        }
    }
}

impl fmt::Display for BenchRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20}{:<25}{:<20}{:<20.3}{:<15.6}",
            self.size, self.result, self.cycles, self.clock_ghz, self.adds_per_cycle
        )
    }
}

/// Writes one table per kernel.
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn begin_table(&mut self, kernel: KernelKind, width: ElementWidth) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Running tests for function: {kernel} [{width}]")?;
        writeln!(self.out, "{}", "=".repeat(TABLE_WIDTH))?;
        writeln!(
            self.out,
            "{:<20}{:<25}{:<20}{:<20}{:<15}",
            "Test Size", "Result", "CPU Cycles", "CPU Clock (GHz)", "Adds per Cycle"
        )?;
        writeln!(self.out, "{}", "-".repeat(TABLE_WIDTH))
    }

    pub fn row(&mut self, row: &BenchRow) -> io::Result<()> {
        writeln!(self.out, "{row}")?;
        self.out.flush()
    }

    pub fn end_table(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(TABLE_WIDTH))?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> BenchRow {
        BenchRow {
            size: 5000,
            result: 12_497_500,
            cycles: 1234,
            clock_ghz: 4.38765,
            adds_per_cycle: 4.051_863_857,
        }
    }

    #[test]
    fn test_row_columns() {
        let line = sample_row().to_string();
        assert_eq!(&line[0..20], format!("{:<20}", 5000));
        assert_eq!(&line[20..45], format!("{:<25}", 12_497_500));
        assert_eq!(&line[45..65], format!("{:<20}", 1234));
        assert_eq!(&line[65..85], format!("{:<20}", "4.388"));
        assert_eq!(&line[85..], format!("{:<15}", "4.051864"));
    }

    #[test]
    fn test_row_from_measurement() {
        let m = Measurement {
            runs: 1,
            min_cycles: 2500,
            max_cycles: 2500,
            median_cycles: 2500,
            total_cycles: 2500,
            elapsed: std::time::Duration::from_nanos(1000),
        };
        let row = BenchRow::new(5000, 7, &m);
        assert_eq!(row.cycles, 2500);
        assert!((row.adds_per_cycle - 2.0).abs() < f64::EPSILON);
        assert!((row.clock_ghz - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_table_layout() {
        let mut report = ReportWriter::new(Vec::new());
        report
            .begin_table(KernelKind::Simd128, ElementWidth::U32)
            .unwrap();
        report.row(&sample_row()).unwrap();
        report.end_table().unwrap();

        let text = String::from_utf8(report.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Running tests for function: Simd128 [u32]");
        assert_eq!(lines[2], "=".repeat(TABLE_WIDTH));
        assert!(lines[3].starts_with("Test Size           Result                   CPU Cycles"));
        assert_eq!(lines[3].len(), 100);
        assert_eq!(lines[4], "-".repeat(TABLE_WIDTH));
        assert!(lines[5].starts_with("5000                12497500"));
        assert_eq!(lines[6], "=".repeat(TABLE_WIDTH));
    }
}
