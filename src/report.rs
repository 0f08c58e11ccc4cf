//! Rendering finished rows as console tables.

use std::io::{self, Write};

use thiserror::Error;

use crate::scenario::Stats;

/// Errors that can occur while rendering a table.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportError {
    /// The output stream rejected a write.
    #[error("Failed to write the table to the output stream.")]
    Write(#[from] io::Error),
}

/// Consumer of finished measurement tables.
///
/// The driver hands each table over as a title plus rows already sorted by
/// dataset size; how they are rendered is entirely the reporter's concern.
pub trait Reporter {
    /// Render one table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be delivered to its destination.
    fn report(&mut self, title: &str, rows: &[Stats]) -> Result<(), ReportError>;
}

/// Column headers, in cell order.
const HEADERS: [&str; 4] = ["items count", "list", "dictionary", "hashset"];

/// Renders each table as its title followed by an ASCII-bordered grid, with
/// columns sized to their widest cell and durations in their `Debug` form
/// (`12.3ms`).
#[derive(Debug)]
pub struct TextTable<W> {
    out: W,
}

impl TextTable<io::Stdout> {
    /// A table writer over standard output.
    #[must_use]
    pub fn stdout() -> Self {
        TextTable { out: io::stdout() }
    }
}

impl<W: Write> TextTable<W> {
    /// A table writer over an arbitrary output stream.
    #[must_use]
    pub fn new(out: W) -> Self {
        TextTable { out }
    }

    fn rule(&mut self, widths: &[usize; 4]) -> io::Result<()> {
        write!(self.out, "+")?;
        for width in widths {
            write!(self.out, "{}+", "-".repeat(width + 2))?;
        }
        writeln!(self.out)
    }

    fn row(&mut self, widths: &[usize; 4], cells: &[&str; 4]) -> io::Result<()> {
        write!(self.out, "|")?;
        for (&width, cell) in widths.iter().zip(cells) {
            write!(self.out, " {cell:<width$} |")?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> Reporter for TextTable<W> {
    fn report(&mut self, title: &str, rows: &[Stats]) -> Result<(), ReportError> {
        let cells: Vec<[String; 4]> = rows
            .iter()
            .map(|stats| {
                [
                    stats.items_count.to_string(),
                    format!("{:?}", stats.list_time),
                    format!("{:?}", stats.dictionary_time),
                    format!("{:?}", stats.hashset_time),
                ]
            })
            .collect();

        let mut widths: [usize; 4] = HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        writeln!(self.out, "{title}")?;
        self.rule(&widths)?;
        self.row(&widths, &HEADERS)?;
        self.rule(&widths)?;
        for row in &cells {
            self.row(&widths, &row.each_ref().map(String::as_str))?;
        }
        self.rule(&widths)?;
        writeln!(self.out)?;

        Ok(())
    }
}
