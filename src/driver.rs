//! The batch pipeline tying sizes, scenarios and reporting together.

use crate::{
    report::{ReportError, Reporter},
    scenario::Stats,
};

/// Run `scenario` once per entry in `sizes`, sort the rows ascending by
/// `items_count` and hand them, with `title`, to `reporter`. The sorted rows
/// are also returned.
///
/// The driver does no timing of its own; it is a straight-line pipeline
/// executed once per table. A panicking scenario aborts the whole run and no
/// partial table is reported.
///
/// # Errors
///
/// Propagates any error the reporter produces while rendering the table.
pub fn run<F, R>(
    sizes: &[usize],
    mut scenario: F,
    title: &str,
    reporter: &mut R,
) -> Result<Vec<Stats>, ReportError>
where
    F: FnMut(usize) -> Stats,
    R: Reporter,
{
    let mut rows: Vec<Stats> = sizes.iter().map(|&items_count| scenario(items_count)).collect();
    rows.sort_by_key(|stats| stats.items_count);

    reporter.report(title, &rows)?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    use super::run;
    use crate::{
        report::{ReportError, Reporter},
        scenario::{self, Stats},
    };

    /// Records every table it is handed.
    #[derive(Default)]
    struct Capture {
        tables: Vec<(String, Vec<Stats>)>,
    }

    impl Reporter for Capture {
        fn report(&mut self, title: &str, rows: &[Stats]) -> Result<(), ReportError> {
            self.tables.push((title.to_owned(), rows.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn rows_sorted_by_size_regardless_of_input_order() -> Result<()> {
        let mut capture = Capture::default();
        let rows = run(
            &[100, 10],
            |n| scenario::creation_and_lookup(n, 1),
            "creation and lookup",
            &mut capture,
        )?;

        let sizes: Vec<usize> = rows.iter().map(|stats| stats.items_count).collect();
        assert_eq!(sizes, vec![10, 100]);

        let (title, reported) = &capture.tables[0];
        assert_eq!(title, "creation and lookup");
        assert_eq!(reported, &rows);
        Ok(())
    }

    #[test]
    fn one_table_per_invocation() -> Result<()> {
        let mut capture = Capture::default();
        run(&[10], scenario::creation, "creation", &mut capture)?;
        run(&[10], |n| scenario::lookup(n, 1), "lookup", &mut capture)?;

        assert_eq!(capture.tables.len(), 2);
        Ok(())
    }
}
