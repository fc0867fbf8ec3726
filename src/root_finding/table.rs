//! Plain-text rendering of a [`SolveResult`].
//!
//! Layout:
//! ┌ rule, method name, rule
//! ├ iteration table (headers from [`Algorithm::column_headers`])
//! ├ final root / error / iteration count
//! └ diagnostic, if the run did not converge
//!
//! Integers are right-aligned to 12 columns, floats in `{:>12.6e}`.

use std::fmt;

use super::algorithms::Algorithm;
use super::report::SolveResult;

const WIDTH: usize = 70;


/// [`fmt::Display`] adapter for a [`SolveResult`].
pub struct Table<'a>(pub &'a SolveResult);

impl SolveResult {
    /// Renders the result the way a terminal front end prints it.
    pub fn table(&self) -> Table<'_> { Table(self) }
}

fn rule(f: &mut fmt::Formatter<'_>, ch: char) -> fmt::Result {
    writeln!(f, "{}", ch.to_string().repeat(WIDTH))
}

fn header_line(algorithm: Algorithm) -> String {
    algorithm
        .column_headers()
        .iter()
        .map(|h| format!("{h:>12}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let res = self.0;

        rule(f, '=')?;
        writeln!(f, "Method: {}", res.algorithm.display_name())?;
        rule(f, '=')?;

        if !res.records.is_empty() {
            writeln!(f, "Iteration Details:")?;
            rule(f, '-')?;
            writeln!(f, "{}", header_line(res.algorithm))?;
            rule(f, '-')?;
            for record in &res.records {
                let mut cells = vec![format!("{:>12}", record.iteration)];
                cells.extend(record.columns().into_iter().map(|v| format!("{v:>12.6e}")));
                writeln!(f, "{}", cells.join(" | "))?;
            }
            rule(f, '-')?;
        }

        match res.root {
            Some(root) => writeln!(f, "Final Root: {root:.10}")?,
            None => match res.estimate() {
                Some(estimate) => writeln!(f, "Last Estimate: {estimate:.10}")?,
                None           => writeln!(f, "Final Root: none")?,
            },
        }
        if let Some(error) = res.error {
            writeln!(f, "Final Error: {error:.6e}")?;
        }
        writeln!(f, "Iterations: {}", res.iteration_count)?;

        if let Some(diagnostic) = res.diagnostic {
            writeln!(f, "Warning: {diagnostic}")?;
        }
        rule(f, '=')
    }
}
