use std::io::Write;

use crate::pareto::ParetoFront;

use super::ComparisonReport;

impl ComparisonReport {
    /// Write one CSV row per solver: `solver,front_size,volume`.
    ///
    /// Rows follow label order.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use pareto_compare::prelude::*;
    ///
    /// let results = [SolverResult::new("greedy", vec![vec![1.0, 2.0, 3.0]])];
    /// let report = compare(&results, &Sense::minimize_all(3), 0, 0, (1, 2)).unwrap();
    ///
    /// let mut buf = Vec::new();
    /// report.write_summary_csv(&mut buf).unwrap();
    /// let csv = String::from_utf8(buf).unwrap();
    /// assert_eq!(csv, "solver,front_size,volume\ngreedy,1,0\n");
    /// ```
    pub fn write_summary_csv(&self, mut writer: impl Write) -> std::io::Result<()> {
        writeln!(writer, "solver,front_size,volume")?;
        for (label, summary) in self.iter() {
            writeln!(
                writer,
                "{},{},{}",
                csv_escape(label),
                summary.front_size,
                summary.volume
            )?;
        }
        Ok(())
    }

    /// Write every front member of every solver as
    /// `solver,<objective columns>`.
    ///
    /// `objectives` names the objective columns; when it is shorter than a
    /// vector, the remaining columns are named `obj_<index>`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn write_fronts_csv(
        &self,
        mut writer: impl Write,
        objectives: &[&str],
    ) -> std::io::Result<()> {
        let width = self
            .iter()
            .flat_map(|(_, s)| s.front.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(objectives.len());

        write!(writer, "solver")?;
        write_header(&mut writer, objectives, width)?;
        for (label, summary) in self.iter() {
            for member in &summary.front {
                write!(writer, "{}", csv_escape(label))?;
                for v in member {
                    write!(writer, ",{v}")?;
                }
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}

impl ParetoFront {
    /// Write the front as CSV, one member per row in front order.
    ///
    /// Column naming follows
    /// [`ComparisonReport::write_fronts_csv`].
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn write_csv(&self, mut writer: impl Write, objectives: &[&str]) -> std::io::Result<()> {
        let width = self
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(objectives.len());

        let mut first = true;
        for i in 0..width {
            if !first {
                write!(writer, ",")?;
            }
            first = false;
            write_column_name(&mut writer, objectives, i)?;
        }
        writeln!(writer)?;

        for member in self {
            let row: Vec<String> = member.iter().map(f64::to_string).collect();
            writeln!(writer, "{}", row.join(","))?;
        }
        Ok(())
    }
}

/// Writes `,name` for each of `width` columns, then ends the line.
fn write_header(writer: &mut impl Write, objectives: &[&str], width: usize) -> std::io::Result<()> {
    for i in 0..width {
        write!(writer, ",")?;
        write_column_name(writer, objectives, i)?;
    }
    writeln!(writer)
}

fn write_column_name(writer: &mut impl Write, objectives: &[&str], i: usize) -> std::io::Result<()> {
    match objectives.get(i) {
        Some(name) => write!(writer, "{}", csv_escape(name)),
        None => write!(writer, "obj_{i}"),
    }
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
