//! Console reporting: diagnostic previews of the raw input, and the
//! statistical-moments summary for the chosen column.
//!
//! Everything here formats into `String`s; only [`preview`] prints, so the
//! cleaning transformation itself stays free of console side effects.

use std::fmt::Write as _;

use crate::data::model::RawTable;
use crate::stats::{self, Moments};

const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Raw-input diagnostics
// ---------------------------------------------------------------------------

/// Print head/tail previews, a describe-style summary, and the correlation
/// matrix of the raw input. Informational only; best-effort parsing.
pub fn preview(raw: &RawTable) {
    println!("{:^50}", "--- Initial Data ---");
    println!("{}", head_preview(raw, PREVIEW_ROWS));
    println!("{:^50}", "--- Last Rows ---");
    println!("{}", tail_preview(raw, PREVIEW_ROWS));
    println!("{:^50}", "--- Summary Stats ---");
    println!("{}", describe(raw));
    println!("{:^50}", "--- Correlations ---");
    println!("{}", correlation_table(raw));
}

fn column_widths(raw: &RawTable) -> Vec<usize> {
    raw.columns.iter().map(|c| c.len().max(9)).collect()
}

fn format_rows(raw: &RawTable, indices: std::ops::Range<usize>) -> String {
    let widths = column_widths(raw);
    let mut out = String::new();
    let _ = write!(out, "{:>5}", "");
    for (name, &width) in raw.columns.iter().zip(&widths) {
        let _ = write!(out, "  {name:>width$}");
    }
    let _ = writeln!(out);
    for i in indices {
        let _ = write!(out, "{i:>5}");
        for (cell, &width) in raw.rows[i].iter().zip(&widths) {
            let _ = write!(out, "  {cell:>width$}");
        }
        let _ = writeln!(out);
    }
    out
}

/// The first `n` rows, with header and row indices.
pub fn head_preview(raw: &RawTable, n: usize) -> String {
    format_rows(raw, 0..raw.len().min(n))
}

/// The last `n` rows, with header and row indices.
pub fn tail_preview(raw: &RawTable, n: usize) -> String {
    format_rows(raw, raw.len().saturating_sub(n)..raw.len())
}

/// count/mean/std/min/max per column, over the cells that parse as numbers.
/// std here is the sample deviation, as a quick-look diagnostic.
pub fn describe(raw: &RawTable) -> String {
    let widths = column_widths(raw);
    let summaries: Vec<[f64; 5]> = (0..raw.columns.len())
        .map(|i| {
            let values: Vec<f64> = raw
                .rows
                .iter()
                .filter_map(|row| row[i].trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .collect();
            sample_summary(&values)
        })
        .collect();

    let mut out = String::new();
    let _ = write!(out, "{:>5}", "");
    for (name, &width) in raw.columns.iter().zip(&widths) {
        let _ = write!(out, "  {name:>width$}");
    }
    let _ = writeln!(out);

    const LABELS: [&str; 5] = ["count", "mean", "std", "min", "max"];
    for (metric, label) in LABELS.iter().enumerate() {
        let _ = write!(out, "{label:>5}");
        for (summary, &width) in summaries.iter().zip(&widths) {
            let value = summary[metric];
            if metric == 0 {
                let _ = write!(out, "  {value:>width$.0}");
            } else {
                let _ = write!(out, "  {value:>width$.3}");
            }
        }
        let _ = writeln!(out);
    }
    out
}

fn sample_summary(values: &[f64]) -> [f64; 5] {
    let n = values.len();
    if n == 0 {
        return [0.0, f64::NAN, f64::NAN, f64::NAN, f64::NAN];
    }
    let nf = n as f64;
    let mean = values.iter().sum::<f64>() / nf;
    let std = if n > 1 {
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (nf - 1.0)).sqrt()
    } else {
        0.0
    };
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    [nf, mean, std, min, max]
}

/// Pearson correlation matrix of the rows that are fully numeric.
pub fn correlation_table(raw: &RawTable) -> String {
    let columns = fully_numeric_columns(raw);
    if columns.iter().all(|c| c.is_empty()) {
        return String::from("(no fully numeric rows)\n");
    }
    let corr = stats::correlation_matrix(&columns);

    let name_width = raw.columns.iter().map(|c| c.len()).max().unwrap_or(4);
    let widths = column_widths(raw);

    let mut out = String::new();
    let _ = write!(out, "{:>name_width$}", "");
    for (name, &width) in raw.columns.iter().zip(&widths) {
        let _ = write!(out, "  {name:>width$}");
    }
    let _ = writeln!(out);
    for (i, name) in raw.columns.iter().enumerate() {
        let _ = write!(out, "{name:>name_width$}");
        for (j, &width) in widths.iter().enumerate() {
            let value = corr[i][j];
            let _ = write!(out, "  {value:>width$.3}");
        }
        let _ = writeln!(out);
    }
    out
}

/// Column vectors built from the rows where every cell parses as a number,
/// keeping the columns aligned for correlation.
fn fully_numeric_columns(raw: &RawTable) -> Vec<Vec<f64>> {
    let mut columns = vec![Vec::new(); raw.columns.len()];
    'rows: for row in &raw.rows {
        let mut parsed = Vec::with_capacity(row.len());
        for cell in row {
            match cell.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => parsed.push(v),
                _ => continue 'rows,
            }
        }
        for (column, value) in columns.iter_mut().zip(parsed) {
            column.push(value);
        }
    }
    columns
}

// ---------------------------------------------------------------------------
// Moments report
// ---------------------------------------------------------------------------

/// Skewness shape label for the classification thresholds.
pub fn skewness_label(skewness: f64) -> &'static str {
    if skewness > 0.2 {
        "right"
    } else if skewness < -0.2 {
        "left"
    } else {
        "not"
    }
}

/// Kurtosis shape label for the classification thresholds.
pub fn kurtosis_label(kurtosis: f64) -> &'static str {
    if kurtosis > 0.2 {
        "leptokurtic"
    } else if kurtosis < -0.2 {
        "platykurtic"
    } else {
        "mesokurtic"
    }
}

/// Human-readable summary of the four moments, with shape classification.
pub fn moments_report(column: &str, m: &Moments) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Statistics for '{column}':");
    let _ = writeln!(out, "  Mean: {:.2}", m.mean);
    let _ = writeln!(out, "  Std Dev: {:.2}", m.std_dev);
    let _ = writeln!(out, "  Skewness: {:.2}", m.skewness);
    let _ = writeln!(out, "  Excess Kurtosis: {:.2}", m.kurtosis);
    let _ = writeln!(
        out,
        "  Shape: {} skewed, {}",
        skewness_label(m.skewness),
        kurtosis_label(m.kurtosis)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rows: &[&[&str]]) -> RawTable {
        RawTable {
            columns: vec!["x".to_string(), "y".to_string()],
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn skewness_thresholds_are_strict() {
        assert_eq!(skewness_label(0.2), "not");
        assert_eq!(skewness_label(0.21), "right");
        assert_eq!(skewness_label(-0.2), "not");
        assert_eq!(skewness_label(-0.21), "left");
        assert_eq!(skewness_label(0.0), "not");
    }

    #[test]
    fn kurtosis_thresholds_are_strict() {
        assert_eq!(kurtosis_label(0.2), "mesokurtic");
        assert_eq!(kurtosis_label(0.21), "leptokurtic");
        assert_eq!(kurtosis_label(-0.2), "mesokurtic");
        assert_eq!(kurtosis_label(-0.21), "platykurtic");
    }

    #[test]
    fn moments_report_formats_all_lines() {
        let m = Moments {
            mean: 10.42,
            std_dev: 1.07,
            skewness: 0.86,
            kurtosis: 0.2,
        };
        let text = moments_report("alcohol", &m);
        assert!(text.contains("Statistics for 'alcohol':"));
        assert!(text.contains("Mean: 10.42"));
        assert!(text.contains("Std Dev: 1.07"));
        assert!(text.contains("Skewness: 0.86"));
        assert!(text.contains("Excess Kurtosis: 0.20"));
        assert!(text.contains("Shape: right skewed, mesokurtic"));
    }

    #[test]
    fn head_and_tail_respect_row_bounds() {
        let table = raw(&[&["11", "12"], &["13", "14"], &["15", "16"]]);
        let head = head_preview(&table, 2);
        assert!(head.contains("11"));
        assert!(head.contains("13"));
        assert!(!head.contains("15"));
        let tail = tail_preview(&table, 2);
        assert!(tail.contains("13"));
        assert!(tail.contains("15"));
        assert!(!tail.contains("11"));
    }

    #[test]
    fn describe_skips_unparseable_cells() {
        let table = raw(&[&["1", "2"], &["oops", "4"], &["3", "6"]]);
        let text = describe(&table);
        let count_line = text.lines().nth(1).unwrap();
        assert!(count_line.starts_with("count"));
        assert!(count_line.contains('2'));
        assert!(count_line.contains('3'));
    }

    #[test]
    fn correlation_table_reports_perfect_correlation() {
        let table = raw(&[&["1", "2"], &["2", "4"], &["3", "6"]]);
        let text = correlation_table(&table);
        assert!(text.contains("1.000"));
    }

    #[test]
    fn correlation_table_handles_no_numeric_rows() {
        let table = raw(&[&["a", "b"]]);
        assert_eq!(correlation_table(&table), "(no fully numeric rows)\n");
    }
}
