use std::collections::BTreeMap;
use std::path::Path;

use log::info;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::color::{BACKGROUND, PALETTE};
use crate::data::model::{Table, QUALITY_COLUMN};

use super::RenderError;

pub const FILE_NAME: &str = "categorical_plot.png";

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

/// Rows per quality label, ascending by label.
fn quality_counts(table: &Table) -> Result<Vec<(i64, usize)>, RenderError> {
    let quality_idx = table
        .column_index(QUALITY_COLUMN)
        .ok_or_else(|| RenderError::MissingColumn(QUALITY_COLUMN.to_string()))?;

    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for row in &table.rows {
        *counts.entry(row[quality_idx] as i64).or_insert(0) += 1;
    }
    Ok(counts.into_iter().collect())
}

/// Draw the quality distribution as a horizontal bar chart, one bar per
/// label with the count annotated at the bar's end.
pub fn render(table: &Table, output_path: &Path) -> Result<(), RenderError> {
    if table.is_empty() {
        return Err(RenderError::EmptyTable);
    }
    let counts = quality_counts(table)?;

    let max_count = counts.iter().map(|&(_, c)| c).max().unwrap_or(0) as f64;
    let q_lo = counts.first().map(|&(q, _)| q).unwrap_or(0) as f64 - 0.5;
    let q_hi = counts.last().map(|&(q, _)| q).unwrap_or(0) as f64 + 0.5;

    let root = BitMapBackend::new(output_path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&BACKGROUND)
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Quality Distribution",
            ("sans-serif", 36).into_font().color(&PALETTE[1]),
        )
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..max_count * 1.15, q_lo..q_hi)
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Count")
        .y_desc("Quality")
        .axis_desc_style(("sans-serif", 22).into_font().color(&PALETTE[2]))
        .label_style(("sans-serif", 16).into_font().color(&PALETTE[3]))
        .axis_style(PALETTE[4])
        .y_label_formatter(&|y| format!("{y:.0}"))
        .draw()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    chart
        .draw_series(counts.iter().map(|&(label, count)| {
            Rectangle::new(
                [
                    (0.0, label as f64 - 0.25),
                    (count as f64, label as f64 + 0.25),
                ],
                PALETTE[2].filled(),
            )
        }))
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    // Bar outlines.
    chart
        .draw_series(counts.iter().map(|&(label, count)| {
            Rectangle::new(
                [
                    (0.0, label as f64 - 0.25),
                    (count as f64, label as f64 + 0.25),
                ],
                PALETTE[0],
            )
        }))
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    // Count annotations at the bar ends.
    chart
        .draw_series(counts.iter().map(|&(label, count)| {
            Text::new(
                format!("{count}"),
                (count as f64 + max_count * 0.015, label as f64),
                ("sans-serif", 18)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Left, VPos::Center)),
            )
        }))
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;
    info!("wrote {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quality_table(labels: &[f64]) -> Table {
        Table {
            columns: vec!["quality".to_string()],
            rows: labels.iter().map(|&q| vec![q]).collect(),
        }
    }

    #[test]
    fn counts_rows_per_label_ascending() {
        let table = quality_table(&[5.0, 5.0, 6.0, 7.0, 7.0, 7.0]);
        let counts = quality_counts(&table).unwrap();
        assert_eq!(counts, vec![(5, 2), (6, 1), (7, 3)]);
    }

    #[test]
    fn missing_quality_column_is_an_error() {
        let table = Table {
            columns: vec!["alcohol".to_string()],
            rows: vec![vec![9.4]],
        };
        let err = quality_counts(&table).unwrap_err();
        assert!(matches!(err, RenderError::MissingColumn(_)));
    }

    #[test]
    fn empty_table_is_rejected_before_drawing() {
        let table = quality_table(&[]);
        let path = std::env::temp_dir().join("vinoscope_categorical_empty.png");
        let err = render(&table, &path).unwrap_err();
        assert!(matches!(err, RenderError::EmptyTable));
        assert!(!path.exists());
    }

    #[test]
    #[ignore = "font rendering not available in headless test environments"]
    fn renders_png_to_disk() {
        let table = quality_table(&[5.0, 5.0, 6.0, 7.0, 7.0, 7.0]);
        let path = std::env::temp_dir().join("vinoscope_categorical_ok.png");
        let _ = std::fs::remove_file(&path);
        render(&table, &path).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
