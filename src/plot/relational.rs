use std::collections::BTreeMap;
use std::path::Path;

use log::info;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::color::{BACKGROUND, PALETTE};
use crate::data::model::{Table, QUALITY_COLUMN};

use super::RenderError;

pub const FILE_NAME: &str = "relational_plot.png";

/// Feature drawn against the quality label.
const FEATURE: &str = "alcohol";

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 500;

/// Mean of `feature` per quality label, ascending by label.
fn group_means(table: &Table, feature: &str) -> Result<Vec<(i64, f64)>, RenderError> {
    let feature_idx = table
        .column_index(feature)
        .ok_or_else(|| RenderError::MissingColumn(feature.to_string()))?;
    let quality_idx = table
        .column_index(QUALITY_COLUMN)
        .ok_or_else(|| RenderError::MissingColumn(QUALITY_COLUMN.to_string()))?;

    let mut groups: BTreeMap<i64, (f64, usize)> = BTreeMap::new();
    for row in &table.rows {
        let entry = groups.entry(row[quality_idx] as i64).or_insert((0.0, 0));
        entry.0 += row[feature_idx];
        entry.1 += 1;
    }
    Ok(groups
        .into_iter()
        .map(|(label, (sum, count))| (label, sum / count as f64))
        .collect())
}

/// Draw average alcohol content by quality as an annotated line chart.
pub fn render(table: &Table, output_path: &Path) -> Result<(), RenderError> {
    if table.is_empty() {
        return Err(RenderError::EmptyTable);
    }
    let means = group_means(table, FEATURE)?;

    let x_lo = means.first().map(|&(q, _)| q).unwrap_or(0) as f64 - 0.5;
    let x_hi = means.last().map(|&(q, _)| q).unwrap_or(0) as f64 + 0.5;
    let y_lo = means.iter().map(|&(_, m)| m).fold(f64::INFINITY, f64::min);
    let y_hi = means
        .iter()
        .map(|&(_, m)| m)
        .fold(f64::NEG_INFINITY, f64::max);
    let pad = ((y_hi - y_lo) * 0.15).max(0.5);

    let root = BitMapBackend::new(output_path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&BACKGROUND)
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Alcohol vs Quality",
            ("sans-serif", 36).into_font().color(&PALETTE[1]),
        )
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_lo..x_hi, (y_lo - pad)..(y_hi + pad))
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Quality")
        .y_desc("Alcohol (%)")
        .axis_desc_style(("sans-serif", 22).into_font().color(&PALETTE[2]))
        .label_style(("sans-serif", 16).into_font().color(&PALETTE[3]))
        .axis_style(PALETTE[4])
        .bold_line_style(PALETTE[5].mix(0.3))
        .light_line_style(PALETTE[5].mix(0.15))
        .x_label_formatter(&|x| format!("{x:.0}"))
        .draw()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            means.iter().map(|&(q, m)| (q as f64, m)),
            PALETTE[0].stroke_width(2),
        ))
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    // Square markers, value annotated below each point.
    chart
        .draw_series(PointSeries::of_element(
            means.iter().map(|&(q, m)| (q as f64, m)),
            4,
            PALETTE[0].filled(),
            &|coord, size, style| {
                EmptyElement::at(coord)
                    + Rectangle::new([(-size, -size), (size, size)], style)
                    + Text::new(
                        format!("{:.1}", coord.1),
                        (0, 8),
                        ("sans-serif", 15)
                            .into_font()
                            .color(&PALETTE[1])
                            .pos(Pos::new(HPos::Center, VPos::Top)),
                    )
            },
        ))
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;
    info!("wrote {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table(rows: &[(f64, f64)]) -> Table {
        Table {
            columns: vec!["alcohol".to_string(), "quality".to_string()],
            rows: rows.iter().map(|&(a, q)| vec![a, q]).collect(),
        }
    }

    #[test]
    fn group_means_average_per_label_ascending() {
        let table = table(&[(10.0, 6.0), (9.0, 5.0), (11.0, 5.0), (12.0, 7.0)]);
        let means = group_means(&table, "alcohol").unwrap();
        assert_eq!(means.len(), 3);
        assert_eq!(means[0].0, 5);
        assert_relative_eq!(means[0].1, 10.0);
        assert_eq!(means[1].0, 6);
        assert_relative_eq!(means[1].1, 10.0);
        assert_eq!(means[2].0, 7);
        assert_relative_eq!(means[2].1, 12.0);
    }

    #[test]
    fn missing_feature_column_is_an_error() {
        let table = Table {
            columns: vec!["quality".to_string()],
            rows: vec![vec![5.0]],
        };
        let err = group_means(&table, "alcohol").unwrap_err();
        assert!(matches!(err, RenderError::MissingColumn(_)));
    }

    #[test]
    fn empty_table_is_rejected_before_drawing() {
        let table = table(&[]);
        let path = std::env::temp_dir().join("vinoscope_relational_empty.png");
        let err = render(&table, &path).unwrap_err();
        assert!(matches!(err, RenderError::EmptyTable));
        assert!(!path.exists());
    }

    #[test]
    #[ignore = "font rendering not available in headless test environments"]
    fn renders_png_to_disk() {
        let table = table(&[(9.4, 5.0), (10.2, 6.0), (11.0, 7.0)]);
        let path = std::env::temp_dir().join("vinoscope_relational_ok.png");
        let _ = std::fs::remove_file(&path);
        render(&table, &path).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
