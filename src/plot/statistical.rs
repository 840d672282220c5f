use std::path::Path;

use log::info;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::color::{annotation_color, correlation_color, BACKGROUND, PALETTE};
use crate::data::model::Table;
use crate::stats;

use super::RenderError;

pub const FILE_NAME: &str = "statistical_plot.png";

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 800;
/// Horizontal strip reserved for the color-scale legend.
const LEGEND_WIDTH: i32 = 130;

/// Draw the pairwise correlation matrix as an annotated heatmap with a
/// color-scale legend on the right.
pub fn render(table: &Table, output_path: &Path) -> Result<(), RenderError> {
    if table.is_empty() || table.columns.is_empty() {
        return Err(RenderError::EmptyTable);
    }
    let corr = stats::correlation_matrix(&table.column_vectors());
    let k = table.columns.len();

    let root = BitMapBackend::new(output_path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&BACKGROUND)
        .map_err(|e| RenderError::Drawing(e.to_string()))?;
    let (main, legend) = root.split_horizontally(WIDTH as i32 - LEGEND_WIDTH);

    let mut chart = ChartBuilder::on(&main)
        .caption(
            "Feature Correlations",
            ("sans-serif", 36).into_font().color(&PALETTE[1]),
        )
        .margin(15)
        .x_label_area_size(160)
        .y_label_area_size(160)
        .build_cartesian_2d(0i32..k as i32, k as i32..0i32)
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    let (x_pixels, y_pixels) = chart.plotting_area().get_pixel_range();
    let cell_w = (x_pixels.end - x_pixels.start) / k as i32;
    let cell_h = (y_pixels.end - y_pixels.start) / k as i32;

    let x_names = table.columns.clone();
    let y_names = table.columns.clone();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(k)
        .y_labels(k)
        .x_label_offset(cell_w / 2)
        .y_label_offset(cell_h / 2)
        .x_label_style(
            ("sans-serif", 15)
                .into_font()
                .transform(FontTransform::Rotate90)
                .color(&PALETTE[2]),
        )
        .y_label_style(("sans-serif", 15).into_font().color(&PALETTE[2]))
        .x_label_formatter(&|x| x_names.get(*x as usize).cloned().unwrap_or_default())
        .y_label_formatter(&|y| y_names.get(*y as usize).cloned().unwrap_or_default())
        .axis_style(PALETTE[4])
        .draw()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    // Colored cells.
    chart
        .draw_series(
            (0..k)
                .flat_map(|col| (0..k).map(move |row| (col, row)))
                .map(|(col, row)| {
                    Rectangle::new(
                        [
                            (col as i32, row as i32),
                            (col as i32 + 1, row as i32 + 1),
                        ],
                        correlation_color(corr[row][col]).filled(),
                    )
                }),
        )
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    // Thin cell borders.
    chart
        .draw_series(
            (0..k)
                .flat_map(|col| (0..k).map(move |row| (col, row)))
                .map(|(col, row)| {
                    Rectangle::new(
                        [
                            (col as i32, row as i32),
                            (col as i32 + 1, row as i32 + 1),
                        ],
                        PALETTE[5],
                    )
                }),
        )
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    // Per-cell annotations; NaN cells stay blank.
    chart
        .draw_series(
            (0..k)
                .flat_map(|col| (0..k).map(move |row| (col, row)))
                .filter_map(|(col, row)| {
                    let r = corr[row][col];
                    if !r.is_finite() {
                        return None;
                    }
                    let style = ("sans-serif", 14)
                        .into_font()
                        .color(&annotation_color(correlation_color(r)))
                        .pos(Pos::new(HPos::Center, VPos::Center));
                    Some(
                        EmptyElement::at((col as i32, row as i32))
                            + Text::new(format!("{r:.2}"), (cell_w / 2, cell_h / 2), style),
                    )
                }),
        )
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    draw_legend(&legend)?;

    root.present()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;
    info!("wrote {}", output_path.display());
    Ok(())
}

/// Vertical color-scale bar mapping correlation to the heatmap ramp.
fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
) -> Result<(), RenderError> {
    let mut scale = ChartBuilder::on(area)
        .margin(20)
        .margin_top(70)
        .y_label_area_size(45)
        .build_cartesian_2d(0.0..1.0, -1.0..1.0)
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    scale
        .configure_mesh()
        .disable_x_axis()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_desc("Corr")
        .axis_desc_style(("sans-serif", 16).into_font().color(&PALETTE[2]))
        .label_style(("sans-serif", 13).into_font().color(&PALETTE[3]))
        .axis_style(PALETTE[4])
        .draw()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    scale
        .draw_series((0..200).map(|i| {
            let lo = -1.0 + i as f64 / 100.0;
            Rectangle::new(
                [(0.0, lo), (1.0, lo + 0.01)],
                correlation_color(lo + 0.005).filled(),
            )
        }))
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    Ok(())
}
