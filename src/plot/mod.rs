/// Chart rendering: three static PNG views of the cleaned table.
///
/// ```text
///   Table ──┬─▶ relational   mean alcohol per quality, line + markers
///           ├─▶ categorical  rows per quality, horizontal bars
///           └─▶ statistical  correlation matrix, annotated heatmap
/// ```
///
/// Each view validates its inputs before a drawing backend is created, so
/// a failing render never leaves a blank or truncated image behind.
pub mod categorical;
pub mod relational;
pub mod statistical;

use thiserror::Error;

/// Failure to produce a chart image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot render from an empty table")]
    EmptyTable,

    #[error("required column '{0}' is missing")]
    MissingColumn(String),

    #[error("failed to draw chart: {0}")]
    Drawing(String),
}
