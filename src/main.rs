mod color;
mod data;
mod plot;
mod report;
mod stats;

use std::path::Path;

use anyhow::Context;
use log::info;

/// Input file, expected in the current working directory.
const DATASET_FILE: &str = "winequality-red.csv";

/// Column examined in the statistical-moments report.
const ANALYSIS_COLUMN: &str = "alcohol";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let raw = data::loader::load_csv(Path::new(DATASET_FILE))
        .with_context(|| format!("loading {DATASET_FILE}"))?;

    report::preview(&raw);

    let table = data::clean::clean(&raw).context("cleaning dataset")?;

    plot::relational::render(&table, Path::new(plot::relational::FILE_NAME))
        .context("rendering relational plot")?;
    plot::statistical::render(&table, Path::new(plot::statistical::FILE_NAME))
        .context("rendering statistical plot")?;
    plot::categorical::render(&table, Path::new(plot::categorical::FILE_NAME))
        .context("rendering categorical plot")?;

    let moments = stats::moments(&table, ANALYSIS_COLUMN)
        .with_context(|| format!("analyzing column '{ANALYSIS_COLUMN}'"))?;
    print!("{}", report::moments_report(ANALYSIS_COLUMN, &moments));

    info!("analysis complete: {} rows", table.len());
    Ok(())
}
