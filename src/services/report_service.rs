use std::path::PathBuf;

use tracing::{info, warn};

use crate::chains::ChainNameResolver;
use crate::config::ReportOptions;
use crate::services::{chart_service, loader_service};
use crate::utils::ChartError;

/// Outcome of a report run
#[derive(Debug, Default)]
pub struct ReportSummary {
    pub rendered: Vec<PathBuf>,
    pub failed: usize,
}

/// Load the data file and draw one chart per chain key.
///
/// Only a failure to load the input is returned as an error; a chart that
/// fails to draw is logged and the remaining charts are still drawn.
pub fn show(
    options: &ReportOptions,
    names: &dyn ChainNameResolver,
) -> Result<ReportSummary, ChartError> {
    let groups = loader_service::load_file(&options.file, options.policy)?;
    info!("Loaded {} chart groups from {}", groups.len(), options.file.display());

    let mut summary = ReportSummary::default();
    for (key, points) in &groups {
        let name = key.display_name(names);
        info!(chain = %name, direction = %key.direction, points = points.len(), "Drawing for chain");

        let output = options.out_dir.join(format!("{}-{}.png", name, options.path));
        match chart_service::draw_chart(points, &output, names, &options.chart) {
            Ok(()) => summary.rendered.push(output),
            Err(e) => {
                warn!(chain = %name, "Draw chart failed: {}", e);
                summary.failed += 1;
            }
        }
    }

    info!(
        "Finished: {} charts written, {} failed",
        summary.rendered.len(),
        summary.failed
    );
    Ok(summary)
}
