use std::path::Path;

use plotters::prelude::*;

use crate::chains::ChainNameResolver;
use crate::config::ChartOptions;
use crate::models::Point;
use crate::utils::{standard_normal_cdf, tick_label, ChartError, Histogram, TickAxis};

/// Number of histogram buckets per chart
pub const BUCKETS: usize = 50;
/// Tick counts on the duration and count axes
pub const X_TICKS: usize = 16;
pub const Y_TICKS: usize = 10;
/// 8 inches at 96 dpi
pub const CHART_SIZE_PX: u32 = 8 * 96;

const CURVE_SAMPLES: usize = 400;

/// Draw a latency histogram for one chain key and save it as a PNG at `path`.
///
/// All points are expected to share the chain key of the first one.
pub fn draw_chart(
    points: &[Point],
    path: &Path,
    names: &dyn ChainNameResolver,
    options: &ChartOptions,
) -> Result<(), ChartError> {
    let first = points.first().ok_or(ChartError::EmptyPoints)?;
    let title = format!("{}{}", first.key().display_name(names), options.title_suffix);

    let values: Vec<f64> = points.iter().map(|p| p.duration as f64).collect();
    let histogram = Histogram::new(&values, BUCKETS);
    let (x_min, x_max) = histogram.x_range();
    // Count axis starts at 0 rather than at the smallest bin count
    let y_max = histogram.max_count() as f64;
    let x_axis = TickAxis::new(x_min, x_max, X_TICKS);
    let y_axis = TickAxis::new(0.0, y_max, Y_TICKS);
    let x_ticks = x_axis.ticks().to_vec();
    let y_ticks = y_axis.ticks().to_vec();

    let root = BitMapBackend::new(path, (CHART_SIZE_PX, CHART_SIZE_PX)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Draw(format!("Failed to fill canvas: {}", e)))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", 28).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_axis, y_axis)
        .map_err(|e| ChartError::Draw(format!("Failed to build chart: {}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Duration(s)")
        .y_desc("Count")
        .x_label_formatter(&|v: &f64| tick_label(&x_ticks, *v))
        .y_label_formatter(&|v: &f64| tick_label(&y_ticks, *v))
        .draw()
        .map_err(|e| ChartError::Draw(format!("Failed to draw mesh: {}", e)))?;

    chart
        .draw_series(histogram.bins().iter().map(|bin| {
            Rectangle::new([(bin.min, 0.0), (bin.max, bin.count as f64)], GREEN.mix(0.7).filled())
        }))
        .map_err(|e| ChartError::Draw(format!("Failed to draw histogram: {}", e)))?;

    // Fixed unit normal reference, not fitted to the durations
    let step = (x_max - x_min) / CURVE_SAMPLES as f64;
    chart
        .draw_series(LineSeries::new(
            (0..=CURVE_SAMPLES).map(|i| {
                let x = x_min + step * i as f64;
                (x, standard_normal_cdf(x))
            }),
            RED.stroke_width(2),
        ))
        .map_err(|e| ChartError::Draw(format!("Failed to draw normal curve: {}", e)))?;

    root.present()
        .map_err(|e| ChartError::Draw(format!("Failed to save {}: {}", path.display(), e)))?;

    Ok(())
}
