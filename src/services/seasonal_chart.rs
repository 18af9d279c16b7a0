use plotters::prelude::*;
use thiserror::Error;

use crate::services::seasonal_curve::SeasonalPoint;

#[derive(Error, Debug)]
pub enum SeasonalChartError {
    #[error("seasonal curve is empty")]
    EmptyCurve,
    #[error("failed to render seasonal chart: {0}")]
    Plot(String),
}

/// Plots the farm-gate price per egg across the fiscal year with spike
/// months marked in red.
pub fn write_seasonal_chart_png(output_path: &str, curve: &[SeasonalPoint]) -> Result<(), SeasonalChartError> {
    if curve.is_empty() {
        return Err(SeasonalChartError::EmptyCurve);
    }

    let max_price = curve
        .iter()
        .map(|point| point.price_per_egg)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_price = curve
        .iter()
        .map(|point| point.price_per_egg)
        .fold(f64::INFINITY, f64::min);
    let padding = ((max_price - min_price) * 0.2).max(0.5);
    let max_x = curve.len() as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| SeasonalChartError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Seasonal Price Curve", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(-1..max_x, (min_price - padding).max(0.0)..(max_price + padding))
        .map_err(|e| SeasonalChartError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Month")
        .y_desc("Farm-gate price (Rs/egg)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(curve.len() + 1)
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            curve
                .get(*index as usize)
                .map(|point| point.month.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| SeasonalChartError::Plot(e.to_string()))?;

    let line_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            curve
                .iter()
                .enumerate()
                .map(|(idx, point)| (idx as i32, point.price_per_egg)),
            line_color.stroke_width(3),
        ))
        .map_err(|e| SeasonalChartError::Plot(e.to_string()))?;

    let spike_color = RGBColor(239, 68, 68);
    chart
        .draw_series(curve.iter().enumerate().map(|(idx, point)| {
            let color = if point.is_spike { spike_color } else { line_color };
            Circle::new((idx as i32, point.price_per_egg), 6, color.filled())
        }))
        .map_err(|e| SeasonalChartError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| SeasonalChartError::Plot(e.to_string()))?;
    Ok(())
}
