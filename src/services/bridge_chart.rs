use plotters::prelude::*;
use thiserror::Error;

use crate::services::ebitda_bridge::{BridgeStepKind, EbitdaBridge};

#[derive(Error, Debug)]
pub enum BridgeChartError {
    #[error("bridge has no steps to draw")]
    EmptyBridge,
    #[error("failed to render bridge chart: {0}")]
    Plot(String),
}

/// Y axis extent in crore: from zero (or the lowest bar if negative) to 10%
/// above the tallest bar.
pub fn bridge_y_range(bridge: &EbitdaBridge) -> (f64, f64) {
    let lowest = bridge
        .steps
        .iter()
        .map(|step| step.offset_cr.min(step.top_cr()))
        .fold(0.0, f64::min);
    let highest = bridge
        .steps
        .iter()
        .map(|step| step.offset_cr.max(step.top_cr()))
        .fold(0.0, f64::max);
    let headroom = (highest - lowest).max(1.0) * 0.1;
    (lowest, highest + headroom)
}

pub fn write_bridge_chart_png(output_path: &str, bridge: &EbitdaBridge) -> Result<(), BridgeChartError> {
    if bridge.steps.is_empty() {
        return Err(BridgeChartError::EmptyBridge);
    }

    let (min_y, max_y) = bridge_y_range(bridge);
    let max_x = bridge.steps.len() as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| BridgeChartError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("EBITDA Bridge (Rs Cr)", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, min_y..max_y)
        .map_err(|e| BridgeChartError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .y_desc("EBITDA (Rs Cr)")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(bridge.steps.len())
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            bridge
                .steps
                .get(*index as usize)
                .map(|step| step.kind.label().to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| BridgeChartError::Plot(e.to_string()))?;

    let total_color = RGBColor(31, 41, 55);
    let lever_color = RGBColor(16, 185, 129);
    chart
        .draw_series(bridge.steps.iter().enumerate().map(|(idx, step)| {
            let color = match step.kind {
                BridgeStepKind::Base | BridgeStepKind::Target => total_color,
                _ => lever_color,
            };
            let mut bar = Rectangle::new(
                [(idx as i32, step.offset_cr), (idx as i32 + 1, step.top_cr())],
                color.filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))
        .map_err(|e| BridgeChartError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| BridgeChartError::Plot(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ebitda_bridge::build_ebitda_bridge;
    use crate::test_support::builtin_constants;

    #[test]
    fn y_range_starts_at_zero_and_clears_the_target() {
        let bridge = build_ebitda_bridge(&builtin_constants());
        let (min_y, max_y) = bridge_y_range(&bridge);
        assert_eq!(min_y, 0.0);
        assert!(max_y > bridge.target_cr);
    }

    #[test]
    fn empty_bridge_is_rejected_before_rendering() {
        let bridge = EbitdaBridge {
            steps: Vec::new(),
            target_cr: 0.0,
        };
        let error = write_bridge_chart_png("unused.png", &bridge).expect_err("expected empty bridge error");
        assert!(matches!(error, BridgeChartError::EmptyBridge));
    }
}
