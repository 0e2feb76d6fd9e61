//! Mapping from correlation values to heatmap colors.

use colorgrad::{BlendMode, Gradient, GradientBuilder, GradientBuilderError, LinearGradient};

use crate::config::HEATMAP;
use crate::domain::RgbColor;

/// Linear interpolation between two colors, one channel at a time.
/// `factor` is clamped to [0, 1]; NaN is treated as 0.
pub fn interpolate_color(from: RgbColor, to: RgbColor, factor: f64) -> RgbColor {
    let factor = if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    };
    let lerp = |a: u8, b: u8| -> u8 {
        let (a, b) = (a as f64, b as f64);
        (a + (b - a) * factor).round().clamp(0.0, 255.0) as u8
    };
    RgbColor::new(lerp(from.r, to.r), lerp(from.g, to.g), lerp(from.b, to.b))
}

/// Heatmap fill for a correlation value.
///
/// Non-negative values blend from the neutral anchor toward the positive one,
/// negative values toward the negative anchor. Values outside [-1, 1]
/// saturate at the end colors.
pub fn correlation_to_color(value: f64) -> RgbColor {
    let anchors = &HEATMAP.anchors;
    if value >= 0.0 {
        interpolate_color(anchors.neutral, anchors.positive, value)
    } else {
        interpolate_color(anchors.neutral, anchors.negative, -value)
    }
}

/// Text color that stays readable on top of `correlation_to_color(value)`.
pub fn label_text_color(value: f64) -> RgbColor {
    if value.abs() > HEATMAP.label_contrast_threshold {
        HEATMAP.light_label
    } else {
        HEATMAP.dark_label
    }
}

/// Continuous negative -> neutral -> positive gradient over the domain [-1, 1],
/// for drawing the legend bar.
pub fn legend_gradient() -> Result<LinearGradient, GradientBuilderError> {
    let anchors = &HEATMAP.anchors;
    GradientBuilder::new()
        .colors(&[
            anchors.negative.to_colorgrad(),
            anchors.neutral.to_colorgrad(),
            anchors.positive.to_colorgrad(),
        ])
        .domain(&[-1.0, 1.0])
        .mode(BlendMode::Rgb)
        .build::<LinearGradient>()
}

/// `steps` evenly spaced swatches from -1 to +1 (inclusive).
pub fn legend_swatches(steps: usize) -> Result<Vec<(f64, RgbColor)>, GradientBuilderError> {
    let grad = legend_gradient()?;
    if steps < 2 {
        return Ok(vec![(0.0, grad.at(0.0).into())]);
    }
    Ok((0..steps)
        .map(|i| {
            let value = -1.0 + 2.0 * i as f64 / (steps - 1) as f64;
            (value, grad.at(value as f32).into())
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: RgbColor, b: RgbColor) -> bool {
        a.channels()
            .iter()
            .zip(b.channels())
            .all(|(x, y)| (*x as i16 - y as i16).abs() <= 1)
    }

    #[test]
    fn anchors_map_exactly() {
        assert_eq!(correlation_to_color(0.0).to_hex(), "#ffffff");
        assert_eq!(correlation_to_color(1.0).to_hex(), "#ff0000");
        assert_eq!(correlation_to_color(-1.0).to_hex(), "#0000ff");
    }

    #[test]
    fn midpoints_round_half_up() {
        assert_eq!(correlation_to_color(0.5).to_hex(), "#ff8080");
        assert_eq!(correlation_to_color(-0.5).to_hex(), "#8080ff");
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(correlation_to_color(2.0).to_hex(), "#ff0000");
        assert_eq!(correlation_to_color(-3.5).to_hex(), "#0000ff");
        assert_eq!(correlation_to_color(1.000_000_001).to_hex(), "#ff0000");
    }

    #[test]
    fn nan_is_neutral() {
        assert_eq!(correlation_to_color(f64::NAN).to_hex(), "#ffffff");
    }

    #[test]
    fn label_contrast_switches_above_half() {
        assert_eq!(label_text_color(0.5), HEATMAP.dark_label);
        assert_eq!(label_text_color(0.51), HEATMAP.light_label);
        assert_eq!(label_text_color(-0.9), HEATMAP.light_label);
    }

    #[test]
    fn legend_runs_blue_white_red() {
        let swatches = legend_swatches(3).unwrap();
        assert_eq!(swatches.len(), 3);
        assert!(close(swatches[0].1, HEATMAP.anchors.negative));
        assert!(close(swatches[1].1, HEATMAP.anchors.neutral));
        assert!(close(swatches[2].1, HEATMAP.anchors.positive));
        assert_eq!(swatches[0].0, -1.0);
        assert_eq!(swatches[2].0, 1.0);
    }

    #[test]
    fn legend_tracks_cell_colors() {
        let grad = legend_gradient().unwrap();
        for value in [-0.75, -0.25, 0.25, 0.75] {
            let from_legend: RgbColor = grad.at(value as f32).into();
            assert!(close(from_legend, correlation_to_color(value)));
        }
    }
}
