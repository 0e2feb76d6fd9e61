//! Heatmap color configuration

use crate::domain::RgbColor;

pub struct HeatmapAnchors {
    /// Color at correlation -1
    pub negative: RgbColor,
    /// Color at correlation 0
    pub neutral: RgbColor,
    /// Color at correlation +1
    pub positive: RgbColor,
}

pub struct HeatmapConfig {
    pub anchors: HeatmapAnchors,
    /// Cells with |correlation| above this get light label text
    pub label_contrast_threshold: f64,
    pub light_label: RgbColor,
    pub dark_label: RgbColor,
    /// Number of swatches drawn for the legend bar
    pub legend_steps: usize,
}

pub const HEATMAP: HeatmapConfig = HeatmapConfig {
    anchors: HeatmapAnchors {
        negative: RgbColor::new(0x00, 0x00, 0xff), // Blue
        neutral: RgbColor::new(0xff, 0xff, 0xff),  // White
        positive: RgbColor::new(0xff, 0x00, 0x00), // Red
    },
    label_contrast_threshold: 0.5,
    light_label: RgbColor::new(0xff, 0xff, 0xff),
    dark_label: RgbColor::new(0x00, 0x00, 0x00),
    legend_steps: 21,
};
