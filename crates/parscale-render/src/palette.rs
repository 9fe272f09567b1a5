//! Colours used on the charts.

use plotters::style::RGBColor;

use parscale_core::metrics::EfficiencyBand;
use parscale_report::charts::Color;

/// Backend colour of a named series colour.
#[must_use]
pub fn rgb(color: Color) -> RGBColor {
    match color {
        Color::Blue => RGBColor(31, 119, 180),
        Color::Red => RGBColor(214, 39, 40),
        Color::Green => RGBColor(44, 160, 44),
        Color::Purple => RGBColor(148, 103, 189),
        Color::Orange => RGBColor(255, 127, 14),
        Color::Brown => RGBColor(140, 86, 75),
        Color::Gray => RGBColor(127, 127, 127),
    }
}

/// Bar colour for an efficiency value.
#[must_use]
pub fn band_color(efficiency: f64) -> RGBColor {
    match EfficiencyBand::classify(efficiency) {
        EfficiencyBand::Good => rgb(Color::Green),
        EfficiencyBand::Fair => rgb(Color::Orange),
        EfficiencyBand::Poor => rgb(Color::Red),
    }
}
