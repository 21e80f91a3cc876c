use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Font};

use super::{
    BarSettings, BorderSettings, ChartStyle, GridLineSettings, GridSettings, SegmentSettings, SliceSettings,
    TooltipSettings,
};

fn check_color(name: &str, color: Color) -> ChartResult<()> {
    color
        .validate()
        .map_err(|err| ChartError::InvalidConfig(format!("`{name}`: {err}")))
}

fn check_font(name: &str, font: &Font) -> ChartResult<()> {
    font.validate()
        .map_err(|err| ChartError::InvalidConfig(format!("`{name}`: {err}")))
}

fn check_non_negative(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "`{name}` must be finite and >= 0"
        )));
    }
    Ok(())
}

fn check_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "`{name}` must be finite and > 0"
        )));
    }
    Ok(())
}

pub(super) fn validate_chart_style(style: &ChartStyle) -> ChartResult<()> {
    check_color("chart.background_color", style.background_color)?;
    check_non_negative("chart.corner_radius", style.corner_radius)?;
    let padding = style.padding;
    for (name, value) in [
        ("chart.padding.top", padding.top),
        ("chart.padding.left", padding.left),
        ("chart.padding.bottom", padding.bottom),
        ("chart.padding.right", padding.right),
    ] {
        check_non_negative(name, value)?;
    }
    check_border("chart.border", &style.border)
}

fn check_border(name: &str, border: &BorderSettings) -> ChartResult<()> {
    check_non_negative(&format!("{name}.width"), border.width)?;
    if let Some(color) = border.color {
        check_color(&format!("{name}.color"), color)?;
    }
    Ok(())
}

fn validate_grid_line(name: &str, line: &GridLineSettings) -> ChartResult<()> {
    check_color(&format!("{name}.color"), line.color)?;
    check_positive(&format!("{name}.width"), line.width)
}

pub(super) fn validate_grid(grid: &GridSettings) -> ChartResult<()> {
    validate_grid_line("grid.horizontal", &grid.horizontal)?;
    validate_grid_line("grid.vertical", &grid.vertical)?;
    validate_grid_line("grid.zero_line", &grid.zero_line)
}

pub(super) fn validate_tooltip(tooltip: &TooltipSettings) -> ChartResult<()> {
    tooltip
        .metrics()
        .validate()?;
    check_color("tooltip.arrow.color", tooltip.arrow.color)?;
    check_color("tooltip.background_color", tooltip.background_color)?;
    check_border("tooltip.border", &tooltip.border)?;
    check_color("tooltip.title_color", tooltip.title_color)?;
    check_color("tooltip.value_color", tooltip.value_color)?;
    check_font("tooltip.title_font", &tooltip.title_font)?;
    check_font("tooltip.value_font", &tooltip.value_font)
}

pub(super) fn validate_bar(bar: &BarSettings) -> ChartResult<()> {
    check_positive("bar.width", bar.width)?;
    check_non_negative("bar.spacing", bar.spacing)?;
    bar.corner_radii.validate()?;
    check_color("bar.positive_color", bar.positive_color)?;
    check_color("bar.positive_selected_color", bar.positive_selected_color)?;
    check_color("bar.negative_color", bar.negative_color)?;
    check_color("bar.negative_selected_color", bar.negative_selected_color)
}

pub(super) fn validate_segment(segment: &SegmentSettings) -> ChartResult<()> {
    check_positive("segment.spacing", segment.spacing)?;
    check_color("segment.fill_color", segment.fill_color)?;
    check_positive("segment.line.width", segment.line.width)?;
    check_color("segment.line.positive_color", segment.line.positive_color)?;
    check_color("segment.line.negative_color", segment.line.negative_color)?;
    let point = &segment.point;
    check_non_negative("segment.point.diameter", point.diameter)?;
    check_positive("segment.point.border_width", point.border_width)?;
    check_color("segment.point.positive_color", point.positive_color)?;
    check_color(
        "segment.point.positive_selected_color",
        point.positive_selected_color,
    )?;
    check_color("segment.point.negative_color", point.negative_color)?;
    check_color(
        "segment.point.negative_selected_color",
        point.negative_selected_color,
    )
}

pub(super) fn validate_slice(slice: &SliceSettings) -> ChartResult<()> {
    check_color("slice.color", slice.color)?;
    check_color("slice.selected_color", slice.selected_color)?;
    check_border("slice.border", &slice.border)
}
