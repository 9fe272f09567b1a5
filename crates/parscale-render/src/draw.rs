//! Drawing planned figures onto a plotters drawing area.

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use parscale_report::charts::{
    Bounds, Callout, Figure, Marker, Panel, PlotSeries, Reference, Scale, SeriesStyle,
};
use parscale_report::interfaces::RenderError;

use crate::palette::{band_color, rgb};

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

const FONT: &str = "sans-serif";
const MARKER_SIZE: i32 = 5;

fn backend<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

/// Vertical transform of a panel: identity, or `log10` on log panels.
#[derive(Clone, Copy)]
struct YAxis {
    log: bool,
}

impl YAxis {
    fn map(self, y: f64) -> Option<f64> {
        if !self.log {
            Some(y)
        } else if y > 0.0 {
            Some(y.log10())
        } else {
            None
        }
    }

    /// Axis range with headroom for annotations.
    fn range(self, bounds: &Bounds) -> (f64, f64) {
        let (lo, hi) = bounds.y;
        if self.log {
            let (lo, hi) = (lo.log10(), hi.log10());
            let span = if hi > lo { hi - lo } else { 1.0 };
            (lo - 0.1 * span, hi + 0.15 * span)
        } else {
            let span = if hi > lo { hi - lo } else { 1.0 };
            let lo = if lo < 0.0 { lo - 0.05 * span } else { lo };
            (lo, hi + 0.12 * span)
        }
    }

    fn label(self, y: f64) -> String {
        if self.log {
            format!("{:.3}", 10f64.powf(y))
        } else {
            format!("{y:.2}")
        }
    }
}

/// Draw a whole figure and flush the backend.
pub(crate) fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    annotate: bool,
) -> Result<(), RenderError> {
    if figure.panels.is_empty() {
        return Err(RenderError::EmptyFigure(figure.stem.clone()));
    }
    root.fill(&WHITE).map_err(backend)?;

    let area = match &figure.title {
        Some(title) => root.titled(title, (FONT, 30).into_font()).map_err(backend)?,
        None => root.clone(),
    };
    let cells = area.split_evenly((figure.rows.max(1), figure.cols.max(1)));
    for (panel, cell) in figure.panels.iter().zip(&cells) {
        draw_panel(cell, panel, annotate)?;
    }

    root.present().map_err(backend)
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    annotate: bool,
) -> Result<(), RenderError> {
    let bounds = panel
        .bounds()
        .ok_or_else(|| RenderError::EmptyFigure(panel.title.clone()))?;
    let y_axis = YAxis {
        log: panel.scale == Scale::Log,
    };
    let (x_lo, x_hi) = (bounds.x.0 - 0.6, bounds.x.1 + 0.6);
    let (y_lo, y_hi) = y_axis.range(&bounds);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT, 22).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(backend)?;

    let x_fmt = |x: &f64| {
        if (x - x.round()).abs() < 1e-6 {
            format!("{x:.0}")
        } else {
            String::new()
        }
    };
    let y_fmt = |y: &f64| y_axis.label(*y);
    let ticks = panel.x_ticks();
    chart
        .configure_mesh()
        .x_labels(ticks.len().max(2) * 2)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.15))
        .draw()
        .map_err(backend)?;

    for reference in &panel.references {
        draw_reference(&mut chart, reference, &ticks, (x_lo, x_hi), y_axis)?;
    }
    for series in &panel.series {
        draw_series(&mut chart, series, y_axis)?;
    }
    if annotate {
        if let Some(annotation) = panel.annotation {
            for series in &panel.series {
                let offset = match series.style {
                    SeriesStyle::Bars { offset, .. } => offset,
                    SeriesStyle::Line { .. } => 0.0,
                };
                let labels: Vec<((f64, f64), String)> = series
                    .points
                    .iter()
                    .step_by(annotation.stride.max(1))
                    .filter_map(|&(x, y)| {
                        y_axis
                            .map(y)
                            .map(|ty| ((x + offset, ty), annotation.format.format(y)))
                    })
                    .collect();
                chart
                    .draw_series(labels.into_iter().map(|(coord, text)| {
                        EmptyElement::at(coord)
                            + Text::new(text, (-14, -18), (FONT, 13).into_font())
                    }))
                    .map_err(backend)?;
            }
        }
        draw_callouts(&mut chart, &panel.callouts, y_axis)?;
    }

    let has_legend = panel.series.iter().any(|s| s.label.is_some()) || !panel.references.is_empty();
    if has_legend {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK.mix(0.4))
            .position(SeriesLabelPosition::UpperRight)
            .label_font((FONT, 14).into_font())
            .draw()
            .map_err(backend)?;
    }
    Ok(())
}

fn draw_callouts<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    callouts: &[Callout],
    y_axis: YAxis,
) -> Result<(), RenderError> {
    let boxed = callouts.iter().filter_map(|c| {
        let ty = y_axis.map(c.at.1)?;
        let dy = if c.below { 14 } else { -34 };
        let style = (FONT, 12).into_font();
        Some(
            EmptyElement::at((c.at.0, ty))
                + Rectangle::new([(-58, dy - 3), (58, dy + 15)], WHITE.mix(0.85).filled())
                + Rectangle::new([(-58, dy - 3), (58, dy + 15)], BLACK.mix(0.5))
                + Text::new(c.text.clone(), (-54, dy), style),
        )
    });
    chart.draw_series(boxed).map_err(backend)?;
    Ok(())
}

fn draw_reference<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    reference: &Reference,
    ticks: &[f64],
    (x_lo, x_hi): (f64, f64),
    y_axis: YAxis,
) -> Result<(), RenderError> {
    let (points, label, color) = match reference {
        Reference::Horizontal { y, label, color } => {
            let Some(ty) = y_axis.map(*y) else {
                return Ok(());
            };
            (vec![(x_lo, ty), (x_hi, ty)], label, rgb(*color))
        }
        Reference::Identity { label, color } => {
            let points = ticks
                .iter()
                .filter_map(|&x| y_axis.map(x).map(|ty| (x, ty)))
                .collect();
            (points, label, rgb(*color))
        }
    };
    let style = color.mix(0.7).stroke_width(2);
    chart
        .draw_series(LineSeries::new(points, style))
        .map_err(backend)?
        .label(label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    Ok(())
}

fn draw_series<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    series: &PlotSeries,
    y_axis: YAxis,
) -> Result<(), RenderError> {
    let color = rgb(series.color);
    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .filter_map(|&(x, y)| y_axis.map(y).map(|ty| (x, ty)))
        .collect();

    match series.style {
        SeriesStyle::Line { marker, fill } => {
            if fill && !y_axis.log {
                chart
                    .draw_series(AreaSeries::new(
                        points.iter().copied(),
                        0.0,
                        color.mix(0.2).filled(),
                    ))
                    .map_err(backend)?;
            }
            let anno = chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
                .map_err(backend)?;
            if let Some(label) = &series.label {
                anno.label(label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
            }
            draw_markers(chart, &points, marker, color)
        }
        SeriesStyle::Bars {
            width,
            offset,
            banded,
        } => {
            let half = width / 2.0;
            let anno = chart
                .draw_series(series.points.iter().filter_map(|&(x, y)| {
                    let ty = y_axis.map(y)?;
                    let fill = if banded { band_color(y) } else { color };
                    let left = x + offset - half;
                    let right = x + offset + half;
                    Some(Rectangle::new([(left, 0.0), (right, ty)], fill.mix(0.8).filled()))
                }))
                .map_err(backend)?;
            if let Some(label) = &series.label {
                anno.label(label.as_str())
                    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 14, y + 5)], color.filled()));
            }
            Ok(())
        }
    }
}

fn draw_markers<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    points: &[(f64, f64)],
    marker: Marker,
    color: RGBColor,
) -> Result<(), RenderError> {
    let style = color.filled();
    let s = MARKER_SIZE;
    let pts = points.iter().copied();
    match marker {
        Marker::Circle => chart.draw_series(pts.map(|p| Circle::new(p, s, style))),
        Marker::Triangle => chart.draw_series(pts.map(|p| TriangleMarker::new(p, s + 1, style))),
        Marker::Square => chart.draw_series(
            pts.map(|p| EmptyElement::at(p) + Rectangle::new([(-s + 1, -s + 1), (s - 1, s - 1)], style)),
        ),
        Marker::Diamond => chart.draw_series(pts.map(|p| {
            EmptyElement::at(p) + Polygon::new(vec![(0, -s - 1), (s, 0), (0, s + 1), (-s, 0)], style)
        })),
    }
    .map(|_| ())
    .map_err(backend)
}
