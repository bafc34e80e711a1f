//! Chart helpers to render simulation traces to `.png` files

use std::path::Path;

use plotters::prelude::*;

use crate::error::PlotError;


const CHART_DIMENSIONS: (u32, u32) = (1000, 500);

fn padded_range(values: impl Iterator<Item = f32>) -> (f32, f32) {
    let mut minimum = f32::INFINITY;
    let mut maximum = f32::NEG_INFINITY;
    for value in values {
        minimum = minimum.min(value);
        maximum = maximum.max(value);
    }

    if !minimum.is_finite() || !maximum.is_finite() {
        return (0., 1.);
    }

    let padding = ((maximum - minimum) * 0.05).max(1e-3);

    (minimum - padding, maximum + padding)
}

fn check_series(x: &[f32], series: &[(&str, &[f32])]) -> Result<(), PlotError> {
    if series.is_empty() || x.is_empty() {
        return Err(PlotError::EmptyChart);
    }

    if series.iter().any(|(_, values)| values.len() != x.len()) {
        return Err(PlotError::MismatchedSeriesLength);
    }

    Ok(())
}

fn draw_line_chart(
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
    x: &[f32],
    series: &[(&str, &[f32])],
    x_range: (f32, f32),
) -> Result<(), PlotError> {
    let (y_min, y_max) = padded_range(
        series.iter().flat_map(|(_, values)| values.iter().cloned())
    );

    let root = BitMapBackend::new(path, CHART_DIMENSIONS).into_drawing_area();
    root.fill(&WHITE).map_err(|e| PlotError::Backend(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.0..x_range.1, y_min..y_max)
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    chart.configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    for (index, (name, values)) in series.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();

        chart.draw_series(LineSeries::new(
            x.iter().cloned().zip(values.iter().cloned()),
            &color,
        ))
        .map_err(|e| PlotError::Backend(e.to_string()))?
        .label(*name)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart.configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    root.present().map_err(|e| PlotError::Backend(e.to_string()))?;

    Ok(())
}

/// Renders one or more series over a shared x axis as a line chart,
/// the axis ranges are fitted to the data
pub fn line_chart(
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
    x: &[f32],
    series: &[(&str, &[f32])],
) -> Result<(), PlotError> {
    check_series(x, series)?;

    let x_range = padded_range(x.iter().cloned());

    draw_line_chart(path, title, x_label, y_label, x, series, x_range)
}

/// Renders one or more series over a shared x axis as a line chart clipped
/// to an explicit x range
pub fn line_chart_clipped(
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
    x: &[f32],
    series: &[(&str, &[f32])],
    x_range: (f32, f32),
) -> Result<(), PlotError> {
    check_series(x, series)?;

    draw_line_chart(path, title, x_label, y_label, x, series, x_range)
}

/// Renders XY trajectories over fixed axis ranges
pub fn xy_chart(
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
    series: &[(&str, &[(f32, f32)])],
    x_range: (f32, f32),
    y_range: (f32, f32),
) -> Result<(), PlotError> {
    if series.is_empty() {
        return Err(PlotError::EmptyChart);
    }

    let root = BitMapBackend::new(path, CHART_DIMENSIONS).into_drawing_area();
    root.fill(&WHITE).map_err(|e| PlotError::Backend(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    chart.configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    for (index, (name, points)) in series.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();

        chart.draw_series(LineSeries::new(points.iter().cloned(), &color))
            .map_err(|e| PlotError::Backend(e.to_string()))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart.configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    root.present().map_err(|e| PlotError::Backend(e.to_string()))?;

    Ok(())
}
