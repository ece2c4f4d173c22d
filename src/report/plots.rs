//! Optional SVG plots: per-column histograms, a correlation heatmap and a pair plot

use std::path::Path;

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use polars::prelude::DataFrame;

use crate::pipeline::{float_values, numeric_column_names, CorrelationMatrix};
use crate::utils::create_progress_bar;

pub const HISTOGRAM_FILE: &str = "histograms.svg";
pub const HEATMAP_FILE: &str = "correlation_heatmap.svg";
pub const PAIR_PLOT_FILE: &str = "pairplot.svg";

const HISTOGRAM_BINS: usize = 10;
const GRID_COLUMNS: usize = 5;
const PANEL_WIDTH: u32 = 320;
const PANEL_HEIGHT: u32 = 240;
const PAIR_CELL: u32 = 180;

type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Equal-width bins over `values`: returns (start, bin width, counts).
///
/// A constant column gets bins centred on its value.
pub fn histogram_bins(values: &[f64], bins: usize) -> (f64, f64, Vec<u32>) {
    let bins = bins.max(1);
    let mut counts = vec![0u32; bins];

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0, counts);
    }

    let (start, width) = if max > min {
        (min, (max - min) / bins as f64)
    } else {
        (min - 0.5, 1.0 / bins as f64)
    };

    for v in values {
        let idx = ((v - start) / width).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    (start, width, counts)
}

/// Blue-white-red palette for correlations in [-1, 1]
pub fn coolwarm(r: f64) -> RGBColor {
    const COLD: (f64, f64, f64) = (59.0, 76.0, 192.0);
    const MID: (f64, f64, f64) = (221.0, 221.0, 221.0);
    const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

    let r = r.clamp(-1.0, 1.0);
    let (from, to, t) = if r < 0.0 {
        (COLD, MID, r + 1.0)
    } else {
        (MID, WARM, r)
    };
    let lerp = |a: f64, b: f64| (a + (b - a) * t).round() as u8;

    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

/// Lowest and highest finite value, widened when the column is constant or empty
fn axis_range(values: &[Option<f64>]) -> (f64, f64) {
    let (min, max) = values
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if !min.is_finite() {
        (0.0, 1.0)
    } else if max > min {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    } else {
        (min - 0.5, max + 0.5)
    }
}

fn draw_histogram(
    panel: &Panel<'_>,
    values: &[f64],
    caption: Option<&str>,
    x_desc: Option<&str>,
    y_desc: Option<&str>,
) -> Result<()> {
    let (start, width, counts) = histogram_bins(values, HISTOGRAM_BINS);
    let end = start + width * HISTOGRAM_BINS as f64;
    let top = counts.iter().copied().max().unwrap_or(0).max(1);

    let mut builder = ChartBuilder::on(panel);
    if let Some(caption) = caption {
        builder.caption(caption, ("sans-serif", 16));
    }
    let mut chart = builder
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(36)
        .build_cartesian_2d(start..end, 0u32..top + top / 10 + 1)?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh().x_labels(5).y_labels(4);
    if let Some(desc) = x_desc {
        mesh.x_desc(desc);
    }
    if let Some(desc) = y_desc {
        mesh.y_desc(desc);
    }
    mesh.draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
        let x0 = start + width * i as f64;
        Rectangle::new([(x0, 0), (x0 + width, count)], BLUE.mix(0.6).filled())
    }))?;

    Ok(())
}

fn draw_scatter(
    panel: &Panel<'_>,
    points: &[(f64, f64)],
    x_range: (f64, f64),
    y_range: (f64, f64),
    x_desc: Option<&str>,
    y_desc: Option<&str>,
) -> Result<()> {
    let mut chart = ChartBuilder::on(panel)
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(36)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh().x_labels(3).y_labels(3);
    if let Some(desc) = x_desc {
        mesh.x_desc(desc);
    }
    if let Some(desc) = y_desc {
        mesh.y_desc(desc);
    }
    mesh.draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&point| Circle::new(point, 2, BLUE.mix(0.5).filled())),
    )?;

    Ok(())
}

/// Draw a histogram for every numeric column into one SVG grid.
///
/// Returns the number of panels drawn; nothing is written when there are no
/// numeric columns.
pub fn render_histograms(df: &DataFrame, path: &Path) -> Result<usize> {
    let names = numeric_column_names(df);
    if names.is_empty() {
        return Ok(0);
    }

    let grid_rows = names.len().div_ceil(GRID_COLUMNS);
    let size = (
        PANEL_WIDTH * GRID_COLUMNS as u32,
        PANEL_HEIGHT * grid_rows as u32,
    );

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((grid_rows, GRID_COLUMNS));

    let pb = create_progress_bar(names.len() as u64, "Drawing histograms");
    for (panel, name) in panels.iter().zip(names.iter()) {
        let values: Vec<f64> = float_values(df, name)?
            .into_iter()
            .flatten()
            .filter(|v| v.is_finite())
            .collect();
        draw_histogram(panel, &values, Some(name.as_str()), None, None)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    root.present()?;
    Ok(names.len())
}

/// Draw the correlation matrix as an annotated heatmap.
///
/// Returns `false` without writing anything when the matrix is empty.
pub fn render_correlation_heatmap(matrix: &CorrelationMatrix, path: &Path) -> Result<bool> {
    let n = matrix.columns.len();
    if n == 0 {
        return Ok(false);
    }

    let cell = 48u32;
    let size = (260 + cell * n as u32, 220 + cell * n as u32);
    let labels = &matrix.columns;
    let label_at = |v: &SegmentValue<i32>, flip: bool| -> String {
        match v {
            SegmentValue::CenterOf(i) if *i >= 0 && (*i as usize) < n => {
                let idx = if flip { n - 1 - *i as usize } else { *i as usize };
                labels[idx].clone()
            }
            _ => String::new(),
        }
    };

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Correlation matrix", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(180)
        .y_label_area_size(200)
        .build_cartesian_2d(
            (0..n as i32).into_segmented(),
            (0..n as i32).into_segmented(),
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&|v: &SegmentValue<i32>| label_at(v, false))
        .y_label_formatter(&|v: &SegmentValue<i32>| label_at(v, true))
        .draw()?;

    // Row 0 is drawn at the top
    let cells: Vec<(i32, i32, Option<f64>)> = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .map(|(i, j)| (j as i32, (n - 1 - i) as i32, matrix.values[i][j]))
        .collect();

    chart.draw_series(cells.iter().map(|&(x, y, r)| {
        let color = r.map(coolwarm).unwrap_or(RGBColor(200, 200, 200));
        Rectangle::new(
            [
                (SegmentValue::Exact(x), SegmentValue::Exact(y)),
                (SegmentValue::Exact(x + 1), SegmentValue::Exact(y + 1)),
            ],
            color.filled(),
        )
    }))?;

    chart.draw_series(cells.iter().filter_map(|&(x, y, r)| {
        r.map(|r| {
            Text::new(
                format!("{:.2}", r),
                (SegmentValue::CenterOf(x), SegmentValue::CenterOf(y)),
                ("sans-serif", 11).into_font(),
            )
        })
    }))?;

    root.present()?;
    Ok(true)
}

/// Draw a scatter matrix of every pair of numeric columns.
///
/// Panel (row, col) plots column `col` against column `row`; the diagonal
/// holds each column's histogram. Axis titles sit on the bottom row and the
/// left column only. Returns the number of columns on each side of the grid,
/// and writes nothing when there are no numeric columns.
pub fn render_pair_plot(df: &DataFrame, path: &Path) -> Result<usize> {
    let names = numeric_column_names(df);
    if names.is_empty() {
        return Ok(0);
    }

    let columns = names
        .iter()
        .map(|name| float_values(df, name))
        .collect::<Result<Vec<_>>>()?;
    let ranges: Vec<(f64, f64)> = columns.iter().map(|values| axis_range(values)).collect();

    let n = names.len();
    let side = PAIR_CELL * n as u32;
    let root = SVGBackend::new(path, (side, side)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((n, n));

    let pb = create_progress_bar((n * n) as u64, "Drawing pair plot");
    for (idx, panel) in panels.iter().enumerate() {
        let (row, col) = (idx / n, idx % n);
        let x_desc = (row == n - 1).then(|| names[col].as_str());
        let y_desc = (col == 0).then(|| names[row].as_str());

        if row == col {
            let values: Vec<f64> = columns[col]
                .iter()
                .flatten()
                .copied()
                .filter(|v| v.is_finite())
                .collect();
            draw_histogram(panel, &values, None, x_desc, y_desc)?;
        } else {
            let points: Vec<(f64, f64)> = columns[col]
                .iter()
                .zip(columns[row].iter())
                .filter_map(|(x, y)| match (x, y) {
                    (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((*x, *y)),
                    _ => None,
                })
                .collect();
            draw_scatter(panel, &points, ranges[col], ranges[row], x_desc, y_desc)?;
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    root.present()?;
    Ok(n)
}
