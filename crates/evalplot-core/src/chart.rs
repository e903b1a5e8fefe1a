// File: crates/evalplot-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::Axis;
use crate::grid::tick_label;
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 12.0;
const TICK_LEN: f32 = 5.0;
const MARKER_RADIUS: f32 = 3.5;
const LEGEND_PAD: f32 = 8.0;
const LEGEND_ROW: f32 = 18.0;
const LEGEND_SWATCH: f32 = 22.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, tick labels, legend) can be suppressed to keep rendered
    /// pixels platform-independent in comparisons.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Render the chart and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        // Background
        canvas.clear(opts.theme.background);

        // Paddings & plot rect
        let l = opts.insets.left as f32;
        let r = opts.width as f32 - opts.insets.right as f32;
        let t = opts.insets.top as f32;
        let b = opts.height as f32 - opts.insets.bottom as f32;

        let x_ticks = self.x_axis.tick_positions(10);
        let y_ticks = self.y_axis.tick_positions(6);

        // Scale helpers
        let xspan = (self.x_axis.max - self.x_axis.min).max(1e-9);
        let yspan = (self.y_axis.max - self.y_axis.min).max(1e-9);
        let sx = |x: f64| -> f32 { l + ((x - self.x_axis.min) / xspan) as f32 * (r - l) };
        let sy = |y: f64| -> f32 { b - ((y - self.y_axis.min) / yspan) as f32 * (b - t) };

        draw_grid(canvas, l, t, r, b, &x_ticks, &y_ticks, &sx, &sy, &opts.theme);
        draw_axes(canvas, l, t, r, b, &opts.theme);
        draw_ticks(
            canvas,
            l,
            b,
            &x_ticks,
            &y_ticks,
            &sx,
            &sy,
            &opts.theme,
            opts.draw_labels,
        );

        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &sx, &sy, s, opts.theme.series_color(i));
        }

        if opts.draw_labels {
            draw_legend(canvas, r, t, &self.series, &opts.theme);
            draw_chrome(canvas, opts, self, l, t, r);
        }

        // Snapshot and encode PNG in memory
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    ///
    /// Encoding happens in memory before anything touches the filesystem, so a
    /// failed render leaves no partial file behind.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_color(color);
    p
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = fill_paint(color);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p
}

fn sized_font(size: f32) -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(size);
    font
}

#[allow(clippy::too_many_arguments)]
fn draw_grid<FX, FY>(
    canvas: &skia::Canvas,
    l: f32,
    t: f32,
    r: f32,
    b: f32,
    x_ticks: &[f64],
    y_ticks: &[f64],
    sx: &FX,
    sy: &FY,
    theme: &Theme,
) where
    FX: Fn(f64) -> f32,
    FY: Fn(f64) -> f32,
{
    let paint = stroke_paint(theme.grid, 1.0);

    // verticals at x ticks
    for &x in x_ticks {
        let px = sx(x);
        if px < l - 0.5 || px > r + 0.5 {
            continue;
        }
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals at y ticks
    for &y in y_ticks {
        let py = sy(y);
        if py < t - 0.5 || py > b + 0.5 {
            continue;
        }
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, l: f32, t: f32, r: f32, b: f32, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.5);
    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_ticks<FX, FY>(
    canvas: &skia::Canvas,
    l: f32,
    b: f32,
    x_ticks: &[f64],
    y_ticks: &[f64],
    sx: &FX,
    sy: &FY,
    theme: &Theme,
    with_labels: bool,
) where
    FX: Fn(f64) -> f32,
    FY: Fn(f64) -> f32,
{
    let mark = stroke_paint(theme.axis_line, 1.0);
    let text = fill_paint(theme.tick);
    let font = sized_font(TICK_SIZE);

    for &x in x_ticks {
        let px = sx(x);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &mark);
        if with_labels {
            let label = tick_label(x);
            let (w, _) = font.measure_str(label.as_str(), Some(&text));
            canvas.draw_str(
                label.as_str(),
                (px - w * 0.5, b + TICK_LEN + TICK_SIZE + 2.0),
                &font,
                &text,
            );
        }
    }
    for &y in y_ticks {
        let py = sy(y);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &mark);
        if with_labels {
            let label = tick_label(y);
            let (w, _) = font.measure_str(label.as_str(), Some(&text));
            canvas.draw_str(
                label.as_str(),
                (l - TICK_LEN - w - 4.0, py + TICK_SIZE * 0.35),
                &font,
                &text,
            );
        }
    }
}

fn draw_line_series<FX, FY>(
    canvas: &skia::Canvas,
    sx: &FX,
    sy: &FY,
    series: &Series,
    color: skia::Color,
) where
    FX: Fn(f64) -> f32,
    FY: Fn(f64) -> f32,
{
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((sx(x0), sy(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((sx(x), sy(y)));
        }
        canvas.draw_path(&path, &stroke_paint(color, 2.0));
    }

    // markers at every data point, a single point still shows up
    let marker = fill_paint(color);
    for &(x, y) in data {
        canvas.draw_circle((sx(x), sy(y)), MARKER_RADIUS, &marker);
    }
}

/// Legend box in the top-right corner of the plot area, one row per series in
/// insertion order.
fn draw_legend(canvas: &skia::Canvas, r: f32, t: f32, series: &[Series], theme: &Theme) {
    if series.is_empty() {
        return;
    }
    let font = sized_font(TICK_SIZE);
    let text = fill_paint(theme.axis_label);

    let mut max_w = 0f32;
    for s in series {
        let (w, _) = font.measure_str(s.label.as_str(), Some(&text));
        if w > max_w {
            max_w = w;
        }
    }

    let box_w = LEGEND_PAD * 2.0 + LEGEND_SWATCH + 6.0 + max_w;
    let box_h = LEGEND_PAD * 2.0 + LEGEND_ROW * series.len() as f32;
    let x0 = r - box_w - 12.0;
    let y0 = t + 12.0;
    let rect = skia::Rect::from_xywh(x0, y0, box_w, box_h);

    canvas.draw_rect(rect, &fill_paint(theme.background));
    canvas.draw_rect(rect, &stroke_paint(theme.legend_frame, 1.0));

    for (i, s) in series.iter().enumerate() {
        let cy = y0 + LEGEND_PAD + LEGEND_ROW * (i as f32 + 0.5);
        let color = theme.series_color(i);
        canvas.draw_line(
            (x0 + LEGEND_PAD, cy),
            (x0 + LEGEND_PAD + LEGEND_SWATCH, cy),
            &stroke_paint(color, 2.0),
        );
        canvas.draw_circle(
            (x0 + LEGEND_PAD + LEGEND_SWATCH * 0.5, cy),
            MARKER_RADIUS,
            &fill_paint(color),
        );
        canvas.draw_str(
            s.label.as_str(),
            (x0 + LEGEND_PAD + LEGEND_SWATCH + 6.0, cy + TICK_SIZE * 0.35),
            &font,
            &text,
        );
    }
}

/// Title and axis labels.
fn draw_chrome(canvas: &skia::Canvas, opts: &RenderOptions, chart: &Chart, l: f32, t: f32, r: f32) {
    let theme = &opts.theme;
    let font = sized_font(LABEL_SIZE);
    let text = fill_paint(theme.axis_label);

    // X label centered under the tick labels
    let (w, _) = font.measure_str(chart.x_axis.label.as_str(), Some(&text));
    canvas.draw_str(
        chart.x_axis.label.as_str(),
        ((l + r) * 0.5 - w * 0.5, opts.height as f32 - 12.0),
        &font,
        &text,
    );

    // Y label above the axis, left-aligned with the surface edge
    canvas.draw_str(chart.y_axis.label.as_str(), (8.0, t - 10.0), &font, &text);

    // Title centered over the plot
    let title_font = sized_font(TITLE_SIZE);
    let title_paint = fill_paint(theme.title);
    let (tw, _) = title_font.measure_str(chart.title.as_str(), Some(&title_paint));
    canvas.draw_str(
        chart.title.as_str(),
        (opts.width as f32 * 0.5 - tw * 0.5, t - 28.0),
        &title_font,
        &title_paint,
    );
}
