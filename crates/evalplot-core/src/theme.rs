// File: crates/evalplot-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_frame: skia::Color,
    pub series_palette: [skia::Color; 6],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 225, 225, 232),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 20, 20, 30),
            legend_frame: skia::Color::from_argb(255, 170, 170, 180),
            series_palette: [
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 220, 110, 40),
                skia::Color::from_argb(255, 40, 160, 90),
                skia::Color::from_argb(255, 200, 60, 60),
                skia::Color::from_argb(255, 140, 90, 190),
                skia::Color::from_argb(255, 120, 110, 100),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_frame: skia::Color::from_argb(255, 90, 90, 100),
            series_palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 150, 70),
                skia::Color::from_argb(255, 60, 200, 130),
                skia::Color::from_argb(255, 240, 100, 100),
                skia::Color::from_argb(255, 180, 130, 240),
                skia::Color::from_argb(255, 200, 200, 120),
            ],
        }
    }

    /// Color for the `i`-th series; cycles when there are more series than
    /// palette entries.
    pub fn series_color(&self, i: usize) -> skia::Color {
        self.series_palette[i % self.series_palette.len()]
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
