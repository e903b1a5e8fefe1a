// File: crates/evalplot-core/tests/chart.rs
// Purpose: Chart API surface: in-memory bytes rendering and the label toggle.

use evalplot_core::{Axis, Chart, RenderOptions, Series};

fn sample_chart() -> Chart {
    let mut chart = Chart::new("Evaluation Results");
    chart.x_axis = Axis::new("Epoch", -0.1, 2.1).with_ticks(vec![0.0, 1.0, 2.0]);
    chart.y_axis = Axis::new("Average Loss", 0.0, 1.1);
    chart.add_series(Series::with_data(
        "a loss",
        vec![(0.0, 1.0), (1.0, 0.6), (2.0, 0.3)],
    ));
    chart
}

#[test]
fn render_bytes_is_png() {
    let chart = sample_chart();
    let opts = RenderOptions::default();
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn renders_without_labels() {
    // Text suppressed for platform-independent pixel comparison setups.
    let chart = sample_chart();
    let opts = RenderOptions {
        draw_labels: false,
        ..RenderOptions::default()
    };
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
