// File: crates/evalplot-core/tests/render.rs
// Purpose: End-to-end render contract: output files, boundaries, idempotence.

use std::path::PathBuf;

use evalplot_core::{render, RenderError, RenderRequest};

const TWO_SERIES: &str = "epoch,probe_attr,loss\n0,a,1.0\n1,a,0.5\n0,b,2.0\n1,b,1.5\n";

fn out_dir() -> PathBuf {
    let dir = PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn request(csv: &str, contents: &str, out: &str) -> RenderRequest {
    let dir = out_dir();
    let csv_path = dir.join(csv);
    std::fs::write(&csv_path, contents).unwrap();
    RenderRequest {
        csv_path,
        output_path: dir.join(out),
        title: "Evaluation Results".to_string(),
        theme: "light".to_string(),
    }
}

#[test]
fn renders_png_smoke() {
    let req = request("smoke.csv", TWO_SERIES, "smoke.png");
    let path = render(&req).expect("render should succeed");
    let bytes = std::fs::read(&path).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn single_row_dataset_renders() {
    let req = request("single.csv", "epoch,probe_attr,loss\n0,a,1.0\n", "single.png");
    let path = render(&req).expect("one point is enough for a chart");
    assert!(std::fs::metadata(path).unwrap().len() > 0);
}

#[test]
fn missing_source_creates_no_output() {
    let dir = out_dir();
    let req = RenderRequest {
        csv_path: dir.join("does_not_exist.csv"),
        output_path: dir.join("missing_source.png"),
        title: "Evaluation Results".to_string(),
        theme: "light".to_string(),
    };
    let err = render(&req).unwrap_err();
    assert!(matches!(err, RenderError::SourceNotFound { .. }));
    assert!(!req.output_path.exists(), "no output on failure");
}

#[test]
fn empty_dataset_creates_no_output() {
    let req = request(
        "render_header_only.csv",
        "epoch,probe_attr,loss\n",
        "render_header_only.png",
    );
    let err = render(&req).unwrap_err();
    assert!(matches!(err, RenderError::EmptyDataset { .. }));
    assert!(!req.output_path.exists(), "no output on failure");
}

#[test]
fn output_parent_directories_are_created() {
    let mut req = request("nested.csv", TWO_SERIES, "unused.png");
    req.output_path = out_dir().join("nested/deeper/chart.png");
    let _ = std::fs::remove_dir_all(out_dir().join("nested"));
    render(&req).expect("render should succeed");
    assert!(req.output_path.exists());
}

#[test]
fn identical_inputs_render_identical_pixels() {
    let req_a = request("idempotent.csv", TWO_SERIES, "idempotent_a.png");
    let mut req_b = req_a.clone();
    req_b.output_path = out_dir().join("idempotent_b.png");

    let a = render(&req_a).expect("first render");
    let b = render(&req_b).expect("second render");

    // Compare decoded pixel buffers to avoid PNG encoder variance
    let img_a = image::open(a).expect("decode a").to_rgba8();
    let img_b = image::open(b).expect("decode b").to_rgba8();
    assert_eq!(
        img_a.as_raw(),
        img_b.as_raw(),
        "same dataset should render the same pixels"
    );
}
