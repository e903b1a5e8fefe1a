// File: crates/evalplot-core/tests/dataset.rs
// Purpose: Loading/validation taxonomy and grouping invariants.

use std::path::{Path, PathBuf};

use evalplot_core::dataset::{distinct_epochs, group_by_attr, load_records};
use evalplot_core::RenderError;

fn write_csv(name: &str, contents: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_file_is_source_not_found() {
    let err = load_records(Path::new("target/test_out/no_such_file.csv")).unwrap_err();
    assert!(matches!(err, RenderError::SourceNotFound { .. }));
}

#[test]
fn header_only_is_empty_dataset() {
    let path = write_csv("header_only.csv", "epoch,probe_attr,loss\n");
    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, RenderError::EmptyDataset { .. }));
}

#[test]
fn non_integer_epoch_is_malformed() {
    let path = write_csv("bad_epoch.csv", "epoch,probe_attr,loss\nfirst,a,1.0\n");
    match load_records(&path).unwrap_err() {
        RenderError::MalformedEpoch { value, row } => {
            assert_eq!(value, "first");
            assert_eq!(row, 1);
        }
        other => panic!("expected MalformedEpoch, got {other}"),
    }
}

#[test]
fn non_numeric_loss_is_load_error() {
    let path = write_csv("bad_loss.csv", "epoch,probe_attr,loss\n0,a,oops\n");
    assert!(matches!(
        load_records(&path).unwrap_err(),
        RenderError::Load { .. }
    ));
}

#[test]
fn missing_column_is_load_error() {
    let path = write_csv("no_loss_column.csv", "epoch,probe_attr\n0,a\n");
    assert!(matches!(
        load_records(&path).unwrap_err(),
        RenderError::Load { .. }
    ));
}

#[test]
fn extra_columns_and_order_are_ignored() {
    let path = write_csv(
        "shuffled.csv",
        "run_id,loss,epoch,probe_attr\nr1,0.25,3,color\n",
    );
    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].epoch, 3);
    assert_eq!(records[0].probe_attr, "color");
    assert_eq!(records[0].loss, 0.25);
}

#[test]
fn groups_come_back_in_lexicographic_order() {
    let path = write_csv(
        "two_attrs.csv",
        "epoch,probe_attr,loss\n0,b,2.0\n1,b,1.5\n0,a,1.0\n1,a,0.5\n",
    );
    let records = load_records(&path).unwrap();
    let groups = group_by_attr(&records);
    let labels: Vec<&str> = groups.iter().map(|g| g.attr.as_str()).collect();
    assert_eq!(labels, ["a", "b"]);
    assert_eq!(groups[0].points, [(0, 1.0), (1, 0.5)]);
    assert_eq!(groups[1].points, [(0, 2.0), (1, 1.5)]);
    assert_eq!(distinct_epochs(&records), [0, 1]);
}

#[test]
fn out_of_order_epochs_are_sorted_per_group() {
    let path = write_csv(
        "unsorted.csv",
        "epoch,probe_attr,loss\n2,a,0.3\n0,a,1.0\n1,a,0.6\n",
    );
    let records = load_records(&path).unwrap();
    let groups = group_by_attr(&records);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].points, [(0, 1.0), (1, 0.6), (2, 0.3)]);
}

#[test]
fn duplicate_epochs_keep_row_order() {
    // Stable sort: ties between equal epochs keep the file order, and
    // duplicates are plotted as-is rather than aggregated.
    let path = write_csv(
        "duplicates.csv",
        "epoch,probe_attr,loss\n1,a,0.9\n1,a,0.8\n0,a,1.0\n",
    );
    let records = load_records(&path).unwrap();
    let groups = group_by_attr(&records);
    assert_eq!(groups[0].points, [(0, 1.0), (1, 0.9), (1, 0.8)]);
}
