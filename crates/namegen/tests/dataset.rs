//! Integration tests for loading name datasets from a data directory.
//!
//! These tests write dataset files to a scratch directory and read them back
//! through `DirectorySource`, covering filtering and failure reporting.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use camino::Utf8PathBuf;
use namegen::{DatasetKind, DatasetSource, DirectorySource, Gender, NameError, NameRecord};
use rstest::{fixture, rstest};
use test_support::{unique_data_dir, write_dataset};

const FIRST_NAMES_JSON: &str = r#"[
    {"name": "Ann", "gender": "female", "weight": 1},
    {"name": "Bob", "gender": "male", "weight": 9},
    {"name": "Cleo", "gender": "female"}
]"#;

const SURNAMES_JSON: &str = r#"[
    {"name": "Lee", "weight": 1},
    {"name": "Roy"}
]"#;

#[fixture]
fn data_dir() -> Utf8PathBuf {
    let dir = unique_data_dir("dataset").expect("create data dir");
    write_dataset(&dir, "names.json", FIRST_NAMES_JSON).expect("write first names");
    write_dataset(&dir, "surnames.json", SURNAMES_JSON).expect("write surnames");
    dir
}

fn names(records: &[NameRecord]) -> Vec<&str> {
    records.iter().map(NameRecord::name).collect()
}

#[rstest]
fn loads_first_names_in_file_order(data_dir: Utf8PathBuf) {
    let source = DirectorySource::open(&data_dir).expect("open data dir");

    let records = source.load_first_names(None).expect("load first names");

    assert_eq!(names(&records), ["Ann", "Bob", "Cleo"]);
    assert_eq!(records.last().map(NameRecord::weight), Some(0));
}

#[rstest]
fn filters_first_names_by_gender(data_dir: Utf8PathBuf) {
    let source = DirectorySource::open(&data_dir).expect("open data dir");

    let female = source
        .load_first_names(Some(Gender::Female))
        .expect("load first names");
    let male = source
        .load_records(DatasetKind::FirstNames, Some(Gender::Male))
        .expect("load first names");

    assert_eq!(names(&female), ["Ann", "Cleo"]);
    assert_eq!(names(&male), ["Bob"]);
}

#[rstest]
fn loads_surnames(data_dir: Utf8PathBuf) {
    let source = DirectorySource::open(&data_dir).expect("open data dir");

    let records = source.load_surnames().expect("load surnames");

    assert_eq!(names(&records), ["Lee", "Roy"]);
    assert!(records.iter().all(|record| record.gender().is_none()));
}

#[test]
fn missing_dataset_file_is_unavailable() {
    let dir = unique_data_dir("missing-file").expect("create data dir");
    write_dataset(&dir, "names.json", FIRST_NAMES_JSON).expect("write first names");
    let source = DirectorySource::open(&dir).expect("open data dir");

    let result = source.load_surnames();

    let Err(NameError::DataUnavailable { path, .. }) = result else {
        panic!("expected DataUnavailable, got {result:?}");
    };
    assert_eq!(path, dir.join("surnames.json"));
}

#[rstest]
#[case::not_json("not json")]
#[case::object(r#"{"names": []}"#)]
#[case::bad_gender(r#"[{"name": "Sam", "gender": "other"}]"#)]
fn malformed_dataset_is_unavailable(#[case] contents: &str) {
    let dir = unique_data_dir("malformed").expect("create data dir");
    write_dataset(&dir, "names.json", contents).expect("write first names");
    let source = DirectorySource::open(&dir).expect("open data dir");

    let result = source.load_first_names(None);

    assert!(
        matches!(result, Err(NameError::DataUnavailable { .. })),
        "unexpected result: {result:?}"
    );
}

#[rstest]
fn source_reports_its_root(data_dir: Utf8PathBuf) {
    let source = DirectorySource::open(&data_dir).expect("open data dir");

    assert_eq!(source.root(), data_dir.as_path());
}
