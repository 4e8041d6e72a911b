// crates/revgeo-core/tests/fallback.rs
use revgeo_core::{CityLocator, DataSources, GeoError};
use std::path::PathBuf;
use tempfile::TempDir;

mod helpers;
use helpers::{geonames_row, london_paris, write_lines};

#[test]
fn first_readable_candidate_wins() {
    let tmp = TempDir::new().expect("tmpdir");
    let missing = tmp.path().join("nope.txt");
    let good = write_lines(tmp.path(), "good.txt", &london_paris());
    let later = write_lines(
        tmp.path(),
        "later.txt",
        &[geonames_row(1, "Tokyo", "35.6895", "139.6917", "JP")],
    );

    let locator = CityLocator::new(DataSources::new([missing, good, later]));
    // Querying Tokyo itself: `later.txt` is never consulted, London is closest.
    let hit = locator.find_nearest(35.6895, 139.6917).expect("nearest");
    assert_eq!(hit.name, "London");
    assert_eq!(locator.load_attempts(), 2);
    assert!(locator.load_error().is_none());
}

#[test]
fn empty_candidates_are_skipped() {
    let tmp = TempDir::new().expect("tmpdir");
    let good = write_lines(tmp.path(), "good.txt", &london_paris());

    let sources = DataSources::new([PathBuf::new(), good]);
    assert_eq!(sources.candidates().len(), 1);

    let locator = CityLocator::new(sources);
    assert!(locator.ensure_loaded().is_ok());
    assert_eq!(locator.load_attempts(), 1);
}

#[test]
fn all_candidates_fail_with_no_data() {
    let tmp = TempDir::new().expect("tmpdir");
    let a = tmp.path().join("a/cities500.txt");
    let b = tmp.path().join("b/cities500.txt");

    let locator = CityLocator::new(DataSources::new([a, b.clone()]));
    let err = locator.find_nearest(51.5, -0.1).unwrap_err();
    match &err {
        GeoError::NoData { last: Some(last) } => match last.as_ref() {
            GeoError::Open { path, .. } => assert_eq!(path, &b),
            other => panic!("expected open error, got {other:?}"),
        },
        other => panic!("expected NoData, got {other:?}"),
    }
    assert!(err
        .to_string()
        .starts_with("failed to load cities data from any location: open "));

    // Recorded once, never retried.
    assert!(locator.find_nearest(0.0, 0.0).is_err());
    assert_eq!(locator.load_attempts(), 2);
}

#[test]
fn no_candidates_at_all() {
    let locator = CityLocator::new(DataSources::new(Vec::<PathBuf>::new()));
    let err = locator.find_nearest(0.0, 0.0).unwrap_err();
    assert!(matches!(err, GeoError::NoData { last: None }));
    assert_eq!(err.to_string(), "failed to load cities data from any location");
}

#[test]
fn env_override_is_tried_first() {
    let tmp = TempDir::new().expect("tmpdir");
    let good = write_lines(tmp.path(), "env.txt", &london_paris());

    let sources = DataSources::with_override(Some(good.clone()));
    assert_eq!(sources.candidates()[0], good);

    let locator = CityLocator::new(sources);
    assert_eq!(locator.find_nearest(48.9, 2.3).expect("nearest").country, "FR");
    assert_eq!(locator.load_attempts(), 1);
}
