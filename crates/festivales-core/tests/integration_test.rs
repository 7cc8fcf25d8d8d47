//! Integration tests for loading festival files into an agenda.

use std::fs;

use chrono::{Month, NaiveDate};
use festivales_core::{
    load_bundled, load_path, Error, Festival, FixedClock, OnMalformed, ParseError, Style,
};
use tempfile::TempDir;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Test that a catalog file is loaded line by line
#[test]
fn test_load_catalog_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("festivales.csv");
    fs::write(
        &path,
        "Gazpatxo Rock : valencia: 28-02-2022 :1 :rock:punk: hiphop \n\
         \n\
         black sound fest:badajoz:05-02-2022:  21:rock:  blues\n",
    )
    .unwrap();

    let mut agenda: Vec<Festival> = Vec::new();
    let summary = load_path(&path, &mut agenda, OnMalformed::Abort).unwrap();

    assert_eq!(summary.loaded, 2);
    assert_eq!(agenda[0].venue(), "VALENCIA");
    assert_eq!(agenda[1].name(), "Black Sound Fest");
    assert!(agenda[1].starts_before(&agenda[0]));
    assert_eq!(agenda[1].month(), Month::February);
}

/// Test that a missing file surfaces as a resource error naming the path
#[test]
fn test_missing_file_is_resource_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.csv");

    let mut agenda: Vec<Festival> = Vec::new();
    let err = load_path(&path, &mut agenda, OnMalformed::Abort).unwrap_err();

    match err {
        Error::Resource { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected resource error, got {other}"),
    }
    assert!(agenda.is_empty());
}

/// Test that the policy decides between aborting and skipping
#[test]
fn test_malformed_line_policy() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("festivales.csv");
    fs::write(
        &path,
        "jazz nights:donostia:20-07-2022:5:jazz\nsonar:barcelona:15-06-2023:3:electronica\n",
    )
    .unwrap();

    let mut agenda: Vec<Festival> = Vec::new();
    let err = load_path(&path, &mut agenda, OnMalformed::Abort).unwrap_err();
    assert!(matches!(
        err,
        Error::Format {
            line: 1,
            source: ParseError::UnknownStyle { .. },
            ..
        }
    ));
    assert!(agenda.is_empty());

    let summary = load_path(&path, &mut agenda, OnMalformed::Skip).unwrap();
    assert_eq!((summary.loaded, summary.skipped), (1, 1));
    assert_eq!(agenda[0].styles().iter().next(), Some(&Style::Electronica));
}

/// Test rendering a bundled festival against a fixed date
#[test]
fn test_bundled_catalog_renders() {
    let mut agenda: Vec<Festival> = Vec::new();
    load_bundled(&mut agenda, OnMalformed::Abort).unwrap();

    let gazpatxo = agenda
        .iter()
        .find(|f| f.name() == "Gazpatxo Rock")
        .unwrap();
    let text = gazpatxo.render(&FixedClock(ymd(2030, 1, 1)));

    assert_eq!(
        text,
        "Gazpatxo Rock {ROCK, PUNK, HIPHOP}\n\
         VALENCIA\n\
         28 Feb 2022 - 28 Feb 2022 2022 (concluido)\n\
         ------------------------------------------------------------"
    );
}

/// Test that start comparisons are antisymmetric across the bundled catalog
#[test]
fn test_start_comparisons_are_consistent() {
    let mut agenda: Vec<Festival> = Vec::new();
    load_bundled(&mut agenda, OnMalformed::Abort).unwrap();

    for a in &agenda {
        for b in &agenda {
            assert_eq!(a.starts_before(b), b.starts_after(a));
            if a.start_date() == b.start_date() {
                assert!(!a.starts_before(b) && !a.starts_after(b));
            } else {
                assert!(a.starts_before(b) ^ a.starts_after(b));
            }
        }
    }
}
