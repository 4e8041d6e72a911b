// crates/revgeo-core/tests/helpers.rs
#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Formats a 19-column GeoNames row with the given name, coordinates and country.
pub fn geonames_row(id: u32, name: &str, lat: &str, lng: &str, country: &str) -> String {
    format!(
        "{id}\t{name}\t{name}\t\t{lat}\t{lng}\tP\tPPL\t{country}\t\t00\t\t\t\t1000\t\t10\tEtc/UTC\t2024-01-01"
    )
}

pub fn write_lines(dir: &Path, file_name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(file_name);
    let mut f = File::create(&path).expect("create dataset");
    for line in lines {
        writeln!(f, "{line}").expect("write dataset line");
    }
    path
}

pub fn london_paris() -> Vec<String> {
    vec![
        geonames_row(2643743, "London", "51.5074", "-0.1278", "GB"),
        geonames_row(2988507, "Paris", "48.8566", "2.3522", "FR"),
    ]
}
