//! City-table ingestion collaborator.
//!
//! The solvers consume a prepared `(name, coordinate)` slice and do no
//! parsing themselves. This module covers the common external format:
//! a header line followed by `name,latitude,longitude` rows.

use std::path::Path;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// Parses a delimited city table.
///
/// The first line is a header and is skipped. Each following non-empty
/// line must have exactly three comma-separated fields: name, latitude
/// in degrees, longitude in degrees. Fields are trimmed.
///
/// # Errors
/// `Config` on a malformed row or a non-numeric coordinate. Coordinate
/// *range* checking is left to [`CityGraph`](crate::CityGraph)
/// construction, which validates whatever table it is handed.
pub fn parse_city_table(data: &str) -> Result<Vec<(String, GeoPoint)>> {
    let mut cities = Vec::new();
    for (lineno, line) in data.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(',');
        let (name, lat, lon) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(lat), Some(lon), None) => (name, lat, lon),
            _ => {
                return Err(Error::config(format!(
                    "line {}: expected 3 comma-separated fields, got {line:?}",
                    lineno + 1
                )))
            }
        };
        let lat: f64 = parse_coord(lat, "latitude", lineno)?;
        let lon: f64 = parse_coord(lon, "longitude", lineno)?;
        cities.push((name.trim().to_owned(), GeoPoint::new(lat, lon)));
    }
    Ok(cities)
}

fn parse_coord(field: &str, which: &str, lineno: usize) -> Result<f64> {
    field.trim().parse().map_err(|_| {
        Error::config(format!(
            "line {}: {which} {field:?} is not a number",
            lineno + 1
        ))
    })
}

/// Reads and parses a city table from a file.
pub fn read_city_file<P: AsRef<Path>>(path: P) -> Result<Vec<(String, GeoPoint)>> {
    let data = std::fs::read_to_string(path)?;
    parse_city_table(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
city,lat,lon
Paris, 48.8566, 2.3522
Marseille, 43.2965, 5.3698

Lyon, 45.764, 4.8357
";

    #[test]
    fn test_parse_table() {
        let cities = parse_city_table(TABLE).unwrap();
        assert_eq!(cities.len(), 3);
        assert_eq!(cities[0].0, "Paris");
        assert!((cities[0].1.lat - 48.8566).abs() < 1e-9);
        assert!((cities[2].1.lon - 4.8357).abs() < 1e-9);
    }

    #[test]
    fn test_header_is_skipped() {
        let cities = parse_city_table("name,lat,lon\nA,1.0,2.0\n").unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].0, "A");
    }

    #[test]
    fn test_wrong_field_count() {
        let result = parse_city_table("h\nA,1.0\n");
        assert!(matches!(result, Err(Error::Config(_))));
        let result = parse_city_table("h\nA,1.0,2.0,3.0\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_non_numeric_coordinate() {
        let result = parse_city_table("h\nA,north,2.0\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
