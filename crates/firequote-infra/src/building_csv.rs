//! CSV loader for floor lists (simple format)

use std::path::Path;

use firequote_domain::model::{Floor, Unit, UsageCategory};
use firequote_types::{Error, Result};

/// Load floors from a simple CSV file
///
/// Expected columns (header optional, auto-detected):
/// floor_no, area, unit, usage
///
/// Malformed rows are skipped; an empty file is an error.
pub fn load_floors_from_csv(path: &Path) -> Result<Vec<Floor>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::CsvLoader(format!("Failed to read CSV file: {}", e)))?;

    let mut floors = Vec::new();
    let mut first = true;
    for record in reader.records() {
        let record = record.map_err(|e| Error::CsvLoader(e.to_string()))?;
        if first {
            first = false;
            if looks_like_header(&record) {
                continue;
            }
        }
        if let Some(floor) = parse_record(&record) {
            floors.push(floor);
        }
    }

    if floors.is_empty() {
        return Err(Error::CsvLoader("CSV file contains no floors".to_string()));
    }
    Ok(floors)
}

fn looks_like_header(record: &csv::StringRecord) -> bool {
    record.iter().any(|field| {
        let field = field.to_lowercase();
        field.contains("floor") || field.contains("area") || field.contains("usage")
    })
}

fn parse_record(record: &csv::StringRecord) -> Option<Floor> {
    if record.len() < 2 {
        return None;
    }
    let number: u32 = record.get(0)?.parse().ok()?;
    let raw_area: f64 = record.get(1)?.parse().ok()?;
    let unit = match record.get(2) {
        Some(field) if !field.is_empty() => field.parse::<Unit>().ok()?,
        _ => Unit::Meters,
    };
    let usage = match record.get(3) {
        Some(field) if !field.is_empty() => UsageCategory::from_tag(field).ok()?,
        _ => return None,
    };

    Some(Floor {
        number,
        raw_area,
        unit,
        usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_with_header() {
        let file = write_csv("floor_no,area,unit,usage\n1,250,meters,office\n2,80,meters,kitchen\n");
        let floors = load_floors_from_csv(file.path()).unwrap();
        assert_eq!(floors.len(), 2);
        assert_eq!(floors[0].number, 1);
        assert_eq!(floors[0].raw_area, 250.0);
        assert_eq!(floors[1].usage, UsageCategory::Kitchen);
    }

    #[test]
    fn test_load_without_header() {
        let file = write_csv("1,1000,feet,storage\n");
        let floors = load_floors_from_csv(file.path()).unwrap();
        assert_eq!(floors.len(), 1);
        assert_eq!(floors[0].unit, Unit::Feet);
        assert_eq!(floors[0].usage, UsageCategory::Storage);
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let file = write_csv("1,250,meters,office\nnot-a-number,x\n2,80,meters,kitchen\n");
        let floors = load_floors_from_csv(file.path()).unwrap();
        assert_eq!(floors.len(), 2);
    }

    #[test]
    fn test_empty_file_is_error() {
        let file = write_csv("");
        assert!(load_floors_from_csv(file.path()).is_err());
    }

    #[test]
    fn test_unknown_usage_maps_to_unknown() {
        let file = write_csv("1,120,meters,atrium\n");
        let floors = load_floors_from_csv(file.path()).unwrap();
        assert_eq!(floors[0].usage, UsageCategory::Unknown);
    }
}
