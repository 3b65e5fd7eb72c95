//! Demographics CSV loading.
//!
//! Builds the city-name index from the CSV and records a header inventory
//! along the way. Header names are kept verbatim apart from the byte-order
//! mark on the first column; duplicates are reported, never renamed.

use crate::config::{CITY_KEY_COLUMNS, FOREIGN_BORN_KEY, FOREIGN_BORN_TOTAL_KEY, FOREIGN_COLUMN};
use crate::domain::{DemographicRow, Demographics, DemographicsIndex, HeaderReport};
use crate::error::{InputKind, MergeError, MergeResult};
use crate::utils::{read_utf8_file, UTF8_BOM};
use csv::{ReaderBuilder, StringRecord};
use std::collections::BTreeMap;
use std::path::Path;

pub fn load_demographics(path: &Path) -> MergeResult<Demographics> {
    let content = read_utf8_file(path)?;
    parse_demographics(&content, path)
}

pub fn parse_demographics(content: &str, path: &Path) -> MergeResult<Demographics> {
    // A leading BOM can only sit in front of the header line.
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let mut reader =
        ReaderBuilder::new().has_headers(true).flexible(true).from_reader(content.as_bytes());

    let raw_headers = reader.headers().map_err(|e| parse_error(path, &e))?.clone();
    let headers = inspect_headers(clean_headers(&raw_headers))?;

    let city_idx = column_position(&headers.columns, &headers.city_column);
    let foreign_idx = headers.foreign_index();

    let mut index = DemographicsIndex::new();
    for result in reader.records() {
        let record = result.map_err(|e| parse_error(path, &e))?;

        let city = city_idx.and_then(|i| record.get(i)).unwrap_or("").trim();
        if city.is_empty() {
            continue;
        }

        let mut row = DemographicRow::new();
        for (i, name) in headers.columns.iter().enumerate() {
            row.insert(name, record.get(i).unwrap_or(""));
        }
        if let Some(i) = foreign_idx {
            let foreign = record.get(i).unwrap_or("");
            row.insert(FOREIGN_BORN_KEY, foreign);
            row.insert(FOREIGN_BORN_TOTAL_KEY, foreign);
        }

        index.insert(city.to_string(), row);
    }

    tracing::debug!("Loaded {} demographic records from {}", index.len(), path.display());
    Ok(Demographics { index, headers })
}

/// Header names with every leading BOM removed from the first entry only.
pub fn clean_headers(raw: &StringRecord) -> Vec<String> {
    raw.iter()
        .enumerate()
        .map(|(i, name)| {
            if i == 0 {
                name.trim_start_matches(UTF8_BOM).to_string()
            } else {
                name.to_string()
            }
        })
        .collect()
}

/// Resolve the key and foreign-born columns and build the header inventory.
pub fn inspect_headers(columns: Vec<String>) -> MergeResult<HeaderReport> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for name in &columns {
        *counts.entry(name.clone()).or_default() += 1;
    }
    let duplicates: BTreeMap<String, usize> =
        counts.into_iter().filter(|(_, count)| *count > 1).collect();
    for (name, count) in &duplicates {
        tracing::warn!("Duplicate column name '{}' appears {} times", name, count);
    }

    let Some(city_column) =
        CITY_KEY_COLUMNS.into_iter().find(|candidate| columns.iter().any(|c| c == candidate))
    else {
        return Err(MergeError::Schema { available: columns });
    };

    let foreign_indices: Vec<usize> = positions(&columns, |c| c == FOREIGN_COLUMN);
    let mut foreign_candidates = Vec::new();
    match foreign_indices.as_slice() {
        [] => {
            tracing::warn!("Could not find '{}' column in CSV", FOREIGN_COLUMN);
            foreign_candidates = positions(&columns, |c| {
                let lower = c.to_lowercase();
                lower.contains("foreign") || lower.contains("born")
            });
        }
        [_] => {}
        [first, ..] => tracing::warn!(
            "Found {} columns named '{}' at indices {:?}; using index {}",
            foreign_indices.len(),
            FOREIGN_COLUMN,
            foreign_indices,
            first
        ),
    }

    Ok(HeaderReport {
        city_column: city_column.to_string(),
        total_columns: positions(&columns, |c| c.contains("Total")),
        estimate_columns: positions(&columns, |c| c.contains("Estimate")),
        columns,
        duplicates,
        foreign_indices,
        foreign_candidates,
    })
}

fn positions(columns: &[String], pred: impl Fn(&str) -> bool) -> Vec<usize> {
    columns.iter().enumerate().filter(|(_, c)| pred(c)).map(|(i, _)| i).collect()
}

fn column_position(columns: &[String], name: &str) -> Option<usize> {
    columns.iter().position(|c| c == name)
}

fn parse_error(path: &Path, err: &csv::Error) -> MergeError {
    MergeError::Parse { kind: InputKind::Csv, path: path.to_path_buf(), message: err.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(content: &str) -> Demographics {
        parse_demographics(content, Path::new("demographics.csv")).expect("parse")
    }

    #[test]
    fn test_bom_stripped_from_first_header_only() {
        let demo = parse("\u{feff}CDTFA_CITY, Other ,Population\nAnytown,3,\u{feff}10\n");
        assert_eq!(demo.headers.columns, vec!["CDTFA_CITY", " Other ", "Population"]);
        let row = &demo.index["Anytown"];
        assert_eq!(row.get(" Other "), Some("3"));
        assert_eq!(row.get("Population"), Some("\u{feff}10"));
    }

    #[test]
    fn test_bom_inside_later_header_is_kept() {
        let demo = parse("CDTFA_CITY,\u{feff}Native\nAnytown,1\n");
        assert_eq!(demo.headers.columns[1], "\u{feff}Native");
    }

    #[test]
    fn test_prefers_cdtfa_city_over_city_name() {
        let demo = parse("City_Name,CDTFA_CITY,Population\nAlpha,Beta,5\n");
        assert_eq!(demo.headers.city_column, "CDTFA_CITY");
        assert!(demo.index.contains_key("Beta"));
        assert!(!demo.index.contains_key("Alpha"));
    }

    #[test]
    fn test_falls_back_to_city_name() {
        let demo = parse("City_Name,Population\n  Anytown  ,5\n");
        assert_eq!(demo.headers.city_column, "City_Name");
        assert_eq!(demo.index["Anytown"].get("City_Name"), Some("  Anytown  "));
    }

    #[test]
    fn test_missing_city_column_is_schema_error() {
        let err = parse_demographics("Name,Population\nA,1\n", Path::new("d.csv")).unwrap_err();
        match err {
            MergeError::Schema { available } => assert_eq!(available, vec!["Name", "Population"]),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_city_rows_skipped() {
        let demo = parse("CDTFA_CITY,Population\n   ,5\nAnytown,6\n,7\n");
        assert_eq!(demo.index.len(), 1);
    }

    #[test]
    fn test_last_duplicate_city_wins() {
        let demo = parse("CDTFA_CITY,Population\nAnytown,5\n Anytown ,6\n");
        assert_eq!(demo.index.len(), 1);
        assert_eq!(demo.index["Anytown"].get("Population"), Some("6"));
    }

    #[test]
    fn test_foreign_copied_into_derived_keys() {
        let demo = parse(
            "CDTFA_CITY,Foreign_Born,Foreign Born - Total Pop,Foreign\nAnytown,1,2,50\n",
        );
        let row = &demo.index["Anytown"];
        assert_eq!(row.get("Foreign_Born"), Some("50"));
        assert_eq!(row.get("Foreign Born - Total Pop"), Some("50"));
        assert_eq!(row.get("Foreign"), Some("50"));
    }

    #[test]
    fn test_first_foreign_column_is_authoritative() {
        let demo = parse("CDTFA_CITY,Foreign,Native,Foreign\nAnytown,50,10,70\n");
        assert_eq!(demo.headers.foreign_indices, vec![1, 3]);
        assert_eq!(demo.headers.duplicates.get("Foreign"), Some(&2));
        let row = &demo.index["Anytown"];
        assert_eq!(row.get("Foreign_Born"), Some("50"));
        assert_eq!(row.get("Foreign Born - Total Pop"), Some("50"));
    }

    #[test]
    fn test_missing_foreign_lists_candidates() {
        let demo = parse("CDTFA_CITY,Foreign-born Pop,Native Born,Population\nAnytown,1,2,3\n");
        assert_eq!(demo.headers.foreign_index(), None);
        assert_eq!(demo.headers.foreign_candidates, vec![1, 2]);
        let row = &demo.index["Anytown"];
        assert_eq!(row.get("Foreign_Born"), None);
    }

    #[test]
    fn test_total_and_estimate_inventory() {
        let demo = parse("CDTFA_CITY,Total Pop,Estimate Total,Native\nA,1,2,3\n");
        assert_eq!(demo.headers.total_columns, vec![1, 2]);
        assert_eq!(demo.headers.estimate_columns, vec![2]);
    }

    #[test]
    fn test_short_rows_yield_empty_cells() {
        let demo = parse("CDTFA_CITY,Population,Foreign\nAnytown,5\n");
        let row = &demo.index["Anytown"];
        assert_eq!(row.get("Population"), Some("5"));
        assert_eq!(row.get("Foreign"), Some(""));
        assert_eq!(row.get("Foreign_Born"), Some(""));
    }

    #[test]
    fn test_load_from_disk_with_bom_bytes() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("demographics.csv");
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice("CDTFA_CITY,Population\nSan José,\"1,234\"\n".as_bytes());
        fs::write(&path, bytes).expect("write");

        let demo = load_demographics(&path).expect("load");
        assert_eq!(demo.headers.columns[0], "CDTFA_CITY");
        assert_eq!(demo.index["San José"].get("Population"), Some("1,234"));
    }
}
