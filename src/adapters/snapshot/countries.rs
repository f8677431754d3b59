//! Country ranking snapshot reader
//!
//! Loads the annual country ranking CSV. The source file ships with the
//! same block of rows repeated several times, so rows are deduplicated on
//! the (Rank, Country) pair, keeping the first occurrence.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::adapters::snapshot::parse_month_value;
use crate::domain::records::{CountryAqi, MonthlySeries, MONTH_NAMES};
use crate::domain::Result;

/// Load country rankings from the snapshot CSV
pub fn load_countries(path: &Path) -> Result<Vec<CountryAqi>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut countries = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for record in reader.deserialize::<HashMap<String, String>>() {
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Skipping malformed country row");
                continue;
            }
        };

        let country = match row.get("Country").map(|c| c.trim()) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                tracing::warn!(file = %path.display(), "Skipping country row without a name");
                continue;
            }
        };

        let rank_raw = row.get("Rank").cloned().unwrap_or_default();
        if !seen.insert((rank_raw.clone(), country.clone())) {
            continue;
        }

        let mut values = [None; 12];
        for (index, month) in MONTH_NAMES.iter().enumerate() {
            values[index] = row.get(*month).and_then(|raw| parse_month_value(raw));
        }

        countries.push(CountryAqi {
            rank: rank_raw.trim().parse().ok(),
            country,
            average: row.get("2024 Avg").and_then(|raw| parse_month_value(raw)),
            months: MonthlySeries::new(values),
        });
    }

    tracing::info!(file = %path.display(), count = countries.len(), "Loaded country snapshot");
    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Rank,Country,2024 Avg,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec";

    fn write_csv(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_loads_countries() {
        let file = write_csv(&[
            "1,Bangladesh,79.9,95,88,82,75,70,65,60,62,68,74,85,92",
            "2,Pakistan,73.7,90,85,80,72,68,60,58,59,65,70,82,88",
        ]);

        let countries = load_countries(file.path()).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].country, "Bangladesh");
        assert_eq!(countries[0].rank, Some(1));
        assert_eq!(countries[0].average, Some(79.9));
        assert_eq!(countries[0].months.value(0), Some(95.0));
        assert_eq!(countries[0].months.value(11), Some(92.0));
    }

    #[test]
    fn test_deduplicates_repeated_blocks() {
        let file = write_csv(&[
            "1,Bangladesh,79.9,95,88,82,75,70,65,60,62,68,74,85,92",
            "2,Pakistan,73.7,90,85,80,72,68,60,58,59,65,70,82,88",
            "1,Bangladesh,79.9,95,88,82,75,70,65,60,62,68,74,85,92",
            "2,Pakistan,73.7,90,85,80,72,68,60,58,59,65,70,82,88",
        ]);

        let countries = load_countries(file.path()).unwrap();
        assert_eq!(countries.len(), 2);
    }

    #[test]
    fn test_missing_values_stay_absent() {
        let file = write_csv(&["14,Bahrain,--,55,--,48,,52,50,49,47,51,53,--,58"]);

        let countries = load_countries(file.path()).unwrap();
        let country = &countries[0];
        assert_eq!(country.average, None);
        assert_eq!(country.months.value(0), Some(55.0));
        assert_eq!(country.months.value(1), None);
        assert_eq!(country.months.value(3), None);
        assert!(country.effective_average() > 0.0);
    }

    #[test]
    fn test_unparseable_rank_becomes_none() {
        let file = write_csv(&["n/a,Atlantis,40,40,40,40,40,40,40,40,40,40,40,40,40"]);

        let countries = load_countries(file.path()).unwrap();
        assert_eq!(countries[0].rank, None);
        assert_eq!(countries[0].country, "Atlantis");
    }
}
