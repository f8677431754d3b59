//! City monthly snapshot reader
//!
//! Loads the per-city monthly AQI CSV. Months without a reading carry a
//! `--` sentinel in the source file, which maps to an absent value rather
//! than zero so averages stay honest.

use std::collections::HashMap;
use std::path::Path;

use crate::adapters::snapshot::parse_month_value;
use crate::domain::records::{CityAqi, MonthlySeries, MONTH_NAMES};
use crate::domain::Result;

/// Load city monthly series from the snapshot CSV
pub fn load_cities(path: &Path) -> Result<Vec<CityAqi>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut cities = Vec::new();

    for record in reader.deserialize::<HashMap<String, String>>() {
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Skipping malformed city row");
                continue;
            }
        };

        let city = match row.get("City").map(|c| c.trim()) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                tracing::warn!(file = %path.display(), "Skipping city row without a name");
                continue;
            }
        };

        let mut values = [None; 12];
        for (index, month) in MONTH_NAMES.iter().enumerate() {
            values[index] = row.get(*month).and_then(|raw| parse_month_value(raw));
        }

        cities.push(CityAqi {
            city,
            state: row.get("State").map(|s| s.trim().to_string()).unwrap_or_default(),
            months: MonthlySeries::new(values),
        });
    }

    tracing::info!(file = %path.display(), count = cities.len(), "Loaded city snapshot");
    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "City,State,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec";

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
    fn test_loads_cities_with_sentinel_months() {
        let file = write_csv(&[
            "Delhi,Delhi,210,195,180,160,150,120,95,90,110,170,230,240",
            "Agra,Uttar Pradesh,--,140,130,--,100,90,70,65,85,120,--,165",
        ]);

        let cities = load_cities(file.path()).unwrap();
        assert_eq!(cities.len(), 2);

        assert_eq!(cities[0].city, "Delhi");
        assert_eq!(cities[0].state, "Delhi");
        assert_eq!(cities[0].months.value(0), Some(210.0));

        assert_eq!(cities[1].months.value(0), None);
        assert_eq!(cities[1].months.value(1), Some(140.0));
        assert_eq!(cities[1].months.value(10), None);
    }

    #[test]
    fn test_sentinel_only_row_averages_to_zero() {
        let file = write_csv(&["Ghost Town,Nowhere,--,--,--,--,--,--,--,--,--,--,--,--"]);

        let cities = load_cities(file.path()).unwrap();
        assert!(!cities[0].months.has_data());
        assert_eq!(cities[0].months.average(), 0.0);
    }

    #[test]
    fn test_skips_rows_without_city() {
        let file = write_csv(&[
            ",Maharashtra,90,90,90,90,90,90,90,90,90,90,90,90",
            "Pune,Maharashtra,90,90,90,90,90,90,90,90,90,90,90,90",
        ]);

        let cities = load_cities(file.path()).unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].city, "Pune");
    }
}
