//! CSV reader for fare rows.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, info, trace};

use crate::domain::RouteRecord;

use super::DatasetError;

/// The columns we use from one CSV row. Every other column is ignored.
#[derive(Debug, Deserialize)]
struct FareRow {
    city1: Option<String>,
    city2: Option<String>,
    airport_1: Option<String>,
    airport_2: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    fare: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    passengers: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    nsmiles: Option<f64>,
    carrier_lg: Option<String>,
}

impl FareRow {
    /// Convert to a record, or `None` if the row has no usable fare or
    /// airport codes.
    fn into_record(self) -> Option<RouteRecord> {
        let fare = self.fare.filter(|f| f.is_finite() && *f >= 0.0)?;
        let origin_airport = non_blank(self.airport_1)?;
        let destination_airport = non_blank(self.airport_2)?;

        Some(RouteRecord {
            origin_city: self.city1.unwrap_or_default(),
            destination_city: self.city2.unwrap_or_default(),
            origin_airport,
            destination_airport,
            fare,
            passengers: self.passengers,
            miles: self.nsmiles,
            carrier: non_blank(self.carrier_lg),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Records read from a dataset, plus how many rows were unusable.
#[derive(Debug, Clone, Default)]
pub struct LoadedRoutes {
    pub records: Vec<RouteRecord>,
    /// Rows dropped for a missing, non-numeric or negative fare, or a
    /// blank airport code.
    pub skipped: usize,
}

/// Read fare records from CSV data with a header row.
///
/// Fields are trimmed and rows may have fewer columns than the header;
/// missing columns read as blank.
pub fn read_routes<R: Read>(reader: R) -> Result<LoadedRoutes, DatasetError> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut loaded = LoadedRoutes::default();

    for (line, row) in rdr.deserialize::<FareRow>().enumerate() {
        match row?.into_record() {
            Some(record) => loaded.records.push(record),
            None => {
                trace!(row = line + 1, "Skipping fare row without usable fare or airports");
                loaded.skipped += 1;
            }
        }
    }

    debug!(
        records = loaded.records.len(),
        skipped = loaded.skipped,
        "Fare rows read"
    );

    Ok(loaded)
}

/// Load fare records from a CSV file.
pub fn load_routes(path: impl AsRef<Path>) -> Result<LoadedRoutes, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let loaded = read_routes(BufReader::new(file))?;

    info!(
        path = %path.display(),
        records = loaded.records.len(),
        skipped = loaded.skipped,
        "Loaded fare dataset"
    );

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Year,quarter,citymarketid_1,citymarketid_2,city1,city2,airport_1,airport_2,nsmiles,passengers,fare,carrier_lg,large_ms,fare_lg";

    fn csv_with(rows: &[&str]) -> String {
        let mut data = String::from(HEADER);
        for row in rows {
            data.push('\n');
            data.push_str(row);
        }
        data
    }

    #[test]
    fn reads_used_columns() {
        let data = csv_with(&[
            r#"2021,3,30135,33195,"Allentown/Bethlehem/Easton, PA","Tampa, FL (Metropolitan Area)",ABE,PIE,970,180,81.43,G4,1.0,81.43"#,
        ]);

        let loaded = read_routes(data.as_bytes()).unwrap();

        assert_eq!(loaded.skipped, 0);
        assert_eq!(
            loaded.records,
            vec![
                RouteRecord::new(
                    "Allentown/Bethlehem/Easton, PA",
                    "Tampa, FL (Metropolitan Area)",
                    "ABE",
                    "PIE",
                    81.43,
                )
                .with_passengers(180.0)
                .with_miles(970.0)
                .with_carrier("G4")
            ]
        );
    }

    #[test]
    fn fields_are_trimmed() {
        let data = " city1 , city2 ,airport_1,airport_2, fare \n  Boston  , Denver ,  BOS , DEN , 99.5 ";

        let loaded = read_routes(data.as_bytes()).unwrap();

        assert_eq!(
            loaded.records,
            vec![RouteRecord::new("Boston", "Denver", "BOS", "DEN", 99.5)]
        );
    }

    #[test]
    fn unusable_rows_are_skipped() {
        let data = csv_with(&[
            "2021,3,1,2,A,B,AAA,BBB,100,10,,G4,1.0,0",
            "2021,3,1,2,A,B,AAA,BBB,100,10,abc,G4,1.0,0",
            "2021,3,1,2,A,B,AAA,BBB,100,10,-5,G4,1.0,0",
            "2021,3,1,2,A,B,,BBB,100,10,50,G4,1.0,0",
            "2021,3,1,2,A,B,AAA,  ,100,10,50,G4,1.0,0",
            "2021,3,1,2,A,B,AAA,BBB,100,10,50,G4,1.0,0",
        ]);

        let loaded = read_routes(data.as_bytes()).unwrap();

        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.skipped, 5);
        assert_eq!(loaded.records[0].fare, 50.0);
    }

    #[test]
    fn blank_optional_fields_are_none() {
        let data = csv_with(&["2021,3,1,2,,B,AAA,BBB,,n/a,50,,1.0,0"]);

        let loaded = read_routes(data.as_bytes()).unwrap();
        let record = &loaded.records[0];

        assert_eq!(record.origin_city, "");
        assert_eq!(record.passengers, None);
        assert_eq!(record.miles, None);
        assert_eq!(record.carrier, None);
    }

    #[test]
    fn short_rows_are_tolerated() {
        let data = "city1,city2,airport_1,airport_2,fare,carrier_lg\nA,B,AAA,BBB,20";

        let loaded = read_routes(data.as_bytes()).unwrap();

        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.records[0].carrier, None);
    }

    #[test]
    fn missing_optional_columns() {
        let data = "airport_1,airport_2,fare\nAAA,BBB,20";

        let loaded = read_routes(data.as_bytes()).unwrap();

        assert_eq!(loaded.records, vec![RouteRecord::new("", "", "AAA", "BBB", 20.0)]);
    }

    #[test]
    fn empty_input() {
        let loaded = read_routes("".as_bytes()).unwrap();

        assert!(loaded.records.is_empty());
        assert_eq!(loaded.skipped, 0);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", csv_with(&["2021,3,1,2,A,B,AAA,BBB,100,10,50,G4,1.0,0"])).unwrap();

        let loaded = load_routes(file.path()).unwrap();

        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.records[0].carrier.as_deref(), Some("G4"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Aviation.csv");

        let err = load_routes(&path).unwrap_err();

        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("Aviation.csv"));
    }

    #[test]
    fn invalid_utf8_is_csv_error() {
        let data: &[u8] = b"airport_1,airport_2,fare\n\xff\xfe,BBB,20";

        let err = read_routes(data).unwrap_err();

        assert!(matches!(err, DatasetError::Csv(_)));
    }
}
