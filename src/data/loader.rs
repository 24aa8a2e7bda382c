//! CSV Data Loader Module
//! Reads launch records from CSV with Polars and builds the immutable dataset.

use crate::config::ColumnMapping;
use crate::data::{Dataset, LaunchRecord};
use log::{debug, info, warn};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing column: {0}")]
    MissingColumn(String),
    #[error("No usable rows in data")]
    Empty,
}

/// Builds a [`Dataset`] from CSV sources.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load a CSV file using Polars.
    pub fn load_csv(path: &Path, columns: &ColumnMapping) -> Result<Dataset, LoaderError> {
        info!("Loading launch records from {}", path.display());

        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        Self::from_dataframe(&df, columns)
    }

    /// Parse CSV text already held in memory.
    pub fn read_csv(bytes: Vec<u8>, columns: &ColumnMapping) -> Result<Dataset, LoaderError> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;

        Self::from_dataframe(&df, columns)
    }

    /// Extract records from a loaded DataFrame.
    ///
    /// Rows without a site or outcome are skipped. Payloads that do not parse
    /// as finite numbers are kept as missing.
    pub fn from_dataframe(df: &DataFrame, columns: &ColumnMapping) -> Result<Dataset, LoaderError> {
        let site_col = Self::column(df, &columns.site)?.cast(&DataType::String)?;
        let payload_col = Self::column(df, &columns.payload_mass)?.cast(&DataType::Float64)?;
        let outcome_col = Self::column(df, &columns.outcome)?.cast(&DataType::Int64)?;
        let booster_col = Self::column(df, &columns.booster_category)?.cast(&DataType::String)?;

        let sites = site_col.str()?;
        let payloads = payload_col.f64()?;
        let outcomes = outcome_col.i64()?;
        let boosters = booster_col.str()?;

        let mut records = Vec::with_capacity(df.height());
        let mut skipped = 0usize;

        for i in 0..df.height() {
            let (Some(site), Some(outcome)) = (sites.get(i), outcomes.get(i)) else {
                skipped += 1;
                continue;
            };
            if site.is_empty() {
                skipped += 1;
                continue;
            }

            records.push(LaunchRecord::new(
                site,
                payloads.get(i),
                outcome,
                boosters.get(i).unwrap_or_default(),
            ));
        }

        if skipped > 0 {
            warn!("Skipped {} rows without site or outcome", skipped);
        }
        if records.is_empty() {
            return Err(LoaderError::Empty);
        }

        let missing_payload = records.iter().filter(|r| r.payload_mass_kg.is_none()).count();
        if missing_payload > 0 {
            debug!("{} rows have no usable payload mass", missing_payload);
        }

        let dataset = Dataset::new(records);
        info!(
            "Loaded {} launch records across {} sites",
            dataset.len(),
            dataset.sites().len()
        );
        Ok(dataset)
    }

    fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, LoaderError> {
        df.column(name)
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525,F9 v1.0  B0005,v1.0
3,VAFB SLC-4E,1,,F9 FT B1029,FT
4,KSC LC-39A,1,3136,F9 FT B1031,FT
5,KSC LC-39A,0,n/a,F9 B4 B1040,B4
";

    fn load(csv: &str) -> Result<Dataset, LoaderError> {
        DatasetLoader::read_csv(csv.as_bytes().to_vec(), &ColumnMapping::default())
    }

    #[test]
    fn reads_all_rows_in_order() {
        let ds = load(CSV).unwrap();
        assert_eq!(ds.len(), 5);
        assert_eq!(ds.sites(), vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
        assert_eq!(ds.records()[3].payload_mass_kg, Some(3136.0));
        assert_eq!(ds.records()[3].outcome, 1);
        assert_eq!(ds.records()[3].booster_category, "FT");
    }

    #[test]
    fn unparsable_payloads_become_missing() {
        let ds = load(CSV).unwrap();
        assert_eq!(ds.records()[2].payload_mass_kg, None);
        assert_eq!(ds.records()[4].payload_mass_kg, None);
        let bounds = ds.payload_bounds().unwrap();
        assert_eq!(bounds.min, 0.0);
        assert_eq!(bounds.max, 3136.0);
    }

    #[test]
    fn rows_without_site_are_skipped() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   ,1,100,FT\n\
                   KSC LC-39A,1,200,FT\n";
        let ds = load(csv).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records()[0].site, "KSC LC-39A");
    }

    #[test]
    fn rows_without_outcome_are_skipped() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   KSC LC-39A,,100,FT\n\
                   KSC LC-39A,1,200,FT\n\
                   VAFB SLC-4E,,300,FT\n";
        let ds = load(csv).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records()[0].payload_mass_kg, Some(200.0));
        assert_eq!(ds.sites(), vec!["KSC LC-39A"]);
    }

    #[test]
    fn site_and_booster_values_are_kept_verbatim() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   \"KSC LC-39A \",1,200,\" FT\"\n\
                   KSC LC-39A,0,300,FT\n";
        let ds = load(csv).unwrap();
        assert_eq!(ds.sites(), vec!["KSC LC-39A ", "KSC LC-39A"]);
        assert_eq!(ds.records()[0].booster_category, " FT");
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Launch Site,class\nKSC LC-39A,1\n";
        match load(csv) {
            Err(LoaderError::MissingColumn(name)) => assert_eq!(name, "Payload Mass (kg)"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn no_usable_rows_is_empty() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n,1,100,FT\n";
        assert!(matches!(load(csv), Err(LoaderError::Empty)));
    }

    #[test]
    fn custom_column_mapping() {
        let csv = "site,ok,kg,booster\nLC-1,1,10.5,FT\n";
        let columns = ColumnMapping {
            site: "site".into(),
            payload_mass: "kg".into(),
            outcome: "ok".into(),
            booster_category: "booster".into(),
        };
        let ds = DatasetLoader::read_csv(csv.as_bytes().to_vec(), &columns).unwrap();
        assert_eq!(ds.records()[0].payload_mass_kg, Some(10.5));
    }
}
