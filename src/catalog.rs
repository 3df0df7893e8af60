//! Asset catalog loading
//!
//! The wizard's second step offers a fixed list of geographic assets parsed
//! from a CSV dataset. The bundled copy is compiled into the binary; a file
//! passed with `--assets` replaces it for a session.

use std::io::Cursor;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::Result;

/// Bundled dataset, compiled in so startup needs no disk or network access
const BUNDLED_DATASET: &str = include_str!("../data/assets.csv");

/// One geographic asset from the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Asset {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Type")]
    pub kind: String,
}

impl Asset {
    /// One-line label used by the selection list
    pub fn display_line(&self) -> String {
        format!(
            "{}   lat: {}   long: {}",
            self.name, self.latitude, self.longitude
        )
    }

    /// Case-insensitive match against the asset list filter
    pub fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.id.to_lowercase().contains(&needle)
            || self.kind.to_lowercase().contains(&needle)
    }
}

/// Load the dataset bundled into the binary
pub fn load_embedded() -> Result<Vec<Asset>> {
    read_assets(Cursor::new(BUNDLED_DATASET))
}

/// Load a dataset from a CSV file on disk
pub fn load_from_path(path: &Path) -> Result<Vec<Asset>> {
    let file = std::fs::File::open(path)?;
    read_assets(file)
}

/// Parse asset rows from any CSV source.
///
/// Rows keep their file order and are not deduplicated. A row that fails to
/// deserialize is skipped with a warning so one bad line cannot take down
/// the whole catalog.
fn read_assets<R: std::io::Read>(source: R) -> Result<Vec<Asset>> {
    let mut reader = csv::Reader::from_reader(source);
    let mut assets = Vec::new();
    for (index, row) in reader.deserialize::<Asset>().enumerate() {
        match row {
            Ok(asset) => assets.push(asset),
            // header row is line 1, so the first data row is line 2
            Err(err) => warn!("skipping dataset row {}: {err}", index + 2),
        }
    }
    Ok(assets)
}
