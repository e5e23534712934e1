// Externalized dataset configuration.
//
// The CSV carries its own header row, but the program ignores it and
// assigns the canonical nine-column schema positionally. Both the schema
// and the disaster-category exclusion list live here as data so synthetic
// datasets can be tested without touching the pipeline code.
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// Number of positional columns every well-formed row must have.
pub const COLUMN_COUNT: usize = 9;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The nine canonical column names, in positional order. These override
    /// whatever header the source file contains.
    pub columns: Vec<String>,
    /// Disaster-category labels removed from the dataset at load time.
    /// Matched case-sensitively against the exact source labels.
    pub excluded_types: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            columns: [
                "kode_provinsi",
                "nama_provinsi",
                "kode_kabupaten",
                "nama_kabupaten",
                "kode_kecamatan",
                "nama_kecamatan",
                "kejadian_bencana",
                "jumlah",
                "satuan",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            excluded_types: ["Evakuasi", "Orang Hilang", "Gagal Teknologi"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// True if the given disaster-type label is on the exclusion list.
    pub fn is_excluded(&self, disaster_type: &str) -> bool {
        self.excluded_types.iter().any(|t| t == disaster_type)
    }
}

/// Load configuration from a JSON file, falling back to the built-in
/// defaults when the file does not exist.
///
/// A file that exists but cannot be parsed is an error: a half-applied
/// configuration would silently change which categories get excluded.
pub fn load_config(path: &str) -> Result<Config, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)?;
    let cfg: Config = serde_json::from_str(&raw)?;
    if cfg.columns.len() != COLUMN_COUNT {
        return Err(format!(
            "config {}: expected {} column names, found {}",
            path,
            COLUMN_COUNT,
            cfg.columns.len()
        )
        .into());
    }
    Ok(cfg)
}
