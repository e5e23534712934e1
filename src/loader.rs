use crate::config::{Config, COLUMN_COUNT};
use crate::types::DisasterRecord;
use crate::util::parse_u64_safe;
use csv::ReaderBuilder;
use std::error::Error;

/// Diagnostic counts from one load pass. Printed to the operator after
/// loading; not load-bearing for correctness.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub total_rows: usize,
    pub kept_rows: usize,
    pub skipped_rows: usize,
    pub excluded_rows: usize,
}

/// Load the disaster-incidence CSV and clean it into the base dataset.
///
/// The on-disk header row is discarded; column meaning comes from the
/// configured positional schema. Rows with fewer than nine fields or an
/// unparsable count are skipped (counted, loading continues). Rows whose
/// disaster type matches the exclusion list are dropped. An unopenable
/// source is fatal and propagates to the caller with no partial result.
pub fn load_and_clean(
    path: &str,
    config: &Config,
) -> Result<(Vec<DisasterRecord>, LoadReport), Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut total_rows = 0usize;
    let mut skipped_rows = 0usize;
    let mut excluded_rows = 0usize;
    let mut records: Vec<DisasterRecord> = Vec::new();

    for result in rdr.records() {
        total_rows += 1;
        let row = match result {
            Ok(r) => r,
            Err(_) => {
                skipped_rows += 1;
                continue;
            }
        };
        if row.len() < COLUMN_COUNT {
            skipped_rows += 1;
            continue;
        }

        let count = match parse_u64_safe(row.get(7)) {
            Some(n) => n,
            None => {
                skipped_rows += 1;
                continue;
            }
        };

        let field = |i: usize| row.get(i).unwrap_or("").trim().to_string();
        let disaster_type = field(6);
        if config.is_excluded(&disaster_type) {
            excluded_rows += 1;
            continue;
        }

        records.push(DisasterRecord {
            province_code: field(0),
            province_name: field(1),
            regency_code: field(2),
            regency_name: field(3),
            district_code: field(4),
            district_name: field(5),
            disaster_type,
            count,
            unit: field(8),
        });
    }

    let report = LoadReport {
        total_rows,
        kept_rows: records.len(),
        skipped_rows,
        excluded_rows,
    };
    Ok((records, report))
}
