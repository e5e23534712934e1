use tabled::Tabled;

/// One cleaned row of the disaster-incidence dataset.
///
/// Records are built once by the loader and never mutated afterwards; the
/// full `Vec<DisasterRecord>` is the base dataset every filter pass starts
/// from. `unit` is descriptive only and never enters a computation.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct DisasterRecord {
    #[tabled(rename = "kode_provinsi")]
    pub province_code: String,
    #[tabled(rename = "nama_provinsi")]
    pub province_name: String,
    #[tabled(rename = "kode_kabupaten")]
    pub regency_code: String,
    #[tabled(rename = "nama_kabupaten")]
    pub regency_name: String,
    #[tabled(rename = "kode_kecamatan")]
    pub district_code: String,
    #[tabled(rename = "nama_kecamatan")]
    pub district_name: String,
    #[tabled(rename = "kejadian_bencana")]
    pub disaster_type: String,
    #[tabled(rename = "jumlah")]
    pub count: u64,
    #[tabled(rename = "satuan")]
    pub unit: String,
}

impl DisasterRecord {
    /// Project the record into the nine positional cells used by the
    /// exported report table, in schema order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.province_code.clone(),
            self.province_name.clone(),
            self.regency_code.clone(),
            self.regency_name.clone(),
            self.district_code.clone(),
            self.district_name.clone(),
            self.disaster_type.clone(),
            self.count.to_string(),
            self.unit.clone(),
        ]
    }
}

/// The three scalar metrics shown on the dashboard and embedded in the
/// exported report: total event count, distinct districts, distinct
/// disaster types. All zero for an empty filtered dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryMetrics {
    pub total_count: u64,
    pub district_count: usize,
    pub disaster_type_count: usize,
}
