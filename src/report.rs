// Report assembly and page-oriented rendering.
//
// The export is built in two steps: first an ordered list of blocks
// (title, headings, a narrative summary paragraph, the data table), then
// a renderer that lays the blocks out into fixed-size pages. Pages are separated by form feeds
// and each carries a numbered, dated footer; the table re-renders its
// header on every page it spans.
use crate::config::Config;
use crate::types::{DisasterRecord, SummaryMetrics};
use crate::util::format_int;
use chrono::NaiveDate;
use tabled::builder::Builder;
use tabled::settings::{Alignment, Style};

/// Table rows laid out per page. Chosen so a page of the rendered grid
/// stays within a conventional printed-page line count.
const TABLE_ROWS_PER_PAGE: usize = 30;

/// One structural element of the exported document.
pub enum Block {
    Title { main: String, sub: String },
    Heading(String),
    Paragraph(String),
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// An ordered block sequence plus the date stamped into every footer.
pub struct Document {
    pub blocks: Vec<Block>,
    pub generated: NaiveDate,
}

/// Assemble the export document for the current filtered view and render
/// it to an owned byte buffer. The caller decides where the bytes go;
/// nothing is written here.
pub fn build_report(
    filtered: &[DisasterRecord],
    metrics: &SummaryMetrics,
    config: &Config,
    generated: NaiveDate,
) -> Vec<u8> {
    let summary = format!(
        "Total Kejadian: {}\nJumlah Kecamatan: {}\nJenis Bencana: {}",
        format_int(metrics.total_count),
        format_int(metrics.district_count),
        format_int(metrics.disaster_type_count),
    );
    let doc = Document {
        blocks: vec![
            Block::Title {
                main: "Dashboard Kejadian Bencana".to_string(),
                sub: "Kabupaten Aceh Tamiang 2024".to_string(),
            },
            Block::Heading("Ringkasan Data".to_string()),
            Block::Paragraph(summary),
            Block::Heading("Detail Data".to_string()),
            Block::Table {
                header: config.columns.clone(),
                rows: filtered.iter().map(|r| r.cells()).collect(),
            },
        ],
        generated,
    };
    doc.render()
}

impl Document {
    /// Lay the blocks out into pages and serialize them. The only block
    /// that can span pages is the table; every spanned page restarts with
    /// the header row so the grid stays readable on its own.
    pub fn render(&self) -> Vec<u8> {
        let mut pages: Vec<Vec<String>> = vec![Vec::new()];
        for block in &self.blocks {
            match block {
                Block::Title { main, sub } => {
                    let page = pages.last_mut().unwrap();
                    page.push(main.clone());
                    page.push(sub.clone());
                    page.push("=".repeat(main.chars().count().max(sub.chars().count())));
                    page.push(String::new());
                }
                Block::Heading(text) => {
                    let page = pages.last_mut().unwrap();
                    page.push(text.clone());
                    page.push("-".repeat(text.chars().count()));
                }
                Block::Paragraph(text) => {
                    let page = pages.last_mut().unwrap();
                    for line in text.lines() {
                        page.push(line.to_string());
                    }
                    page.push(String::new());
                }
                Block::Table { header, rows } => {
                    if rows.is_empty() {
                        // header-only grid, still a valid table
                        append_table(pages.last_mut().unwrap(), header, &[]);
                        continue;
                    }
                    for (i, chunk) in rows.chunks(TABLE_ROWS_PER_PAGE).enumerate() {
                        if i > 0 {
                            pages.push(Vec::new());
                        }
                        append_table(pages.last_mut().unwrap(), header, chunk);
                    }
                }
            }
        }

        let total = pages.len();
        let mut out = String::new();
        for (i, page) in pages.iter().enumerate() {
            if i > 0 {
                out.push('\u{0C}');
                out.push('\n');
            }
            for line in page {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
            out.push_str(&format!(
                "Halaman {} dari {} | {}\n",
                i + 1,
                total,
                self.generated.format("%Y-%m-%d")
            ));
        }
        out.into_bytes()
    }
}

/// Render one page's worth of the table: uppercase header row, full cell
/// grid, centered text.
fn append_table(page: &mut Vec<String>, header: &[String], rows: &[Vec<String>]) {
    let mut builder = Builder::default();
    builder.push_record(header.iter().map(|h| h.to_uppercase()));
    for row in rows {
        builder.push_record(row.iter().cloned());
    }
    let mut table = builder.build();
    table.with(Style::modern());
    table.with(Alignment::center());
    for line in table.to_string().lines() {
        page.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(district: &str, disaster: &str, count: u64) -> DisasterRecord {
        DisasterRecord {
            province_code: "11".into(),
            province_name: "Aceh".into(),
            regency_code: "11.16".into(),
            regency_name: "Aceh Tamiang".into(),
            district_code: "11.16.01".into(),
            district_name: district.into(),
            disaster_type: disaster.into(),
            count,
            unit: "Kejadian".into(),
        }
    }

    fn render(filtered: &[DisasterRecord]) -> String {
        let metrics = crate::summary::summarize(filtered);
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let bytes = build_report(filtered, &metrics, &Config::default(), date);
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn report_contains_title_summary_and_rows() {
        let filtered = vec![rec("Karang Baru", "Banjir", 3), rec("Seruway", "Banjir", 5)];
        let text = render(&filtered);
        assert!(text.contains("Dashboard Kejadian Bencana"));
        assert!(text.contains("Kabupaten Aceh Tamiang 2024"));
        assert!(text.contains("Ringkasan Data"));
        assert!(text.contains("Detail Data"));
        assert!(text.contains("Karang Baru"));
        assert!(text.contains("Seruway"));
        // metrics appear in the fixed label order
        let total = text.find("Total Kejadian: 8").unwrap();
        let districts = text.find("Jumlah Kecamatan: 2").unwrap();
        let types = text.find("Jenis Bencana: 1").unwrap();
        assert!(total < districts && districts < types);
    }

    #[test]
    fn empty_dataset_renders_header_only_table() {
        let text = render(&[]);
        assert!(text.contains("KODE_PROVINSI"));
        assert!(text.contains("SATUAN"));
        assert!(text.contains("Total Kejadian: 0"));
        assert!(text.contains("Halaman 1 dari 1"));
        assert!(!text.contains('\u{0C}'));
    }

    #[test]
    fn long_tables_paginate_with_repeated_header() {
        let filtered: Vec<DisasterRecord> = (0..75)
            .map(|i| rec(&format!("Kecamatan {:02}", i % 12), "Banjir", 1))
            .collect();
        let text = render(&filtered);
        let pages = text.matches('\u{0C}').count() + 1;
        assert_eq!(pages, 3);
        // header restarts on every page the table spans
        assert_eq!(text.matches("KODE_PROVINSI").count(), 3);
        assert!(text.contains("Halaman 3 dari 3"));
        assert!(text.contains("2024-12-31"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let filtered = vec![rec("Karang Baru", "Banjir", 3)];
        assert_eq!(render(&filtered), render(&filtered));
    }
}
