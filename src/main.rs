// Entry point and interactive shell.
//
// The console menu stands in for the dashboard frontend:
// - Option [1] loads and cleans the CSV, printing load diagnostics.
// - Option [2] picks the two filter dimensions (districts, disaster types).
// - Option [3] runs one filter -> aggregate -> render pass and shows the
//   metrics, both charts, and a table preview.
// - Option [4] exports the current filtered view to a paginated report.
//
// The base dataset is loaded at most once per run and cached in APP_STATE;
// everything derived from it is recomputed per interaction.
mod charts;
mod config;
mod filter;
mod loader;
mod output;
mod report;
mod summary;
mod types;
mod util;

use config::Config;
use filter::FilterSelection;
use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::sync::Mutex;
use types::DisasterRecord;

const DATA_PATH: &str =
    "jumlah-kejadian-bencana-menurut-kecamatan-di-kabupaten-aceh-tamiang-tahun-2024.csv";
const CONFIG_PATH: &str = "bencana_config.json";
const REPORT_PATH: &str = "laporan_bencana.txt";

static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| {
    Mutex::new(AppState {
        config: None,
        base: None,
        selection: None,
    })
});

struct AppState {
    config: Option<Config>,
    base: Option<Vec<DisasterRecord>>,
    selection: Option<FilterSelection>,
}

/// Read a single line of input after printing the common prompt.
fn read_choice() -> String {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

/// Handle option [1]: load the configuration and the CSV file.
///
/// On success the cleaned dataset is cached in `APP_STATE` and any
/// previously chosen filter selection is reset to "all".
fn handle_load() {
    let cfg = match config::load_config(CONFIG_PATH) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read config: {}\n", e);
            return;
        }
    };
    match loader::load_and_clean(DATA_PATH, &cfg) {
        Ok((data, load_report)) => {
            println!(
                "Processing dataset... ({} rows read, {} kept)",
                util::format_int(load_report.total_rows as i64),
                util::format_int(load_report.kept_rows as i64)
            );
            println!(
                "Note: {} rows skipped due to parse errors, {} rows in excluded categories.",
                util::format_int(load_report.skipped_rows as i64),
                util::format_int(load_report.excluded_rows as i64)
            );
            println!();
            let mut state = APP_STATE.lock().unwrap();
            state.config = Some(cfg);
            state.selection = Some(FilterSelection::all_of(&data));
            state.base = Some(data);
        }
        Err(e) => {
            eprintln!("Failed to load file: {}\n", e);
        }
    }
}

/// Prompt for a multi-select over `options`. Blank keeps everything;
/// otherwise the entered comma-separated numbers pick entries, and a
/// selection that resolves to nothing is kept as an empty set.
fn prompt_multiselect(label: &str, options: &[String]) -> std::collections::HashSet<String> {
    println!("{}:", label);
    for (i, opt) in options.iter().enumerate() {
        println!("  [{}] {}", i + 1, opt);
    }
    print!("Numbers separated by commas (blank = all): ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    let input = buf.trim();
    if input.is_empty() {
        return options.iter().cloned().collect();
    }
    input
        .split(',')
        .filter_map(|tok| tok.trim().parse::<usize>().ok())
        .filter_map(|n| options.get(n.checked_sub(1)?))
        .cloned()
        .collect()
}

/// Handle option [2]: choose the filter selection for both dimensions.
///
/// Options are re-derived from the cached base dataset on every visit so
/// they always reflect the loaded data.
fn handle_filter() {
    let base = {
        let state = APP_STATE.lock().unwrap();
        state.base.clone()
    };
    let Some(base) = base else {
        println!("Error: No data loaded. Please load the CSV file first (option 1).\n");
        return;
    };

    let districts = prompt_multiselect("Kecamatan", &filter::district_options(&base));
    let disaster_types =
        prompt_multiselect("Jenis Bencana", &filter::disaster_type_options(&base));
    let sel = FilterSelection {
        districts,
        disaster_types,
    };
    println!(
        "Filter set: {} kecamatan, {} jenis bencana.\n",
        sel.districts.len(),
        sel.disaster_types.len()
    );
    let mut state = APP_STATE.lock().unwrap();
    state.selection = Some(sel);
}

/// Run one synchronous filter pass against the cached dataset, returning
/// the filtered records. `None` when nothing has been loaded yet.
fn current_filtered() -> Option<(Vec<DisasterRecord>, Config)> {
    let state = APP_STATE.lock().unwrap();
    let base = state.base.as_ref()?;
    let cfg = state.config.clone().unwrap_or_default();
    let sel = match &state.selection {
        Some(s) => s.clone(),
        None => FilterSelection::all_of(base),
    };
    Some((filter::apply(base, &sel), cfg))
}

/// Handle option [3]: metrics, both charts, and a table preview for the
/// current filtered view.
fn handle_dashboard() {
    let Some((filtered, _)) = current_filtered() else {
        println!("Error: No data loaded. Please load the CSV file first (option 1).\n");
        return;
    };

    let metrics = summary::summarize(&filtered);
    println!("Dashboard Kejadian Bencana");
    println!("Kabupaten Aceh Tamiang 2024\n");
    println!("Total Kejadian : {}", util::format_int(metrics.total_count));
    println!(
        "Jumlah Kecamatan: {}",
        util::format_int(metrics.district_count as u64)
    );
    println!(
        "Jenis Bencana  : {}\n",
        util::format_int(metrics.disaster_type_count as u64)
    );

    let by_district = summary::group_by_district(&filtered);
    let by_type = summary::group_by_disaster_type(&filtered);
    println!("{}", charts::bar_chart("Jumlah Kejadian per Kecamatan", &by_district));
    println!("{}", charts::distribution("Distribusi Jenis Bencana", &by_type));

    println!("Data Detail");
    output::preview_table(&filtered, 10);
}

/// Handle option [4]: export the current filtered view plus metrics to a
/// paginated report file.
fn handle_export() {
    let Some((filtered, cfg)) = current_filtered() else {
        println!("Error: No data loaded. Please load the CSV file first (option 1).\n");
        return;
    };

    let metrics = summary::summarize(&filtered);
    let today = chrono::Local::now().date_naive();
    let bytes = report::build_report(&filtered, &metrics, &cfg, today);
    match output::write_bytes(REPORT_PATH, &bytes) {
        Ok(()) => println!(
            "Report exported to {} ({} rows).\n",
            REPORT_PATH,
            util::format_int(filtered.len() as i64)
        ),
        Err(e) => eprintln!("Write error: {}\n", e),
    }
}

fn main() {
    loop {
        println!("Dashboard Kejadian Bencana - Aceh Tamiang 2024");
        println!("[1] Load the data file");
        println!("[2] Set filters");
        println!("[3] Show dashboard");
        println!("[4] Export report");
        println!("[5] Exit\n");
        match read_choice().as_str() {
            "1" => handle_load(),
            "2" => handle_filter(),
            "3" => handle_dashboard(),
            "4" => handle_export(),
            "5" => {
                println!("Exiting the program.");
                break;
            }
            _ => {
                println!("Invalid choice. Please enter 1-5.\n");
            }
        }
    }
}
