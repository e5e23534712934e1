use std::error::Error;
use tabled::{settings::Style, Table, Tabled};

/// Write an exported document buffer to disk. The report builder only
/// returns bytes; disposition is decided here, at the edge.
pub fn write_bytes(path: &str, bytes: &[u8]) -> Result<(), Box<dyn Error>> {
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Print the first `max_rows` rows of a record slice as a markdown table,
/// followed by a note when rows were elided.
pub fn preview_table<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}", table_str);
    if rows.len() > max_rows {
        println!("... ({} of {} rows shown)", max_rows, rows.len());
    }
    println!();
}
