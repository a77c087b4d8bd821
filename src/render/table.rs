use comfy_table::{presets::UTF8_FULL, Table};

/// Build the two-column stats table. Absent values render as "-".
pub fn stats_table(rows: &[(String, Option<String>)]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Statistic", "Value"]);
    for (key, value) in rows {
        table.add_row(vec![key.as_str(), value.as_deref().unwrap_or("-")]);
    }
    table
}
