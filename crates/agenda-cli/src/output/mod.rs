use std::io::IsTerminal;
use std::sync::OnceLock;

use serde::Serialize;
use serde_json::Value;

use agenda_core::entities::MISSING_TEXT;

use crate::cli::{GlobalFlags, OutputFormat};

pub mod table;

/// Terminal-dependent table settings, fixed once at startup.
static TABLE_OPTIONS: OnceLock<table::TableOptions> = OnceLock::new();

/// Entry fields first, in reading order; any other keys follow alphabetically.
const PREFERRED_COLUMNS: [&str; 6] = ["id", "title", "status", "start", "end", "url"];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Fix table settings for this process from the flags and terminal.
pub fn init(flags: &GlobalFlags) {
    let options = detect_table_options(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    );
    let _ = TABLE_OPTIONS.set(options);
}

/// Color needs a terminal, `--format table`, no `--quiet`, and no
/// `NO_COLOR`. Width comes from `COLUMNS` when it is at least 40.
fn detect_table_options(
    flags: &GlobalFlags,
    is_tty: bool,
    no_color: bool,
    columns: Option<&str>,
) -> table::TableOptions {
    let color = is_tty && flags.format == OutputFormat::Table && !flags.quiet && !no_color;
    let max_width = columns
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= 40);
    table::TableOptions { max_width, color }
}

fn table_options() -> table::TableOptions {
    TABLE_OPTIONS.get().copied().unwrap_or(table::TableOptions {
        max_width: None,
        color: false,
    })
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| column_rank(&a.0).cmp(&column_rank(&b.0)));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no entries)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort_by(|a, b| column_rank(a).cmp(&column_rank(b)));

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn column_rank(key: &str) -> (usize, &str) {
    let position = PREFERRED_COLUMNS
        .iter()
        .position(|column| *column == key)
        .unwrap_or(PREFERRED_COLUMNS.len());
    (position, key)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from(MISSING_TEXT),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
