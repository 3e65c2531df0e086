//! Text and table output formatting for items.
//!
//! Pretty output (tables, color) is only used when stdout is a terminal;
//! otherwise a stable `key=value` form is printed for scripts and logs.

use std::io::IsTerminal;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use owo_colors::OwoColorize;

use todo_core::Item;

/// Terminal capabilities relevant to text output.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub pretty: bool,
    pub color: bool,
}

impl TextStyle {
    /// Detect from stdout and the `TERM`/`NO_COLOR` environment.
    pub fn from_env() -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        let pretty = is_tty && !term_is_dumb;
        Self {
            pretty,
            color: pretty && !no_color_env,
        }
    }
}

fn importance_marker(item: &Item, style: TextStyle) -> String {
    match (item.is_important, style.color) {
        (true, true) => "!".red().bold().to_string(),
        (true, false) => "!".to_string(),
        (false, _) => String::new(),
    }
}

fn plain_line(item: &Item) -> String {
    format!(
        "id={} important={} title={}",
        item.id,
        item.is_important,
        item.title.replace('\n', " ")
    )
}

/// Render a list of items as a table (pretty) or one line per item (plain).
pub fn render_item_list(items: &[Item], style: TextStyle) -> String {
    if !style.pretty {
        return items.iter().map(plain_line).collect::<Vec<_>>().join("\n");
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "", "Title", "Description"]);
    for item in items {
        table.add_row(vec![
            item.id.clone(),
            importance_marker(item, style),
            item.title.clone(),
            item.description.clone().unwrap_or_default(),
        ]);
    }
    table.to_string()
}

/// Render a single item as key/value lines.
pub fn render_item(item: &Item, style: TextStyle) -> String {
    if !style.pretty {
        let mut out = plain_line(item);
        if let Some(ref description) = item.description {
            out.push_str(&format!("\ndescription={}", description.replace('\n', " ")));
        }
        return out;
    }

    let label = |name: &str| {
        if style.color {
            format!("{}:", name.bold())
        } else {
            format!("{}:", name)
        }
    };
    let mut lines = vec![
        format!("{} {}", label("ID"), item.id),
        format!("{} {}", label("Title"), item.title),
        format!(
            "{} {}",
            label("Important"),
            if item.is_important { "yes" } else { "no" }
        ),
    ];
    if let Some(ref description) = item.description {
        lines.push(format!("{} {}", label("Description"), description));
    }
    lines.join("\n")
}

/// Print a list of items, or a short notice when there are none.
pub fn print_item_list(items: &[Item], quiet: bool) {
    if items.is_empty() {
        if !quiet {
            eprintln!("No todos yet. Add one with `todo add <TITLE>`.");
        }
        return;
    }
    println!("{}", render_item_list(items, TextStyle::from_env()));
}

/// Print a single item.
pub fn print_item(item: &Item) {
    println!("{}", render_item(item, TextStyle::from_env()));
}
