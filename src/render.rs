//! Markdown table rendering for the server catalog.
//!
//! Produces the fixed five-column table spliced into the README. Rendering
//! never fails: values missing from an entry degrade to empty cells so a
//! catalog that skipped schema validation still yields one row per entry.

use crate::catalog::Server;
use std::cmp::Ordering;

const HEADER: [&str; 5] = ["Dataset", "Agency", "Server", "Code", "Remote"];

/// Render the catalog entries as a markdown table, sorted by agency then
/// dataset. The sort is stable, so entries with equal keys keep their
/// input order.
pub fn render_table(servers: &[Server]) -> String {
    let mut sorted: Vec<&Server> = servers.iter().collect();
    sorted.sort_by(|a, b| {
        collate(&a.agency, &b.agency).then_with(|| collate(&a.dataset, &b.dataset))
    });

    let mut lines = Vec::with_capacity(sorted.len() + 2);
    lines.push(format_row(&HEADER.map(String::from)));
    lines.push(format_row(&["---"; 5].map(String::from)));
    for server in sorted {
        lines.push(format_row(&render_cells(server)));
    }
    lines.join("\n")
}

fn render_cells(server: &Server) -> [String; 5] {
    let mut name = escape_cell(&server.name);
    if let Some(status) = &server.status {
        if !server.is_active() {
            name.push_str(&format!(" ({})", status.as_str()));
        }
    }
    [
        escape_cell(&server.dataset),
        escape_cell(&server.agency),
        name,
        link_cell("GitHub", server.repository.as_deref()),
        link_cell("Remote", server.remote_url.as_deref()),
    ]
}

fn link_cell(label: &str, url: Option<&str>) -> String {
    match url {
        Some(url) if !url.is_empty() => format!("[{label}]({url})"),
        _ => String::new(),
    }
}

/// Escape free text for a single table cell: pipes are escaped and newlines
/// collapse to one space so each entry stays on one row.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Case-insensitive comparison standing in for locale-aware collation, with
/// a code-point tiebreak keeping the order total and host-independent.
fn collate(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        unequal => unequal,
    }
}

fn format_row(cells: &[String; 5]) -> String {
    format!("| {} |", cells.join(" | "))
}
