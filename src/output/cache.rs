use comfy_table::{Cell, Color};

use crate::cache::{CacheEntry, PruneReport};
use crate::output::format::{create_styled_table, format_timestamp, header_cell};

pub(crate) fn print_cache_table(entries: &[CacheEntry], use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Session", use_color),
        header_cell("Command", use_color),
        header_cell("Updated", use_color),
    ]);

    let command_color = use_color.then_some(Color::Green);
    for entry in entries {
        let mut command = Cell::new(&entry.command);
        if let Some(c) = command_color {
            command = command.fg(c);
        }
        table.add_row(vec![
            Cell::new(entry.key.label()),
            command,
            Cell::new(format_timestamp(entry.modified)),
        ]);
    }

    println!("\n  Claudeflow Status Line Cache\n");
    println!("{table}");
    println!("\n  {} entries\n", entries.len());
}

pub(crate) fn output_cache_json(entries: &[CacheEntry]) -> Result<String, serde_json::Error> {
    let output: Vec<serde_json::Value> = entries
        .iter()
        .map(|entry| {
            serde_json::json!({
                "session": entry.key.label(),
                "command": entry.command,
                "path": entry.path.display().to_string(),
                "updated": format_timestamp(entry.modified),
            })
        })
        .collect();
    serde_json::to_string_pretty(&output)
}

pub(crate) fn print_prune_report(report: &PruneReport, dry_run: bool) {
    let verb = if dry_run { "Would remove" } else { "Removed" };
    for path in &report.removed {
        println!("{verb} {}", path.display());
    }
    println!(
        "{verb} {} of {} cache entries",
        report.removed.len(),
        report.scanned
    );
}
