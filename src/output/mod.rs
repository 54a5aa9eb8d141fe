mod cache;
mod format;
mod icons;
mod statusline;

pub(crate) use cache::{output_cache_json, print_cache_table, print_prune_report};
pub(crate) use icons::IconTable;
pub(crate) use statusline::{StatusLineOptions, format_status_line};
