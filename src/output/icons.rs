use std::collections::HashMap;

use crate::consts::UNKNOWN_ICON;

const BUILTIN_ICONS: [(&str, &str); 6] = [
    ("/ideate", "💡"),
    ("/ideate-to-spec", "📝"),
    ("/spec:decompose", "🔨"),
    ("/spec:execute", "⚙️"),
    ("/spec:feedback", "💬"),
    ("/spec:doc-update", "📚"),
];

/// Maps a command name (first word of the command) to its icon
#[derive(Debug, Clone)]
pub(crate) struct IconTable {
    icons: HashMap<String, String>,
}

impl Default for IconTable {
    fn default() -> Self {
        Self {
            icons: BUILTIN_ICONS
                .iter()
                .map(|(cmd, icon)| (cmd.to_string(), icon.to_string()))
                .collect(),
        }
    }
}

impl IconTable {
    /// Built-in icons plus `overrides`, which win on conflict
    pub(crate) fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut table = Self::default();
        table
            .icons
            .extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        table
    }

    pub(crate) fn icon_for(&self, command: &str) -> &str {
        command
            .split_whitespace()
            .next()
            .and_then(|name| self.icons.get(name))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_ICON)
    }
}
