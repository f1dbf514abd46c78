// src/core/sanitize.rs
use crate::config::consts::{CSV_EXT, DEFAULT_TITLE, TITLE_MAX_CHARS};

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Replace each run of characters outside `[A-Za-z0-9_-]` with one `_`,
/// then keep at most `TITLE_MAX_CHARS` characters.
pub fn sanitize_title(title: &str) -> String {
    let title = title.trim();
    let title = if title.is_empty() { DEFAULT_TITLE } else { title };

    let mut out = String::with_capacity(title.len());
    let mut in_run = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out.chars().take(TITLE_MAX_CHARS).collect()
}

/// `<prefix>_<sanitized title>.csv`
pub fn export_file_name(prefix: &str, title: &str) -> String {
    format!("{}_{}.{}", prefix, sanitize_title(title), CSV_EXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_runs_collapse() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
        assert_eq!(normalize_ws("\n\n"), "");
    }

    #[test]
    fn title_is_made_file_safe() {
        assert_eq!(sanitize_title("Sales: Q3 / 2024"), "Sales_Q3_2024");
        assert_eq!(sanitize_title("   "), "grid");
        assert_eq!(sanitize_title("a-b_c"), "a-b_c");
        assert_eq!(sanitize_title(&"x".repeat(100)).len(), 64);
    }

    #[test]
    fn file_name_has_prefix_and_ext() {
        assert_eq!(export_file_name("grid_incremental", "Tasks"), "grid_incremental_Tasks.csv");
    }
}
