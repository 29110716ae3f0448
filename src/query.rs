use once_cell::sync::Lazy;
use regex::Regex;

// Bracketed or parenthesized span, non-greedy: "(2013)", "[BD 1080p]", ...
static BRACKETED_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\(\[].*?[\)\]]").unwrap());

/// Options captured when a search is launched.
///
/// The interactive loop snapshots these into the search worker so the worker
/// never reads live UI state.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Remove bracketed/parenthesized spans from the folder name before querying
    pub strip_brackets: bool,
    /// User-supplied query that bypasses folder-name-derived querying
    pub override_query: Option<String>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        // Stripping is on unless the user opts out
        Self {
            strip_brackets: true,
            override_query: None,
        }
    }
}

/// Derive the search query for a folder.
///
/// A non-empty override (after trimming) wins over the folder name. With
/// `strip_brackets` set, every `(...)` and `[...]` span is removed and the
/// remainder trimmed. An empty result is passed through unchanged; the search
/// will simply find nothing.
pub fn build_query(folder_name: &str, options: &QueryOptions) -> String {
    if let Some(override_query) = &options.override_query {
        let trimmed = override_query.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    if options.strip_brackets {
        BRACKETED_SPAN.replace_all(folder_name, "").trim().to_string()
    } else {
        folder_name.to_string()
    }
}
