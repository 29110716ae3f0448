use crate::api::Candidate;

/// Characters that are not allowed in folder names on common filesystems.
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Strip filesystem-invalid characters and trim surrounding whitespace.
///
/// Removal only; nothing is substituted, so sanitizing a clean name is a
/// no-op.
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !INVALID_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Build the canonical `Title (Year)` folder name for a candidate.
///
/// English title wins over romaji; the year suffix is omitted when the
/// candidate has no release year. Returns `None` when the candidate carries
/// no usable title at all.
pub fn build_candidate_name(candidate: &Candidate) -> Option<String> {
    let title = candidate.title()?;

    let name = match candidate.year {
        Some(year) => format!("{} ({})", title, year),
        None => title.to_string(),
    };

    let sanitized = sanitize_name(&name);
    if sanitized.is_empty() {
        None
    } else {
        Some(sanitized)
    }
}
