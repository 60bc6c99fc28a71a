//! Text helpers for list rows and profile cards.

const ELLIPSIS: &str = "...";

/// Excerpt length used for entry list rows.
pub const EXCERPT_LEN: usize = 150;

/// Truncate to `max` characters, appending an ellipsis when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}{ELLIPSIS}")
}

/// Excerpt for an entry body: the first 150 characters plus an ellipsis.
/// An empty body yields an empty excerpt (no dangling ellipsis).
pub fn excerpt(body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }
    let cut: String = body.chars().take(EXCERPT_LEN).collect();
    format!("{cut}{ELLIPSIS}")
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Up to two uppercase initials for an avatar fallback; "U" when the name
/// is empty.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();
    if letters.is_empty() {
        "U".to_string()
    } else {
        letters.to_uppercase()
    }
}

/// Group digits with thousands separators for stat cards.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
