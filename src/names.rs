use std::sync::LazyLock;

use regex::Regex;

const RESERVED_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

// Other (Cc Cf Cs Co Cn) and Symbol (Sm Sc Sk So) categories plus the reserved characters.
static UNSAFE_FOR_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\p{C}\p{S}\\/*?:"<>|]"#).expect("path sanitizer pattern is valid")
});

/// Reduce a playlist name to its comparison form: trimmed, case-folded,
/// with internal whitespace runs collapsed to a single space.
///
/// Only used for equality checks, never for file names.
pub fn normalize_for_match(name: &str) -> String {
    caseless::default_case_fold_str(name)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace every reserved filename character with `_`.
pub fn sanitize_for_path_strict(name: &str) -> String {
    name.chars()
        .map(|c| if RESERVED_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Make a playlist name safe to use as a file stem.
///
/// Strips control, format, private-use and unassigned codepoints, every symbol
/// (which covers emoji), emoji variation selectors and the reserved filename
/// characters, then trims surrounding whitespace. Letters, accents, digits and
/// punctuation are kept with their original case.
///
/// May return an empty string; callers pick their own fallback.
pub fn sanitize_for_path_unicode(name: &str) -> String {
    let stripped = UNSAFE_FOR_PATH.replace_all(name, "");
    stripped
        .chars()
        .filter(|c| !matches!(c, '\u{FE0E}' | '\u{FE0F}'))
        .collect::<String>()
        .trim()
        .to_string()
}
