use crate::export::records::Named;
use crate::names::normalize_for_match;

/// Keep the playlists whose normalized name equals the normalized target.
///
/// A missing or blank target keeps everything. Every match is kept, in the
/// original order.
pub fn filter_by_name<T: Named>(playlists: Vec<T>, target: Option<&str>) -> Vec<T> {
    let target = match target.map(normalize_for_match) {
        Some(target) if !target.is_empty() => target,
        _ => return playlists,
    };

    playlists
        .into_iter()
        .filter(|p| normalize_for_match(p.name()) == target)
        .collect()
}

/// Whether `target` would restrict the selection at all.
pub fn is_active(target: Option<&str>) -> bool {
    target.is_some_and(|t| !t.trim().is_empty())
}
