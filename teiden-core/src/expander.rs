//! Record expansion into formatted address lines

use crate::classifier::LOCAL_SEPARATORS;

/// Expand one closed record into formatted address lines.
///
/// Emits nothing unless every hierarchy field is set and local text
/// was accumulated. The local text is split on the full-width or
/// half-width comma with empty pieces retained, so k separators always
/// yield k+1 lines; each piece is trimmed and formatted as
/// `{prefecture}{municipality}{piece} {group}` in split order.
///
/// Pure function of its inputs; safe to call repeatedly.
pub fn expand(
    group: Option<u32>,
    prefecture: Option<&str>,
    municipality: Option<&str>,
    local_text: &str,
) -> Vec<String> {
    let (Some(group), Some(prefecture), Some(municipality)) = (group, prefecture, municipality)
    else {
        return Vec::new();
    };
    if local_text.is_empty() {
        return Vec::new();
    }
    local_text
        .split(LOCAL_SEPARATORS)
        .map(|piece| format!("{prefecture}{municipality}{} {group}", piece.trim()))
        .collect()
}
