/// Folds `src` into the form used for case-insensitive identifier matching.
///
/// Identifiers are compared after full Unicode lowercasing, so `"CreatedAt"`,
/// `"createdat"` and `"CREATEDAT"` all fold to the same string.
pub fn fold_case(src: &str) -> String {
    src.to_lowercase()
}

/// Returns `true` if `lhs` and `rhs` are equal ignoring case.
pub fn eq_ignore_case(lhs: &str, rhs: &str) -> bool {
    if lhs.is_ascii() && rhs.is_ascii() {
        return lhs.eq_ignore_ascii_case(rhs);
    }

    fold_case(lhs) == fold_case(rhs)
}

/// Returns `true` if `src` is empty or only contains whitespace.
pub fn is_blank(src: &str) -> bool {
    src.trim().is_empty()
}
