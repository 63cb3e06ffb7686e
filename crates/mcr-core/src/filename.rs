//! Base name and extension splitting for plain string filenames.

/// Returns the last component of `path`, ignoring trailing separators.
///
/// Falls back to `path` itself when there is no usable component
/// (empty input, `..`, root).
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    match trimmed.rfind(is_separator) {
        Some(idx) => &trimmed[idx + 1..],
        None if trimmed.is_empty() => path,
        None => trimmed,
    }
}

/// Splits a base name into `(stem, extension)`.
///
/// The extension starts at the last `.` and includes it, so `"a.b.mp4"`
/// yields `("a.b", ".mp4")` and a name without a dot has an empty extension.
/// A leading dot counts too: `".mkv"` is all extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

fn is_separator(c: char) -> bool {
    std::path::is_separator(c)
}
