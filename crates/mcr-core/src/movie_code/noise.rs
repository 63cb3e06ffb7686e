//! Noise token removal applied before code extraction.
//!
//! Release groups and ad sites wrap the real code in bracketed tags and
//! URL-like suffixes (`[site-com]`, `(2020)`, `-com-site`). Each kind is a
//! separate transform so they can be exercised on their own.

use regex::Regex;
use std::sync::LazyLock;

static BRACKET_GROUPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]|\(.*?\)").unwrap());

// Separator, a TLD-like token, then everything up to the next dot.
static URL_SUFFIXES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_](?:com|net|org|xyz)[^.]*").unwrap());

/// Removes every `[...]` and `(...)` group (shortest match each).
pub fn strip_bracket_groups(name: &str) -> String {
    BRACKET_GROUPS.replace_all(name, "").into_owned()
}

/// Removes `-com…`, `_net…`, `-org…`, `_xyz…` tokens up to the next `.`.
pub fn strip_url_suffixes(name: &str) -> String {
    URL_SUFFIXES.replace_all(name, "").into_owned()
}

/// Applies both transforms, bracket groups first.
pub fn clean_noise(name: &str) -> String {
    strip_url_suffixes(&strip_bracket_groups(name))
}
