//! The movie code pattern: letters, hyphen, digits, optional `-c`/`-uc`.

use regex::Regex;
use std::sync::LazyLock;

static MOVIE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z]+-[0-9]+(?:-(?:c|uc))?").unwrap());

/// Returns the leftmost movie code in `text`, as written (case untouched).
pub fn find_code(text: &str) -> Option<&str> {
    MOVIE_CODE.find(text).map(|m| m.as_str())
}
