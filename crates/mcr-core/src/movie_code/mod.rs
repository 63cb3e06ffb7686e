//! Movie code extraction from noisy video filenames.
//!
//! A filename like `[site-com]abc-123-c(1080p).mp4` normalizes to
//! `ABC-123-C.mp4`: noise tokens are removed, the leftmost
//! `LETTERS-DIGITS[-C|-UC]` code is uppercased, and the extension of the
//! original name is reattached unchanged.

mod noise;
mod pattern;

pub use noise::{clean_noise, strip_bracket_groups, strip_url_suffixes};
pub use pattern::find_code;

use crate::filename::{base_name, split_extension};

/// Computes the normalized name for `filename` (a bare name or a full path).
///
/// Returns the original base name unchanged when no code is found. Callers
/// compare the result against the base name to decide whether to rename, so
/// an unrecognized name and an already-normalized one look the same.
///
/// # Examples
///
/// - `extract_movie_code("[vendor-com]ABC-123(2020).mp4")` → `"ABC-123.mp4"`
/// - `extract_movie_code("/videos/abc-456-uc.MKV")` → `"ABC-456-UC.MKV"`
/// - `extract_movie_code("randomfile.mp4")` → `"randomfile.mp4"`
pub fn extract_movie_code(filename: &str) -> String {
    let base = base_name(filename);
    let cleaned = clean_noise(base);

    match find_code(&cleaned) {
        Some(code) => {
            let (_, ext) = split_extension(base);
            format!("{}{}", code.to_uppercase(), ext)
        }
        None => base.to_string(),
    }
}
