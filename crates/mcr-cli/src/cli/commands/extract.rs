//! `mcr extract <NAME>...` – show the normalized name for each argument.

use mcr_core::movie_code::extract_movie_code;

pub fn run_extract(names: &[String]) {
    for name in names {
        println!("{} -> {}", name, extract_movie_code(name));
    }
}
