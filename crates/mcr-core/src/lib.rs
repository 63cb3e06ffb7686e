pub mod config;
pub mod logging;

pub mod filename;
pub mod movie_code;
pub mod rename;
pub mod resolver;
pub mod scan;
