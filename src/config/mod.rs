pub mod config_file;
pub mod destinations;
pub mod diagnostics;
pub mod global;
pub mod load_error;
pub mod source;
