pub mod buffer4;
pub mod file_format;
pub mod log_setup;
pub mod parallel;
pub mod serde;

pub use buffer4::Buffer4;
pub use file_format::{FileExtensionError, FileFormatResult, SerdeFormat};
pub use log_setup::{setup_logging, setup_logging_with, LogConfig, LogSetupError};
pub use parallel::{resolve_concurrency, try_par_map_limited};
