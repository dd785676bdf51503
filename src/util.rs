mod config;
mod logger;

pub use config::Config;
pub use logger::initialize_logger;
