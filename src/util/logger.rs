use env_logger::{Builder, Target};

/// Logs to stdout at `info` unless `RUST_LOG` asks for something else.
pub fn initialize_logger() {
    let mut builder = Builder::new();
    builder.target(Target::Stdout);
    builder.filter_level(log::LevelFilter::Info);
    builder.parse_default_env();
    builder.init();
}
