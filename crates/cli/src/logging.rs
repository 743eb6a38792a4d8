use log::LevelFilter;

/// Install the stderr logger. `RUST_LOG`, when set, takes precedence over `level`.
pub fn init(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env();
    // A logger may already be installed (tests); keeping it is fine.
    let _ = builder.try_init();
}
