/// Initializes the global logger.
///
/// `--verbose` raises the level to `Debug`; `RUST_LOG` refines whichever
/// level was picked.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();
}
