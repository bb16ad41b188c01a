use log::LevelFilter;
use spider_log::{init, InitError, LogConfig};

// Single test: the process logger can only be installed once per binary.
#[test]
fn init_once() {
    init(&LogConfig::default()).unwrap();
    assert_eq!(LevelFilter::Info, log::max_level());
    log::info!("logger installed");

    let again = LogConfig {
        level: LevelFilter::Trace,
        ..Default::default()
    };
    assert!(matches!(init(&again), Err(InitError::AlreadyInitialized)));
    assert_eq!(LevelFilter::Info, log::max_level());
}
