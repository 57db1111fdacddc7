#[cfg(feature = "std")]
mod logging_tests {
    use battleship_fleet::{init_logging, log_level_from, LOG_ENV};
    use log::LevelFilter;

    #[test]
    fn test_level_names() {
        assert_eq!(log_level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(log_level_from(Some("TRACE")), LevelFilter::Trace);
        assert_eq!(log_level_from(Some(" warn ")), LevelFilter::Warn);
        assert_eq!(log_level_from(Some("off")), LevelFilter::Off);
    }

    #[test]
    fn test_level_falls_back_to_info() {
        assert_eq!(log_level_from(None), LevelFilter::Info);
        assert_eq!(log_level_from(Some("")), LevelFilter::Info);
        assert_eq!(log_level_from(Some("loud")), LevelFilter::Info);
    }

    #[test]
    fn test_init_logging_reads_env() {
        std::env::set_var(LOG_ENV, "trace");
        init_logging();
        assert_eq!(log::max_level(), LevelFilter::Trace);
        // A second install is ignored.
        std::env::set_var(LOG_ENV, "error");
        init_logging();
        assert_eq!(log::max_level(), LevelFilter::Trace);
    }
}
