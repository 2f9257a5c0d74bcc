use log::LevelFilter;

// 0: off, 1: info, 2: debug, 3+: trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// Logs to stderr so that test output and piped stdout stay clean.
pub fn init_simple_logger(l: LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::{ColorChoice, Color, ConfigBuilder, Level, TermLogger, TerminalMode};

    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_level_color(Level::Trace, Some(Color::Green))
        .build();

    TermLogger::init(l, config, TerminalMode::Stderr, ColorChoice::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity() {
        assert_eq!(level_for(0), LevelFilter::Off);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Trace);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn init_twice() {
        // the global logger can only be set once per process.
        let first = init_simple_logger(LevelFilter::Trace);
        let second = init_simple_logger(LevelFilter::Trace);
        assert!(first.is_err() || second.is_err());
    }
}
