use std::fmt::Arguments;

use crate::Config;

/// Somewhere to send a formatted message.
pub trait LogSink {
    fn log(&mut self, args: Arguments<'_>);
}

impl<F> LogSink for F
where
    F: FnMut(Arguments<'_>),
{
    #[inline]
    fn log(&mut self, args: Arguments<'_>) {
        self(args)
    }
}

/// A [`LogSink`] that forwards to the [`log`] facade.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Logger {
    config: Config,
}

impl Logger {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }
}

impl From<Config> for Logger {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}

impl LogSink for Logger {
    fn log(&mut self, args: Arguments<'_>) {
        log::log!(target: self.config.target, self.config.level, "{args}");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::test::{MockClose, MockError};

    use log::{Level, Metadata, Record};
    use once_cell::sync::Lazy;
    use parking_lot::Mutex;

    #[derive(Default)]
    pub(crate) struct CaptureLogger {
        records: Mutex<Vec<(String, Level, String)>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            self.records.lock().push((
                record.target().to_string(),
                record.level(),
                record.args().to_string(),
            ));
        }

        fn flush(&self) {}
    }

    static LOGGER: Lazy<CaptureLogger> = Lazy::new(Default::default);

    /// Everything logged so far under `target`.
    pub(crate) fn captured(target: &str) -> Vec<(Level, String)> {
        // another test may have installed it already
        let _ = log::set_logger(&*LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        LOGGER
            .records
            .lock()
            .iter()
            .filter(|(t, ..)| t == target)
            .map(|(_, level, msg)| (*level, msg.clone()))
            .collect()
    }

    #[test]
    fn logger_forwards_to_the_log_facade() {
        captured("");

        let config = Config::new()
            .with_level(Level::Error)
            .with_target("deferr::sink::tests");

        let mut closer = MockClose::failing(MockError("close")).named("err closer");
        crate::close_and_log(&mut closer, Logger::from(config));

        let mut closer = MockClose::<MockError>::ok();
        crate::close_and_log(&mut closer, Logger::new(config));

        assert_eq!(
            captured("deferr::sink::tests"),
            [(Level::Error, String::from("closing err closer: close"))]
        );
    }
}
