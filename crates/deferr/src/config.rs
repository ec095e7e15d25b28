use log::Level;

#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) level: Level,
    pub(crate) target: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            level: Level::Warn,
            target: env!("CARGO_PKG_NAME"),
        }
    }

    pub const fn with_level(self, level: Level) -> Self {
        Self { level, ..self }
    }

    pub const fn with_target(self, target: &'static str) -> Self {
        Self { target, ..self }
    }

    pub const fn level(&self) -> Level {
        self.level
    }

    pub const fn target(&self) -> &'static str {
        self.target
    }
}
