use log::Level;

/// How long the toast stays up after its latest trigger.
pub const TOAST_DURATION_MS: u32 = 3000;

/// Fraction of a section that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const ESCAPE_KEY: &str = "Escape";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
