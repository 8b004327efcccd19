use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub mod timings {
    // contact form
    pub const SUBMIT_DELAY_MS: u32 = 1_500;
    pub const SUBMIT_TIMEOUT_MS: u32 = 10_000;
    pub const SHAKE_MS: u32 = 500;
    pub const FADE_MS: u32 = 300;

    // navbar / scrolling
    pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
    pub const SMOOTH_SCROLL_MS: u32 = 800;
    pub const PARALLAX_FACTOR: f64 = 0.3;

    // reveal + stats
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    pub const STATS_THRESHOLD: f64 = 0.5;
    pub const STAGGER_SECS: f64 = 0.1;
    pub const COUNTER_DURATION_MS: u32 = 2_000;
    pub const FRAME_MS: u32 = 16; // ~60fps

    pub const GALLERY_HOVER_SCALE: f64 = 1.1;
    pub const LOADER_REMOVE_MS: u32 = 500;
}
