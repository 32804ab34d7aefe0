//! Configuration module for MoneyTrack
//!
//! Path resolution for the data directory and persisted user settings.

pub mod paths;
pub mod settings;

pub use paths::MoneyTrackPaths;
pub use settings::Settings;
