//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::TellerPaths;
pub use settings::Settings;
