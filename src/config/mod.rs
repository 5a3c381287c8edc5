//! Configuration and path management for GoalFlow

pub mod paths;
pub mod settings;

pub use paths::GoalflowPaths;
pub use settings::Settings;
