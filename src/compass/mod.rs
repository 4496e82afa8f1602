pub mod commands;
pub mod controller;
pub mod feed;
pub mod state;

pub use controller::{CompassController, PermissionOutcome};
pub use state::{CompassSnapshot, HeadingMode};
