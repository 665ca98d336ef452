//! Console assembly: screens, navigation, dashboard and the builder

pub mod builder;
pub mod dashboard;
pub mod nav;
pub mod screen;

pub use builder::{Console, ConsoleBuilder};
pub use dashboard::DashboardSummary;
pub use nav::{Destination, Resolution, resolve, resolve_path};
pub use screen::{FormState, Screen};
