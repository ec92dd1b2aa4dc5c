pub mod controller;
pub mod interactions;
pub mod navigator;
pub mod scheduler;

// Re-exports
pub use interactions::{setup_interactions, Controls};
pub use scheduler::GtkFrameScheduler;
