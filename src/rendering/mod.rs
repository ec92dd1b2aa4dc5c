pub mod export;
pub mod painter;
pub mod plot;
pub mod primitives;
pub mod scene;
pub mod surface;

// Re-export specific functions to keep the API clean for the rest of the app
pub use export::{draw_plot, export_plot};
pub use painter::draw_chain;
