pub mod brillouin;
pub mod dispersion;
