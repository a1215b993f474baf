pub mod palettes;
pub mod pg_store;
pub mod plans;
pub mod presets;
pub mod store;
pub mod templates;
