//! Configuration module

mod export;

pub use export::ExportConfig;
pub use export::{ENV_GHOST_KEY, ENV_GHOST_URL, ENV_GHOST_VERSION, ENV_SITE_URL};
