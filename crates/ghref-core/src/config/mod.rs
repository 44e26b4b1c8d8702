//! Runtime settings resolved from a tool profile and environment overrides

pub mod settings;

pub use settings::{Settings, RELEASE_LOOKUP_TIMEOUT};
