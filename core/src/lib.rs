//! # Filter Builder Core
//!
//! Data model and state handling for the filter builder.
//! This crate provides the synopsis model, the normalizer that cleans up
//! fetched synopses, and the reducer that drives the filter form.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod icons;
pub mod models;
pub mod normalize;
pub mod state;
pub mod utils;

/// Re-export common types for ease of use
pub use config::{ClientConfig, FormConfig};
pub use error::{CoreError, Result};
pub use icons::{Icon, IconSet};
pub use models::{ColType, Column, Filter, FilterId, FilterType, ScoreType, Synopsis, SynopsisError, SynopsisResponse, User};
pub use normalize::normalize;
pub use state::{reduce, FilterAction, FilterState, FormPhase};

/// Version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
