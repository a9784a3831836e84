//! Domain layer containing entities and provider interfaces.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`providers`] - Upstream data source trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Lookup logic lives in [`crate::application::services`].

pub mod entities;
pub mod providers;
