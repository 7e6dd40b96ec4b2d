//! # School Registry - Student Avatars and Faculty Lookups
//!
//! A small administrative service for a school: students upload avatar
//! images, which are kept both as files on disk and as rows in Postgres, and
//! faculties can be looked up by ID, color or name.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Core types (entities, value objects, domain errors)
//! - **Application**: Use cases, ports (interfaces) and the avatar mapper
//! - **Infrastructure**: Adapters for Postgres and the local avatars directory
//! - **API**: HTTP handlers, routing and error mapping
//!
//! ## Key Features
//!
//! - Two-phase avatar writes (file first, record second)
//! - Avatars served from either copy with their stored media type
//! - Collision-resistant blob names from a pluggable generator
//! - Paged avatar listing with retrieval URLs
//!
//! ## Example Usage
//!
//! ```no_run
//! use school_registry::{application::builder::ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = ApplicationBuilder::new(Config::from_env())
//!     .with_database()
//!     .await?
//!     .with_infrastructure()
//!     .await?
//!     .build()?;
//! let app = school_registry::api::create_router(state);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
