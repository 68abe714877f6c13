//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags (clap)
//!     → schema.rs (Settings seeded from flags)
//!
//! config file (TOML, optional)
//!     → loader.rs (read & deserialize)
//!     → schema.rs (overlay onto Settings)
//!
//! Settings
//!     → validation.rs (required-value checks, data dir resolution)
//!     → consumed by agent option assembly
//! ```
//!
//! # Design Decisions
//! - Resolution runs once, single-threaded, before any task is spawned
//! - A file field overrides its flag only when present and non-empty
//! - Validation is fail-fast: the first missing setting aborts startup

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::FileConfig;
pub use schema::Settings;
