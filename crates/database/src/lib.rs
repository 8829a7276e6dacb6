//! # Mission Control Database Crate
//!
//! This crate is the Database Gateway of the application. It owns the single
//! connection of a session and every SQL statement the console issues.
//!
//! ## Architectural Principles
//!
//! - **One connection:** The pool is capped at a single connection that lives
//!   for the whole interactive session and is closed when the session ends.
//! - **Parameterized statements only:** Every value typed by the user is bound,
//!   never spliced into SQL text.
//! - **A trait at the seam:** The console talks to [`MissionStore`], so it can be
//!   driven by an in-memory store in tests.
//!
//! ## Public API
//!
//! - `connect`: Opens the session's connection from `DbSettings`.
//! - `run_migrations`: The development bootstrap. Creates the schema and seeds
//!   the moon missions.
//! - `MissionStore`: The query/execute primitives used by the console.
//! - `DbRepository`: The Postgres implementation of `MissionStore`.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::DbRepository;
pub use store::MissionStore;
