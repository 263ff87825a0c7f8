//! Interface to the remote Git forge hosting the releases.
//!
//! Provides token-based authentication and the three release-cleanup
//! operations (list releases, delete release, delete tag ref) behind a
//! common trait.

/// Configuration and authentication for the forge connection.
pub mod config;

/// GitHub API client implementation.
pub mod github;

/// Trait abstracting the forge operations used by the pruner.
pub mod traits;

/// Shared data types for release records and deletion candidates.
pub mod types;
