//! Stores behind the SmartCity citizen-services portal.
//!
//! [`issues::IssueStore`] and [`session::SessionStore`] both persist through
//! a [`blob::BlobStore`]: [`db::Database`] on disk, or
//! [`blob::MemoryBlobStore`] for tests and embedding. Construct one blob
//! store per process and hand it to each store by reference.

pub mod blob;
pub mod catalog;
pub mod db;
pub mod error;
pub mod issues;
pub mod models;
pub mod session;

pub use error::{Error, Result};
