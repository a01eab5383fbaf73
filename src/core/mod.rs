//! Core components of the `aurum-rs` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`AuClient`] and its builder.
//! - The primary [`AuError`] type.
//! - The shared GET path with its TTL cache.

/// The main client (`AuClient`), builder, and cache configuration.
pub mod client;
/// The primary error type (`AuError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::AuClient`
pub use client::{AuClient, AuClientBuilder, CacheMode};
pub use error::AuError;
