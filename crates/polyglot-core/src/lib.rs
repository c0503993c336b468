//! # polyglot-core
//!
//! Core types, traits, configuration, and error handling for the Polyglot bot,
//! plus the pieces with real state: the content filter and the dedup cache.

pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod languages;
pub mod message;
pub mod stats;
pub mod traits;
