//! # polyglot-channels
//!
//! Chat platform integrations for Polyglot.

pub mod discord;

pub use discord::DiscordChannel;
