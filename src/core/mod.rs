//! Core checkout logic.
//!
//! This module contains:
//! - ContentServer: wish-list resolution and receipt computation
//! - ContentServing: the uniform capability every server kind implements
//! - Storefront: façade over the active server
//! - Receipt: the computed checkout result

pub mod receipt;
pub mod server;
pub mod storefront;

// Re-export commonly used types
pub use receipt::{round_to_cents, Receipt};
pub use server::{ContentServer, ContentServing, MusicServer, VideoServer};
pub use storefront::Storefront;
