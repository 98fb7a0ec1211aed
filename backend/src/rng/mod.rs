//! Deterministic random number generation
//!
//! Uses xorshift64* for the uniform stream. Every draw made by the samplers
//! and by universe updates goes through a [`RandomSource`].
//!
//! The host owns the RNG state ([`HostRng`]); public entry points borrow it
//! for exactly one call through an [`RngScope`], which writes the advanced
//! state back when dropped.

mod scope;
mod source;
mod xorshift;

pub use scope::{HostRng, RngScope};
pub use source::RandomSource;
pub use xorshift::RngManager;
