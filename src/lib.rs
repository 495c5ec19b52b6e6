//! Deterministic simulation core for a four-lane rhythm game.
//!
//! Two components:
//! - [`chart`]: derives an immutable, ordered note sequence from a detected
//!   tempo, offset and track duration via a seeded pseudo-random picker.
//! - [`game`]: the per-frame timing and judgment engine that grades lane
//!   presses against the pending note queue and evolves score/combo state.
//!
//! Audio decoding, beat detection, input mapping and rendering are external
//! collaborators: the engine only consumes clock readings and resolved lane
//! presses, and publishes a read-only frame snapshot for a renderer.

pub mod chart;
pub mod config;
pub mod game;
