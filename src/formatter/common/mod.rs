//! Common helpers for formatter implementations.
//!
//! This module contains the pieces the explain formatter is assembled from:
//! color handling, the [`Renderer`](render::Renderer) that writes into the
//! output sink, and the [`RunState`](stats::RunState) bookkeeping.

pub mod color;
pub mod render;
pub mod stats;
