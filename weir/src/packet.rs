//! Protocol handler plumbing for captured packet bytes.
//!
//! This module provides:
//! - The ethertype-indexed [`registry::DispatchRegistry`] the capture loop
//!   routes packets through
//! - The [`types`] threaded through every handler call (verdicts, batch and
//!   per-packet context)
//! - Decapsulators for the encapsulations the pipeline understands
//!   (currently [`nsh`])

pub mod nsh;
pub mod opts;
pub mod registry;
pub mod types;
