//! Decapsulation stages for the weir capture pipeline.
//!
//! The capture engine hands each packet's bytes to the [`packet`] module's
//! dispatch registry, keyed by ethertype. Handlers peel one encapsulation
//! layer and re-dispatch the inner payload until a terminal protocol handler
//! consumes it. All forwarding is zero-copy: every handler borrows a
//! subslice of the original capture buffer.

pub mod packet;
