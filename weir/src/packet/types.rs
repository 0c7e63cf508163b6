//! Context types threaded through the protocol handler chain.

/// Outcome of handing packet bytes to a protocol handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The packet was consumed by the handler chain.
    Ok,
    /// The bytes do not form a well-formed packet for the claimed protocol.
    Corrupt,
    /// No handler is bound for the resolved protocol.
    Unsupported,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Ok => "ok",
            Verdict::Corrupt => "corrupt",
            Verdict::Unsupported => "unsupported",
        }
    }
}

/// Batch-scoped context owned by the capture loop for the duration of a
/// drain cycle.
#[derive(Debug, Default)]
pub struct PacketBatch {
    /// Handler invocations performed while draining this batch, nested
    /// dispatches included.
    pub dispatched: u64,
}

/// Per-packet context owned by the capture loop.
///
/// Decapsulators pass this through untouched; the registry maintains the
/// depth counter and provenance label around each handler call.
#[derive(Debug, Default)]
pub struct Packet {
    /// Encapsulation layers currently being peeled for this packet.
    pub decap_depth: u8,
    /// Label of the innermost decapsulation layer applied, for downstream
    /// session tagging and diagnostics.
    pub decapsulated_by: Option<&'static str>,
}
