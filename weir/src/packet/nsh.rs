//! NSH (Network Service Header, RFC 8300) decapsulation.
//!
//! Peels the outer NSH header off captured packet bytes and re-dispatches
//! the inner payload under the ethertype of the declared next protocol.
//! Only the four fixed prefix bytes are interpreted; the service path and
//! context headers are skipped via the declared header length.

use network_types::{
    eth::EtherType,
    nsh::{self, NextProtocol, NshHdr},
};
use tracing::debug;

use crate::packet::{
    registry::{DispatchRegistry, RegistryError},
    types::{Packet, PacketBatch, Verdict},
};

/// Provenance label recorded on packets that pass through this layer.
const ORIGIN: &str = "nsh";

/// Binds the decapsulator to the NSH ethertype.
///
/// Called once while the pipeline registry is being wired; the binding
/// lasts for the life of the process.
pub fn register(registry: &mut DispatchRegistry) -> Result<(), RegistryError> {
    registry.register(EtherType::Nsh, decapsulate)
}

/// Strips the outer NSH header and forwards the inner payload.
///
/// Returns [`Verdict::Corrupt`] when the buffer is shorter than the fixed
/// prefix, shorter than the header length it declares, or names a next
/// protocol outside the allow-list. Any other outcome is whatever the
/// downstream handler reports, passed through unmodified.
///
/// The forwarded payload is a reborrow of `data` at the header-length
/// offset; nothing is copied or retained.
pub fn decapsulate(
    registry: &DispatchRegistry,
    batch: &mut PacketBatch,
    packet: &mut Packet,
    data: &[u8],
) -> Verdict {
    if data.len() < NshHdr::LEN {
        debug!(len = data.len(), "truncated nsh header");
        return Verdict::Corrupt;
    }

    let hdr_len = nsh::total_hdr_len(data[1]);
    if data.len() < hdr_len {
        debug!(len = data.len(), hdr_len, "nsh length field exceeds buffer");
        return Verdict::Corrupt;
    }

    let next_protocol = match NextProtocol::try_from(data[3]) {
        Ok(next_protocol) => next_protocol,
        Err(code) => {
            debug!(code, "unknown nsh next protocol");
            return Verdict::Corrupt;
        }
    };

    registry.dispatch(
        batch,
        packet,
        &data[hdr_len..],
        next_protocol.ether_type(),
        ORIGIN,
    )
}
