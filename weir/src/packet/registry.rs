//! Ethertype-indexed dispatch table routing packet bytes to protocol
//! handlers.
//!
//! The registry is wired once at startup (`&mut self`) and only read on the
//! packet path (`&self`), so a shared reference can be handed to any number
//! of capture threads without locking.

use std::collections::HashMap;

use network_types::eth::EtherType;
use thiserror::Error;
use tracing::debug;

use crate::packet::{
    opts::DispatchOptions,
    types::{Packet, PacketBatch, Verdict},
};

/// A protocol handler bound in the registry.
///
/// Handlers receive the registry itself so decapsulators can re-dispatch
/// their inner payload.
pub type Handler =
    Box<dyn Fn(&DispatchRegistry, &mut PacketBatch, &mut Packet, &[u8]) -> Verdict + Send + Sync>;

/// Errors raised while wiring handlers at startup.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two modules tried to claim the same ethertype.
    #[error("a handler is already bound to ethertype {}", .0.as_str())]
    AlreadyBound(EtherType),
}

/// Ethertype-indexed table of protocol handlers.
pub struct DispatchRegistry {
    handlers: HashMap<EtherType, Handler>,
    max_decap_depth: u8,
}

impl DispatchRegistry {
    pub fn new(opts: &DispatchOptions) -> Self {
        Self {
            handlers: HashMap::new(),
            max_decap_depth: opts.max_decap_depth,
        }
    }

    /// Binds `handler` for packets tagged with `ether_type`.
    ///
    /// The binding lasts for the life of the registry; there is no
    /// unregistration path. Rebinding an occupied key is a wiring bug and
    /// fails.
    pub fn register<H>(&mut self, ether_type: EtherType, handler: H) -> Result<(), RegistryError>
    where
        H: Fn(&DispatchRegistry, &mut PacketBatch, &mut Packet, &[u8]) -> Verdict
            + Send
            + Sync
            + 'static,
    {
        if self.handlers.contains_key(&ether_type) {
            return Err(RegistryError::AlreadyBound(ether_type));
        }
        self.handlers.insert(ether_type, Box::new(handler));
        Ok(())
    }

    /// Routes `data` to the handler bound for `ether_type` and returns its
    /// verdict verbatim.
    ///
    /// `origin` names the layer that produced `data` and is recorded on the
    /// packet for downstream diagnostics. Each dispatch counts one level of
    /// decapsulation against the configured ceiling; a chain that exceeds it
    /// is reported corrupt rather than followed further.
    pub fn dispatch(
        &self,
        batch: &mut PacketBatch,
        packet: &mut Packet,
        data: &[u8],
        ether_type: EtherType,
        origin: &'static str,
    ) -> Verdict {
        let Some(handler) = self.handlers.get(&ether_type) else {
            debug!(
                ether_type = ether_type.as_str(),
                origin, "no handler bound"
            );
            return Verdict::Unsupported;
        };

        if packet.decap_depth >= self.max_decap_depth {
            debug!(
                ether_type = ether_type.as_str(),
                origin,
                depth = packet.decap_depth,
                "decapsulation depth ceiling reached"
            );
            return Verdict::Corrupt;
        }

        packet.decap_depth += 1;
        packet.decapsulated_by = Some(origin);
        batch.dispatched += 1;

        let verdict = handler(self, batch, packet, data);

        packet.decap_depth -= 1;
        verdict
    }
}
