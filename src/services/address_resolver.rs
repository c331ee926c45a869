//! Local IP discovery.
//!
//! The hostname is resolved first. Some distributions map the hostname to
//! `127.0.1.1` in `/etc/hosts` when no real interface is configured for it;
//! in that case the OS routing table is asked which local address it would
//! use to reach a public host, by connecting a UDP socket without sending.

use std::net::{IpAddr, Ipv4Addr, SocketAddr, SocketAddrV4};

use tracing::{debug, warn};

use crate::ports::AddressLookup;

/// Placeholder address some systems return for the local hostname.
pub const LOOPBACK_ALIAS: Ipv4Addr = Ipv4Addr::new(127, 0, 1, 1);

/// Public address used only to select a route; nothing is sent to it.
pub const ROUTE_PROBE_TARGET: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(8, 8, 8, 8), 80));

/// Resolves the address other devices on the LAN can reach this machine at.
pub struct AddressResolver<L: AddressLookup> {
    lookup: L,
}

impl<L: AddressLookup> AddressResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolve the local IP, or `None` if it cannot be determined.
    ///
    /// Never fails: lookup errors are logged and reported as absence.
    pub fn resolve_local_ip(&self) -> Option<String> {
        let address = match self.lookup.hostname_address() {
            Ok(address) => address,
            Err(err) => {
                warn!("Error getting local IP from hostname: {}", err);
                return None;
            }
        };

        if address != IpAddr::V4(LOOPBACK_ALIAS) {
            return Some(address.to_string());
        }

        debug!("hostname resolved to {}, probing route to {}", LOOPBACK_ALIAS, ROUTE_PROBE_TARGET);
        match self.lookup.route_probe(ROUTE_PROBE_TARGET) {
            Ok(address) => Some(address.to_string()),
            Err(err) => {
                debug!("route probe failed: {}", err);
                None
            }
        }
    }
}
