//! Test double for `AddressLookup`.

use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};

use crate::ports::AddressLookup;

#[derive(Debug, Default)]
struct ProbeState {
    calls: usize,
    open: usize,
    last_target: Option<SocketAddr>,
}

/// Scripted `AddressLookup` that tracks route probes and their sockets.
///
/// Clones share probe state, so a test can hand one clone to production
/// code and inspect the other.
#[derive(Debug, Clone)]
pub struct FakeAddressLookup {
    hostname: Result<IpAddr, io::ErrorKind>,
    probe: Result<IpAddr, io::ErrorKind>,
    state: Arc<Mutex<ProbeState>>,
}

/// Stand-in for the probe socket; counts as open until dropped.
struct ProbeSocket {
    state: Arc<Mutex<ProbeState>>,
}

impl ProbeSocket {
    fn open(state: &Arc<Mutex<ProbeState>>) -> Self {
        state.lock().unwrap().open += 1;
        Self { state: Arc::clone(state) }
    }
}

impl Drop for ProbeSocket {
    fn drop(&mut self) {
        self.state.lock().unwrap().open -= 1;
    }
}

impl Default for FakeAddressLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeAddressLookup {
    /// Both lookups fail until configured.
    pub fn new() -> Self {
        Self {
            hostname: Err(io::ErrorKind::NotFound),
            probe: Err(io::ErrorKind::NetworkUnreachable),
            state: Arc::default(),
        }
    }

    pub fn hostname(mut self, result: Result<IpAddr, io::ErrorKind>) -> Self {
        self.hostname = result;
        self
    }

    pub fn probe(mut self, result: Result<IpAddr, io::ErrorKind>) -> Self {
        self.probe = result;
        self
    }

    pub fn probe_calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    /// Probe sockets currently open.
    pub fn open_probes(&self) -> usize {
        self.state.lock().unwrap().open
    }

    pub fn last_probe_target(&self) -> Option<SocketAddr> {
        self.state.lock().unwrap().last_target
    }
}

impl AddressLookup for FakeAddressLookup {
    fn hostname_address(&self) -> io::Result<IpAddr> {
        self.hostname.map_err(|kind| io::Error::new(kind, "fake hostname lookup failed"))
    }

    fn route_probe(&self, target: SocketAddr) -> io::Result<IpAddr> {
        {
            let mut state = self.state.lock().unwrap();
            state.calls += 1;
            state.last_target = Some(target);
        }
        let _socket = ProbeSocket::open(&self.state);
        self.probe.map_err(|kind| io::Error::new(kind, "fake route probe failed"))
    }
}
