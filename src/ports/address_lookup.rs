//! Network address lookups used to discover the local IP.

use std::io;
use std::net::{IpAddr, SocketAddr};

/// Port for the two OS lookups the local IP discovery relies on.
pub trait AddressLookup {
    /// Address the machine's hostname resolves to through local name resolution.
    fn hostname_address(&self) -> io::Result<IpAddr>;

    /// Local address the OS routes through to reach `target`.
    ///
    /// No data is sent. Any socket opened for the probe must be released
    /// before this returns, on success and on failure.
    fn route_probe(&self, target: SocketAddr) -> io::Result<IpAddr>;
}

impl<T: AddressLookup + ?Sized> AddressLookup for &T {
    fn hostname_address(&self) -> io::Result<IpAddr> {
        (**self).hostname_address()
    }

    fn route_probe(&self, target: SocketAddr) -> io::Result<IpAddr> {
        (**self).route_probe(target)
    }
}
