//! `AddressLookup` backed by the OS resolver and routing table.

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use crate::ports::AddressLookup;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAddressLookup;

impl SystemAddressLookup {
    pub fn new() -> Self {
        Self
    }
}

impl AddressLookup for SystemAddressLookup {
    fn hostname_address(&self) -> io::Result<IpAddr> {
        let hostname = gethostname::gethostname().into_string().map_err(|raw| {
            io::Error::new(io::ErrorKind::InvalidData, format!("hostname {:?} is not UTF-8", raw))
        })?;

        (hostname.as_str(), 0)
            .to_socket_addrs()?
            .map(|addr| addr.ip())
            .find(IpAddr::is_ipv4)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no IPv4 address found for host '{}'", hostname),
                )
            })
    }

    fn route_probe(&self, target: SocketAddr) -> io::Result<IpAddr> {
        let bind_addr: SocketAddr = match target {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };

        // The socket is closed when it drops, on every return path.
        let socket = UdpSocket::bind(bind_addr)?;
        socket.connect(target)?;
        Ok(socket.local_addr()?.ip())
    }
}
