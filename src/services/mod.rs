mod address_resolver;

pub use address_resolver::{AddressResolver, LOOPBACK_ALIAS, ROUTE_PROBE_TARGET};
