use crate::ports::{AddressLookup, RepositoryFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: RepositoryFilesystem, L: AddressLookup> {
    filesystem: F,
    lookup: L,
}

impl<F: RepositoryFilesystem, L: AddressLookup> AppContext<F, L> {
    /// Create a new application context.
    pub fn new(filesystem: F, lookup: L) -> Self {
        Self { filesystem, lookup }
    }

    /// Get a reference to the project filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the address lookup.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}
