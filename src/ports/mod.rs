mod address_lookup;
mod repository_filesystem;
mod value_prompt;

pub use address_lookup::AddressLookup;
pub use repository_filesystem::RepositoryFilesystem;
pub use value_prompt::ValuePrompt;
