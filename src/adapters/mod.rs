pub mod console_prompt;
pub mod filesystem;
pub mod line_prompt;
pub mod system_address_lookup;

pub use console_prompt::ConsolePrompt;
pub use filesystem::FilesystemStore;
pub use line_prompt::LinePrompt;
pub use system_address_lookup::SystemAddressLookup;
