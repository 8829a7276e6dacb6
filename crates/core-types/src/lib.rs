pub mod credentials;
pub mod error;
pub mod handle;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use credentials::{PasswordVerifier, PlaintextVerifier};
pub use error::{parse_input, CoreError};
pub use handle::derive_login_handle;
pub use structs::{Account, MoonMission, NewAccount};
