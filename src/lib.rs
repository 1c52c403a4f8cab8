//! secret-launcher - run a command with a JSON secrets file as its environment.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Load secrets and launch the child
//! │   ├── check         # Validate a secrets file without launching
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # Resolved runtime configuration
//!     ├── secrets       # Secrets file parsing (SecretStore)
//!     ├── launch        # Child process launch and exit codes
//!     └── validation    # Key/value rules and scalar coercion
//! ```
//!
//! The launcher never mutates its own environment. Secrets are applied to the
//! child's `Command` only, on top of the inherited environment.

pub mod cli;
pub mod core;
pub mod error;
