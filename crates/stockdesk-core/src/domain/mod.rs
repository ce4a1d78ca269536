//! # Domain Types
//!
//! Validated domain types shared by the client, the validator, and the CLI.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Normalized ticker of 1-5 Latin letters |

mod symbol;

pub use symbol::Symbol;
