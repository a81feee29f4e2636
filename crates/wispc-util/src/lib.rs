//! wispc-util - ambient foundation types shared by the wispc crates.
//!
//! Nothing here understands the scripting language itself. It provides the
//! small diagnostic plumbing every other crate reports failures through.

pub mod diagnostic;

pub use diagnostic::{Diagnostic, Handler, Level};
