//! Card system: definitions, status modifiers and registry.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Immutable card data (damage, block, cost, statuses)
//! - `Card`: Shared handle to a definition, what the piles hold
//! - `StatusKind` / `StatusModifiers`: Strength, weak, vulnerable
//! - `CardRegistry`: Name-keyed lookup, with the canonical card set

pub mod definition;
pub mod registry;
pub mod status;

pub use definition::{Card, CardDefinition};
pub use registry::CardRegistry;
pub use status::{StatusKind, StatusModifiers};
