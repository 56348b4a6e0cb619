//! Core domain types for the resolution engine.

mod compatibility;
mod instinct;
mod relationship;
mod subtype;
mod tritype;
mod type_number;

pub use compatibility::*;
pub use instinct::*;
pub use relationship::*;
pub use subtype::*;
pub use tritype::*;
pub use type_number::*;
