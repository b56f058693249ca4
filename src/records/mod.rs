//! The v3 record catalog.
//!
//! One struct per record type, each declaring its schema and converting
//! itself to and from the codec's field-value map. The codec engine never
//! names these types; they reach it through the [`crate::codec::Record`]
//! trait and the registry.

mod convert;
mod file;
mod individual;
mod meet;
mod relay;
mod set;
mod team;

pub use file::{FileDescription, FileTerminator};
pub use individual::{IndividualEvent, IndividualInfo};
pub use meet::Meet;
pub use relay::{RelayEvent, RelayName};
pub use set::{standard_registry, AnyRecord};
pub use team::{TeamEntry, TeamId};
