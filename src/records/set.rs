//! The standard record set.
//!
//! [`AnyRecord`] is what batch decoding yields: one variant per registered
//! record type. [`standard_registry`] builds a registry with every v3
//! record type this crate knows; callers needing a different set build
//! their own [`Registry`].

use serde::Serialize;

use crate::codec::{encode_record, CodecResult, EncodeLine, Mode, Record, Registry};
use crate::schema::SchemaResult;

use super::file::{FileDescription, FileTerminator};
use super::individual::{IndividualEvent, IndividualInfo};
use super::meet::Meet;
use super::relay::{RelayEvent, RelayName};
use super::team::{TeamEntry, TeamId};

/// One record of any registered type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "record", rename_all = "snake_case")]
pub enum AnyRecord {
    FileDescription(FileDescription),
    Meet(Meet),
    TeamId(TeamId),
    TeamEntry(TeamEntry),
    IndividualEvent(IndividualEvent),
    IndividualInfo(IndividualInfo),
    RelayEvent(RelayEvent),
    RelayName(RelayName),
    FileTerminator(FileTerminator),
}

impl AnyRecord {
    /// The 2-character identifier of the wrapped record type.
    pub fn identifier(&self) -> &'static str {
        match self {
            AnyRecord::FileDescription(_) => FileDescription::IDENTIFIER,
            AnyRecord::Meet(_) => Meet::IDENTIFIER,
            AnyRecord::TeamId(_) => TeamId::IDENTIFIER,
            AnyRecord::TeamEntry(_) => TeamEntry::IDENTIFIER,
            AnyRecord::IndividualEvent(_) => IndividualEvent::IDENTIFIER,
            AnyRecord::IndividualInfo(_) => IndividualInfo::IDENTIFIER,
            AnyRecord::RelayEvent(_) => RelayEvent::IDENTIFIER,
            AnyRecord::RelayName(_) => RelayName::IDENTIFIER,
            AnyRecord::FileTerminator(_) => FileTerminator::IDENTIFIER,
        }
    }
}

impl EncodeLine for AnyRecord {
    fn encode_line(&self, mode: Mode) -> CodecResult<String> {
        match self {
            AnyRecord::FileDescription(r) => encode_record(r, mode),
            AnyRecord::Meet(r) => encode_record(r, mode),
            AnyRecord::TeamId(r) => encode_record(r, mode),
            AnyRecord::TeamEntry(r) => encode_record(r, mode),
            AnyRecord::IndividualEvent(r) => encode_record(r, mode),
            AnyRecord::IndividualInfo(r) => encode_record(r, mode),
            AnyRecord::RelayEvent(r) => encode_record(r, mode),
            AnyRecord::RelayName(r) => encode_record(r, mode),
            AnyRecord::FileTerminator(r) => encode_record(r, mode),
        }
    }
}

impl From<FileDescription> for AnyRecord {
    fn from(record: FileDescription) -> Self {
        AnyRecord::FileDescription(record)
    }
}

impl From<Meet> for AnyRecord {
    fn from(record: Meet) -> Self {
        AnyRecord::Meet(record)
    }
}

impl From<TeamId> for AnyRecord {
    fn from(record: TeamId) -> Self {
        AnyRecord::TeamId(record)
    }
}

impl From<TeamEntry> for AnyRecord {
    fn from(record: TeamEntry) -> Self {
        AnyRecord::TeamEntry(record)
    }
}

impl From<IndividualEvent> for AnyRecord {
    fn from(record: IndividualEvent) -> Self {
        AnyRecord::IndividualEvent(record)
    }
}

impl From<IndividualInfo> for AnyRecord {
    fn from(record: IndividualInfo) -> Self {
        AnyRecord::IndividualInfo(record)
    }
}

impl From<RelayEvent> for AnyRecord {
    fn from(record: RelayEvent) -> Self {
        AnyRecord::RelayEvent(record)
    }
}

impl From<RelayName> for AnyRecord {
    fn from(record: RelayName) -> Self {
        AnyRecord::RelayName(record)
    }
}

impl From<FileTerminator> for AnyRecord {
    fn from(record: FileTerminator) -> Self {
        AnyRecord::FileTerminator(record)
    }
}

/// Builds a registry with every standard record type registered.
pub fn standard_registry() -> SchemaResult<Registry<AnyRecord>> {
    let mut registry = Registry::new();
    registry.register::<FileDescription>()?;
    registry.register::<Meet>()?;
    registry.register::<TeamId>()?;
    registry.register::<TeamEntry>()?;
    registry.register::<IndividualEvent>()?;
    registry.register::<IndividualInfo>()?;
    registry.register::<RelayEvent>()?;
    registry.register::<RelayName>()?;
    registry.register::<FileTerminator>()?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_registers_all() {
        let registry = standard_registry().unwrap();
        assert_eq!(registry.len(), 9);
        for identifier in ["A0", "B1", "C1", "C2", "D0", "D3", "E0", "F0", "Z0"] {
            assert!(registry.contains(identifier), "missing {}", identifier);
        }
    }
}
