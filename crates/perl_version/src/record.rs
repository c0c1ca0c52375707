// Cache records. A record mirrors the fields of a Version one to one and is
// never re-parsed or validated on the way back.

use serde::{Deserialize, Serialize};

use crate::value::Version;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub original: String,
    pub alpha: bool,
    pub qv: bool,

    /// older caches call this field "version"
    #[serde(alias = "version")]
    pub components: Vec<i64>,
}

impl From<Version> for VersionRecord {
    fn from(v: Version) -> Self {
        Self {
            original: v.original,
            alpha: v.alpha,
            qv: v.qv,
            components: v.components,
        }
    }
}

impl From<VersionRecord> for Version {
    fn from(r: VersionRecord) -> Self {
        Self {
            original: r.original,
            alpha: r.alpha,
            qv: r.qv,
            components: r.components,
        }
    }
}

pub fn encode(v: &Version) -> VersionRecord {
    VersionRecord::from(v.clone())
}

pub fn decode(record: VersionRecord) -> Version {
    Version::from(record)
}

impl Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        VersionRecord::deserialize(deserializer).map(decode)
    }
}

pub fn to_json(v: &Version) -> serde_json::Result<String> {
    serde_json::to_string(v)
}

pub fn from_json(s: &str) -> serde_json::Result<Version> {
    serde_json::from_str(s)
}
