use crate::formatter::protocol::Protocol;
use crate::protocols::casalux;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Family of remote controls sharing one packet layout
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RemoteType {
    Rgbw,
    Cct,
    RgbCct,
    Fut089,
    Rgb,
    Fut091,
    Fut020,
    Casalux,
    Nlg,
    Unknown,
}

struct RemoteTypeEntry {
    remote_type: RemoteType,
    name: &'static str,
    aliases: &'static [&'static str],
}

static REMOTE_TYPES: [RemoteTypeEntry; 9] = [
    RemoteTypeEntry {
        remote_type: RemoteType::Rgbw,
        name: "rgbw",
        aliases: &["fut096"],
    },
    RemoteTypeEntry {
        remote_type: RemoteType::Cct,
        name: "cct",
        aliases: &["fut007"],
    },
    RemoteTypeEntry {
        remote_type: RemoteType::RgbCct,
        name: "rgb_cct",
        aliases: &["fut092"],
    },
    RemoteTypeEntry {
        remote_type: RemoteType::Fut089,
        name: "fut089",
        aliases: &[],
    },
    RemoteTypeEntry {
        remote_type: RemoteType::Rgb,
        name: "rgb",
        aliases: &["fut098"],
    },
    RemoteTypeEntry {
        remote_type: RemoteType::Fut091,
        name: "fut091",
        aliases: &["v2_cct"],
    },
    RemoteTypeEntry {
        remote_type: RemoteType::Fut020,
        name: "fut020",
        aliases: &[],
    },
    RemoteTypeEntry {
        remote_type: RemoteType::Casalux,
        name: "casalux",
        aliases: &[],
    },
    RemoteTypeEntry {
        remote_type: RemoteType::Nlg,
        name: "NLG",
        aliases: &[],
    },
];

impl RemoteType {
    /// Look up a remote type by name or alias, ignoring case.
    ///
    /// Returns `RemoteType::Unknown` if nothing matches.
    pub fn from_name(name: &str) -> RemoteType {
        let found = REMOTE_TYPES.iter().find(|e| {
            e.name.eq_ignore_ascii_case(name) || e.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
        });
        match found {
            Some(e) => e.remote_type,
            None => {
                warn!("Tried to fetch remote config for unknown type: {}", name);
                RemoteType::Unknown
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match REMOTE_TYPES.iter().find(|e| e.remote_type == *self) {
            Some(e) => e.name,
            None => {
                warn!("Tried to fetch remote config name for unknown type: {:?}", self);
                "unknown"
            }
        }
    }

    /// Packet layout for this remote type, if a codec exists for it
    pub fn protocol(&self) -> Option<&'static Protocol> {
        match self {
            RemoteType::Casalux => Some(&casalux::CASALUX),
            _ => None,
        }
    }

    pub fn all() -> impl Iterator<Item = RemoteType> {
        REMOTE_TYPES.iter().map(|e| e.remote_type)
    }
}

impl fmt::Display for RemoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for RemoteType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match RemoteType::from_name(s) {
            RemoteType::Unknown => Err(format!("Unknown remote type '{}'", s)),
            t => Ok(t),
        }
    }
}

impl Serialize for RemoteType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for RemoteType {
    fn deserialize<D>(deserializer: D) -> Result<RemoteType, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(RemoteType::from_name(&name))
    }
}
