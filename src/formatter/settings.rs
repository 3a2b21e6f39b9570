use crate::DynResult;
use serde_derive::Deserialize;
use std::path::Path;

/// Where outgoing sequence numbers come from
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SequencePolicy {
    /// Rolling counter, reseeded from received packets
    #[default]
    Counter,
    /// Same sequence number in every packet
    Fixed(u8),
}

/// Baseline for step commands when the current value isn't known
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnknownStatePolicy {
    /// Step all the way down first, then up to the target
    #[default]
    Reset,
    /// Assume the lowest step
    AssumeFloor,
    /// Don't send anything
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct FormatterSettings {
    pub sequence: SequencePolicy,
    pub unknown_state: UnknownStatePolicy,
}

pub fn from_json(json: &str) -> DynResult<FormatterSettings> {
    Ok(serde_json::from_str(json)?)
}

pub fn load<P: AsRef<Path>>(path: P) -> DynResult<FormatterSettings> {
    let json = std::fs::read_to_string(path)?;
    from_json(&json)
}

#[cfg(test)]
mod test {
    use super::{from_json, FormatterSettings, SequencePolicy, UnknownStatePolicy};

    #[test]
    fn defaults_test() {
        let s = from_json("{}").unwrap();
        assert_eq!(s, FormatterSettings::default());
        assert_eq!(s.sequence, SequencePolicy::Counter);
        assert_eq!(s.unknown_state, UnknownStatePolicy::Reset);
    }

    #[test]
    fn parse_test() {
        let s = from_json(r#"{"sequence": {"fixed": 2}, "unknown_state": "skip"}"#).unwrap();
        assert_eq!(s.sequence, SequencePolicy::Fixed(2));
        assert_eq!(s.unknown_state, UnknownStatePolicy::Skip);
        let s = from_json(r#"{"unknown_state": "assume_floor"}"#).unwrap();
        assert_eq!(s.unknown_state, UnknownStatePolicy::AssumeFloor);
        assert!(from_json(r#"{"sequence": "random"}"#).is_err());
    }
}
