use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    On,
    Off,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::On => "ON",
            Status::Off => "OFF",
        }
    }
}

impl From<bool> for Status {
    fn from(on: bool) -> Status {
        if on {
            Status::On
        } else {
            Status::Off
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
