use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Value used on the wire and in state keys for "all zones"
pub const GROUP_ALL: u8 = 255;

/// Zone addressed under one device id.
///
/// Zones are 1 based. Zone 0 is accepted when constructing from a number
/// and means all zones, same as the remotes' "all" button.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Group {
    Zone(u8),
    All,
}

impl Group {
    pub fn new(group: u8) -> Group {
        match group {
            0 | GROUP_ALL => Group::All,
            z => Group::Zone(z),
        }
    }

    /// Zone number, or 255 for all zones
    pub fn value(&self) -> u8 {
        match self {
            Group::Zone(z) => *z,
            Group::All => GROUP_ALL,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Group::All)
    }
}

impl From<u8> for Group {
    fn from(group: u8) -> Group {
        Group::new(group)
    }
}

impl From<Group> for u8 {
    fn from(group: Group) -> u8 {
        group.value()
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        match self {
            Group::Zone(z) => z.fmt(fmt),
            Group::All => write!(fmt, "all"),
        }
    }
}

impl FromStr for Group {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Group::All);
        }
        u8::from_str(s).map(Group::new)
    }
}

impl Serialize for Group {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.value())
    }
}

impl<'de> Deserialize<'de> for Group {
    fn deserialize<D>(deserializer: D) -> Result<Group, D::Error>
    where
        D: Deserializer<'de>,
    {
        u8::deserialize(deserializer).map(Group::new)
    }
}

#[cfg(test)]
mod test {
    use super::Group;

    #[test]
    fn group_value_test() {
        assert_eq!(Group::new(3), Group::Zone(3));
        assert_eq!(Group::new(0), Group::All);
        assert_eq!(Group::new(255), Group::All);
        assert_eq!(Group::All.value(), 255);
        assert_eq!("all".parse::<Group>().unwrap(), Group::All);
        assert_eq!("2".parse::<Group>().unwrap(), Group::Zone(2));
        assert!("x".parse::<Group>().is_err());
    }
}
