use super::group::Group;
use super::remote_type::RemoteType;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// One addressable target: a device id, a zone under it and the remote type
/// that speaks to it. Used as key into the group state store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BulbId {
    pub device_id: u16,
    #[serde(rename = "group_id")]
    pub group: Group,
    #[serde(rename = "device_type")]
    pub remote_type: RemoteType,
}

impl BulbId {
    pub fn new<G>(device_id: u16, group: G, remote_type: RemoteType) -> BulbId
    where
        G: Into<Group>,
    {
        BulbId {
            device_id,
            group: group.into(),
            remote_type,
        }
    }
}

impl fmt::Display for BulbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:04X}/{}/{}",
            self.device_id, self.group, self.remote_type
        )
    }
}
