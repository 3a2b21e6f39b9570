use crate::base::bulb_id::BulbId;
use crate::base::status::Status;
use std::collections::HashMap;

/// Last known state of one group, as tracked outside the codec
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GroupState {
    pub state: Option<Status>,
    /// 0 - 100
    pub brightness: Option<u8>,
    /// Colour temperature, 0 (warm) - 100 (cold)
    pub kelvin: Option<u8>,
}

impl GroupState {
    pub fn new() -> GroupState {
        GroupState::default()
    }

    pub fn with_brightness(mut self, brightness: u8) -> GroupState {
        self.brightness = Some(brightness);
        self
    }

    pub fn with_kelvin(mut self, kelvin: u8) -> GroupState {
        self.kelvin = Some(kelvin);
        self
    }

    pub fn with_state(mut self, state: Status) -> GroupState {
        self.state = Some(state);
        self
    }
}

/// Read only access to the group state store
pub trait GroupStateView {
    fn get(&self, id: &BulbId) -> Option<&GroupState>;
}

/// No state known for anything
pub struct NoState;

impl GroupStateView for NoState {
    fn get(&self, _id: &BulbId) -> Option<&GroupState> {
        None
    }
}

#[derive(Debug, Default)]
pub struct MemoryStateStore {
    states: HashMap<BulbId, GroupState>,
}

impl MemoryStateStore {
    pub fn new() -> MemoryStateStore {
        MemoryStateStore::default()
    }

    pub fn set(&mut self, id: BulbId, state: GroupState) {
        self.states.insert(id, state);
    }

    pub fn remove(&mut self, id: &BulbId) -> Option<GroupState> {
        self.states.remove(id)
    }
}

impl GroupStateView for MemoryStateStore {
    fn get(&self, id: &BulbId) -> Option<&GroupState> {
        self.states.get(id)
    }
}

#[cfg(test)]
mod test {
    use super::{GroupState, GroupStateView, MemoryStateStore};
    use crate::base::bulb_id::BulbId;
    use crate::base::remote_type::RemoteType;

    #[test]
    fn store_lookup_test() {
        let mut store = MemoryStateStore::new();
        let id = BulbId::new(0x1234, 2, RemoteType::Casalux);
        store.set(id, GroupState::new().with_brightness(40));
        assert_eq!(store.get(&id).and_then(|s| s.brightness), Some(40));
        assert_eq!(store.get(&id).and_then(|s| s.kelvin), None);
        assert!(store
            .get(&BulbId::new(0x1234, 2, RemoteType::Cct))
            .is_none());
        store.remove(&id);
        assert!(store.get(&id).is_none());
    }
}
