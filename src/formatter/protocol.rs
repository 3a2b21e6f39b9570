use super::packet::{Packet, PendingPacket};
use crate::base::group::Group;
use crate::base::remote_type::RemoteType;
use serde::{Serialize, Serializer};
use std::fmt;

/// Wire codes for the logical actions of a remote
#[derive(Debug)]
pub struct CommandTable {
    pub on: u8,
    pub off: u8,
    pub brightness_up: u8,
    pub brightness_down: u8,
    pub temperature_up: u8,
    pub temperature_down: u8,
}

/// Relative commands reported when decoding packets
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NamedCommand {
    LevelUp,
    LevelDown,
    TemperatureUp,
    TemperatureDown,
}

impl NamedCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamedCommand::LevelUp => "level_up",
            NamedCommand::LevelDown => "level_down",
            NamedCommand::TemperatureUp => "temperature_up",
            NamedCommand::TemperatureDown => "temperature_down",
        }
    }
}

impl fmt::Display for NamedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NamedCommand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Packet layout of one remote type.
///
/// All offsets index into the payload as handed over by the radio, with the
/// length byte already removed.
#[derive(Debug)]
pub struct Protocol {
    pub remote_type: RemoteType,
    pub packet_length: usize,
    pub command_index: usize,
    pub protocol_id_index: usize,
    pub protocol_id: u8,
    /// Two bytes, big endian
    pub device_id_index: usize,
    pub group_index: usize,
    pub sequence_index: usize,
    pub checksum_index: usize,
    /// Number of leading bytes summed into the checksum
    pub checksum_span: usize,
    /// Placeholder command written by initialize. Not a valid command.
    pub default_command: u8,
    pub commands: CommandTable,
    /// Wire byte for zone 1, 2, ...
    pub zones: &'static [u8],
    pub zone_all: u8,
    pub brightness_intervals: u8,
    pub temperature_intervals: u8,
}

impl Protocol {
    pub fn can_handle(&self, packet: &[u8]) -> bool {
        packet.len() == self.packet_length && packet[self.protocol_id_index] == self.protocol_id
    }

    /// True if a packet of `other` could be mistaken for one of ours
    pub fn collides_with(&self, other: &Protocol) -> bool {
        if self.packet_length != other.packet_length {
            return false;
        }
        if self.protocol_id_index == other.protocol_id_index {
            self.protocol_id == other.protocol_id
        } else {
            // Different id positions, both checks can pass on the same bytes
            true
        }
    }

    pub fn checksum(&self, packet: &[u8]) -> u8 {
        packet[..self.checksum_span]
            .iter()
            .fold(0u8, |sum, b| sum.wrapping_add(*b))
    }

    pub fn verify_checksum(&self, packet: &[u8]) -> bool {
        packet.len() == self.packet_length && packet[self.checksum_index] == self.checksum(packet)
    }

    pub fn group_to_wire(&self, group: Group) -> u8 {
        match group {
            Group::Zone(z) if z >= 1 && usize::from(z) <= self.zones.len() => {
                self.zones[usize::from(z - 1)]
            }
            _ => self.zone_all,
        }
    }

    /// Returns `Group::All` for anything that isn't a single known zone
    pub fn wire_to_group(&self, wire: u8) -> Group {
        match self.zones.iter().position(|z| *z == wire) {
            Some(i) => Group::Zone(i as u8 + 1),
            None => Group::All,
        }
    }

    pub fn device_id(&self, packet: &[u8]) -> u16 {
        u16::from_be_bytes([packet[self.device_id_index], packet[self.device_id_index + 1]])
    }

    pub fn named_command(&self, code: u8) -> Option<NamedCommand> {
        let c = &self.commands;
        if code == c.brightness_up {
            Some(NamedCommand::LevelUp)
        } else if code == c.brightness_down {
            Some(NamedCommand::LevelDown)
        } else if code == c.temperature_up {
            Some(NamedCommand::TemperatureUp)
        } else if code == c.temperature_down {
            Some(NamedCommand::TemperatureDown)
        } else {
            None
        }
    }

    /// Fresh packet with every field except the command filled in
    pub fn initialize(&self, device_id: u16, group: Group, sequence: u8) -> PendingPacket {
        let mut bytes = vec![0u8; self.packet_length];
        bytes[self.command_index] = self.default_command;
        bytes[self.protocol_id_index] = self.protocol_id;
        bytes[self.device_id_index..self.device_id_index + 2]
            .copy_from_slice(&device_id.to_be_bytes());
        bytes[self.group_index] = self.group_to_wire(group);
        bytes[self.sequence_index] = sequence;
        bytes[self.checksum_index] = 0;
        PendingPacket::new(self.command_index, bytes)
    }

    pub fn finalize(&self, pending: PendingPacket) -> Packet {
        let mut bytes = pending.into_bytes();
        bytes[self.checksum_index] = self.checksum(&bytes);
        Packet::new(bytes)
    }
}

#[cfg(test)]
mod test {
    use super::NamedCommand;
    use crate::base::group::Group;
    use crate::protocols::casalux::CASALUX;

    #[test]
    fn checksum_test() {
        let pkt = [0x6f, 0x00, 0xdd, 0x4e, 0x51, 0xd1, 0x00, 0x02, 0xbc];
        assert_eq!(CASALUX.checksum(&pkt), 0xbc);
        assert!(CASALUX.verify_checksum(&pkt));
        let mut bad = pkt;
        bad[4] = 0x52;
        assert!(!CASALUX.verify_checksum(&bad));
        // Sequence number isn't covered
        let mut seq = pkt;
        seq[7] = 0x99;
        assert!(CASALUX.verify_checksum(&seq));
    }

    #[test]
    fn initialize_test() {
        let pending = CASALUX.initialize(0x4e51, Group::Zone(3), 7);
        let pkt = CASALUX.finalize(pending);
        // 0xdd + 0x4e + 0x51 + 0xd4 = 0x250
        assert_eq!(
            pkt.as_bytes(),
            &[0x00, 0x00, 0xdd, 0x4e, 0x51, 0xd4, 0x00, 0x07, 0x50]
        );
        assert!(CASALUX.verify_checksum(pkt.as_bytes()));
    }

    #[test]
    fn named_command_test() {
        assert_eq!(CASALUX.named_command(0x66), Some(NamedCommand::LevelUp));
        assert_eq!(CASALUX.named_command(0x65), Some(NamedCommand::LevelDown));
        assert_eq!(CASALUX.named_command(0x6a), Some(NamedCommand::TemperatureUp));
        assert_eq!(CASALUX.named_command(0x69), Some(NamedCommand::TemperatureDown));
        assert_eq!(CASALUX.named_command(0x6f), None);
    }

    #[test]
    fn collision_test() {
        assert!(CASALUX.collides_with(&CASALUX));
    }
}
