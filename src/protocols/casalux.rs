use crate::base::remote_type::RemoteType;
use crate::formatter::protocol::{CommandTable, Protocol};

pub const PROTOCOL_ID: u8 = 0xdd; // Some remotes are reported to use 0x11

pub const COMMAND_INDEX: usize = 0;
pub const GROUP_INDEX: usize = 5;
pub const BRIGHTNESS_INTERVALS: u8 = 12;
pub const TEMPERATURE_INTERVALS: u8 = 13;

pub const ON: u8 = 0x6f;
pub const OFF: u8 = 0x60;

pub const GROUP_1: u8 = 0xd1;
pub const GROUP_2: u8 = 0xd2;
pub const GROUP_3: u8 = 0xd4;
pub const GROUP_4: u8 = 0xd8;
pub const GROUP_ALL: u8 = 0xdf;

pub const BRIGHTNESS_DOWN: u8 = 0x65;
pub const BRIGHTNESS_UP: u8 = 0x66;

pub const TEMPERATURE_DOWN: u8 = 0x69;
pub const TEMPERATURE_UP: u8 = 0x6a;

// Captured packet (group 1 on), length byte first:
// (09) 6F 00 DD 4E 51 D1 00 02 BC
//
// 0: Command
// 1: 00
// 2: Protocol id
// 3-4: Device id
// 5: Zone
// 6: 00
// 7: Sequence number
// 8: Checksum, low byte of the sum of bytes 0-6
pub static CASALUX: Protocol = Protocol {
    remote_type: RemoteType::Casalux,
    packet_length: 9,
    command_index: COMMAND_INDEX,
    protocol_id_index: 2,
    protocol_id: PROTOCOL_ID,
    device_id_index: 3,
    group_index: GROUP_INDEX,
    sequence_index: 7,
    checksum_index: 8,
    checksum_span: 7,
    default_command: 0x00,
    commands: CommandTable {
        on: ON,
        off: OFF,
        brightness_up: BRIGHTNESS_UP,
        brightness_down: BRIGHTNESS_DOWN,
        temperature_up: TEMPERATURE_UP,
        temperature_down: TEMPERATURE_DOWN,
    },
    zones: &[GROUP_1, GROUP_2, GROUP_3, GROUP_4],
    zone_all: GROUP_ALL,
    brightness_intervals: BRIGHTNESS_INTERVALS,
    temperature_intervals: TEMPERATURE_INTERVALS,
};
