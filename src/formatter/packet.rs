use crate::utils::hex::to_hex;
use std::fmt;

/// Packet being built. Only the command can be changed before it is
/// finalized by `Protocol::finalize`.
#[derive(Debug)]
pub struct PendingPacket {
    command_index: usize,
    bytes: Vec<u8>,
}

impl PendingPacket {
    pub(crate) fn new(command_index: usize, bytes: Vec<u8>) -> PendingPacket {
        PendingPacket {
            command_index,
            bytes,
        }
    }

    pub fn set_command(&mut self, command: u8) {
        self.bytes[self.command_index] = command;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Finalized packet, ready for the radio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet(Vec<u8>);

impl Packet {
    pub(crate) fn new(bytes: Vec<u8>) -> Packet {
        Packet(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(&self.0))
    }
}
