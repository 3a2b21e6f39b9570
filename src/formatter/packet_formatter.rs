use super::packet::{Packet, PendingPacket};
use super::protocol::{NamedCommand, Protocol};
use super::settings::{FormatterSettings, SequencePolicy};
use super::step::{plan_steps, Step};
use crate::base::bulb_id::BulbId;
use crate::base::group::Group;
use crate::base::remote_type::RemoteType;
use crate::base::status::Status;
use crate::error::CodecError;
use crate::state::group_state::GroupStateView;
use log::debug;
use serde_derive::Serialize;

/// Result of decoding a received packet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedPacket {
    #[serde(flatten)]
    pub bulb_id: BulbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<NamedCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_id: Option<u8>,
}

type StepFunction = fn(&mut PacketFormatter) -> Packet;

/// Builds and parses packets for one remote type.
///
/// The only state kept between calls is the rolling sequence number and the
/// target set by `prepare`.
pub struct PacketFormatter {
    protocol: &'static Protocol,
    settings: FormatterSettings,
    sequence: u8,
    device_id: u16,
    group: Group,
}

impl PacketFormatter {
    pub fn new(protocol: &'static Protocol, settings: FormatterSettings) -> PacketFormatter {
        PacketFormatter {
            protocol,
            settings,
            sequence: 0,
            device_id: 0,
            group: Group::All,
        }
    }

    pub fn for_remote_type(
        remote_type: RemoteType,
        settings: FormatterSettings,
    ) -> Result<PacketFormatter, CodecError> {
        match remote_type.protocol() {
            Some(p) => Ok(PacketFormatter::new(p, settings)),
            None => Err(CodecError::UnsupportedRemote(remote_type)),
        }
    }

    pub fn protocol(&self) -> &'static Protocol {
        self.protocol
    }

    pub fn remote_type(&self) -> RemoteType {
        self.protocol.remote_type
    }

    /// Select the device and group following commands are sent to
    pub fn prepare<G>(&mut self, device_id: u16, group: G)
    where
        G: Into<Group>,
    {
        self.device_id = device_id;
        self.group = group.into();
    }

    pub fn bulb_id(&self) -> BulbId {
        BulbId::new(self.device_id, self.group, self.protocol.remote_type)
    }

    /// Sequence number the next packet will carry
    pub fn next_sequence(&self) -> u8 {
        match self.settings.sequence {
            SequencePolicy::Counter => self.sequence,
            SequencePolicy::Fixed(s) => s,
        }
    }

    pub fn can_handle(&self, packet: &[u8]) -> bool {
        self.protocol.can_handle(packet)
    }

    pub fn initialize_packet(&mut self, group: Group) -> PendingPacket {
        let sequence = self.next_sequence();
        self.sequence = self.sequence.wrapping_add(1);
        self.protocol.initialize(self.device_id, group, sequence)
    }

    pub fn finalize_packet(&self, pending: PendingPacket) -> Packet {
        let packet = self.protocol.finalize(pending);
        debug!("{} packet: {}", self.protocol.remote_type, packet);
        packet
    }

    fn command_to_group(&mut self, group: Group, command: u8) -> Packet {
        let mut pending = self.initialize_packet(group);
        pending.set_command(command);
        self.finalize_packet(pending)
    }

    /// Build a packet with an arbitrary command byte.
    ///
    /// `_arg` is there for remotes with command arguments, this layout has none.
    pub fn command(&mut self, command: u8, _arg: u8) -> Packet {
        self.command_to_group(self.group, command)
    }

    pub fn update_status(&mut self, status: Status, group: Group) -> Packet {
        let c = &self.protocol.commands;
        let command = match status {
            Status::On => c.on,
            Status::Off => c.off,
        };
        self.command_to_group(group, command)
    }

    pub fn increase_brightness(&mut self) -> Packet {
        self.command(self.protocol.commands.brightness_up, 0)
    }

    pub fn decrease_brightness(&mut self) -> Packet {
        self.command(self.protocol.commands.brightness_down, 0)
    }

    pub fn increase_temperature(&mut self) -> Packet {
        self.command(self.protocol.commands.temperature_up, 0)
    }

    pub fn decrease_temperature(&mut self) -> Packet {
        self.command(self.protocol.commands.temperature_down, 0)
    }

    /// Reach an absolute step by sending relative steps.
    ///
    /// Returns the packets in the order they should be sent.
    pub fn value_by_steps(
        &mut self,
        increase: StepFunction,
        decrease: StepFunction,
        intervals: u8,
        target: u8,
        known: Option<u8>,
    ) -> Vec<Packet> {
        let plan = plan_steps(intervals, target, known, self.settings.unknown_state);
        let mut packets = Vec::with_capacity(plan.len());
        for step in plan {
            packets.push(match step {
                Step::Increase => increase(self),
                Step::Decrease => decrease(self),
            });
        }
        packets
    }

    /// Set brightness, 0 - 100
    pub fn update_brightness(&mut self, value: u8, states: &dyn GroupStateView) -> Vec<Packet> {
        let intervals = self.protocol.brightness_intervals;
        let known = states
            .get(&self.bulb_id())
            .and_then(|s| s.brightness)
            .map(|b| b / intervals);
        self.value_by_steps(
            PacketFormatter::increase_brightness,
            PacketFormatter::decrease_brightness,
            intervals,
            value / intervals,
            known,
        )
    }

    /// Set colour temperature, 0 - 100
    pub fn update_temperature(&mut self, value: u8, states: &dyn GroupStateView) -> Vec<Packet> {
        let intervals = self.protocol.temperature_intervals;
        let known = states
            .get(&self.bulb_id())
            .and_then(|s| s.kelvin)
            .map(|k| k / intervals);
        self.value_by_steps(
            PacketFormatter::increase_temperature,
            PacketFormatter::decrease_temperature,
            intervals,
            value / intervals,
            known,
        )
    }

    fn check_length(&self, packet: &[u8]) -> Result<(), CodecError> {
        if packet.len() != self.protocol.packet_length {
            return Err(CodecError::InvalidLength {
                expected: self.protocol.packet_length,
                actual: packet.len(),
            });
        }
        Ok(())
    }

    /// Decode a received packet.
    ///
    /// Also reseeds the sequence counter so the next packet sent follows the
    /// received one.
    pub fn parse_packet(&mut self, packet: &[u8]) -> Result<DecodedPacket, CodecError> {
        self.check_length(packet)?;
        let p = self.protocol;
        let command = packet[p.command_index];
        let group = p.wire_to_group(packet[p.group_index]);
        let bulb_id = BulbId::new(p.device_id(packet), group, p.remote_type);

        self.sequence = packet[p.sequence_index].wrapping_add(1);

        let mut decoded = DecodedPacket {
            bulb_id,
            state: None,
            command: None,
            button_id: None,
        };
        // On/off only for single zones, the target is ambiguous otherwise
        if !group.is_all() {
            if command == p.commands.on {
                decoded.state = Some(Status::On);
            } else if command == p.commands.off {
                decoded.state = Some(Status::Off);
            }
        }
        match p.named_command(command) {
            Some(named) => decoded.command = Some(named),
            None => decoded.button_id = Some(command),
        }
        debug!("Decoded {}: {:?}", bulb_id, decoded);
        Ok(decoded)
    }

    /// Human readable dump of a packet
    pub fn format_packet(&self, packet: &[u8]) -> Result<String, CodecError> {
        self.check_length(packet)?;
        let p = self.protocol;
        let mut s = String::new();
        s += &format!("Request type  : {:02X}\n", packet[p.command_index]);
        s += &format!(
            "Device ID     : {:02X}{:02X}\n",
            packet[p.device_id_index],
            packet[p.device_id_index + 1]
        );
        s += &format!("Group         : {:02X}\n", packet[p.group_index]);
        s += &format!("Sequence Num. : {:02X}\n", packet[p.sequence_index]);
        s += &format!("Payload Chksum: {:02X}\n", packet[p.checksum_index]);
        Ok(s)
    }
}
