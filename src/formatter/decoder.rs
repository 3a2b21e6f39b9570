use super::packet_formatter::{DecodedPacket, PacketFormatter};
use super::settings::FormatterSettings;
use crate::base::remote_type::RemoteType;
use crate::error::CodecError;
use log::{debug, warn};

/// Dispatches received packets to the formatter that can handle them
#[derive(Default)]
pub struct PacketDecoder {
    formatters: Vec<PacketFormatter>,
}

impl PacketDecoder {
    pub fn new() -> PacketDecoder {
        PacketDecoder::default()
    }

    pub fn with_remote_types(
        remote_types: &[RemoteType],
        settings: &FormatterSettings,
    ) -> Result<PacketDecoder, CodecError> {
        let mut decoder = PacketDecoder::new();
        for t in remote_types {
            decoder.register(PacketFormatter::for_remote_type(*t, settings.clone())?)?;
        }
        Ok(decoder)
    }

    /// Add a formatter. Fails if its packets can be confused with those of an
    /// already registered one.
    pub fn register(&mut self, formatter: PacketFormatter) -> Result<(), CodecError> {
        let protocol = formatter.protocol();
        if let Some(other) = self
            .formatters
            .iter()
            .find(|f| f.protocol().collides_with(protocol))
        {
            warn!(
                "Not registering {}, packets collide with {}",
                protocol.remote_type,
                other.remote_type()
            );
            return Err(CodecError::AmbiguousProtocol(
                other.remote_type(),
                protocol.remote_type,
            ));
        }
        self.formatters.push(formatter);
        Ok(())
    }

    pub fn formatter_mut(&mut self, remote_type: RemoteType) -> Option<&mut PacketFormatter> {
        self.formatters
            .iter_mut()
            .find(|f| f.remote_type() == remote_type)
    }

    /// Formatter for a packet without the length byte
    pub fn find(&self, payload: &[u8]) -> Option<&PacketFormatter> {
        self.formatters.iter().find(|f| f.can_handle(payload))
    }

    /// Decode a packet without the length byte
    pub fn decode(&mut self, payload: &[u8]) -> Option<DecodedPacket> {
        let formatter = self.formatters.iter_mut().find(|f| f.can_handle(payload));
        match formatter {
            Some(f) => f.parse_packet(payload).ok(),
            None => {
                debug!("No formatter for packet of length {}", payload.len());
                None
            }
        }
    }

    /// Decode a packet as received from the radio, starting with a length
    /// byte. Bytes following the payload are ignored.
    pub fn decode_radio_frame(&mut self, frame: &[u8]) -> Option<DecodedPacket> {
        self.decode(radio_payload(frame)?)
    }
}

/// Strip the leading length byte from a radio frame
pub fn radio_payload(frame: &[u8]) -> Option<&[u8]> {
    let (len, rest) = frame.split_first()?;
    rest.get(..usize::from(*len))
}

#[cfg(test)]
mod test {
    use super::{radio_payload, PacketDecoder};
    use crate::base::bulb_id::BulbId;
    use crate::base::remote_type::RemoteType;
    use crate::base::status::Status;
    use crate::error::CodecError;
    use crate::formatter::settings::FormatterSettings;

    fn decoder() -> PacketDecoder {
        PacketDecoder::with_remote_types(&[RemoteType::Casalux], &FormatterSettings::default())
            .unwrap()
    }

    #[test]
    fn captured_frame_test() {
        let mut d = decoder();
        let frame = [0x09, 0x6f, 0x00, 0xdd, 0x4e, 0x51, 0xd1, 0x00, 0x02, 0xbc];
        let decoded = d.decode_radio_frame(&frame).unwrap();
        assert_eq!(decoded.bulb_id, BulbId::new(0x4e51, 1, RemoteType::Casalux));
        assert_eq!(decoded.state, Some(Status::On));

        // Trailing radio CRC
        let frame = [0x09, 0x6f, 0x00, 0xdd, 0x4e, 0x51, 0xd1, 0x00, 0x02, 0xbc, 0x20, 0xf5];
        assert!(d.decode_radio_frame(&frame).is_some());
    }

    #[test]
    fn reject_test() {
        let mut d = decoder();
        assert!(d.decode_radio_frame(&[]).is_none());
        assert!(d.decode_radio_frame(&[0x09, 0x6f, 0x00, 0xdd]).is_none());
        let frame = [0x09, 0x6f, 0x00, 0x11, 0x4e, 0x51, 0xd1, 0x00, 0x02, 0xbc];
        assert!(d.decode_radio_frame(&frame).is_none());
        // Length byte included in the payload
        assert!(d.decode(&frame).is_none());
        assert!(d.find(&frame[1..]).is_none());
    }

    #[test]
    fn radio_payload_test() {
        assert_eq!(radio_payload(&[2, 1, 2, 3]), Some(&[1u8, 2][..]));
        assert_eq!(radio_payload(&[0]), Some(&[][..]));
        assert_eq!(radio_payload(&[3, 1]), None);
    }

    #[test]
    fn register_test() {
        let mut d = decoder();
        let again = crate::formatter::packet_formatter::PacketFormatter::for_remote_type(
            RemoteType::Casalux,
            FormatterSettings::default(),
        )
        .unwrap();
        assert_eq!(
            d.register(again),
            Err(CodecError::AmbiguousProtocol(
                RemoteType::Casalux,
                RemoteType::Casalux
            ))
        );
        assert!(
            PacketDecoder::with_remote_types(&[RemoteType::Rgbw], &FormatterSettings::default())
                .is_err()
        );
    }

    #[test]
    fn sequence_follows_received_test() {
        let mut d = decoder();
        let frame = [0x09, 0x6f, 0x00, 0xdd, 0x4e, 0x51, 0xd1, 0x00, 0x02, 0xbc];
        d.decode_radio_frame(&frame).unwrap();
        let f = d.formatter_mut(RemoteType::Casalux).unwrap();
        f.prepare(0x4e51, 1);
        assert_eq!(f.increase_brightness().as_bytes()[7], 0x03);
    }
}
