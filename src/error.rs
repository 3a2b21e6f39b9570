use crate::base::remote_type::RemoteType;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CodecError {
    InvalidLength { expected: usize, actual: usize },
    UnsupportedRemote(RemoteType),
    AmbiguousProtocol(RemoteType, RemoteType),
    InvalidHex,
    OddHexLength,
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        match self {
            CodecError::InvalidLength { expected, actual } => write!(
                fmt,
                "Invalid packet length {}, expected {}",
                actual, expected
            ),
            CodecError::UnsupportedRemote(t) => write!(fmt, "No packet codec for remote type {}", t),
            CodecError::AmbiguousProtocol(a, b) => {
                write!(fmt, "Packets for {} and {} can't be told apart", a, b)
            }
            CodecError::InvalidHex => write!(fmt, "Invalid hex digit"),
            CodecError::OddHexLength => write!(fmt, "Odd number of hex digits"),
        }
    }
}

impl std::error::Error for CodecError {}
