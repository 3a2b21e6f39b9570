use crate::error::CodecError;

/// Parse a hex string into bytes. Whitespace is ignored, as is an optional
/// "0x" prefix on each word.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, CodecError> {
    let mut digits = Vec::new();
    for word in s.split_whitespace() {
        let word = word
            .strip_prefix("0x")
            .or_else(|| word.strip_prefix("0X"))
            .unwrap_or(word);
        for c in word.chars() {
            match c.to_digit(16) {
                Some(d) => digits.push(d as u8),
                None => return Err(CodecError::InvalidHex),
            }
        }
    }
    if digits.len() % 2 != 0 {
        return Err(CodecError::OddHexLength);
    }
    Ok(digits.chunks(2).map(|d| (d[0] << 4) | d[1]).collect())
}

pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod test {
    use super::{parse_hex, to_hex};
    use crate::error::CodecError;

    #[test]
    fn parse_test() {
        assert_eq!(
            parse_hex("09 6F 00 DD").unwrap(),
            vec![0x09, 0x6f, 0x00, 0xdd]
        );
        assert_eq!(parse_hex("096f00dd").unwrap(), vec![0x09, 0x6f, 0x00, 0xdd]);
        assert_eq!(parse_hex("0x66").unwrap(), vec![0x66]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
        assert_eq!(parse_hex("0g"), Err(CodecError::InvalidHex));
        assert_eq!(parse_hex("096"), Err(CodecError::OddHexLength));
        assert_eq!(to_hex(&[0x09, 0xbc]), "09 BC");
    }
}
