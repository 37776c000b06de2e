use smol_str::SmolStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodepointError {
    #[error("Invalid hexadecimal codepoint: {0:?}")]
    InvalidHex(SmolStr),

    #[error("U+{0:04X} is not a valid Unicode scalar value")]
    InvalidScalar(u32),
}

/// Decodes a space-separated sequence of hexadecimal codepoints
/// (e.g. `"1F468 200D 2764"`) into the string they spell.
pub fn decode_sequence(sequence: &str) -> Result<SmolStr, CodepointError> {
    let mut text = String::new();

    for token in sequence.split_whitespace() {
        let cp = u32::from_str_radix(token, 16)
            .map_err(|_| CodepointError::InvalidHex(SmolStr::new(token)))?;

        text.push(char::from_u32(cp).ok_or(CodepointError::InvalidScalar(cp))?);
    }

    Ok(SmolStr::from(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single() {
        assert_eq!(decode_sequence("1F600").unwrap(), "\u{1F600}");
    }

    #[test]
    fn test_decode_zwj_sequence() {
        assert_eq!(
            decode_sequence("1F468 200D 2764 FE0F 200D 1F468").unwrap(),
            "\u{1F468}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F468}"
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(
            decode_sequence("1F600 XYZZY"),
            Err(CodepointError::InvalidHex(SmolStr::new("XYZZY")))
        );
    }

    #[test]
    fn test_decode_rejects_surrogates() {
        assert_eq!(decode_sequence("D83D"), Err(CodepointError::InvalidScalar(0xD83D)));
    }

    #[test]
    fn test_decode_rejects_out_of_range() {
        assert_eq!(
            decode_sequence("110000"),
            Err(CodepointError::InvalidScalar(0x110000))
        );
    }
}
