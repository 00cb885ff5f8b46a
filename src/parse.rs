use crate::error::ParseError;

/// Read literal text (as produced by [`to_literals`]) back into bytes.
///
/// Literals are split on any whitespace, so the line layout doesn't matter. Each one must be
/// `0x`, two hex digits, and a comma. Upper case digits are accepted.
///
/// ```
/// use convert_audio::parse_literals;
///
/// assert_eq!(parse_literals("  0x52, 0x49,\n  0x46,").unwrap(), vec![0x52, 0x49, 0x46]);
/// assert_eq!(parse_literals("").unwrap(), Vec::<u8>::new());
/// assert!(parse_literals("  0x52 0x49,").is_err());
/// ```
///
/// [`to_literals`]: ./fn.to_literals.html
pub fn parse_literals(text: &str) -> Result<Vec<u8>, ParseError> {
    let mut buffer = Vec::with_capacity(text.len() / 6);

    for (index, token) in text.split_whitespace().enumerate() {
        let digits = token
            .strip_prefix("0x")
            .and_then(|rest| rest.strip_suffix(','))
            .filter(|digits| digits.len() == 2)
            .ok_or_else(|| ParseError::invalid_literal(index, token))?;

        let mut byte = [0u8; 1];
        hex::decode_to_slice(digits, &mut byte).map_err(ParseError::hex(index))?;
        buffer.push(byte[0]);
    }

    Ok(buffer)
}
