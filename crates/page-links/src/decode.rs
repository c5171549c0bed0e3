use crate::errors::LinkError;

/// Percent-decode a request path.
///
/// Path rules apply: `+` stays a literal plus. A `%` must introduce exactly
/// two hex digits and the decoded bytes must be UTF-8.
pub fn decode_path(raw: &str) -> Result<String, LinkError> {
    let bytes = raw.as_bytes();
    let mut from = 0;
    while let Some(pos) = bytes[from..].iter().position(|&b| b == b'%') {
        let at = from + pos;
        match bytes.get(at + 1..at + 3) {
            Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => from = at + 3,
            _ => {
                return Err(LinkError::InvalidEscape {
                    offset: at,
                    sequence: raw[at..].chars().take(3).collect(),
                })
            }
        }
    }
    let decoded = urlencoding::decode(raw)?;
    Ok(decoded.into_owned())
}
