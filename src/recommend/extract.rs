/// Nesting limit for the scanner. Place lists need three levels.
pub const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("could not parse JSON format")]
    NoObject,
    #[error("could not parse JSON format")]
    Unbalanced,
    #[error("JSON nesting exceeds {0} levels")]
    TooDeep(usize),
}

/// Return the first balanced `{ ... }` span of `text`.
///
/// Fails with `NoObject` when there is no `{`, and with `Unbalanced` when the
/// first `{` is never closed.
pub fn first_json_object(text: &str) -> Result<&str, ExtractError> {
    let start = text.find('{').ok_or(ExtractError::NoObject)?;
    let bytes = text.as_bytes();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(ExtractError::TooDeep(MAX_DEPTH));
                }
            }
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    // '}' is ASCII, so this is a char boundary.
                    return Ok(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    Err(ExtractError::Unbalanced)
}
