//! Command-line token matching and rewriting (pure, no I/O)
//!
//! Tokens are separated by whitespace. A flag only matches a whole token, so
//! `-game` never matches `-gameserver`.

/// Index of the first token equal to `key`.
fn find_token(tokens: &[&str], key: &str) -> Option<usize> {
    tokens.iter().position(|token| *token == key)
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-') || token.starts_with('+')
}

/// True when `key` appears as a token.
pub fn has_arg(cmdline: &str, key: &str) -> bool {
    let tokens: Vec<&str> = cmdline.split_whitespace().collect();
    find_token(&tokens, key).is_some()
}

/// The token after `key`; empty when `key` is the last token.
pub fn arg_value<'a>(cmdline: &'a str, key: &str) -> Option<&'a str> {
    let tokens: Vec<&'a str> = cmdline.split_whitespace().collect();
    let idx = find_token(&tokens, key)?;
    Some(tokens.get(idx + 1).copied().unwrap_or(""))
}

/// Remove the first `key` token together with its value tokens (everything up
/// to the next token starting with `-` or `+`).
///
/// The result is re-joined with single spaces and carries no leading or
/// trailing whitespace.
pub fn strip_arg(cmdline: &str, key: &str) -> String {
    let tokens: Vec<&str> = cmdline.split_whitespace().collect();
    let Some(start) = find_token(&tokens, key) else {
        return tokens.join(" ");
    };

    let end = tokens[start + 1..]
        .iter()
        .position(|token| is_flag(token))
        .map_or(tokens.len(), |offset| start + 1 + offset);

    tokens[..start]
        .iter()
        .chain(tokens[end..].iter())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Append `flag value` to a command line.
pub fn append_arg(cmdline: &str, flag: &str, value: &str) -> String {
    let cmdline = cmdline.trim();
    if cmdline.is_empty() {
        format!("{} {}", flag, value)
    } else {
        format!("{} {} {}", cmdline, flag, value)
    }
}

/// Command line embedded at the start of a launch payload, up to the first NUL.
pub fn embedded_command_line(payload: &[u8]) -> String {
    let end = payload.iter().position(|b| *b == 0).unwrap_or(payload.len());
    String::from_utf8_lossy(&payload[..end]).to_string()
}
