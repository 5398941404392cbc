//! Shell quoting for the command lines handed to terminal launchers.
//!
//! POSIX shells and `cmd.exe` disagree on almost every quoting rule, so each
//! target gets its own [`Dialect`] rather than one shared escape routine.

/// The shell that will parse a quoted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `sh`, `bash` and friends.
    Posix,
    /// Windows `cmd.exe`.
    Cmd,
}

/// Quote a single token so the target shell reads it back as one word.
pub fn quote(token: &str, dialect: Dialect) -> String {
    match dialect {
        Dialect::Posix => quote_posix(token),
        Dialect::Cmd => format!("\"{token}\""),
    }
}

/// Quote each token on its own, then join them with single spaces.
pub fn join<S: AsRef<str>>(tokens: &[S], dialect: Dialect) -> String {
    tokens
        .iter()
        .map(|t| quote(t.as_ref(), dialect))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c)
}

fn quote_posix(token: &str) -> String {
    if !token.is_empty() && token.chars().all(is_safe) {
        return token.to_string();
    }

    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push('"');
    for c in token.chars() {
        // Inside double quotes only these keep a special meaning
        if matches!(c, '\\' | '"' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Split a Windows command line into tokens.
///
/// Whitespace separates tokens, double quotes group, and `\"` is a literal
/// quote. This is enough to recover the program and its arguments from a
/// pre-quoted command string.
pub fn split_cmd(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
                in_token = true;
            }
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(current);
    }

    tokens
}
