// src/parser/mod.rs
// Command-line splitting and argument tokenizing

use crate::error::ParseError;

/// Split a raw line into its command word and the untouched remainder.
///
/// Leading whitespace is skipped, the command word runs up to the next
/// whitespace character, and whitespace before the remainder is dropped.
/// A blank line yields an empty command word.
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(end) => (&line[..end], line[end..].trim_start()),
        None => (line, ""),
    }
}

/// Tokenize an argument string into an argument vector.
///
/// Words are separated by unquoted spaces. A single quote opens a literal
/// span that runs to the next single quote; closing a span ends the current
/// word. Two adjacent quotes inside a span that already holds text do not
/// close it: the pair is consumed and the span continues, so `'a''b'` is the
/// single word `ab`. An empty span such as `''` contributes nothing.
pub fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut quoted = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' if !quoted => quoted = true,

            '\'' => {
                if !word.is_empty() && chars.peek() == Some(&'\'') {
                    chars.next();
                } else {
                    quoted = false;
                    if !word.is_empty() {
                        tokens.push(std::mem::take(&mut word));
                    }
                }
            }

            ' ' if !quoted => {
                if !word.is_empty() {
                    tokens.push(std::mem::take(&mut word));
                }
            }

            _ => word.push(c),
        }
    }

    if quoted {
        return Err(ParseError::UnterminatedQuote);
    }

    if !word.is_empty() {
        tokens.push(word);
    }

    Ok(tokens)
}
