//! Email address validation.
//!
//! An address must survive two independent checks: a strict RFC 5322
//! `addr-spec` parse (no display name, no comments, no surrounding
//! whitespace) and a conservative pattern that only admits the plain
//! `local@domain.tld` shape. The parser alone accepts addresses such as
//! `"x y"@host` or `a/b@host`, which the pattern then rejects.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Longest address accepted, in bytes (64 local + 1 + 255 domain).
pub const MAX_EMAIL_LEN: usize = 320;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Why an address was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("email length {len} exceeds {max} characters", max = MAX_EMAIL_LEN)]
    TooLong { len: usize },

    #[error("malformed address: {reason}")]
    Malformed { reason: &'static str },

    #[error("invalid email format")]
    Pattern,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Validates `email` exactly as given; callers trim beforehand if needed.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.len() > MAX_EMAIL_LEN {
        return Err(EmailError::TooLong { len: email.len() });
    }

    parse_addr_spec(email)?;

    if !email_regex().is_match(email) {
        return Err(EmailError::Pattern);
    }

    Ok(())
}

/// Convenience predicate over [`validate_email`].
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

fn malformed(reason: &'static str) -> EmailError {
    EmailError::Malformed { reason }
}

/// Parses `local-part "@" domain` and requires the whole input to be consumed.
fn parse_addr_spec(input: &str) -> Result<(), EmailError> {
    if input.is_empty() {
        return Err(malformed("no address"));
    }

    let rest = match input.strip_prefix('"') {
        Some(quoted) => skip_quoted_string(quoted)?,
        None => skip_dot_atom(input, "invalid local part")?,
    };

    let domain = rest
        .strip_prefix('@')
        .ok_or_else(|| malformed("missing @ in addr-spec"))?;

    if let Some(literal) = domain.strip_prefix('[') {
        let inner = literal
            .strip_suffix(']')
            .ok_or_else(|| malformed("unterminated domain literal"))?;
        if !inner.chars().all(is_dtext) {
            return Err(malformed("bad character in domain literal"));
        }
        return Ok(());
    }

    let trailing = skip_dot_atom(domain, "invalid domain")?;
    if !trailing.is_empty() {
        return Err(malformed("trailing characters after domain"));
    }
    Ok(())
}

/// Consumes a `dot-atom` prefix and returns the remainder.
fn skip_dot_atom<'a>(input: &'a str, reason: &'static str) -> Result<&'a str, EmailError> {
    let end = input
        .char_indices()
        .find(|&(_, c)| !(is_atext(c) || c == '.'))
        .map_or(input.len(), |(idx, _)| idx);

    let atom = &input[..end];
    if atom.is_empty() || atom.starts_with('.') || atom.ends_with('.') || atom.contains("..") {
        return Err(malformed(reason));
    }
    Ok(&input[end..])
}

/// Consumes the body of a quoted string (opening quote already stripped)
/// and returns what follows the closing quote.
fn skip_quoted_string(input: &str) -> Result<&str, EmailError> {
    let mut chars = input.char_indices();
    let mut seen = false;
    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => {
                if !seen {
                    return Err(malformed("empty quoted-string"));
                }
                return Ok(&input[idx + 1..]);
            }
            '\\' => match chars.next() {
                Some((_, escaped)) if is_vchar(escaped) || escaped == ' ' || escaped == '\t' => {}
                _ => return Err(malformed("bad quoted-pair in quoted-string")),
            },
            c if is_qtext(c) || c == ' ' || c == '\t' => {}
            _ => return Err(malformed("bad character in quoted-string")),
        }
        seen = true;
    }
    Err(malformed("unclosed quoted-string"))
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c) || !c.is_ascii()
}

fn is_vchar(c: char) -> bool {
    ('!'..='~').contains(&c) || !c.is_ascii()
}

fn is_qtext(c: char) -> bool {
    is_vchar(c) && c != '"' && c != '\\'
}

fn is_dtext(c: char) -> bool {
    is_vchar(c) && c != '[' && c != ']' && c != '\\'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        for email in [
            "test@example.com",
            "joe@joe.com",
            "name@name.com",
            "name-other@name.com",
            "john.doe@example.com",
            "first+tag@sub.example.org",
        ] {
            assert!(is_valid_email(email), "expected {email:?} to be valid");
        }
    }

    #[test]
    fn rejects_invalid_addresses() {
        for email in [
            "name-other.com",
            "invalid.email",
            "missing@dotcom",
            "@missingusername.com",
            "",
            "with space@example.com",
            "with/special@chars.com",
            "john.doe",
            "john.doe@example",
            "john.doe@example.",
            "john.doe@example.com.",
            ".john@example.com",
            "john..doe@example.com",
            "John <john@example.com>",
            " john@example.com",
        ] {
            assert!(!is_valid_email(email), "expected {email:?} to be invalid");
        }
    }

    #[test]
    fn rejects_overlong_addresses_before_parsing() {
        let email = format!("{}@example.com", "a".repeat(MAX_EMAIL_LEN));
        assert_eq!(
            validate_email(&email),
            Err(EmailError::TooLong { len: email.len() })
        );
    }

    #[test]
    fn empty_input_reports_no_address() {
        assert_eq!(
            validate_email(""),
            Err(EmailError::Malformed { reason: "no address" })
        );
    }

    #[test]
    fn parser_accepts_what_the_pattern_rejects() {
        // Valid addr-spec, but outside the conservative shape.
        assert!(parse_addr_spec("a/b@chars.com").is_ok());
        assert!(parse_addr_spec("\"x y\"@example.com").is_ok());
        assert!(parse_addr_spec("user@[127.0.0.1]").is_ok());
        assert_eq!(validate_email("a/b@chars.com"), Err(EmailError::Pattern));
    }

    #[test]
    fn parser_rejects_broken_quoting() {
        assert!(parse_addr_spec("\"open@example.com").is_err());
        assert!(parse_addr_spec("\"\"@example.com").is_err());
        assert!(parse_addr_spec("user@[127.0.0.1").is_err());
    }
}
