//! One-line record codec for the reminder store format.
//!
//! # Responsibility
//! - Encode a reminder as `status SP quoted_text (SP date)? NEWLINE`.
//! - Decode a stored line back into a [`Reminder`], rejecting anything that
//!   violates the grammar instead of silently dropping it.
//!
//! # Invariants
//! - Status markers are exactly `[X]` (done) and `[-]` (pending).
//! - The text field is always double-quoted on encode, with `\` and `"`
//!   backslash-escaped, so shell-word splitting recovers it as one token.
//! - `decode(encode(r)) == r` for every valid reminder.

use crate::date::{format_date, parse_canonical_date, DateError};
use crate::model::reminder::{Reminder, ReminderValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Status marker for completed reminders.
pub const STATUS_DONE: &str = "[X]";
/// Status marker for pending reminders.
pub const STATUS_PENDING: &str = "[-]";

pub type RecordResult<T> = Result<T, RecordError>;

/// Error for lines that violate the record grammar.
#[derive(Debug)]
pub enum RecordError {
    /// Shell-word splitting failed, e.g. an unterminated quote.
    UnbalancedQuoting,
    /// Fewer than the two mandatory tokens (status, text) were present.
    MissingFields { found: usize },
    /// More tokens than the grammar allows (status, text, optional date).
    UnexpectedTokens { found: usize },
    /// First token is neither `[X]` nor `[-]`.
    UnknownStatus(String),
    /// Third token is not a canonical `DD/MM/YYYY` date.
    InvalidDate { token: String, source: DateError },
    /// Tokens parsed but the resulting reminder violates model invariants.
    Validation(ReminderValidationError),
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedQuoting => {
                write!(f, "malformed record: unbalanced quoting")
            }
            Self::MissingFields { found } => write!(
                f,
                "malformed record: expected at least status and text, found {found} token(s)"
            ),
            Self::UnexpectedTokens { found } => write!(
                f,
                "malformed record: expected at most 3 tokens, found {found}"
            ),
            Self::UnknownStatus(token) => write!(
                f,
                "malformed record: unknown status marker `{token}`, expected `{STATUS_DONE}` or `{STATUS_PENDING}`"
            ),
            Self::InvalidDate { token, .. } => {
                write!(f, "malformed record: invalid date field `{token}`")
            }
            Self::Validation(err) => write!(f, "malformed record: {err}"),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDate { source, .. } => Some(source),
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ReminderValidationError> for RecordError {
    fn from(value: ReminderValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Encodes one reminder as a newline-terminated store line.
pub fn encode(reminder: &Reminder) -> String {
    let status = if reminder.completed {
        STATUS_DONE
    } else {
        STATUS_PENDING
    };
    match reminder.date {
        Some(date) => format!(
            "{status} \"{}\" {}\n",
            escape_text(&reminder.text),
            format_date(date)
        ),
        None => format!("{status} \"{}\"\n", escape_text(&reminder.text)),
    }
}

/// Decodes one store line into a reminder.
///
/// The trailing newline is optional so callers can pass lines straight from
/// `str::lines`.
pub fn decode(line: &str) -> RecordResult<Reminder> {
    let tokens = shlex::split(line.trim_end_matches(['\n', '\r']))
        .ok_or(RecordError::UnbalancedQuoting)?;

    if tokens.len() < 2 {
        return Err(RecordError::MissingFields {
            found: tokens.len(),
        });
    }
    if tokens.len() > 3 {
        return Err(RecordError::UnexpectedTokens {
            found: tokens.len(),
        });
    }

    let completed = match tokens[0].as_str() {
        STATUS_DONE => true,
        STATUS_PENDING => false,
        other => return Err(RecordError::UnknownStatus(other.to_string())),
    };

    let date = match tokens.get(2) {
        Some(token) => Some(parse_canonical_date(token).map_err(|source| {
            RecordError::InvalidDate {
                token: token.clone(),
                source,
            }
        })?),
        None => None,
    };

    let reminder = Reminder {
        completed,
        text: tokens[1].clone(),
        date,
    };
    reminder.validate()?;
    Ok(reminder)
}

/// Escapes the two characters that are significant inside double quotes for
/// shell-word splitting.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\\' || ch == '"' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, RecordError};
    use crate::model::reminder::Reminder;
    use chrono::NaiveDate;

    fn dated(text: &str, year: i32, month: u32, day: u32) -> Reminder {
        Reminder::with_date(
            text,
            NaiveDate::from_ymd_opt(year, month, day).expect("valid test date"),
        )
        .expect("valid test reminder")
    }

    #[test]
    fn encodes_pending_without_date() {
        let reminder = Reminder::new("Buy milk").expect("valid reminder");
        assert_eq!(encode(&reminder), "[-] \"Buy milk\"\n");
    }

    #[test]
    fn encodes_completed_with_date() {
        let mut reminder = dated("Call Sam", 2024, 12, 25);
        reminder.complete();
        assert_eq!(encode(&reminder), "[X] \"Call Sam\" 25/12/2024\n");
    }

    #[test]
    fn decodes_quoted_text_with_spaces() {
        let reminder = decode("[-] \"Water the plants\"").expect("line should decode");
        assert!(reminder.is_pending());
        assert_eq!(reminder.text, "Water the plants");
        assert_eq!(reminder.date, None);
    }

    #[test]
    fn embedded_quotes_survive_a_round_trip() {
        let reminder = Reminder::new(r#"Say "hi" to C:\temp"#).expect("valid reminder");
        let decoded = decode(&encode(&reminder)).expect("round trip should decode");
        assert_eq!(decoded, reminder);
    }

    #[test]
    fn dated_record_round_trips() {
        let reminder = dated("Call Sam", 2030, 1, 1);
        assert_eq!(decode(&encode(&reminder)).expect("should decode"), reminder);
    }

    #[test]
    fn rejects_single_token_line() {
        let err = decode("[-]").expect_err("status-only line must fail");
        assert!(matches!(err, RecordError::MissingFields { found: 1 }));
    }

    #[test]
    fn rejects_unknown_status_marker() {
        let err = decode("[?] \"Buy milk\"").expect_err("bad status must fail");
        assert!(matches!(err, RecordError::UnknownStatus(token) if token == "[?]"));
    }

    #[test]
    fn rejects_trailing_tokens() {
        let err = decode("[-] \"Buy milk\" 25/12/2024 extra").expect_err("extra token must fail");
        assert!(matches!(err, RecordError::UnexpectedTokens { found: 4 }));
    }

    #[test]
    fn rejects_non_canonical_date_field() {
        let err = decode("[-] \"Buy milk\" 2024/12/25").expect_err("bad date must fail");
        assert!(matches!(err, RecordError::InvalidDate { token, .. } if token == "2024/12/25"));
    }

    #[test]
    fn rejects_unterminated_quote() {
        let err = decode("[-] \"Buy milk").expect_err("open quote must fail");
        assert!(matches!(err, RecordError::UnbalancedQuoting));
    }

    #[test]
    fn rejects_empty_text_token() {
        let err = decode("[-] \"\"").expect_err("empty text must fail");
        assert!(matches!(err, RecordError::Validation(_)));
    }
}
