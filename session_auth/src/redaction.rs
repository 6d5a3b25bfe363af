//! PII redaction for log lines of the form `key=value;key=value;`

use regex::{Captures, Regex};

/// Fields treated as personally identifiable information
pub const PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

const DEFAULT_REDACTION: &str = "***";
const DEFAULT_SEPARATOR: &str = ";";

/// Replace the value of every `field=value` pair in `message` with `redaction`.
///
/// A value runs up to the next `separator` character, or to the end of the message.
pub fn filter_datum<S: AsRef<str>>(
    fields: &[S],
    redaction: &str,
    message: &str,
    separator: &str,
) -> String {
    match build_pattern(fields, separator) {
        Some(Ok(pattern)) => redact_with(&pattern, redaction, message),
        Some(Err(e)) => {
            tracing::error!(error = %e, "Invalid redaction pattern, dropping whole message");
            redaction.to_string()
        }
        None => message.to_string(),
    }
}

fn build_pattern<S: AsRef<str>>(fields: &[S], separator: &str) -> Option<Result<Regex, regex::Error>> {
    if fields.is_empty() {
        return None;
    }

    let names = fields
        .iter()
        .map(|f| regex::escape(f.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    let value = if separator.is_empty() {
        ".*".to_string()
    } else {
        format!("[^{}]*", regex::escape(separator))
    };

    Some(Regex::new(&format!("({names})={value}")))
}

fn redact_with(pattern: &Regex, redaction: &str, message: &str) -> String {
    pattern
        .replace_all(message, |caps: &Captures| format!("{}={redaction}", &caps[1]))
        .into_owned()
}

/// Redacts a fixed set of fields, compiling the pattern once
#[derive(Debug, Clone)]
pub struct RedactingFormatter {
    fields: Vec<String>,
    redaction: String,
    separator: String,
    pattern: Option<Regex>,
}

impl RedactingFormatter {
    pub fn new<S: AsRef<str>>(fields: &[S]) -> Self {
        let fields: Vec<String> = fields.iter().map(|f| f.as_ref().to_string()).collect();
        let pattern = match build_pattern(fields.as_slice(), DEFAULT_SEPARATOR) {
            Some(Ok(pattern)) => Some(pattern),
            Some(Err(e)) => {
                tracing::error!(error = %e, "Invalid redaction pattern");
                None
            }
            None => None,
        };

        Self {
            fields,
            redaction: DEFAULT_REDACTION.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            pattern,
        }
    }

    /// Formatter over [`PII_FIELDS`]
    pub fn pii() -> Self {
        Self::new(&PII_FIELDS)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn format(&self, message: &str) -> String {
        match &self.pattern {
            Some(pattern) => redact_with(pattern, &self.redaction, message),
            None if self.fields.is_empty() => message.to_string(),
            None => filter_datum(self.fields.as_slice(), &self.redaction, message, &self.separator),
        }
    }
}

impl Default for RedactingFormatter {
    fn default() -> Self {
        Self::pii()
    }
}
