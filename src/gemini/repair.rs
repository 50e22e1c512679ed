/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Best-effort repair of JSON written by a language model
//!
//! Model answers are asked to be bare JSON but arrive wrapped in Markdown
//! fences, surrounded by chatter, with raw newlines inside string literals
//! (Markdown tables are the usual culprit), stray backslashes and trailing
//! commas. The steps below fix those without touching valid documents:
//!
//! 1. [`strip_code_fences`]
//! 2. [`slice_json_object`]
//! 3. [`escape_string_controls`]
//! 4. parse; on failure [`remove_trailing_commas`] and parse again

use crate::error::{AppError, AppResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, error, warn};

static OPENING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```[A-Za-z]*[ \t]*\r?\n?").expect("valid opening fence regex"));
static CLOSING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n?```[ \t]*$").expect("valid closing fence regex"));

/// Number of lines shown on each side of a parse failure in the logs
const ERROR_CONTEXT_LINES: usize = 2;
/// Width at which logged context lines are cut
const ERROR_CONTEXT_WIDTH: usize = 150;

/// Model output turned into JSON
#[derive(Debug, Clone, PartialEq)]
pub struct RepairedJson {
    /// Parsed document
    pub value: Value,
    /// Text that parsed, after repair
    pub text: String,
    /// Whether trailing commas had to be dropped
    pub trailing_commas_removed: bool,
}

/// Removes a leading ```` ``` ```` / ```` ```json ```` fence and a trailing ```` ``` ````
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = match OPENING_FENCE.find(trimmed) {
        Some(m) => &trimmed[m.end()..],
        None => trimmed,
    };
    let without_close = match CLOSING_FENCE.find(without_open) {
        Some(m) => &without_open[..m.start()],
        None => without_open,
    };
    without_close.trim()
}

/// Keeps the text between the first `{` and the last `}` (inclusive)
///
/// Text without a complete brace pair is returned unchanged so the parser
/// reports a meaningful error.
pub fn slice_json_object(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Escapes characters that are illegal inside JSON string literals
///
/// Walks the text tracking whether the cursor is inside a string. Inside a
/// string, raw line feeds, carriage returns and tabs become `\n`, `\r`, `\t`,
/// other control characters become `\u00XX`, and a backslash that does not
/// start a valid escape is doubled. Valid escape pairs are copied untouched,
/// so an escaped quote never ends the string. Text outside strings is copied
/// as is.
pub fn escape_string_controls(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 16);
    let mut in_string = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if !in_string {
            if c == '"' {
                in_string = true;
            }
            out.push(c);
            continue;
        }

        match c {
            '"' => {
                in_string = false;
                out.push(c);
            }
            '\\' => match chars.peek().copied() {
                Some(next @ ('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')) => {
                    out.push('\\');
                    out.push(next);
                    chars.next();
                }
                Some('u') => {
                    let hex: Vec<char> = chars.clone().skip(1).take(4).collect();
                    if hex.len() == 4 && hex.iter().all(char::is_ascii_hexdigit) {
                        out.push('\\');
                    } else {
                        out.push_str("\\\\");
                    }
                }
                _ => out.push_str("\\\\"),
            },
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }

    out
}

/// Drops commas that are followed only by whitespace and a closing `]` or `}`
///
/// Commas inside string literals are left alone.
pub fn remove_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
                if !matches!(next, Some(']' | '}')) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Turns raw model text into JSON, repairing what can be repaired
///
/// # Errors
/// * [`AppError::EmptyModelResponse`] when the text is blank
/// * [`AppError::InvalidModelJson`] when the repaired text still does not parse
pub fn parse_model_json(raw: &str) -> AppResult<RepairedJson> {
    if raw.trim().is_empty() {
        return Err(AppError::EmptyModelResponse);
    }

    let candidate = slice_json_object(strip_code_fences(raw));
    let escaped = escape_string_controls(candidate);

    match serde_json::from_str::<Value>(&escaped) {
        Ok(value) => {
            debug!("Model JSON parsed, {} chars", escaped.len());
            Ok(RepairedJson {
                value,
                text: escaped,
                trailing_commas_removed: false,
            })
        }
        Err(first) => {
            warn!(
                "JSON parse error at line {}, column {}: {}. Removing trailing commas",
                first.line(),
                first.column(),
                first
            );
            let cleaned = remove_trailing_commas(&escaped);
            match serde_json::from_str::<Value>(&cleaned) {
                Ok(value) => {
                    debug!("Model JSON parsed after trailing comma cleanup");
                    Ok(RepairedJson {
                        value,
                        text: cleaned,
                        trailing_commas_removed: true,
                    })
                }
                Err(e) => {
                    log_error_context(raw, &cleaned, &e);
                    Err(AppError::InvalidModelJson {
                        message: e.to_string(),
                        line: e.line(),
                        column: e.column(),
                    })
                }
            }
        }
    }
}

/// Like [`parse_model_json`] but the document must be a JSON object
pub fn parse_model_object(raw: &str) -> AppResult<RepairedJson> {
    let repaired = parse_model_json(raw)?;
    if repaired.value.is_object() {
        Ok(repaired)
    } else {
        Err(AppError::InvalidModelJson {
            message: "expected a JSON object".to_string(),
            line: 1,
            column: 1,
        })
    }
}

fn log_error_context(raw: &str, cleaned: &str, err: &serde_json::Error) {
    error!(
        "Still failing after fixes: {} (line {}, column {})",
        err,
        err.line(),
        err.column()
    );

    let failing = err.line().saturating_sub(1);
    let start = failing.saturating_sub(ERROR_CONTEXT_LINES);
    for (idx, line) in cleaned
        .lines()
        .enumerate()
        .skip(start)
        .take(ERROR_CONTEXT_LINES * 2 + 1)
    {
        let marker = if idx == failing { ">>>" } else { "   " };
        let shown: String = line.chars().take(ERROR_CONTEXT_WIDTH).collect();
        error!("{} {}: {}", marker, idx + 1, shown);
    }

    let head: String = raw.chars().take(800).collect();
    debug!("Original output (first 800 chars): {}", head);
}
