use std::fmt::Display;

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::time_format::error::{Result, TimeFormatError};

/// Which calendar or clock field a token fills in when parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    Month,
    Day,
    Weekday,
    Hour,
    Hour12,
    Meridiem,
    Minute,
    Second,
    Fraction,
    ZoneName,
    Offset,
}

/// A pattern token and the strftime specifier it stands for
#[derive(Debug)]
struct Token {
    pattern: &'static str,
    layout: &'static str,
    field: Field,
}

const fn token(pattern: &'static str, layout: &'static str, field: Field) -> Token {
    Token { pattern, layout, field }
}

// Ordered longest-first: the scanner takes the first entry that matches.
const TOKENS: &[Token] = &[
    token("yyyy", "%Y", Field::Year),
    token("MMMM", "%B", Field::Month),
    token("EEEE", "%A", Field::Weekday),
    token("MMM", "%b", Field::Month),
    token("EEE", "%a", Field::Weekday),
    token("SSS", "%3f", Field::Fraction),
    token("yy", "%y", Field::Year),
    token("MM", "%m", Field::Month),
    token("dd", "%d", Field::Day),
    token("HH", "%H", Field::Hour),
    token("hh", "%I", Field::Hour12),
    token("mm", "%M", Field::Minute),
    token("ss", "%S", Field::Second),
    token("ZZ", "%z", Field::Offset),
    token("M", "%-m", Field::Month),
    token("d", "%-d", Field::Day),
    token("a", "%p", Field::Meridiem),
    token("z", "%Z", Field::ZoneName),
    token("Z", "%:z", Field::Offset),
];

const QUOTE: char = '\'';

#[derive(Debug, Clone, Copy)]
enum Segment {
    Token(&'static Token),
    Literal(char),
}

/// Split a date pattern into tokens and literal characters.
///
/// At every position the longest known token wins, so `MM` is never read
/// as two `M`s. Text between single quotes is literal, and `''` stands for
/// a single quote character.
fn tokenize(pattern: &str) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        if ch == QUOTE {
            rest = take_quoted(&rest[1..], &mut segments);
            continue;
        }
        if let Some(token) = TOKENS.iter().find(|t| rest.starts_with(t.pattern)) {
            segments.push(Segment::Token(token));
            rest = &rest[token.pattern.len()..];
            continue;
        }
        segments.push(Segment::Literal(ch));
        rest = &rest[ch.len_utf8()..];
    }
    segments
}

/// Consume a quoted section; `rest` starts just after the opening quote.
fn take_quoted<'a>(rest: &'a str, segments: &mut Vec<Segment>) -> &'a str {
    if let Some(after) = rest.strip_prefix(QUOTE) {
        segments.push(Segment::Literal(QUOTE));
        return after;
    }

    let mut chars = rest.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if ch != QUOTE {
            segments.push(Segment::Literal(ch));
            continue;
        }
        match chars.peek() {
            Some(&(_, QUOTE)) => {
                segments.push(Segment::Literal(QUOTE));
                chars.next();
            }
            _ => return &rest[idx + 1..],
        }
    }
    // Unterminated quote: everything after it was literal
    ""
}

fn render(segments: &[Segment], for_parsing: bool) -> String {
    // Without an am/pm marker a 12-hour field is read as the literal hour
    let literal_hour = for_parsing
        && !segments
            .iter()
            .any(|s| matches!(s, Segment::Token(t) if t.field == Field::Meridiem));

    let mut layout = String::with_capacity(segments.len() * 2);
    for segment in segments {
        match segment {
            Segment::Token(t) if literal_hour && t.field == Field::Hour12 => layout.push_str("%H"),
            Segment::Token(t) => layout.push_str(t.layout),
            Segment::Literal('%') => layout.push_str("%%"),
            Segment::Literal(ch) => layout.push(*ch),
        }
    }
    layout
}

/// Convert a date pattern such as `yyyy-MM-dd HH:mm:ss` into a chrono
/// strftime layout (`%Y-%m-%d %H:%M:%S`).
pub fn to_layout(pattern: &str) -> String {
    render(&tokenize(pattern), false)
}

/// Convert a strftime layout back into the date pattern notation.
///
/// Specifiers without a pattern equivalent are kept verbatim. Literal text
/// that would otherwise be read as a token is quoted.
pub fn to_pattern(layout: &str) -> String {
    let mut pattern = String::with_capacity(layout.len() * 2);
    let mut pending = String::new();
    let mut rest = layout;

    while let Some(ch) = rest.chars().next() {
        if ch == '%' {
            if let Some(after) = rest.strip_prefix("%%") {
                pending.push('%');
                rest = after;
                continue;
            }
            let matched = TOKENS
                .iter()
                .filter(|t| rest.starts_with(t.layout))
                .max_by_key(|t| t.layout.len());
            if let Some(token) = matched {
                flush_literal(&mut pattern, &mut pending);
                pattern.push_str(token.pattern);
                rest = &rest[token.layout.len()..];
                continue;
            }
        }
        if ch == QUOTE {
            flush_literal(&mut pattern, &mut pending);
            pattern.push_str("''");
        } else {
            pending.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }
    flush_literal(&mut pattern, &mut pending);
    pattern
}

fn flush_literal(pattern: &mut String, pending: &mut String) {
    if pending.is_empty() {
        return;
    }
    let needs_quotes = pending
        .chars()
        .any(|c| TOKENS.iter().any(|t| t.pattern.starts_with(c)));
    if needs_quotes {
        pattern.push(QUOTE);
        pattern.push_str(pending);
        pattern.push(QUOTE);
    } else {
        pattern.push_str(pending);
    }
    pending.clear();
}

/// Format a point in time with a date pattern.
pub fn format_time<Tz>(pattern: &str, time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(&to_layout(pattern)).to_string()
}

/// Format `base_seconds` seconds plus `nanos` nanoseconds since the Unix
/// epoch with a date pattern, in UTC.
pub fn timestamp_to_string(pattern: &str, base_seconds: i64, nanos: i64) -> Result<String> {
    let out_of_range = || TimeFormatError::TimestampOutOfRange {
        seconds: base_seconds,
        nanos,
    };
    let seconds = base_seconds
        .checked_add(nanos.div_euclid(1_000_000_000))
        .ok_or_else(out_of_range)?;
    let subsec = u32::try_from(nanos.rem_euclid(1_000_000_000)).map_err(|_| out_of_range())?;
    let time = DateTime::<Utc>::from_timestamp(seconds, subsec).ok_or_else(out_of_range)?;
    Ok(format_time(pattern, &time))
}

/// Parse `text` with the layout derived from `pattern`.
///
/// Fields the pattern does not mention default to the Unix epoch date and
/// midnight. Without a numeric offset token the time is read as UTC.
pub fn parse_time(pattern: &str, text: &str) -> Result<DateTime<FixedOffset>> {
    let segments = tokenize(pattern);
    let layout = render(&segments, true);
    let has = |field: Field| {
        segments
            .iter()
            .any(|s| matches!(s, Segment::Token(t) if t.field == field))
    };

    let parse_error = |source: chrono::ParseError| TimeFormatError::Parse {
        text: text.to_string(),
        pattern: pattern.to_string(),
        source,
    };

    let mut parsed = Parsed::new();
    format::parse(&mut parsed, text, StrftimeItems::new(&layout)).map_err(parse_error)?;

    let defaults = [
        (Field::Year, 1970),
        (Field::Month, 1),
        (Field::Day, 1),
        (Field::Minute, 0),
        (Field::Second, 0),
        (Field::Offset, 0),
    ];
    for (field, value) in defaults {
        if has(field) {
            continue;
        }
        match field {
            Field::Year => parsed.set_year(value),
            Field::Month => parsed.set_month(value),
            Field::Day => parsed.set_day(value),
            Field::Minute => parsed.set_minute(value),
            Field::Second => parsed.set_second(value),
            _ => parsed.set_offset(value),
        }
        .map_err(parse_error)?;
    }
    if !has(Field::Hour) && !has(Field::Hour12) {
        parsed.set_hour(0).map_err(parse_error)?;
    }

    parsed.to_datetime().map_err(parse_error)
}

#[cfg(test)]
pub(crate) fn token_count(pattern: &str) -> usize {
    tokenize(pattern)
        .iter()
        .filter(|s| matches!(s, Segment::Token(_)))
        .count()
}
