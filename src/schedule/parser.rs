use super::model::{Event, EventCollection};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    static ref CASE_BLOCK: Regex =
        Regex::new(r"(?s)case '(\d{4}-\d{2}-\d{2})':\s*listData = \[(.*?)\];\s*break;").unwrap();
}

const RECORD_FIELDS: [&str; 5] = ["type", "troupe", "city", "location", "content"];

/**
Extracts every date-keyed event list from the frontend source text.

Anything that does not match the expected `case '<date>': listData = [...]; break;`
shape is skipped. A date whose list yields no valid records is left out entirely.
*/
#[tracing::instrument(skip(source))]
pub fn parse_schedule(source: &str) -> EventCollection {
    let mut collection = EventCollection::new();

    for block in CASE_BLOCK.captures_iter(source) {
        let date = block[1].to_string();
        let records = parse_records(&block[2]);

        if records.is_empty() {
            debug!("No valid records under '{}' (omitting date)", date);
            continue;
        }

        collection.insert(date, records);
    }

    collection
}

/// Scans one list body for record literals, in order of appearance.
/// Candidates that do not parse as the fixed five-field shape are dropped.
pub fn parse_records(list_body: &str) -> Vec<Event> {
    let mut records = Vec::new();
    let mut pos = 0;

    while let Some(offset) = list_body[pos..].find('{') {
        let start = pos + offset;

        match parse_record(&list_body[start..]) {
            Some((event, consumed)) => {
                records.push(event);
                pos = start + consumed;
            }
            None => pos = start + 1,
        }
    }

    records
}

/// Parses one `{ type: '..', troupe: '..', city: '..', location: '..', content: '..' }`
/// literal starting at the opening brace. Returns the event and the number of
/// bytes consumed, or None if the text deviates from that exact shape.
fn parse_record(text: &str) -> Option<(Event, usize)> {
    let mut scanner = Scanner::new(text);

    scanner.eat('{')?;

    let mut values: Vec<String> = Vec::with_capacity(RECORD_FIELDS.len());

    for (index, field) in RECORD_FIELDS.iter().enumerate() {
        if index > 0 {
            scanner.eat(',')?;
        }

        if scanner.identifier() != *field {
            return None;
        }

        scanner.eat(':')?;
        values.push(scanner.quoted()?.to_string());
    }

    scanner.eat('}')?;

    let [event_type, troupe, city, location, content]: [String; 5] = values.try_into().ok()?;

    Some((
        Event::new(event_type, troupe, city, location, content),
        scanner.position(),
    ))
}

struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.text[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, expected: char) -> Option<()> {
        self.skip_whitespace();

        if self.text[self.pos..].starts_with(expected) {
            self.pos += expected.len_utf8();
            Some(())
        } else {
            None
        }
    }

    fn identifier(&mut self) -> &'a str {
        self.skip_whitespace();

        let rest = &self.text[self.pos..];
        let end = rest
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(rest.len());

        self.pos += end;
        &rest[..end]
    }

    /// Reads a span delimited by matching `'` or `"` quotes. The span is
    /// returned raw; there is no escape handling.
    fn quoted(&mut self) -> Option<&'a str> {
        self.skip_whitespace();

        let rest = &self.text[self.pos..];
        let quote = rest.chars().next().filter(|c| *c == '\'' || *c == '"')?;
        let value = &rest[1..];
        let end = value.find(quote)?;

        self.pos += 1 + end + 1;
        Some(&value[..end])
    }
}
