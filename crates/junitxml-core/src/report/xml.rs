//! Minimal XML emitter for the fixed JUnit element set.
//!
//! Attribute values go through [`escape_attr`] and text through [`escape`];
//! there is no raw-write path for caller data.

use std::borrow::Cow;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;

/// Element names emitted in a JUnit report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    TestSuites,
    TestSuite,
    TestCase,
    Failure,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::TestSuites => "testsuites",
            Tag::TestSuite => "testsuite",
            Tag::TestCase => "testcase",
            Tag::Failure => "failure",
        }
    }
}

/// Ordered attribute list. Output order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(&'static str, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name`, or overwrites its value in place if already present.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (*n, v.as_str()))
    }
}

/// Escapes character data: the five XML special characters plus `\r`, which a
/// parser would otherwise fold into `\n`. Borrows when nothing needs escaping.
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, false)
}

/// Escapes an attribute value. On top of [`escape`], `\n` and `\t` become
/// character references so attribute-value normalization leaves them intact.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, true)
}

fn escape_with(s: &str, attr: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| match c {
        '&' | '<' | '>' | '"' | '\'' | '\r' => true,
        '\n' | '\t' => attr,
        _ => false,
    };
    if !s.contains(needs_escape) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\r' => out.push_str("&#13;"),
            '\n' if attr => out.push_str("&#10;"),
            '\t' if attr => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Appends tags and text into a single growable buffer.
#[derive(Debug, Default)]
pub struct XmlWriter {
    buf: String,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    pub fn declaration(&mut self) {
        self.buf.push_str(XML_DECLARATION);
    }

    pub fn start_tag(&mut self, tag: Tag, attrs: &Attributes) {
        self.buf.push('<');
        self.buf.push_str(tag.as_str());
        for (name, value) in attrs.iter() {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_attr(value));
            self.buf.push('"');
        }
        self.buf.push('>');
    }

    pub fn end_tag(&mut self, tag: Tag) {
        self.buf.push_str("</");
        self.buf.push_str(tag.as_str());
        self.buf.push('>');
    }

    pub fn text(&mut self, s: &str) {
        self.buf.push_str(&escape(s));
    }

    /// Newline plus `depth * width` spaces. Only ever called between tags.
    pub fn newline(&mut self, width: usize, depth: usize) {
        self.buf.push('\n');
        for _ in 0..width * depth {
            self.buf.push(' ');
        }
    }

    /// Literal line break inside text content.
    pub fn line_break(&mut self) {
        self.buf.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
