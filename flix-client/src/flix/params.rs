//! Query string construction.
//!
//! Endpoints disagree on how they want non-string values: some take
//! lowercase booleans, some 0/1 integers, and trip search wants a JSON
//! object packed into a single parameter. `QueryParams` keeps the
//! encoding explicit at each call site.

use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, Serializer};

/// Ordered list of query parameters, already stringified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text parameter.
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.pairs.push((name.to_string(), value.into()));
        self
    }

    /// Add an integer parameter in decimal.
    pub fn int(self, name: &str, value: i64) -> Self {
        self.text(name, value.to_string())
    }

    /// Add a boolean as `"true"` / `"false"`.
    pub fn bool_lower(self, name: &str, value: bool) -> Self {
        self.text(name, if value { "true" } else { "false" })
    }

    /// Add a boolean as `1` / `0`.
    pub fn flag(self, name: &str, value: bool) -> Self {
        self.int(name, i64::from(value))
    }

    /// Add a structured value encoded as JSON with `", "` and `": "`
    /// separators, e.g. `{"adult": 1}`.
    pub fn json(self, name: &str, value: &Value) -> Self {
        let mut buf = Vec::new();
        let written = value.serialize(&mut Serializer::with_formatter(&mut buf, SpacedFormatter));
        let encoded = match written {
            Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| value.to_string()),
            Err(_) => value.to_string(),
        };
        self.text(name, encoded)
    }

    /// Add a list joined with commas.
    pub fn joined<S: AsRef<str>>(self, name: &str, values: &[S]) -> Self {
        let joined = values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        self.text(name, joined)
    }

    /// Look up the first value for a parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The parameters in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// JSON layout with a space after every separator.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        separator(writer, first)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        separator(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn separator<W: ?Sized + io::Write>(writer: &mut W, first: bool) -> io::Result<()> {
    if first {
        Ok(())
    } else {
        writer.write_all(b", ")
    }
}
