//! Defines [`DocumentMeta`] and the front-matter parser which turns the raw
//! text of a post source file into metadata and a markup body.
//!
//! A post source file looks like this:
//!
//! ```text
//! Title: Hello, world!
//! Date: 2021-04-16 09:30
//! Tags: greet
//! ==========
//! The body, in markup.
//! ```
//!
//! Everything before the first delimiter line is the metadata block. The
//! remaining delimiter-separated segments are joined back together (without
//! the delimiters) to form the body.

use crate::timestamp::{ParseError as TimeStampError, TimeStamp};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// The delimiter line that separates the metadata block from the body.
pub const DELIMITER: &str = "==========\n";

/// Per-post metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentMeta {
    pub title: String,

    /// The post's single tag string. Empty if the post is untagged.
    pub tags: String,

    pub timestamp: TimeStamp,

    /// The output file name relative to the post output directory. Empty
    /// until the page has been written.
    pub path: String,
}

/// A [`DocumentMeta`] shared between the post list and the tag index.
pub type SharedMeta = Rc<DocumentMeta>;

impl DocumentMeta {
    /// Parses a metadata block. See the module docs for the grammar.
    pub fn parse(block: &str) -> Result<DocumentMeta> {
        let mut title = None;
        let mut tags = String::new();
        let mut date = None;

        for line in block.lines() {
            let (key, value) = match line.split_once(':') {
                Some((key, value)) => (key.trim().to_lowercase(), value.trim()),
                None => continue,
            };
            match key.as_str() {
                "title" => title = Some(value.to_owned()),
                "tags" | "tag" => tags = value.to_owned(),
                "date" | "time" | "timestamp" => date = Some(value),
                _ => {}
            }
        }

        Ok(DocumentMeta {
            title: title.ok_or(Error::MissingField("title"))?,
            tags,
            timestamp: date.ok_or(Error::MissingField("date"))?.parse()?,
            path: String::new(),
        })
    }

    /// Orders posts newest-first. Posts sharing a timestamp are ordered by
    /// title, then by output path, so the order is total.
    pub fn newest_first(a: &DocumentMeta, b: &DocumentMeta) -> Ordering {
        TimeStamp::newest_first(&a.timestamp, &b.timestamp)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.path.cmp(&b.path))
    }
}

/// Sorts posts newest-first (see [`DocumentMeta::newest_first`]).
pub fn sort_newest_first(posts: &mut [SharedMeta]) {
    posts.sort_by(|a, b| DocumentMeta::newest_first(a, b));
}

/// Splits raw post text at `delimiter`. Returns `None` if the delimiter does
/// not occur, meaning the text is not a post. Otherwise returns the metadata
/// block and the body.
pub fn split_front_matter<'a>(raw: &'a str, delimiter: &str) -> Option<(&'a str, String)> {
    if delimiter.is_empty() || !raw.contains(delimiter) {
        return None;
    }
    let mut segments = raw.split(delimiter);
    let meta = segments.next()?;
    Some((meta, segments.collect()))
}

/// Represents the result of a metadata parse.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error parsing a metadata block.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Returned when a required field is absent.
    MissingField(&'static str),

    /// Returned when the date field can't be parsed.
    TimeStamp(TimeStampError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingField(field) => write!(f, "missing `{}` field", field),
            Error::TimeStamp(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingField(_) => None,
            Error::TimeStamp(err) => Some(err),
        }
    }
}

impl From<TimeStampError> for Error {
    /// Converts a [`TimeStampError`] into an [`Error`]. It allows us to use
    /// the `?` operator when parsing the date field.
    fn from(err: TimeStampError) -> Error {
        Error::TimeStamp(err)
    }
}
