//! Converts build data into template [`Value`]s. Keys are PascalCase so that
//! skins address them as `.Meta.Title`, `.Indexs`, `.PrevPage` and so on.

use crate::config::Author;
use crate::post::DocumentMeta;
use crate::skin::SkinInfo;
use crate::timestamp::TimeStamp;
use chrono::{Datelike, Timelike};
use gtmpl_value::Value;
use std::collections::HashMap;

/// The layout of the `DateTime` field of a timestamp value. Helpers parse it
/// back when a template asks for a custom layout.
pub const DATETIME_FIELD_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S";

/// Builds a [`Value::Object`] from `(key, value)` pairs.
pub fn object<I>(fields: I) -> Value
where
    I: IntoIterator<Item = (&'static str, Value)>,
{
    Value::Object(
        fields
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect(),
    )
}

pub fn string<S: Into<String>>(s: S) -> Value {
    Value::String(s.into())
}

/// Converts a [`TimeStamp`]. `Formatted` is the timestamp rendered with the
/// skin's `time_format`.
pub fn timestamp(ts: &TimeStamp, time_format: &str) -> Value {
    let d = ts.datetime();
    object(vec![
        ("Year", Value::from(i64::from(d.year()))),
        ("Month", Value::from(i64::from(d.month()))),
        ("Day", Value::from(i64::from(d.day()))),
        ("Hour", Value::from(i64::from(d.hour()))),
        ("Minute", Value::from(i64::from(d.minute()))),
        ("Second", Value::from(i64::from(d.second()))),
        ("Stamp", Value::from(ts.stamp_size())),
        ("DateTime", string(ts.format(DATETIME_FIELD_LAYOUT))),
        ("Formatted", string(ts.format(time_format))),
    ])
}

pub fn meta(meta: &DocumentMeta, time_format: &str) -> Value {
    object(vec![
        ("Title", string(meta.title.clone())),
        ("Tags", string(meta.tags.clone())),
        ("Timestamp", timestamp(&meta.timestamp, time_format)),
        ("Path", string(meta.path.clone())),
    ])
}

pub fn metas<'a, I>(posts: I, time_format: &str) -> Value
where
    I: IntoIterator<Item = &'a DocumentMeta>,
{
    Value::Array(posts.into_iter().map(|p| meta(p, time_format)).collect())
}

impl From<&SkinInfo> for Value {
    /// Converts [`SkinInfo`] into a [`Value`] for the about page.
    fn from(info: &SkinInfo) -> Value {
        object(vec![
            ("Name", string(info.name.clone())),
            ("Version", string(info.version.clone())),
            ("Author", string(info.author.clone())),
            ("Description", string(info.description.clone())),
        ])
    }
}

impl From<&Author> for Value {
    /// Converts an [`Author`] into a [`Value`] for the about page.
    fn from(author: &Author) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("Name".to_owned(), string(author.name.clone()));
        m.insert("Email".to_owned(), string(author.email.clone()));
        m.insert("Link".to_owned(), string(author.link.clone()));
        m.insert("Description".to_owned(), string(author.description.clone()));
        Value::Object(m)
    }
}
