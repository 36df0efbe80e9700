//! Exports [`TemplateRenderer`], which applies one skin template to one data
//! object, and the helper functions templates may call:
//!
//! * `GetTimeStamp ts [layout]` renders a post timestamp
//! * `GetTagnameHash name` returns a short stable identifier for a tag, for
//!   use in anchors and URLs
//! * `GetTodayStamp [layout]` renders the current date (about page only)

use crate::value::DATETIME_FIELD_LAYOUT;
use chrono::{Local, NaiveDateTime};
use gtmpl::{Context, Template};
use gtmpl_value::Value;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const TODAY_LAYOUT: &str = "%Y-%m-%d";

/// Renders skin templates. Each call to [`TemplateRenderer::render`] parses a
/// fresh [`Template`], so nothing is shared between pages.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateRenderer {
    today_stamp: bool,
}

impl TemplateRenderer {
    /// A renderer exposing `GetTimeStamp` and `GetTagnameHash`.
    pub fn new() -> TemplateRenderer {
        TemplateRenderer::default()
    }

    /// A renderer which additionally exposes `GetTodayStamp`.
    pub fn with_today_stamp() -> TemplateRenderer {
        TemplateRenderer { today_stamp: true }
    }

    /// Parses the template at `template_path` and executes it against
    /// `data`, returning the rendered bytes.
    pub fn render(&self, template_path: &Path, data: Value) -> Result<Vec<u8>> {
        let contents = fs::read_to_string(template_path).map_err(|err| Error::OpenTemplate {
            path: template_path.to_owned(),
            err,
        })?;

        let mut template = Template::default();
        template.add_func("GetTimeStamp", get_time_stamp);
        template.add_func("GetTagnameHash", get_tagname_hash);
        if self.today_stamp {
            template.add_func("GetTodayStamp", get_today_stamp);
        }
        template.parse(&contents).map_err(|e| Error::Parse {
            path: template_path.to_owned(),
            message: e.to_string(),
        })?;

        let execute_err = |message: String| Error::Execute {
            path: template_path.to_owned(),
            message,
        };
        let context = Context::from(data).map_err(|e| execute_err(e.to_string()))?;
        let mut out = Vec::new();
        template
            .execute(&mut out, &context)
            .map_err(|e| execute_err(e.to_string()))?;
        Ok(out)
    }
}

/// Returns the first eight hex digits of the SHA-256 of `name`.
pub fn tagname_hash(name: &str) -> String {
    let mut digest = hex::encode(Sha256::digest(name.as_bytes()));
    digest.truncate(8);
    digest
}

fn get_time_stamp(args: &[Value]) -> std::result::Result<Value, String> {
    let fields = match args.first() {
        Some(Value::Object(fields)) => fields,
        _ => return Err(String::from("GetTimeStamp: expected a timestamp")),
    };
    match args.get(1) {
        None => match fields.get("Formatted") {
            Some(formatted @ Value::String(_)) => Ok(formatted.clone()),
            _ => Err(String::from("GetTimeStamp: timestamp has no `Formatted` field")),
        },
        Some(Value::String(layout)) => match fields.get("DateTime") {
            Some(Value::String(datetime)) => {
                NaiveDateTime::parse_from_str(datetime, DATETIME_FIELD_LAYOUT)
                    .map(|d| Value::String(d.format(layout).to_string()))
                    .map_err(|e| format!("GetTimeStamp: {}", e))
            }
            _ => Err(String::from("GetTimeStamp: timestamp has no `DateTime` field")),
        },
        Some(_) => Err(String::from("GetTimeStamp: layout must be a string")),
    }
}

fn get_tagname_hash(args: &[Value]) -> std::result::Result<Value, String> {
    match args {
        [Value::String(name)] => Ok(Value::String(tagname_hash(name))),
        _ => Err(String::from("GetTagnameHash: expected one tag name")),
    }
}

fn get_today_stamp(args: &[Value]) -> std::result::Result<Value, String> {
    let layout = match args {
        [] => TODAY_LAYOUT,
        [Value::String(layout)] => layout.as_str(),
        _ => return Err(String::from("GetTodayStamp: layout must be a string")),
    };
    Ok(Value::String(Local::now().format(layout).to_string()))
}

/// The result of rendering a template.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error rendering a template.
#[derive(Debug)]
pub enum Error {
    /// Returned when the template file can't be read.
    OpenTemplate { path: PathBuf, err: io::Error },

    /// Returned when the template doesn't parse.
    Parse { path: PathBuf, message: String },

    /// Returned when executing the template against its data fails.
    Execute { path: PathBuf, message: String },
}

impl Error {
    /// Returns `true` if the template itself is at fault (as opposed to the
    /// file being unreadable).
    pub fn is_template_failure(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::Execute { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OpenTemplate { path, err } => {
                write!(f, "Opening template file '{}': {}", path.display(), err)
            }
            Error::Parse { path, message } => {
                write!(f, "Parsing template '{}': {}", path.display(), message)
            }
            Error::Execute { path, message } => {
                write!(f, "Executing template '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OpenTemplate { path: _, err } => Some(err),
            Error::Parse { .. } | Error::Execute { .. } => None,
        }
    }
}
