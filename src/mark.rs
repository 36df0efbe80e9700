//! The markup engine. Post bodies are handed to a [`Mark`] implementation
//! which returns HTML; the builder never looks inside the markup itself.

use pulldown_cmark::{html, Options, Parser};

/// Converts a post body into HTML. Malformed markup produces best-effort
/// HTML rather than an error.
pub trait Mark {
    fn mark(&self, raw: &str) -> String;
}

/// The default [`Mark`] engine, backed by [`pulldown_cmark`].
#[derive(Clone, Debug)]
pub struct Markdown {
    options: Options,
}

impl Markdown {
    /// The legacy engine parses plain CommonMark. Otherwise footnotes,
    /// smart punctuation, strikethrough, tables and task lists are enabled.
    pub fn new(legacy: bool) -> Markdown {
        let mut options = Options::empty();
        if !legacy {
            options.insert(Options::ENABLE_FOOTNOTES);
            options.insert(Options::ENABLE_SMART_PUNCTUATION);
            options.insert(Options::ENABLE_STRIKETHROUGH);
            options.insert(Options::ENABLE_TABLES);
            options.insert(Options::ENABLE_TASKLISTS);
        }
        Markdown { options }
    }
}

impl Default for Markdown {
    fn default() -> Self {
        Markdown::new(false)
    }
}

impl Mark for Markdown {
    fn mark(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() * 3 / 2);
        html::push_html(&mut out, Parser::new_ext(raw, self.options));
        out
    }
}
