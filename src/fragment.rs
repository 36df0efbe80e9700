//! Builds the head, foot and nav fragments every page embeds.

use crate::render::{Result, TemplateRenderer};
use crate::skin::Skin;
use crate::value::{object, string};
use gtmpl_value::Value;

/// Selects how the fragments present themselves. Post pages are
/// [`PageKind::Post`]; index, tags and about pages are [`PageKind::Index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Index,
    Post,
}

impl PageKind {
    fn is_not_index(self) -> bool {
        self == PageKind::Post
    }
}

/// The rendered fragments of one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fragments {
    pub head: String,
    pub foot: String,
    pub nav: String,
}

impl Fragments {
    /// Renders the skin's head, foot and nav templates. `post_title` is only
    /// meaningful for post pages.
    pub fn assemble(
        skin: &Skin,
        kind: PageKind,
        blog_name: &str,
        post_title: Option<&str>,
    ) -> Result<Fragments> {
        let renderer = TemplateRenderer::new();
        let is_not_index = Value::Bool(kind.is_not_index());

        let head = renderer.render(
            &skin.paths.head,
            object(vec![
                ("IsNotIndex", is_not_index.clone()),
                ("BlogName", string(blog_name)),
                ("PostName", string(post_title.unwrap_or_default())),
            ]),
        )?;
        let foot = renderer.render(
            &skin.paths.foot,
            object(vec![("IsNotIndex", is_not_index.clone())]),
        )?;
        let nav = renderer.render(
            &skin.paths.nav,
            object(vec![
                ("IsNotIndex", is_not_index),
                ("BlogName", string(blog_name)),
            ]),
        )?;

        Ok(Fragments {
            head: String::from_utf8_lossy(&head).into_owned(),
            foot: String::from_utf8_lossy(&foot).into_owned(),
            nav: String::from_utf8_lossy(&nav).into_owned(),
        })
    }

    /// The `(key, value)` pairs page data objects embed.
    pub fn fields(self) -> Vec<(&'static str, Value)> {
        vec![
            ("Head", Value::String(self.head)),
            ("Foot", Value::String(self.foot)),
            ("Nav", Value::String(self.nav)),
        ]
    }
}
