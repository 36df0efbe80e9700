//! The page builders. Each one composes metadata, fragments and content into
//! a template data object and renders it with the matching skin template:
//!
//! | page          | template      | data                                            |
//! |---------------|---------------|-------------------------------------------------|
//! | post          | `paths.post`  | `Content`, `Meta`, fragments                    |
//! | index         | `paths.index` | `Indexs`, `PrevPage`, `NextPage`, fragments     |
//! | tags          | `paths.tags`  | `Tags`, `TagList`, `TagsNum`, fragments         |
//! | about         | `paths.about` | `Content`, `BuildInfo`, `SkinInfo`, `AuthorInfo`, fragments |
//!
//! Builders return rendered bytes; writing them to disk is the caller's job.
//!
//! `Tags` is a map, and `range` walks a map in no fixed order. Skins that
//! need stable output iterate `TagList` instead.

use crate::config::{Manifest, VersionInfo};
use crate::fragment::{Fragments, PageKind};
use crate::index::IndexPage;
use crate::mark::Mark;
use crate::post::{split_front_matter, DocumentMeta};
use crate::render::{self, TemplateRenderer};
use crate::skin::Skin;
use crate::tag::TagAggregator;
use crate::value::{self, object, string};
use gtmpl_value::Value;
use std::collections::HashMap;

/// Everything the page builders read. Fixed for the whole build.
pub struct Site<'a> {
    pub skin: &'a Skin,
    pub manifest: &'a Manifest,
    pub mark: &'a dyn Mark,
    pub version: &'a VersionInfo,

    /// The line separating a post's metadata from its body.
    pub delimiter: &'a str,
}

/// The outcome of building one post page.
#[derive(Debug)]
pub enum PostPage {
    /// The page rendered.
    Built { html: Vec<u8>, meta: DocumentMeta },

    /// The source has no delimiter line.
    NotAPost,

    /// The metadata block couldn't be parsed.
    InvalidMeta(crate::post::Error),

    /// The post template failed to parse or execute. The metadata is still
    /// known.
    RenderFailed {
        meta: DocumentMeta,
        err: render::Error,
    },
}

/// The transient payload of a post page render.
struct Document {
    content: String,
    meta: DocumentMeta,
    fragments: Fragments,
}

impl Document {
    fn into_value(self, time_format: &str) -> Value {
        let mut fields = vec![
            ("Content", Value::String(self.content)),
            ("Meta", value::meta(&self.meta, time_format)),
        ];
        fields.extend(self.fragments.fields());
        object(fields)
    }
}

impl Site<'_> {
    fn time_format(&self) -> &str {
        &self.skin.conf.time_format
    }

    fn fragments(&self, kind: PageKind, post_title: Option<&str>) -> render::Result<Fragments> {
        Fragments::assemble(self.skin, kind, &self.manifest.name, post_title)
    }

    /// Builds a post page from the raw text of its source file. Only an
    /// unreadable template file or fragment failure is an `Err`; everything
    /// that concerns this one post alone is reported through [`PostPage`].
    pub fn build_post(&self, raw: &str) -> render::Result<PostPage> {
        let (meta_block, body) = match split_front_matter(raw, self.delimiter) {
            Some(parts) => parts,
            None => return Ok(PostPage::NotAPost),
        };
        let meta = match DocumentMeta::parse(meta_block) {
            Ok(meta) => meta,
            Err(err) => return Ok(PostPage::InvalidMeta(err)),
        };

        let document = Document {
            content: self.mark.mark(&body),
            fragments: self.fragments(PageKind::Post, Some(&meta.title))?,
            meta: meta.clone(),
        };

        match TemplateRenderer::new().render(
            &self.skin.paths.post,
            document.into_value(self.time_format()),
        ) {
            Ok(html) => Ok(PostPage::Built { html, meta }),
            Err(err) if err.is_template_failure() => Ok(PostPage::RenderFailed { meta, err }),
            Err(err) => Err(err),
        }
    }

    /// Renders one index page.
    pub fn build_index(&self, page: &IndexPage) -> render::Result<Vec<u8>> {
        let mut fields = vec![
            (
                "Indexs",
                value::metas(page.posts.iter().map(|p| &**p), self.time_format()),
            ),
            ("PrevPage", string(page.prev.clone())),
            ("NextPage", string(page.next.clone())),
        ];
        fields.extend(self.fragments(PageKind::Index, None)?.fields());
        TemplateRenderer::new().render(&self.skin.paths.index, object(fields))
    }

    /// Renders the tags page. `Tags` maps each tag to its posts; `TagList`
    /// holds the same groups as a list sorted by tag, each with its `Name`,
    /// `Hash` (see [`render::tagname_hash`]) and `Posts`.
    ///
    /// A `Value::Object` can't carry key order, so `range .Tags` visits the
    /// tags in a different order from one build to the next. Only `TagList`
    /// iterates deterministically; lookups such as `index .Tags "rust"` are
    /// stable.
    pub fn build_tags(&self, tags: &TagAggregator) -> render::Result<Vec<u8>> {
        let time_format = self.time_format();
        let mut map: HashMap<String, Value> = HashMap::new();
        let mut list = Vec::with_capacity(tags.groups().len());
        for (name, posts) in tags.groups() {
            let posts = value::metas(posts.iter().map(|p| &**p), time_format);
            map.insert(name.clone(), posts.clone());
            list.push(object(vec![
                ("Name", string(name.clone())),
                ("Hash", string(render::tagname_hash(name))),
                ("Posts", posts),
            ]));
        }

        let mut fields = vec![
            ("Tags", Value::Object(map)),
            ("TagList", Value::Array(list)),
            ("TagsNum", Value::from(tags.tagged() as i64)),
        ];
        fields.extend(self.fragments(PageKind::Index, None)?.fields());
        TemplateRenderer::new().render(&self.skin.paths.tags, object(fields))
    }

    /// Renders the about page. The whole of `raw` is the body; it has no
    /// metadata block.
    pub fn build_about(&self, raw: &str) -> render::Result<Vec<u8>> {
        let mut fields = vec![
            ("Content", Value::String(self.mark.mark(raw))),
            ("BuildInfo", string(self.version.info())),
            ("SkinInfo", Value::from(&self.skin.info)),
            ("AuthorInfo", Value::from(&self.manifest.author)),
        ];
        fields.extend(self.fragments(PageKind::Index, None)?.fields());
        TemplateRenderer::with_today_stamp().render(&self.skin.paths.about, object(fields))
    }
}
