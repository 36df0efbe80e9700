//! Exports [`Builder`], which stitches together the steps of building the
//! output site:
//!
//! 1. load the skin
//! 2. collect the post source files
//! 3. render each post page and record its metadata
//! 4. sort the posts and the tag groups newest-first
//! 5. paginate the posts into index pages
//! 6. render the about page (if `about.ps` exists) and the tags page
//! 7. copy the skin's static assets and the posts' resources
//!
//! Failures that concern a single post are collected in the
//! [`BuildReport`]; everything else aborts the build with an [`Error`].

use crate::config::{Config, Manifest, VersionInfo};
use crate::index::IndexPaginator;
use crate::mark::{Mark, Markdown};
use crate::pack::{self, Resource};
use crate::page::{PostPage, Site};
use crate::post::{sort_newest_first, SharedMeta, DELIMITER};
use crate::render;
use crate::skin::{self, Skin};
use crate::tag::TagAggregator;
use crate::util::make_file_name;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// The directory holding post sources, relative to the project root.
pub const POST_DIRECTORY: &str = "post";

/// Post source files are those whose name contains this marker.
pub const POST_MARKER: &str = ".ps";

/// The about page source, inside [`POST_DIRECTORY`].
pub const ABOUT_FILE: &str = "about.ps";

/// The output directory, relative to the project root.
pub const OUTPUT_DIRECTORY: &str = "dist";

/// Post pages are written here, relative to [`OUTPUT_DIRECTORY`].
pub const PAGE_DIRECTORY: &str = "page";

const RESOURCE_DIRECTORY: &str = "res";
const STATIC_OUTPUT_DIRECTORY: &str = "static";

/// Builds a site from a project root.
pub struct Builder {
    root: PathBuf,
    manifest: Manifest,
    config: Config,
    version: VersionInfo,
    mark: Box<dyn Mark>,
    delimiter: String,
}

impl Builder {
    /// Creates a builder for the project at `root`. Post bodies are rendered
    /// with [`Markdown`], in legacy mode if the config asks for it.
    pub fn new(root: &Path, manifest: Manifest, config: Config) -> Builder {
        let mark = Box::new(Markdown::new(config.use_legacy_parser));
        Builder {
            root: root.to_owned(),
            manifest,
            config,
            version: VersionInfo::default(),
            mark,
            delimiter: DELIMITER.to_owned(),
        }
    }

    /// Replaces the markup engine.
    pub fn with_mark(mut self, mark: Box<dyn Mark>) -> Builder {
        self.mark = mark;
        self
    }

    pub fn with_version(mut self, version: VersionInfo) -> Builder {
        self.version = version;
        self
    }

    /// Replaces the line separating metadata from body in post sources.
    pub fn with_delimiter(mut self, delimiter: &str) -> Builder {
        self.delimiter = delimiter.to_owned();
        self
    }

    fn output_directory(&self) -> PathBuf {
        self.root.join(OUTPUT_DIRECTORY)
    }

    /// Runs a full build, writing the site into `{root}/dist/`.
    pub fn build(&self) -> Result<BuildReport> {
        let start = Instant::now();

        let skin = Skin::load(&self.root)?;
        let site = Site {
            skin: &skin,
            manifest: &self.manifest,
            mark: self.mark.as_ref(),
            version: &self.version,
            delimiter: &self.delimiter,
        };

        let post_directory = self.root.join(POST_DIRECTORY);
        let sources = collect_sources(&post_directory)?;

        info!("Building {} post(s)...", sources.len());
        self.prepare_output()?;

        let mut pipeline = Pipeline {
            site,
            output: self.output_directory(),
            posts: Vec::with_capacity(sources.len()),
            file_names: HashSet::new(),
            tags: TagAggregator::new(),
            report: BuildReport::default(),
        };
        for source in &sources {
            pipeline.build_post(source)?;
        }

        pipeline.tags.sort();
        sort_newest_first(&mut pipeline.posts);

        let page_size = self.config.index_num.unwrap_or(skin.conf.index_num);
        pipeline.build_indices(page_size)?;

        let about = post_directory.join(ABOUT_FILE);
        if about.is_file() {
            pipeline.build_about(&about)?;
        } else {
            debug!("{} not found, skipping the about page", about.display());
        }

        pipeline.build_tags()?;

        info!("Packing resources...");
        let output = self.output_directory();
        pipeline.report.missing_resources = pack::pack(&[
            Resource {
                source: skin.static_directory(),
                destination: output.join(STATIC_OUTPUT_DIRECTORY),
            },
            Resource {
                source: post_directory.join(RESOURCE_DIRECTORY),
                destination: output.join(PAGE_DIRECTORY).join(RESOURCE_DIRECTORY),
            },
        ])?;

        let mut report = pipeline.report;
        report.duration = start.elapsed();
        Ok(report)
    }

    /// Creates the output directories, first removing the old output when
    /// the config asks for a clean build.
    fn prepare_output(&self) -> Result<()> {
        let output = self.output_directory();
        if self.config.clean {
            rmdir(&output)?;
        }
        if !output.exists() {
            info!("Output directory {} does not exist, creating it", output.display());
        }
        let pages = output.join(PAGE_DIRECTORY);
        fs::create_dir_all(&pages).map_err(|err| Error::Write { path: pages, err })
    }
}

/// Lists the post sources in `dir`: files whose name contains
/// [`POST_MARKER`], except [`ABOUT_FILE`]. Sorted by file name.
fn collect_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |err| Error::Read {
        path: dir.to_owned(),
        err,
    };
    let mut sources = Vec::new();
    for result in fs::read_dir(dir).map_err(read_err)? {
        let entry = result.map_err(read_err)?;
        let os_file_name = entry.file_name();
        let file_name = os_file_name.to_string_lossy();
        if file_name.contains(POST_MARKER)
            && file_name != ABOUT_FILE
            && !entry.file_type().map_err(read_err)?.is_dir()
        {
            sources.push(entry.path());
        }
    }
    sources.sort();
    Ok(sources)
}

/// The mutable state of one build run.
struct Pipeline<'a> {
    site: Site<'a>,
    output: PathBuf,

    /// Every built post, drained by pagination.
    posts: Vec<SharedMeta>,

    /// Output names of the post pages written so far.
    file_names: HashSet<String>,
    tags: TagAggregator,
    report: BuildReport,
}

impl Pipeline<'_> {
    fn build_post(&mut self, source: &Path) -> Result<()> {
        let bytes = fs::read(source).map_err(|err| Error::Read {
            path: source.to_owned(),
            err,
        })?;
        let reason = match String::from_utf8(bytes) {
            Ok(raw) => match self.render_post(source, &raw)? {
                Some(reason) => reason,
                None => return Ok(()),
            },
            Err(_) => SkipReason::NotText,
        };
        warn!("Skipping {}: {}", source.display(), reason);
        self.report.skipped.push(SkippedPost {
            source: source.to_owned(),
            reason,
        });
        Ok(())
    }

    /// Renders and writes one post page. Returns the reason the post was
    /// skipped, or `None` if it was written.
    fn render_post(&mut self, source: &Path, raw: &str) -> Result<Option<SkipReason>> {
        let page = self.site.build_post(raw).map_err(|err| Error::Render {
            page: source.display().to_string(),
            err,
        })?;

        Ok(Some(match page {
            PostPage::Built { html, mut meta } => {
                let name = make_file_name(&meta.title, &meta.timestamp);
                if !self.file_names.insert(name.clone()) {
                    return Ok(Some(SkipReason::DuplicateName(name)));
                }
                info!(" => {}", name);
                write(&self.output.join(PAGE_DIRECTORY).join(&name), &html)?;

                meta.path = name.clone();
                let meta = Rc::new(meta);
                self.tags.add(&meta);
                self.posts.push(meta);
                self.report.posts.push(name);
                return Ok(None);
            }
            PostPage::NotAPost => SkipReason::NotAPost,
            PostPage::InvalidMeta(err) => SkipReason::InvalidMeta(err.to_string()),
            PostPage::RenderFailed { meta, err } => {
                SkipReason::Render(format!("{}: {}", meta.title, err))
            }
        }))
    }

    fn build_indices(&mut self, page_size: usize) -> Result<()> {
        let posts = std::mem::take(&mut self.posts);
        if posts.is_empty() {
            warn!("No posts were built, so no index pages will be written");
        }
        for page in IndexPaginator::new(posts, page_size) {
            let html = self.site.build_index(&page).map_err(|err| Error::Render {
                page: page.file_name.clone(),
                err,
            })?;
            write(&self.output.join(&page.file_name), &html)?;
            self.report.index_pages.push(page.file_name);
        }
        Ok(())
    }

    fn build_about(&mut self, source: &Path) -> Result<()> {
        let raw = fs::read_to_string(source).map_err(|err| Error::Read {
            path: source.to_owned(),
            err,
        })?;
        let html = self.site.build_about(&raw).map_err(|err| Error::Render {
            page: String::from("about.html"),
            err,
        })?;
        write(&self.output.join("about.html"), &html)?;
        self.report.about = true;
        Ok(())
    }

    fn build_tags(&mut self) -> Result<()> {
        let html = self.site.build_tags(&self.tags).map_err(|err| Error::Render {
            page: String::from("tags.html"),
            err,
        })?;
        write(&self.output.join("tags.html"), &html)?;
        self.report.tagged = self.tags.tagged();
        Ok(())
    }
}

fn write(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|err| Error::Write {
        path: path.to_owned(),
        err,
    })
}

fn rmdir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(x) => Ok(x),
        Err(e) => match e.kind() {
            io::ErrorKind::NotFound => Ok(()),
            _ => Err(Error::Clean {
                path: dir.to_owned(),
                err: e,
            }),
        },
    }
}

/// What a build produced.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// File names of the post pages written, in source order.
    pub posts: Vec<String>,

    /// Post sources that were not built.
    pub skipped: Vec<SkippedPost>,

    /// File names of the index pages written, first page first.
    pub index_pages: Vec<String>,

    /// The number of tagged posts.
    pub tagged: usize,

    /// Whether the about page was written.
    pub about: bool,

    /// Resource directories that didn't exist and weren't copied.
    pub missing_resources: Vec<PathBuf>,

    pub duration: Duration,
}

/// A post source that was skipped, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPost {
    pub source: PathBuf,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The source has no delimiter line.
    NotAPost,

    /// The source isn't UTF-8 text.
    NotText,

    /// The metadata block couldn't be parsed.
    InvalidMeta(String),

    /// The post template failed.
    Render(String),

    /// An earlier post already claimed this output file name.
    DuplicateName(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SkipReason::NotAPost => write!(f, "no `==========` delimiter line"),
            SkipReason::NotText => write!(f, "not UTF-8 text"),
            SkipReason::InvalidMeta(err) => write!(f, "invalid metadata: {}", err),
            SkipReason::Render(err) => write!(f, "rendering failed: {}", err),
            SkipReason::DuplicateName(name) => write!(f, "`{}` was already written", name),
        }
    }
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site.
#[derive(Debug)]
pub enum Error {
    /// Returned when the skin can't be loaded.
    Skin(skin::Error),

    /// Returned when a source file or directory can't be read.
    Read { path: PathBuf, err: io::Error },

    /// Returned when an output file or directory can't be written.
    Write { path: PathBuf, err: io::Error },

    /// Returned when the old output directory can't be removed.
    Clean { path: PathBuf, err: io::Error },

    /// Returned when a page that the site requires fails to render.
    Render { page: String, err: render::Error },

    /// Returned when resources can't be copied.
    Pack(pack::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Skin(err) => err.fmt(f),
            Error::Read { path, err } => write!(f, "Reading '{}': {}", path.display(), err),
            Error::Write { path, err } => write!(f, "Writing '{}': {}", path.display(), err),
            Error::Clean { path, err } => {
                write!(f, "Cleaning directory '{}': {}", path.display(), err)
            }
            Error::Render { page, err } => write!(f, "Building {}: {}", page, err),
            Error::Pack(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Skin(err) => Some(err),
            Error::Read { path: _, err } => Some(err),
            Error::Write { path: _, err } => Some(err),
            Error::Clean { path: _, err } => Some(err),
            Error::Render { page: _, err } => Some(err),
            Error::Pack(err) => Some(err),
        }
    }
}

impl From<skin::Error> for Error {
    /// Converts [`skin::Error`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: skin::Error) -> Error {
        Error::Skin(err)
    }
}

impl From<pack::Error> for Error {
    /// Converts [`pack::Error`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: pack::Error) -> Error {
        Error::Pack(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testutil::{write_post, write_project, SkinTemplates};
    use std::collections::BTreeMap;
    use walkdir::WalkDir;

    fn builder(root: &Path, config: Config) -> Builder {
        let (manifest, root) = Manifest::from_directory(root).unwrap();
        Builder::new(&root, manifest, config).with_version(VersionInfo {
            name: "nemo".to_owned(),
            version: "0.0.1".to_owned(),
        })
    }

    fn paged(index_num: usize) -> Config {
        Config {
            index_num: Some(index_num),
            ..Config::default()
        }
    }

    fn read(path: PathBuf) -> String {
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e))
    }

    /// Reads every file under `dir`, keyed by its path relative to `dir`.
    fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
        WalkDir::new(dir)
            .into_iter()
            .map(|entry| entry.unwrap())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                (
                    entry.path().strip_prefix(dir).unwrap().to_owned(),
                    fs::read(entry.path()).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_build_site() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(root, &SkinTemplates::default()).unwrap();
        write_post(root, "a.ps", "Alpha", "2021-01-01 10:00", "rust").unwrap();
        write_post(root, "b.ps", "Beta", "2021-01-03 10:00", "").unwrap();
        write_post(root, "c.ps", "Gamma", "2021-01-02 10:00", "rust").unwrap();
        fs::write(root.join("post").join("notes.ps"), "no delimiter here").unwrap();
        fs::write(root.join("post").join("broken.ps"), "Title: x\n==========\n").unwrap();
        fs::write(root.join("post").join("readme.txt"), "ignored").unwrap();
        fs::create_dir_all(root.join("post").join("drafts.ps")).unwrap();

        let report = builder(root, paged(2)).build().unwrap();

        assert_eq!(
            report.posts,
            vec![
                "20210101100000-alpha.html",
                "20210103100000-beta.html",
                "20210102100000-gamma.html",
            ]
        );
        let skipped: Vec<(&Path, &SkipReason)> = report
            .skipped
            .iter()
            .map(|s| (s.source.strip_prefix(root).unwrap(), &s.reason))
            .collect();
        assert_eq!(skipped.len(), 2);
        assert_eq!(skipped[0].0, Path::new("post/broken.ps"));
        assert!(matches!(skipped[0].1, SkipReason::InvalidMeta(_)));
        assert_eq!(skipped[1], (Path::new("post/notes.ps"), &SkipReason::NotAPost));

        assert_eq!(report.index_pages, vec!["index.html", "index-1.html"]);
        assert_eq!(report.tagged, 2);
        assert!(!report.about);

        let dist = root.join(OUTPUT_DIRECTORY);
        assert_eq!(
            read(dist.join("page").join("20210101100000-alpha.html")),
            "[head post My Blog Alpha][nav post My Blog]<h1>Alpha</h1>\
             <time>2021-01-01 10:00</time><p>Alpha body</p>\n[foot post]"
        );
        assert_eq!(
            read(dist.join("index.html")),
            "[head index My Blog ][nav index My Blog]\
             20210103100000-beta.html 20210102100000-gamma.html |./index-1.html[foot index]"
        );
        assert_eq!(
            read(dist.join("index-1.html")),
            "[head index My Blog ][nav index My Blog]\
             20210101100000-alpha.html ./index-1.html|[foot index]"
        );
        assert_eq!(
            read(dist.join("tags.html")),
            format!(
                "[head index My Blog ][nav index My Blog]2:rust#{}(Gamma;Alpha;)[foot index]",
                render::tagname_hash("rust")
            )
        );
        assert!(!dist.join("about.html").exists());
    }

    #[test]
    fn test_about_page() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(root, &SkinTemplates::default()).unwrap();
        fs::write(root.join("post").join(ABOUT_FILE), "Hi *there*").unwrap();

        let report = builder(root, Config::default()).build().unwrap();

        assert!(report.about);
        assert!(report.posts.is_empty());
        assert!(report.skipped.is_empty());
        assert_eq!(
            read(root.join(OUTPUT_DIRECTORY).join("about.html")),
            "[head index My Blog ][nav index My Blog]nemo v0.0.1 test-skin\
             <p>Hi <em>there</em></p>\n[foot index]"
        );
    }

    #[test]
    fn test_no_posts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(root, &SkinTemplates::default()).unwrap();

        let report = builder(root, Config::default()).build().unwrap();

        assert!(report.index_pages.is_empty());
        assert_eq!(report.tagged, 0);
        let dist = root.join(OUTPUT_DIRECTORY);
        assert!(!dist.join("index.html").exists());
        assert!(dist.join(PAGE_DIRECTORY).is_dir());
        assert_eq!(
            read(dist.join("tags.html")),
            "[head index My Blog ][nav index My Blog]0:[foot index]"
        );
    }

    #[test]
    fn test_broken_post_template_skips_posts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(
            root,
            &SkinTemplates {
                post: "{{ if .Meta }",
                ..SkinTemplates::default()
            },
        )
        .unwrap();
        write_post(root, "a.ps", "Alpha", "2021-01-01", "rust").unwrap();

        let report = builder(root, Config::default()).build().unwrap();

        assert!(report.posts.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert!(matches!(report.skipped[0].reason, SkipReason::Render(_)));
        assert_eq!(report.tagged, 0);
        let pages = root.join(OUTPUT_DIRECTORY).join(PAGE_DIRECTORY);
        assert_eq!(fs::read_dir(pages).unwrap().count(), 0);
    }

    #[test]
    fn test_broken_index_template_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(
            root,
            &SkinTemplates {
                index: "{{ range }",
                ..SkinTemplates::default()
            },
        )
        .unwrap();
        write_post(root, "a.ps", "Alpha", "2021-01-01", "").unwrap();

        match builder(root, Config::default()).build() {
            Err(Error::Render { page, err }) => {
                assert_eq!(page, "index.html");
                assert!(err.is_template_failure());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_skin_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(root, &SkinTemplates::default()).unwrap();
        fs::remove_dir_all(root.join(crate::skin::SKIN_DIRECTORY)).unwrap();

        assert!(matches!(
            builder(root, Config::default()).build(),
            Err(Error::Skin(_))
        ));
    }

    #[test]
    fn test_missing_post_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(root, &SkinTemplates::default()).unwrap();
        fs::remove_dir_all(root.join(POST_DIRECTORY)).unwrap();

        assert!(matches!(
            builder(root, Config::default()).build(),
            Err(Error::Read { .. })
        ));
    }

    #[test]
    fn test_resources_are_packed() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(root, &SkinTemplates::default()).unwrap();
        fs::write(root.join("skin").join("static").join("site.css"), "body {}").unwrap();

        let report = builder(root, Config::default()).build().unwrap();
        let dist = root.join(OUTPUT_DIRECTORY);
        assert_eq!(read(dist.join("static").join("site.css")), "body {}");
        assert_eq!(report.missing_resources, vec![root.join("post").join("res")]);

        fs::create_dir_all(root.join("post").join("res").join("img")).unwrap();
        fs::write(root.join("post").join("res").join("img").join("a.txt"), "a").unwrap();
        let report = builder(root, Config::default()).build().unwrap();
        assert!(report.missing_resources.is_empty());
        assert_eq!(read(dist.join("page").join("res").join("img").join("a.txt")), "a");
    }

    #[test]
    fn test_clean_removes_stale_output() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(root, &SkinTemplates::default()).unwrap();
        let stale = root.join(OUTPUT_DIRECTORY).join("stale.html");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        builder(root, Config::default()).build().unwrap();
        assert!(stale.exists());

        let config = Config {
            clean: true,
            ..Config::default()
        };
        builder(root, config).build().unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn test_rebuild_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(root, &SkinTemplates::default()).unwrap();
        for (i, tag) in ["rust", "go", "", "rust", "go"].iter().enumerate() {
            write_post(
                root,
                &format!("{}.ps", i),
                &format!("Post {}", i),
                // Two posts share a timestamp.
                &format!("2021-01-0{} 10:00", 1 + i % 4),
                tag,
            )
            .unwrap();
        }
        fs::write(root.join("post").join(ABOUT_FILE), "About").unwrap();

        let config = Config {
            index_num: Some(2),
            clean: true,
            ..Config::default()
        };
        builder(root, config.clone()).build().unwrap();
        let first = snapshot(&root.join(OUTPUT_DIRECTORY));
        builder(root, config).build().unwrap();
        let second = snapshot(&root.join(OUTPUT_DIRECTORY));

        assert_eq!(first.len(), 5 + 3 + 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(root, &SkinTemplates::default()).unwrap();
        fs::write(
            root.join("post").join("a.ps"),
            "Title: Alpha\nDate: 2021-01-01\n---\nbody\n",
        )
        .unwrap();

        let report = builder(root, Config::default())
            .with_delimiter("---\n")
            .build()
            .unwrap();
        assert_eq!(report.posts, vec!["20210101000000-alpha.html"]);
    }

    #[test]
    fn test_posts_seconds_apart_get_their_own_pages() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(root, &SkinTemplates::default()).unwrap();
        write_post(root, "a.ps", "Same", "2021-01-01 10:00:01", "").unwrap();
        write_post(root, "b.ps", "Same", "2021-01-01 10:00:02", "").unwrap();

        let report = builder(root, Config::default()).build().unwrap();

        assert_eq!(
            report.posts,
            vec!["20210101100001-same.html", "20210101100002-same.html"]
        );
        assert!(report.skipped.is_empty());
        let pages = root.join(OUTPUT_DIRECTORY).join(PAGE_DIRECTORY);
        assert!(pages.join("20210101100001-same.html").is_file());
        assert!(pages.join("20210101100002-same.html").is_file());
    }

    #[test]
    fn test_duplicate_file_name_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(root, &SkinTemplates::default()).unwrap();
        write_post(root, "a.ps", "Same", "2021-01-01 10:00", "first").unwrap();
        write_post(root, "b.ps", "Same", "2021-01-01 10:00", "second").unwrap();

        let report = builder(root, paged(10)).build().unwrap();

        assert_eq!(report.posts, vec!["20210101100000-same.html"]);
        assert_eq!(
            report.skipped,
            vec![SkippedPost {
                source: root.join("post").join("b.ps"),
                reason: SkipReason::DuplicateName("20210101100000-same.html".to_owned()),
            }]
        );
        assert_eq!(report.tagged, 1);
        assert_eq!(
            read(root.join(OUTPUT_DIRECTORY).join("index.html")),
            "[head index My Blog ][nav index My Blog]20210101100000-same.html |[foot index]"
        );
    }

    #[test]
    fn test_binary_source_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(root, &SkinTemplates::default()).unwrap();
        write_post(root, "a.ps", "Alpha", "2021-01-01", "").unwrap();
        fs::write(root.join("post").join("cover.psd"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let report = builder(root, Config::default()).build().unwrap();

        assert_eq!(report.posts, vec!["20210101000000-alpha.html"]);
        assert_eq!(
            report.skipped,
            vec![SkippedPost {
                source: root.join("post").join("cover.psd"),
                reason: SkipReason::NotText,
            }]
        );
    }

    struct Shout;

    impl Mark for Shout {
        fn mark(&self, raw: &str) -> String {
            raw.trim().to_uppercase()
        }
    }

    #[test]
    fn test_custom_mark() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_project(root, &SkinTemplates::default()).unwrap();
        write_post(root, "a.ps", "Alpha", "2021-01-01", "").unwrap();

        builder(root, Config::default())
            .with_mark(Box::new(Shout))
            .build()
            .unwrap();

        assert_eq!(
            read(
                root.join(OUTPUT_DIRECTORY)
                    .join(PAGE_DIRECTORY)
                    .join("20210101000000-alpha.html")
            ),
            "[head post My Blog Alpha][nav post My Blog]<h1>Alpha</h1>\
             <time>2021-01-01 00:00</time>ALPHA BODY[foot post]"
        );
    }
}
