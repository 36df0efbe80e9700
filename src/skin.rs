//! Loads the active [`Skin`]: the theme's descriptor, its template files and
//! its static asset directory.
//!
//! A skin lives in `{root}/skin/` and is described by `skin.yaml`:
//!
//! ```yaml
//! name: plain
//! version: "1.0"
//! conf:
//!   index_num: 10
//!   time_format: "%Y-%m-%d %H:%M"
//! paths:
//!   post: post.html
//! ```
//!
//! Every template path defaults to `{kind}.html` and is resolved relative to
//! the skin directory.

use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

pub const SKIN_DIRECTORY: &str = "skin";
pub const SKIN_FILE: &str = "skin.yaml";
pub const STATIC_DIRECTORY: &str = "static";

/// The skin descriptor, as shown to the about page template.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SkinInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub description: String,
}

/// Skin-level rendering settings.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SkinConf {
    /// Posts per index page.
    #[serde(default = "SkinConf::default_index_num")]
    pub index_num: usize,

    /// The [`chrono::format::strftime`] layout for post timestamps.
    #[serde(default = "SkinConf::default_time_format")]
    pub time_format: String,
}

impl SkinConf {
    fn default_index_num() -> usize {
        10
    }

    fn default_time_format() -> String {
        String::from("%Y-%m-%d %H:%M")
    }
}

impl Default for SkinConf {
    fn default() -> Self {
        SkinConf {
            index_num: Self::default_index_num(),
            time_format: Self::default_time_format(),
        }
    }
}

/// Paths to the skin's template files.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SkinPaths {
    pub head: PathBuf,
    pub foot: PathBuf,
    pub nav: PathBuf,
    pub post: PathBuf,
    pub index: PathBuf,
    pub tags: PathBuf,
    pub about: PathBuf,
}

impl Default for SkinPaths {
    fn default() -> Self {
        SkinPaths {
            head: PathBuf::from("head.html"),
            foot: PathBuf::from("foot.html"),
            nav: PathBuf::from("nav.html"),
            post: PathBuf::from("post.html"),
            index: PathBuf::from("index.html"),
            tags: PathBuf::from("tags.html"),
            about: PathBuf::from("about.html"),
        }
    }
}

impl SkinPaths {
    fn resolve(&mut self, dir: &Path) {
        for path in self.iter_mut() {
            *path = dir.join(&*path);
        }
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut PathBuf> {
        vec![
            &mut self.head,
            &mut self.foot,
            &mut self.nav,
            &mut self.post,
            &mut self.index,
            &mut self.tags,
            &mut self.about,
        ]
        .into_iter()
    }
}

#[derive(Deserialize)]
struct Descriptor {
    #[serde(flatten)]
    info: SkinInfo,

    #[serde(default)]
    conf: SkinConf,

    #[serde(default)]
    paths: SkinPaths,
}

/// A loaded skin. Read-only for the whole build.
#[derive(Clone, Debug, PartialEq)]
pub struct Skin {
    /// The skin directory.
    pub directory: PathBuf,
    pub info: SkinInfo,
    pub conf: SkinConf,

    /// Absolute template paths.
    pub paths: SkinPaths,
}

impl Skin {
    /// Loads the skin from `{root}/skin/`. Fails if the descriptor can't be
    /// read or any template file is missing.
    pub fn load(root: &Path) -> Result<Skin> {
        let directory = root.join(SKIN_DIRECTORY);
        let descriptor_path = directory.join(SKIN_FILE);
        let file = File::open(&descriptor_path).map_err(|err| Error::OpenDescriptor {
            path: descriptor_path.clone(),
            err,
        })?;
        let mut descriptor: Descriptor =
            serde_yaml::from_reader(file).map_err(|err| Error::Descriptor {
                path: descriptor_path,
                err,
            })?;

        descriptor.paths.resolve(&directory);
        for path in descriptor.paths.iter_mut() {
            if !path.is_file() {
                return Err(Error::MissingTemplate(path.clone()));
            }
        }

        Ok(Skin {
            directory,
            info: descriptor.info,
            conf: descriptor.conf,
            paths: descriptor.paths,
        })
    }

    /// The directory of static assets copied verbatim into the output.
    pub fn static_directory(&self) -> PathBuf {
        self.directory.join(STATIC_DIRECTORY)
    }
}

/// The result of loading a [`Skin`].
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error loading a [`Skin`].
#[derive(Debug)]
pub enum Error {
    /// Returned when `skin.yaml` can't be opened.
    OpenDescriptor { path: PathBuf, err: io::Error },

    /// Returned when `skin.yaml` isn't a valid descriptor.
    Descriptor {
        path: PathBuf,
        err: serde_yaml::Error,
    },

    /// Returned when a template named by the descriptor doesn't exist.
    MissingTemplate(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OpenDescriptor { path, err } => {
                write!(f, "Opening skin descriptor '{}': {}", path.display(), err)
            }
            Error::Descriptor { path, err } => {
                write!(f, "Parsing skin descriptor '{}': {}", path.display(), err)
            }
            Error::MissingTemplate(path) => {
                write!(f, "Skin template '{}' not found", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OpenDescriptor { path: _, err } => Some(err),
            Error::Descriptor { path: _, err } => Some(err),
            Error::MissingTemplate(_) => None,
        }
    }
}
