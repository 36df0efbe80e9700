//! Loads the blog's [`Manifest`] and build [`Config`], and describes the
//! running binary with [`VersionInfo`].

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The name of the manifest file which marks a project root.
pub const MANIFEST_FILE: &str = "manifest.yaml";

/// The name of the optional build configuration file in the project root.
pub const CONFIG_FILE: &str = "config.yaml";

/// The blog's identity. Read once and never modified during a build.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Manifest {
    pub name: String,

    #[serde(default)]
    pub author: Author,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Author {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub description: String,
}

impl Manifest {
    /// Searches `dir` and then each of its parents for [`MANIFEST_FILE`].
    /// Returns the manifest along with the directory holding it, which is the
    /// project root.
    pub fn from_directory(dir: &Path) -> Result<(Manifest, PathBuf)> {
        let path = dir.join(MANIFEST_FILE);
        if path.exists() {
            match Manifest::from_file(&path) {
                Ok(manifest) => Ok((manifest, dir.to_owned())),
                Err(e) => Err(anyhow!("Loading manifest: {:?}", e)),
            }
        } else {
            match dir.parent() {
                Some(parent) => Manifest::from_directory(parent),
                None => Err(anyhow!(
                    "Could not find `{}` in any parent directory",
                    MANIFEST_FILE
                )),
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Manifest> {
        use crate::util::open;
        Ok(serde_yaml::from_reader(open(path, "manifest")?)?)
    }
}

/// Build options. Every field has a default so the config file is optional.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Posts per index page. Overrides the skin's own setting when present.
    #[serde(default)]
    pub index_num: Option<usize>,

    /// Selects the plain CommonMark engine for post bodies.
    #[serde(default)]
    pub use_legacy_parser: bool,

    /// Removes the output directory before building.
    #[serde(default)]
    pub clean: bool,
}

impl Config {
    /// Loads [`CONFIG_FILE`] from the project root, falling back to defaults
    /// if it doesn't exist.
    pub fn from_directory(root: &Path) -> Result<Config> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Config::default());
        }
        use crate::util::open;
        match serde_yaml::from_reader(open(&path, "config")?) {
            Ok(config) => Ok(config),
            Err(e) => Err(anyhow!("Loading configuration: {}", e)),
        }
    }
}

/// Identifies the generator, shown on the about page.
#[derive(Clone, Debug, PartialEq)]
pub struct VersionInfo {
    pub name: String,
    pub version: String,
}

impl VersionInfo {
    pub fn info(&self) -> String {
        format!("{} v{}", self.name, self.version)
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        VersionInfo {
            name: env!("CARGO_PKG_NAME").to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn test_manifest_found_in_parent() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join(MANIFEST_FILE),
            "name: My Blog\nauthor:\n  name: Ada\n  email: ada@example.com\n",
        )?;
        let nested = dir.path().join("post").join("res");
        fs::create_dir_all(&nested)?;

        let (manifest, root) = Manifest::from_directory(&nested)?;
        assert_eq!(root, dir.path());
        assert_eq!(manifest.name, "My Blog");
        assert_eq!(manifest.author.name, "Ada");
        assert_eq!(manifest.author.link, "");
        Ok(())
    }

    #[test]
    fn test_config_defaults_without_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        assert_eq!(Config::from_directory(dir.path())?, Config::default());

        fs::write(dir.path().join(CONFIG_FILE), "index_num: 3\nclean: true\n")?;
        let config = Config::from_directory(dir.path())?;
        assert_eq!(config.index_num, Some(3));
        assert!(config.clean);
        assert!(!config.use_legacy_parser);
        Ok(())
    }

    #[test]
    fn test_version_info() {
        let info = VersionInfo {
            name: "nemo".to_owned(),
            version: "1.2.3".to_owned(),
        };
        assert_eq!(info.info(), "nemo v1.2.3");
    }
}
