//! Fixtures shared by the unit tests: a small skin whose templates print
//! exactly the data they receive, and helpers for laying out a project.

use crate::config::MANIFEST_FILE;
use crate::skin::{SKIN_DIRECTORY, SKIN_FILE, STATIC_DIRECTORY};
use std::fs;
use std::io;
use std::path::Path;

pub struct SkinTemplates {
    pub head: &'static str,
    pub foot: &'static str,
    pub nav: &'static str,
    pub post: &'static str,
    pub index: &'static str,
    pub tags: &'static str,
    pub about: &'static str,
}

impl Default for SkinTemplates {
    fn default() -> Self {
        SkinTemplates {
            head: "[head {{ if .IsNotIndex }}post{{ else }}index{{ end }} {{ .BlogName }} {{ .PostName }}]",
            foot: "[foot {{ if .IsNotIndex }}post{{ else }}index{{ end }}]",
            nav: "[nav {{ if .IsNotIndex }}post{{ else }}index{{ end }} {{ .BlogName }}]",
            post: "{{ .Head }}{{ .Nav }}<h1>{{ .Meta.Title }}</h1>\
                   <time>{{ GetTimeStamp .Meta.Timestamp }}</time>{{ .Content }}{{ .Foot }}",
            index: "{{ .Head }}{{ .Nav }}{{ range .Indexs }}{{ .Path }} {{ end }}\
                    {{ .PrevPage }}|{{ .NextPage }}{{ .Foot }}",
            tags: "{{ .Head }}{{ .Nav }}{{ .TagsNum }}:{{ range .TagList }}\
                   {{ .Name }}#{{ .Hash }}({{ range .Posts }}{{ .Title }};{{ end }}){{ end }}{{ .Foot }}",
            about: "{{ .Head }}{{ .Nav }}{{ .BuildInfo }} {{ .SkinInfo.Name }}{{ .Content }}{{ .Foot }}",
        }
    }
}

/// Writes `{root}/skin/` with a descriptor naming the skin `test-skin`.
pub fn write_skin(root: &Path, templates: &SkinTemplates) -> io::Result<()> {
    let dir = root.join(SKIN_DIRECTORY);
    fs::create_dir_all(dir.join(STATIC_DIRECTORY))?;
    fs::write(dir.join(SKIN_FILE), "name: test-skin\nversion: \"1\"\n")?;
    for (file, contents) in &[
        ("head.html", templates.head),
        ("foot.html", templates.foot),
        ("nav.html", templates.nav),
        ("post.html", templates.post),
        ("index.html", templates.index),
        ("tags.html", templates.tags),
        ("about.html", templates.about),
    ] {
        fs::write(dir.join(file), contents)?;
    }
    Ok(())
}

/// Writes a manifest and a skin into `root`.
pub fn write_project(root: &Path, templates: &SkinTemplates) -> io::Result<()> {
    fs::write(
        root.join(MANIFEST_FILE),
        "name: My Blog\nauthor:\n  name: Ada\n",
    )?;
    fs::create_dir_all(root.join("post"))?;
    write_skin(root, templates)
}

/// Writes a post source file into `{root}/post/`.
pub fn write_post(root: &Path, file: &str, title: &str, date: &str, tags: &str) -> io::Result<()> {
    fs::write(
        root.join("post").join(file),
        format!(
            "Title: {}\nDate: {}\nTags: {}\n==========\n{} body\n",
            title, date, tags, title
        ),
    )
}
