//! Splits the sorted post list into index pages.
//!
//! [`IndexPaginator`] drains the post list in chunks of `page_size`, one
//! [`IndexPage`] per call to [`Iterator::next`]. The first page is always
//! `index.html`; later pages are `index-{n}.html` for increasing `n`.
//!
//! Previous-page links follow a fixed rule: once more than two pages have
//! been emitted, the previous link of every later page is `./index.html`;
//! before that it is `./index-{n}.html` where `n` is the number of pages
//! emitted so far minus one.

use crate::post::SharedMeta;

pub const FIRST_PAGE: &str = "index.html";

/// One index page: its file name, its posts and its neighbor links. Links
/// are empty when there is no neighbor.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexPage {
    pub file_name: String,
    pub posts: Vec<SharedMeta>,
    pub prev: String,
    pub next: String,
}

/// Pagination state over a post list sorted newest-first.
#[derive(Debug)]
pub struct IndexPaginator {
    posts: Vec<SharedMeta>,
    page_size: usize,

    /// The number of the next numbered page (`index-{cursor}.html`).
    cursor: usize,
    first_call: bool,
}

impl IndexPaginator {
    /// A `page_size` of zero is treated as one.
    pub fn new(posts: Vec<SharedMeta>, page_size: usize) -> IndexPaginator {
        IndexPaginator {
            posts,
            page_size: page_size.max(1),
            cursor: 0,
            first_call: true,
        }
    }

    /// The number of posts not yet placed on a page.
    pub fn remaining(&self) -> usize {
        self.posts.len()
    }

    fn take(&mut self, n: usize) -> Vec<SharedMeta> {
        let n = n.min(self.posts.len());
        self.posts.drain(..n).collect()
    }

    fn numbered(n: usize) -> String {
        format!("index-{}.html", n)
    }

    fn link(file_name: &str) -> String {
        format!("./{}", file_name)
    }

    fn prev_link(&self) -> String {
        if self.cursor > 2 {
            Self::link(FIRST_PAGE)
        } else {
            Self::link(&Self::numbered(self.cursor - 1))
        }
    }
}

impl Iterator for IndexPaginator {
    type Item = IndexPage;

    fn next(&mut self) -> Option<IndexPage> {
        if self.posts.is_empty() {
            return None;
        }
        let fits = self.posts.len() <= self.page_size;
        let first_call = std::mem::replace(&mut self.first_call, false);

        let page = if fits && first_call {
            IndexPage {
                file_name: FIRST_PAGE.to_owned(),
                posts: self.take(self.page_size),
                prev: String::new(),
                next: String::new(),
            }
        } else if self.cursor == 0 {
            let posts = self.take(self.page_size);
            self.cursor += 1;
            IndexPage {
                file_name: FIRST_PAGE.to_owned(),
                posts,
                prev: String::new(),
                next: Self::link(&Self::numbered(self.cursor)),
            }
        } else {
            let file_name = Self::numbered(self.cursor);
            let posts = self.take(self.page_size);
            self.cursor += 1;
            IndexPage {
                file_name,
                posts,
                prev: self.prev_link(),
                next: if fits {
                    String::new()
                } else {
                    Self::link(&Self::numbered(self.cursor))
                },
            }
        };
        Some(page)
    }
}
