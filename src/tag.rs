//! Defines [`TagAggregator`], which groups post metadata by tag for the tags
//! page. A post carries at most one tag string and joins exactly that group.

use crate::post::{sort_newest_first, SharedMeta};
use std::collections::BTreeMap;

/// Posts grouped by their raw tag string. Groups iterate in tag order.
#[derive(Debug, Default)]
pub struct TagAggregator {
    groups: BTreeMap<String, Vec<SharedMeta>>,
    tagged: usize,
}

impl TagAggregator {
    pub fn new() -> TagAggregator {
        TagAggregator::default()
    }

    /// Adds `post` to the group named by its tag string. Untagged posts are
    /// ignored.
    pub fn add(&mut self, post: &SharedMeta) {
        if post.tags.is_empty() {
            return;
        }
        self.groups
            .entry(post.tags.clone())
            .or_default()
            .push(SharedMeta::clone(post));
        self.tagged += 1;
    }

    /// Sorts every group newest-first.
    pub fn sort(&mut self) {
        for posts in self.groups.values_mut() {
            sort_newest_first(posts);
        }
    }

    pub fn groups(&self) -> &BTreeMap<String, Vec<SharedMeta>> {
        &self.groups
    }

    /// The number of tagged posts added.
    pub fn tagged(&self) -> usize {
        self.tagged
    }
}
