//! The library code for the `nemo` static blog generator. A build turns a
//! project directory into a rendered site in two broad steps:
//!
//! 1. Rendering each post source into a post page and collecting its
//!    metadata ([`crate::post`], [`crate::page`])
//! 2. Rendering the pages that list posts: the paginated index
//!    ([`crate::index`]), the tags page ([`crate::tag`]) and the about page
//!
//! [`crate::build::Builder`] sequences the whole run and copies static
//! resources at the end ([`crate::pack`]). Every page is rendered from a skin
//! template ([`crate::skin`], [`crate::render`]) with head, foot and nav
//! fragments embedded ([`crate::fragment`]).

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod fragment;
pub mod index;
pub mod mark;
pub mod pack;
pub mod page;
pub mod post;
pub mod render;
pub mod skin;
pub mod tag;
pub mod timestamp;
pub mod util;
pub mod value;

#[cfg(test)]
mod testutil;
