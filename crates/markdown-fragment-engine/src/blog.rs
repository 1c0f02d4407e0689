//! Post index and post page rendering for a blog built from Markdown files.
//!
//! A `posts.json` manifest lists the posts; each entry names a `.md` file
//! (converted) or an HTML fragment (inserted as-is).

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Options, convert_with, escape, render::escape_attribute};

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    /// Publication date as written in the manifest, expected as `YYYY-MM-DD`.
    pub date: String,
    /// Path of the post body, relative to the posts directory.
    pub file: String,
}

impl Post {
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d";

    /// The parsed publication date, if `date` is well formed.
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), Self::DATE_FORMAT).ok()
    }

    /// Whether the body is Markdown (by `.md` extension, any case).
    pub fn is_markdown(&self) -> bool {
        Path::new(&self.file)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
    }

    /// Output page path for this post, relative to the output directory.
    ///
    /// Only plain name components are kept, so `..` and absolute prefixes in
    /// the manifest cannot move a page outside the output directory.
    pub fn page_path(&self) -> PathBuf {
        Path::new(&self.file)
            .with_extension("html")
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .collect()
    }

    /// Link to the page from the post list: `page_path` with `/` separators.
    pub fn page_href(&self) -> String {
        self.page_path()
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Posts sorted newest first.
///
/// Posts without a parseable date sort after all dated posts; ties keep
/// manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostIndex {
    posts: Vec<Post>,
}

impl PostIndex {
    pub fn new(mut posts: Vec<Post>) -> Self {
        // Option orders None first, so reversing the comparison puts it last.
        posts.sort_by(|a, b| b.published().cmp(&a.published()));
        Self { posts }
    }

    /// Parses a manifest: a JSON array of `{ "title", "date", "file" }`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let posts: Vec<Post> = serde_json::from_str(json)?;
        Ok(Self::new(posts))
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The first post whose page would land on [`INDEX_PAGE`], on an earlier
    /// post's page, or has no usable name at all.
    pub fn page_collision(&self) -> Option<&Post> {
        let mut taken = HashSet::from([PathBuf::from(INDEX_PAGE)]);
        self.posts.iter().find(|post| {
            let page = post.page_path();
            page.as_os_str().is_empty() || !taken.insert(page)
        })
    }
}

/// File name of the post list page in the output directory.
pub const INDEX_PAGE: &str = "index.html";

/// Renders the list of posts, each linking to its page.
pub fn render_post_list(posts: &[Post]) -> String {
    let mut out = String::from("<ul class=\"post-list\">");
    if posts.is_empty() {
        out.push_str("<li>No posts published yet.</li>");
    }
    for post in posts {
        out.push_str(&format!(
            "<li><a href=\"{}\"><span class=\"title\">{}</span><span class=\"meta\">{}</span></a></li>",
            escape_attribute(&post.page_href()),
            escape(&post.title),
            escape(&post.date),
        ));
    }
    out.push_str("</ul>");
    out
}

/// Renders a full post: header with title and date, then the body.
///
/// Markdown bodies are converted with `options`; any other body is trusted
/// HTML and inserted unchanged.
pub fn render_post(post: &Post, body: &str, options: Options) -> String {
    let content = if post.is_markdown() {
        convert_with(body, options)
    } else {
        body.to_string()
    };

    format!(
        "<header class=\"post-header\"><h2>{}</h2><p class=\"meta\">{}</p></header><hr /><div class=\"post-body\">{}</div>",
        escape(&post.title),
        escape(&post.date),
        content
    )
}

/// Renders an error message in place of content that could not be loaded.
pub fn render_error(message: &str) -> String {
    format!("<p class=\"error\">{}</p>", escape(message))
}
