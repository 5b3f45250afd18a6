//! Fragment Injector: splice the enhancements fragment into a host page.
//!
//! The fragment is wrapped in a `<div>` and inserted directly before the
//! `.views` region inside the page's `.container` region. Missing anchors
//! and fetch failures are logged and leave the page untouched.

use crate::error::FragmentError;
use regex::Regex;
use std::future::Future;
use std::path::PathBuf;
use std::sync::LazyLock;
use url::Url;

pub const CONTAINER_CLASS: &str = "container";
pub const VIEWS_CLASS: &str = "views";
pub const FRAGMENT_FILE: &str = "enhancements.html";

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose body is raw text, not markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// A comment (an unterminated one runs to the end of the page) or a tag.
static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)(<!--(?:.*?-->|.*))|<(/?)([a-zA-Z][a-zA-Z0-9-]*)((?:[^>\x22']|\x22[^\x22]*\x22|'[^']*')*)>",
    )
    .expect("markup pattern compiles")
});

static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)class\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("class pattern compiles")
});

// ============================================================================
// Page Abstraction
// ============================================================================

/// The parts of a host page the injector needs.
pub trait Page {
    fn has_container(&self) -> bool;

    /// Insert `markup` right before the views region of the container.
    /// Returns `false`, leaving the page unchanged, if there is no such region.
    fn insert_before_views(&mut self, markup: &str) -> bool;
}

/// Where the fragment markup comes from.
pub trait FragmentSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<String, FragmentError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    Injected,
    MissingContainer,
    MissingViews,
    FetchFailed,
}

/// Run the injection once against `page`.
pub async fn inject_enhancements(page: &mut impl Page, source: &impl FragmentSource) -> InjectOutcome {
    if !page.has_container() {
        tracing::error!("Container element not found");
        return InjectOutcome::MissingContainer;
    }

    let markup = match source.fetch().await {
        Ok(markup) => markup,
        Err(e) => {
            tracing::error!(error = %e, "Error loading enhancements");
            return InjectOutcome::FetchFailed;
        }
    };

    if page.insert_before_views(&wrap_fragment(&markup)) {
        InjectOutcome::Injected
    } else {
        tracing::warn!("Views element not found, enhancements not inserted");
        InjectOutcome::MissingViews
    }
}

pub fn wrap_fragment(markup: &str) -> String {
    format!("<div>{}</div>", markup)
}

// ============================================================================
// HTML Source Page
// ============================================================================

/// A page held as HTML source, with anchors located by scanning tags.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    source: String,
}

impl HtmlDocument {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_string(self) -> String {
        self.source
    }

    /// Index into `tags` of the first `.container` opening tag.
    fn container_index(tags: &[Tag<'_>]) -> Option<usize> {
        tags.iter()
            .position(|tag| !tag.closing && has_class(tag.attrs, CONTAINER_CLASS))
    }

    /// Byte offset of the opening tag of the first `.views` element nested in the container.
    fn views_start(&self) -> Option<usize> {
        let tags = scan_tags(&self.source);
        let container = Self::container_index(&tags)?;
        let container_name = tags[container].name.as_str();
        let mut open: Vec<&str> = Vec::new();

        for tag in &tags[container + 1..] {
            if tag.closing {
                if let Some(at) = open.iter().rposition(|name| *name == tag.name) {
                    open.truncate(at);
                } else if tag.name == container_name {
                    // Closed the container itself.
                    return None;
                }
                continue;
            }

            if has_class(tag.attrs, VIEWS_CLASS) {
                return Some(tag.start);
            }

            let self_closing = tag.attrs.trim_end().ends_with('/');
            if !self_closing && !VOID_ELEMENTS.contains(&tag.name.as_str()) {
                open.push(&tag.name);
            }
        }
        None
    }
}

impl Page for HtmlDocument {
    fn has_container(&self) -> bool {
        Self::container_index(&scan_tags(&self.source)).is_some()
    }

    fn insert_before_views(&mut self, markup: &str) -> bool {
        match self.views_start() {
            Some(at) => {
                self.source.insert_str(at, markup);
                true
            }
            None => false,
        }
    }
}

struct Tag<'a> {
    start: usize,
    closing: bool,
    name: String,
    attrs: &'a str,
}

/// Tags of the page in order, leaving out comments and the bodies of raw-text elements.
fn scan_tags(source: &str) -> Vec<Tag<'_>> {
    let mut tags = Vec::new();
    let mut raw_text: Option<String> = None;

    for caps in MARKUP.captures_iter(source) {
        let (Some(whole), Some(name), Some(attrs)) = (caps.get(0), caps.get(3), caps.get(4)) else {
            continue;
        };
        let tag = Tag {
            start: whole.start(),
            closing: caps.get(2).is_some_and(|slash| !slash.as_str().is_empty()),
            name: name.as_str().to_ascii_lowercase(),
            attrs: attrs.as_str(),
        };

        if let Some(element) = &raw_text {
            if !(tag.closing && tag.name == *element) {
                continue;
            }
            raw_text = None;
        } else if !tag.closing && RAW_TEXT_ELEMENTS.contains(&tag.name.as_str()) {
            raw_text = Some(tag.name.clone());
        }
        tags.push(tag);
    }
    tags
}

fn has_class(attrs: &str, class: &str) -> bool {
    CLASS_ATTR.captures(attrs).is_some_and(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .is_some_and(|value| value.as_str().split_whitespace().any(|c| c == class))
    })
}

// ============================================================================
// Fragment Sources
// ============================================================================

/// Fetch `enhancements.html` from the enhancement server.
#[derive(Debug, Clone)]
pub struct HttpFragmentSource {
    http: reqwest::Client,
    url: Url,
}

impl HttpFragmentSource {
    pub fn new(base_url: &str) -> Result<Self, FragmentError> {
        let url = Url::parse(base_url)?.join(FRAGMENT_FILE)?;
        Ok(Self {
            http: reqwest::Client::new(),
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl FragmentSource for HttpFragmentSource {
    async fn fetch(&self) -> Result<String, FragmentError> {
        let response = self.http.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FragmentError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

/// Read `enhancements.html` from the assets directory.
#[derive(Debug, Clone)]
pub struct FileFragmentSource {
    path: PathBuf,
}

impl FileFragmentSource {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(FRAGMENT_FILE),
        }
    }
}

impl FragmentSource for FileFragmentSource {
    async fn fetch(&self) -> Result<String, FragmentError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
