//! Extraction rules for the upstream markup
//!
//! Every field read from a page is described here as a selector plus an
//! accessor. When the site layout changes, this table is the place to edit.

use scraper::{ElementRef, Selector};

/// How a value is read from the elements a rule selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    /// Raw text of every match, concatenated in document order
    Text,
    /// Raw text of the first match only
    FirstText,
    /// Text of every match, concatenated and trimmed
    TrimmedText,
    /// Attribute of the first match
    Attr(&'static str),
}

/// A single field extraction: where to look and what to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Descendant selector, or `None` to read the scope element itself
    pub selector: Option<&'static str>,
    pub accessor: Accessor,
}

impl FieldRule {
    pub const fn new(selector: &'static str, accessor: Accessor) -> Self {
        Self {
            selector: Some(selector),
            accessor,
        }
    }

    pub const fn on_self(accessor: Accessor) -> Self {
        Self {
            selector: None,
            accessor,
        }
    }

    /// Compile the selector once so the rule can be applied repeatedly
    pub fn compile(&self) -> CompiledRule {
        CompiledRule {
            selector: self.selector.map(selector),
            accessor: self.accessor,
        }
    }
}

/// A `FieldRule` with its selector parsed
#[derive(Debug)]
pub struct CompiledRule {
    selector: Option<Selector>,
    accessor: Accessor,
}

impl CompiledRule {
    /// Apply the rule under `scope`. `None` means nothing matched.
    pub fn extract(&self, scope: ElementRef<'_>) -> Option<String> {
        let Some(selector) = &self.selector else {
            return match self.accessor {
                Accessor::Attr(name) => scope.value().attr(name).map(str::to_string),
                Accessor::Text | Accessor::FirstText => Some(text_of(scope)),
                Accessor::TrimmedText => Some(text_of(scope).trim().to_string()),
            };
        };

        let mut matches = scope.select(selector).peekable();
        matches.peek()?;

        match self.accessor {
            Accessor::Text => Some(matches.map(text_of).collect()),
            Accessor::FirstText => matches.next().map(text_of),
            Accessor::TrimmedText => Some(matches.map(text_of).collect::<String>().trim().to_string()),
            Accessor::Attr(name) => matches
                .next()
                .and_then(|el| el.value().attr(name))
                .map(str::to_string),
        }
    }
}

/// Concatenated raw text of an element and its descendants
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Parse a static selector
///
/// # Panics
/// Panics if `css` is not a valid selector.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

// Search listing page
pub const PAGE_INDICATOR: FieldRule = FieldRule::new(".pagination span", Accessor::FirstText);
pub const SEARCH_ANCHORS: &str = ".site-main a";
pub const SEARCH_HREF: FieldRule = FieldRule::on_self(Accessor::Attr("href"));
pub const SEARCH_TITLE: FieldRule = FieldRule::on_self(Accessor::Attr("title"));
pub const SEARCH_IMAGE: FieldRule = FieldRule::new("img.anmsa", Accessor::Attr("src"));

// Anime detail page
pub const DETAIL_TITLE: FieldRule = FieldRule::new(".infox h1", Accessor::Text);
pub const DETAIL_IMAGE: FieldRule = FieldRule::new(".thumb img", Accessor::Attr("src"));
pub const DETAIL_SYNOPSIS: FieldRule = FieldRule::new(".infox .desc", Accessor::TrimmedText);
pub const EPISODE_ITEMS: &str = ".lstepsiode li";
pub const EPISODE_NUMBER: FieldRule = FieldRule::new(".eps a", Accessor::Text);
pub const EPISODE_LINK: FieldRule = FieldRule::new(".eps a", Accessor::Attr("href"));
pub const EPISODE_TITLE: FieldRule = FieldRule::new(".lchx a", Accessor::Text);
pub const EPISODE_DATE: FieldRule = FieldRule::new(".date", Accessor::Text);

// Source page
pub const QUALITY_ITEMS: &str = "ul li";
pub const QUALITY_LABEL: FieldRule = FieldRule::new("strong", Accessor::TrimmedText);
pub const HOST_ANCHORS: &str = "span a";

// Secondary (hosting) page
pub const MEDIA_SOURCE: FieldRule =
    FieldRule::new("div.play-video-parent source", Accessor::Attr("src"));

/// Derive an id from a link: drop the first occurrence of `prefix`, then
/// everything from the last `/` onward. No `/` left yields an empty id.
pub fn derive_id(url: &str, prefix: &str) -> String {
    let stripped = url.replacen(prefix, "", 1);
    match stripped.rfind('/') {
        Some(idx) => stripped[..idx].to_string(),
        None => String::new(),
    }
}
