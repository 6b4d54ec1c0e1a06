//! Link resolution and rich text processing

use std::sync::Arc;

use dxa_content::Localization;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::Result;
use crate::model::RichText;

/// Resolves CMS item identifiers to public URLs
pub trait LinkResolver: Send + Sync {
    /// Resolve an item's URL; `None` when the item is not published
    fn resolve_link(&self, item_id: &str, localization: &Localization) -> Option<String>;
}

/// Turns stored rich text markup into renderable rich text
pub trait RichTextProcessor: Send + Sync {
    fn process_rich_text(&self, markup: &str, localization: &Localization) -> Result<RichText>;
}

/// Rich text processor resolving CMS hyperlinks
///
/// Anchors referencing a CMS item (`xlink:href="tcm:..."`) get the item's
/// resolved URL as `href`. Anchors to items that do not resolve are
/// replaced by their content.
pub struct DefaultRichTextProcessor {
    link_resolver: Arc<dyn LinkResolver>,
}

impl DefaultRichTextProcessor {
    pub fn new(link_resolver: Arc<dyn LinkResolver>) -> Self {
        Self { link_resolver }
    }
}

impl RichTextProcessor for DefaultRichTextProcessor {
    fn process_rich_text(&self, markup: &str, localization: &Localization) -> Result<RichText> {
        static ITEM_LINK_RE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r#"(?s)<a\b([^>]*?)\s+xlink:href="(tcm:[^"]*)"([^>]*)>(.*?)</a>"#)
                .expect("valid regex")
        });
        static XLINK_ATTR_RE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r#"\s+xmlns:xlink="[^"]*""#).expect("valid regex")
        });

        let resolved = ITEM_LINK_RE.replace_all(markup, |caps: &Captures<'_>| {
            match self.link_resolver.resolve_link(&caps[2], localization) {
                Some(url) => format!("<a{} href=\"{}\"{}>{}</a>", &caps[1], url, &caps[3], &caps[4]),
                None => caps[4].to_string(),
            }
        });
        let cleaned = XLINK_ATTR_RE.replace_all(&resolved, "");
        Ok(RichText::from(cleaned.into_owned()))
    }
}
