//! Small helpers over `scraper` shared by the profile and calendar parsers.

use crate::errors::{AppError, AppResult};
use scraper::{ElementRef, Html, Selector};

pub fn selector(css: &str) -> AppResult<Selector> {
    Selector::parse(css).map_err(|e| AppError::Selector(format!("{css}: {e:?}")))
}

/// Text fragments of `el`, each trimmed, empty ones dropped, glued without separator.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Raw text of `el` with every whitespace run collapsed to one space.
pub fn collapsed_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Visible text of the whole document (script and style bodies skipped).
pub fn page_text(doc: &Html) -> String {
    let mut out = String::new();

    for node in doc.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let in_code = node.parent().is_some_and(|p| {
            p.value()
                .as_element()
                .is_some_and(|e| matches!(e.name(), "script" | "style"))
        });
        if !in_code {
            out.push_str(text);
        }
    }

    out
}

pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

/// First element under `scope` matching `sel` whose `attr` satisfies `pred`;
/// returns the attribute value.
pub fn first_attr<'a>(
    scope: ElementRef<'a>,
    sel: &Selector,
    attr: &str,
    pred: impl Fn(&str) -> bool,
) -> Option<&'a str> {
    scope
        .select(sel)
        .filter_map(|el| el.value().attr(attr))
        .find(|v| pred(*v))
}

/// Prefix site-relative paths (`/…`) with `base`; anything else is kept as is.
pub fn absolute_url(base: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{}{href}", base.trim_end_matches('/'))
    } else {
        href.to_string()
    }
}

/// `/profile/...png` image sources, as used for character artwork.
pub fn is_profile_image(src: &str) -> bool {
    src.contains("/profile/") && src.ends_with(".png")
}
