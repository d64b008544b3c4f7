//! Profile index and detail-page extraction.

use super::html::{
    absolute_url, collapsed_text, first_attr, is_profile_image, page_text, parent_element,
    selector, stripped_text,
};
use super::net::PageSource;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::profile::{
    DESCRIPTION, DETAIL_URL, KEY, PROFILE_IMAGE_URL, STORE_NAME, TWITTER_URL,
};
use crate::models::{ProfileDetail, ProfileRecord};
use crate::ui::messages::{info, item, warning};
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;

struct Selectors {
    profile_name: Selector,
    profile_shop: Selector,
    link: Selector,
    paragraph: Selector,
    image: Selector,
    shop_info: Selector,
}

struct Patterns {
    alias: Regex,
    key: Regex,
    address: Regex,
    phone: Regex,
    store_url: Regex,
    birthday: Regex,
    store_birthday: Regex,
}

fn compile(re: &str) -> AppResult<Regex> {
    Regex::new(re).map_err(|e| AppError::Other(format!("invalid pattern {re}: {e}")))
}

/// Extracts profile records from the character site's HTML.
pub struct ProfileParser {
    base_url: String,
    store_site_url: String,
    store_prefix: String,
    sel: Selectors,
    re: Patterns,
}

impl ProfileParser {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            store_site_url: cfg.store_site_url.clone(),
            store_prefix: cfg.store_prefix.clone(),
            sel: Selectors {
                profile_name: selector("div.profile_name")?,
                profile_shop: selector("div.profile_shop")?,
                link: selector("a[href]")?,
                paragraph: selector("p")?,
                image: selector("img[src]")?,
                shop_info: selector("div.shop_info")?,
            },
            re: Patterns {
                alias: compile(r"（\s*([^）]+?)\s*）")?,
                key: compile(r"/profile/([^/]+)\.html")?,
                address: compile(r"〒([\d\-]+)\s*(.+?)(?:\n|電話)")?,
                phone: compile(r"電話[：:]\s*([\d\-]+)")?,
                store_url: compile(r"(https?://www\.biccamera\.com/[^\s\)]+)")?,
                birthday: compile(r"誕生日[：:]\s*(\d+月\d+日)")?,
                store_birthday: compile(r"(\d{4})年(\d{2})月(\d{2})日")?,
            },
        })
    }

    pub fn index_url(&self) -> String {
        format!("{}/profile/", self.base_url)
    }

    /// Key from a detail link (`/profile/<key>.html`).
    pub fn key_from_href(&self, href: &str) -> Option<String> {
        self.re.key.captures(href).map(|c| c[1].to_string())
    }

    /// Characters on the profile index page, deduplicated by name (first wins).
    pub fn parse_index(&self, html: &str) -> Vec<ProfileRecord> {
        let doc = Html::parse_document(html);
        let mut characters = Vec::new();

        for name_div in doc.select(&self.sel.profile_name) {
            // centered profile_name blocks are section titles
            if name_div.value().attr("align") == Some("center") {
                continue;
            }

            let raw_name = stripped_text(name_div);
            let name = self.re.alias.replace_all(&raw_name, "/$1").into_owned();
            if name.is_empty() {
                continue;
            }

            let mut character = ProfileRecord::new(&name);

            if let Some(parent) = parent_element(name_div) {
                if let Some(shop) = parent.select(&self.sel.profile_shop).next() {
                    let store = collapsed_text(shop).replace(&self.store_prefix, "");
                    character.set_str(STORE_NAME, store.trim());
                }

                if let Some(grandparent) = parent_element(parent) {
                    self.fill_from_card(&mut character, grandparent);
                }
            }

            characters.push(character);
        }

        let mut seen = HashSet::new();
        characters.retain(|c| seen.insert(c.display_name().to_string()));
        characters
    }

    fn fill_from_card(&self, character: &mut ProfileRecord, card: scraper::ElementRef<'_>) {
        if let Some(href) = first_attr(card, &self.sel.link, "href", |h| {
            h.contains("/profile/") && h.ends_with(".html")
        }) {
            character.set_str(DETAIL_URL, absolute_url(&self.base_url, href));
            if let Some(key) = self.key_from_href(href) {
                character.set_str(KEY, key);
            }
        }

        if let Some(p) = card.select(&self.sel.paragraph).next() {
            character.set_str(DESCRIPTION, stripped_text(p));
        }

        if let Some(href) = first_attr(card, &self.sel.link, "href", |h| h.contains("twitter.com")) {
            character.set_str(TWITTER_URL, href);
        }

        if let Some(src) = first_attr(card, &self.sel.image, "src", is_profile_image) {
            character.set_str(PROFILE_IMAGE_URL, absolute_url(&self.base_url, src));
        }
    }

    /// Extra fields from a character's detail page.
    pub fn parse_detail(&self, html: &str) -> ProfileDetail {
        let doc = Html::parse_document(html);
        let text = page_text(&doc);
        let mut detail = ProfileDetail::default();

        if let Some(c) = self.re.address.captures(&text) {
            detail.zipcode = Some(c[1].trim().to_string());
            detail.address = Some(c[2].trim().to_string());
        }

        if let Some(c) = self.re.phone.captures(&text) {
            detail.phone = Some(c[1].to_string());
        }

        if let Some(c) = self.re.store_url.captures(&text) {
            detail.store_url = Some(c[1].to_string());
        }

        if let Some(c) = self.re.birthday.captures(&text) {
            detail.birthday = Some(c[1].to_string());
        }

        detail.store_birthday = doc
            .select(&self.sel.shop_info)
            .map(|div| div.text().collect::<String>())
            .filter(|t| t.contains("店舗誕生日"))
            .find_map(|t| {
                self.re
                    .store_birthday
                    .captures(&t)
                    .map(|c| format!("{}-{}-{}", &c[1], &c[2], &c[3]))
            });

        let root = doc.root_element();
        if let Some(href) = first_attr(root, &self.sel.link, "href", |h| h.contains("shoplist")) {
            detail.store_link = Some(if href.starts_with("http") {
                href.to_string()
            } else {
                absolute_url(&self.store_site_url, href)
            });
        }

        let mut images: Vec<String> = Vec::new();
        for src in root
            .select(&self.sel.image)
            .filter_map(|img| img.value().attr("src"))
            .filter(|src| is_profile_image(src))
        {
            let url = absolute_url(&self.base_url, src);
            if !images.contains(&url) {
                images.push(url);
            }
        }
        if !images.is_empty() {
            detail.image_urls = Some(images);
        }

        detail
    }
}

/// Fetch the profile index, optionally enriching every character from its
/// detail page. Returns the index HTML alongside the records.
///
/// A failed index page aborts; a failed detail page leaves that character
/// as listed on the index.
pub fn fetch_profiles(
    source: &impl PageSource,
    parser: &ProfileParser,
    with_details: bool,
) -> AppResult<(String, Vec<ProfileRecord>)> {
    let url = parser.index_url();
    info(format!("Fetching profile index: {url}"));
    let html = source.fetch(&url)?;

    let mut characters = parser.parse_index(&html);
    info(format!("Found {} characters", characters.len()));

    if with_details {
        let total = characters.len();
        for (i, character) in characters.iter_mut().enumerate() {
            let Some(detail_url) = character.str_field(DETAIL_URL).map(str::to_string) else {
                continue;
            };
            item(format!("[{}/{}] {}...", i + 1, total, character.display_name()));

            match source.fetch(&detail_url) {
                Ok(page) => {
                    let detail = parser.parse_detail(&page);
                    debug!(url = %detail_url, empty = detail.is_empty(), "detail page parsed");
                    character.apply_detail(detail);
                }
                Err(e) => warning(format!("Error fetching detail page {detail_url}: {e}")),
            }
        }
    }

    Ok((html, characters))
}
