//! Monthly calendar extraction.

use super::html::{first_attr, selector, stripped_text};
use super::net::PageSource;
use crate::config::Config;
use crate::core::dedup_events;
use crate::core::normalize::zen_to_han;
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarEvent, EventType};
use crate::ui::messages::{info, item, warning};
use crate::utils::date::calendar_date;
use regex::Regex;
use scraper::{Html, Selector};

pub struct CalendarParser {
    base_url: String,
    cell: Selector,
    div: Selector,
    link: Selector,
    image: Selector,
    key: Regex,
    years: Regex,
}

fn compile(re: &str) -> AppResult<Regex> {
    Regex::new(re).map_err(|e| AppError::Other(format!("invalid pattern {re}: {e}")))
}

/// Digits as printed on the page, full-width ones included.
fn parse_number(s: &str) -> Option<u32> {
    zen_to_han(s).parse().ok()
}

impl CalendarParser {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            cell: selector("td")?,
            div: selector("div")?,
            link: selector("a[href]")?,
            image: selector("img")?,
            key: compile(r"/profile/([^/]+)\.html")?,
            years: compile(r"(\d+)周年")?,
        })
    }

    pub fn month_url(&self, year: i32, month: u32) -> String {
        format!("{}/calendar/{year}/{month:02}/", self.base_url)
    }

    /// Events linked from the day cells of one month.
    /// Greyed-out cells belong to the neighbouring months and are skipped.
    pub fn parse_month(&self, html: &str, year: i32, month: u32) -> Vec<CalendarEvent> {
        let doc = Html::parse_document(html);
        let mut events = Vec::new();

        for td in doc.select(&self.cell) {
            let style = td.value().attr("style").unwrap_or("");
            if style.contains("color:#CCCCCC") || style.contains("color: #CCCCCC") {
                continue;
            }

            let Some(day_div) = td.select(&self.div).next() else {
                continue;
            };
            let day_text = stripped_text(day_div);
            if day_text.is_empty() || !day_text.chars().all(char::is_numeric) {
                continue;
            }
            let Some(day) = parse_number(&day_text) else {
                continue;
            };
            let date = calendar_date(year, month, day);

            for link in td.select(&self.link) {
                let Some(href) = link.value().attr("href") else {
                    continue;
                };
                if !href.contains("/profile/") {
                    continue;
                }

                let key = self.key.captures(href).map(|c| c[1].to_string());
                let event_text = stripped_text(link);
                let event_type = EventType::from_event_text(&event_text);

                let mut event = CalendarEvent::new(&date, key.as_deref(), &event_text, event_type);

                if event_type.has_years() {
                    event.years = self
                        .years
                        .captures(&event_text)
                        .and_then(|c| parse_number(&c[1]));
                }

                if let Some(src) = first_attr(link, &self.image, "src", |s| !s.is_empty()) {
                    event.image_url = Some(src.to_string());
                }

                events.push(event);
            }
        }

        events
    }
}

/// Fetch and parse all twelve months of `year`, then drop repeated events.
/// A month that cannot be fetched is reported and skipped.
pub fn fetch_year(
    source: &impl PageSource,
    parser: &CalendarParser,
    year: i32,
) -> Vec<CalendarEvent> {
    let mut all = Vec::new();

    for month in 1..=12 {
        let url = parser.month_url(year, month);
        info(format!("Fetching calendar for {year}/{month:02}..."));

        match source.fetch(&url) {
            Ok(html) => {
                let events = parser.parse_month(&html, year, month);
                item(format!("Found {} events", events.len()));
                all.extend(events);
            }
            Err(e) => warning(format!("Error fetching {year}/{month:02}: {e}")),
        }
    }

    dedup_events(&all)
}
