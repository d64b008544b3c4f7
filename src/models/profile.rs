use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CHARACTER_NAME: &str = "character_name";
pub const STORE_NAME: &str = "store_name";
pub const DETAIL_URL: &str = "detail_url";
pub const KEY: &str = "key";
pub const DESCRIPTION: &str = "description";
pub const TWITTER_URL: &str = "twitter_url";
pub const PROFILE_IMAGE_URL: &str = "profile_image_url";
pub const CHARACTER_BIRTHDAY: &str = "character_birthday";
pub const IS_BICCAME_MUSUME: &str = "is_biccame_musume";

/// A character as listed on the profile index, possibly enriched with
/// detail-page fields and a calendar-derived birthday.
///
/// The record is the JSON object itself: every field keeps its value, its
/// type and its position, including `null`s and fields this crate does not
/// know about. Setting a field that already exists overwrites it in place;
/// a new field is appended.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ProfileRecord(Map<String, Value>);

impl ProfileRecord {
    pub fn new(character_name: &str) -> Self {
        let mut record = Self::default();
        record.set_str(CHARACTER_NAME, character_name);
        record
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.set_str(KEY, key);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String value of `field`; `None` when absent, null or not a string.
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn set(&mut self, field: &str, value: Value) {
        self.0.insert(field.to_string(), value);
    }

    pub fn set_str(&mut self, field: &str, value: impl Into<String>) {
        self.set(field, Value::String(value.into()));
    }

    pub fn character_name(&self) -> Option<&str> {
        self.str_field(CHARACTER_NAME)
    }

    /// Name for console output.
    pub fn display_name(&self) -> &str {
        self.character_name().unwrap_or("unknown")
    }

    /// Join key. Only string keys take part in a merge.
    pub fn key(&self) -> Option<&str> {
        self.str_field(KEY)
    }

    pub fn character_birthday(&self) -> Option<&str> {
        self.str_field(CHARACTER_BIRTHDAY)
    }

    pub fn set_character_birthday(&mut self, date: &str) {
        self.set_str(CHARACTER_BIRTHDAY, date);
    }

    pub fn is_biccame_musume(&self) -> Option<bool> {
        self.get(IS_BICCAME_MUSUME).and_then(Value::as_bool)
    }

    pub fn set_is_biccame_musume(&mut self, flag: bool) {
        self.set(IS_BICCAME_MUSUME, Value::Bool(flag));
    }

    /// Merge the fields found on the character's detail page.
    /// Only fields the detail actually carries are overwritten.
    pub fn apply_detail(&mut self, detail: ProfileDetail) {
        let ProfileDetail {
            zipcode,
            address,
            phone,
            store_url,
            birthday,
            store_birthday,
            store_link,
            image_urls,
        } = detail;

        let strings = [
            ("zipcode", zipcode),
            ("address", address),
            ("phone", phone),
            ("store_url", store_url),
            ("birthday", birthday),
            ("store_birthday", store_birthday),
            ("store_link", store_link),
        ];
        for (field, value) in strings {
            if let Some(v) = value {
                self.set_str(field, v);
            }
        }

        if let Some(urls) = image_urls {
            self.set(
                "image_urls",
                Value::Array(urls.into_iter().map(Value::String).collect()),
            );
        }
    }
}

/// Fields scraped from a single character's detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDetail {
    pub zipcode: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub store_url: Option<String>,
    pub birthday: Option<String>,
    pub store_birthday: Option<String>,
    pub store_link: Option<String>,
    pub image_urls: Option<Vec<String>>,
}

impl ProfileDetail {
    pub fn is_empty(&self) -> bool {
        *self == ProfileDetail::default()
    }
}
