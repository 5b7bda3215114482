//! Shape validation for Spotify Web API payloads.
//!
//! Every payload the profile aggregator consumes is parsed from a raw
//! [`serde_json::Value`] by an explicit [`Schema`] implementation. Parsing is
//! strict about the fields we read (present, right JSON kind, nested values
//! validated recursively) and ignores everything else Spotify sends, so new
//! fields in API responses never break the client.
//!
//! The first mismatch aborts the parse. The returned [`ValidationError`]
//! carries the full path of the offending field, for example
//! `items[3].track.album.images[0].url`.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::{
    Album, Artist, ArtistGenres, Image, ListeningHistory, PlayHistoryItem, Recommendations,
    TopTracks, Track,
};

/// JSON value kinds, used in validation diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Location of a value inside a payload, e.g. `items[0].track.id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field `{path}`")]
    Missing { path: FieldPath },

    #[error("invalid type at `{path}`: expected {expected}, found {found}")]
    InvalidType {
        path: FieldPath,
        expected: Kind,
        found: Kind,
    },
}

impl ValidationError {
    /// Path of the field that failed validation.
    pub fn path(&self) -> &FieldPath {
        match self {
            ValidationError::Missing { path } => path,
            ValidationError::InvalidType { path, .. } => path,
        }
    }
}

/// A payload type that can be parsed out of a raw JSON value.
pub trait Schema: Sized {
    fn parse(value: &Value, path: &FieldPath) -> Result<Self, ValidationError>;
}

/// Validates a whole response body against the shape of `T`.
pub fn validate<T: Schema>(raw: &Value) -> Result<T, ValidationError> {
    T::parse(raw, &FieldPath::root())
}

fn invalid_type(value: &Value, path: &FieldPath, expected: Kind) -> ValidationError {
    ValidationError::InvalidType {
        path: path.clone(),
        expected,
        found: Kind::of(value),
    }
}

fn object<'a>(
    value: &'a Value,
    path: &FieldPath,
) -> Result<&'a Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| invalid_type(value, path, Kind::Object))
}

fn required<'a>(
    object: &'a Map<String, Value>,
    path: &FieldPath,
    name: &str,
) -> Result<(&'a Value, FieldPath), ValidationError> {
    let field_path = path.field(name);
    match object.get(name) {
        Some(value) => Ok((value, field_path)),
        None => Err(ValidationError::Missing { path: field_path }),
    }
}

fn field<T: Schema>(
    object: &Map<String, Value>,
    path: &FieldPath,
    name: &str,
) -> Result<T, ValidationError> {
    let (value, field_path) = required(object, path, name)?;
    T::parse(value, &field_path)
}

impl Schema for String {
    fn parse(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| invalid_type(value, path, Kind::String))
    }
}

impl<T: Schema> Schema for Vec<T> {
    fn parse(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let items = value
            .as_array()
            .ok_or_else(|| invalid_type(value, path, Kind::Array))?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::parse(item, &path.index(i)))
            .collect()
    }
}

impl Schema for Image {
    fn parse(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = object(value, path)?;
        Ok(Image {
            url: field(obj, path, "url")?,
        })
    }
}

impl Schema for Artist {
    fn parse(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = object(value, path)?;
        Ok(Artist {
            id: field(obj, path, "id")?,
            name: field(obj, path, "name")?,
            uri: field(obj, path, "uri")?,
        })
    }
}

impl Schema for Album {
    fn parse(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = object(value, path)?;
        Ok(Album {
            images: field(obj, path, "images")?,
            name: field(obj, path, "name")?,
            uri: field(obj, path, "uri")?,
        })
    }
}

impl Schema for Track {
    fn parse(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = object(value, path)?;
        Ok(Track {
            album: field(obj, path, "album")?,
            artists: field(obj, path, "artists")?,
            id: field(obj, path, "id")?,
            name: field(obj, path, "name")?,
            uri: field(obj, path, "uri")?,
        })
    }
}

impl Schema for PlayHistoryItem {
    fn parse(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = object(value, path)?;
        Ok(PlayHistoryItem {
            track: field(obj, path, "track")?,
        })
    }
}

impl Schema for ListeningHistory {
    fn parse(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = object(value, path)?;
        Ok(ListeningHistory {
            items: field(obj, path, "items")?,
        })
    }
}

impl Schema for TopTracks {
    fn parse(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = object(value, path)?;
        Ok(TopTracks {
            items: field(obj, path, "items")?,
        })
    }
}

impl Schema for ArtistGenres {
    fn parse(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = object(value, path)?;
        Ok(ArtistGenres {
            genres: field(obj, path, "genres")?,
        })
    }
}

impl Schema for Recommendations {
    fn parse(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = object(value, path)?;
        Ok(Recommendations {
            tracks: field(obj, path, "tracks")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn track_json(id: &str) -> Value {
        json!({
            "album": {
                "images": [{ "url": "https://i.scdn.co/image/cover", "height": 640 }],
                "name": "Album",
                "uri": "spotify:album:al1"
            },
            "artists": [{ "id": "ar1", "name": "Artist", "uri": "spotify:artist:ar1" }],
            "id": id,
            "name": "Song",
            "uri": format!("spotify:track:{id}")
        })
    }

    #[test]
    fn parses_a_complete_track() {
        let track: Track = validate(&track_json("t1")).unwrap();

        assert_eq!(track.id, "t1");
        assert_eq!(track.album.images[0].url, "https://i.scdn.co/image/cover");
        assert_eq!(track.artists[0].id, "ar1");
    }

    #[test]
    fn rejects_track_without_id() {
        let mut raw = track_json("t1");
        raw.as_object_mut().unwrap().remove("id");

        let err = validate::<Track>(&raw).unwrap_err();

        assert_eq!(
            err,
            ValidationError::Missing {
                path: FieldPath::root().field("id")
            }
        );
        assert!(err.to_string().contains("`id`"));
    }

    #[test]
    fn ignores_unknown_fields() {
        let mut raw = track_json("t1");
        raw["popularity"] = json!(87);
        raw["explicit"] = json!(false);

        assert!(validate::<Track>(&raw).is_ok());
    }

    #[test]
    fn reports_nested_path_of_first_mismatch() {
        let raw = json!({
            "items": [
                { "track": track_json("t1") },
                { "track": { "album": { "images": [{ "url": 42 }], "name": "A", "uri": "u" } } }
            ]
        });

        let err = validate::<ListeningHistory>(&raw).unwrap_err();

        assert_eq!(err.path().as_str(), "items[1].track.album.images[0].url");
        assert_eq!(
            err,
            ValidationError::InvalidType {
                path: err.path().clone(),
                expected: Kind::String,
                found: Kind::Number,
            }
        );
    }

    #[test]
    fn rejects_null_where_string_required() {
        let mut raw = track_json("t1");
        raw["name"] = Value::Null;

        let err = validate::<Track>(&raw).unwrap_err();

        assert_eq!(err.path().as_str(), "name");
        assert!(err.to_string().contains("found null"));
    }

    #[test]
    fn rejects_non_object_body() {
        let err = validate::<TopTracks>(&json!([1, 2, 3])).unwrap_err();

        assert_eq!(err.to_string(), "invalid type at `<root>`: expected object, found array");
    }

    #[test]
    fn validates_genre_list_elements() {
        let raw = json!({ "genres": ["pop", "dance pop"], "id": "x" });
        let ok: ArtistGenres = validate(&raw).unwrap();
        assert_eq!(ok.genres, vec!["pop", "dance pop"]);

        let err = validate::<ArtistGenres>(&json!({ "genres": ["pop", null] })).unwrap_err();
        assert_eq!(err.path().as_str(), "genres[1]");
    }

    #[test]
    fn accepts_empty_pages() {
        let recs: Recommendations = validate(&json!({ "tracks": [], "seeds": [] })).unwrap();
        assert!(recs.tracks.is_empty());

        let top: TopTracks = validate(&json!({ "items": [], "total": 0 })).unwrap();
        assert!(top.items.is_empty());
    }
}
