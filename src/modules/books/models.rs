use serde::{Deserialize, Serialize};

/// A persisted book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Store-assigned identifier, immutable once created
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Kept exactly as supplied; never parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl Book {
    pub fn new(id: impl Into<String>, fields: BookFields) -> Self {
        Self {
            id: id.into(),
            title: fields.title,
            author: fields.author,
            published_date: fields.published_date,
            genre: fields.genre,
        }
    }
}

/// Record fields accepted on create, and the shape a stored record is read back as.
///
/// Every field is optional and unknown JSON fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// Fields supplied to an update.
///
/// The outer `Option` tells whether the field was supplied at all: `None` keeps
/// the stored value, `Some(None)` (an explicit JSON `null`) clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub title: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub author: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub published_date: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub genre: Option<Option<String>>,
}

impl From<BookFields> for BookUpdate {
    fn from(fields: BookFields) -> Self {
        Self {
            title: fields.title.map(Some),
            author: fields.author.map(Some),
            published_date: fields.published_date.map(Some),
            genre: fields.genre.map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_use_camel_case_and_ignore_unknown_keys() {
        let fields: BookFields = serde_json::from_value(json!({
            "title": "The Alchemist",
            "publishedDate": "1988-01-01",
            "isbn": "978-0062315007"
        }))
        .unwrap();

        assert_eq!(fields.title.as_deref(), Some("The Alchemist"));
        assert_eq!(fields.published_date.as_deref(), Some("1988-01-01"));
        assert_eq!(fields.author, None);
    }

    #[test]
    fn update_tells_null_from_absent() {
        let update: BookUpdate = serde_json::from_value(json!({
            "title": "New Title",
            "genre": null
        }))
        .unwrap();

        assert_eq!(update.title, Some(Some("New Title".to_string())));
        assert_eq!(update.genre, Some(None));
        assert_eq!(update.author, None);

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "title": "New Title", "genre": null })
        );
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let book = Book::new(
            "abc",
            BookFields {
                genre: Some("Adventure".to_string()),
                ..BookFields::default()
            },
        );

        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({ "id": "abc", "genre": "Adventure" })
        );
    }
}
