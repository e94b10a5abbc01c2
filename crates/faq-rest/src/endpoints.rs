//! List service endpoint paths and request/response types.

use serde::{Deserialize, Serialize};

use faq_core::Result;
use faq_core::record::{Record, RecordFields};
use faq_core::types::{ListName, RecordId};

// ============================================================================
// Paths and Headers
// ============================================================================

/// Media type for JSON without OData metadata.
pub const ODATA_JSON: &str = "application/json;odata=nometadata";

/// Columns requested when listing items.
pub const SELECT_FIELDS: &str = "Id,Title,Body,Letter";

/// Header carrying the tunnelled HTTP method for updates and deletes.
pub const X_HTTP_METHOD: &str = "X-HTTP-Method";

/// Header carrying the ETag precondition.
pub const IF_MATCH: &str = "IF-MATCH";

/// Path of the item collection of a list, relative to `_api/`.
pub fn items_path(list: &ListName) -> String {
    format!("web/lists/getbytitle('{}')/items", escape_title(list.as_str()))
}

/// Path of one item, relative to `_api/`.
pub fn item_path(list: &ListName, id: RecordId) -> String {
    format!("{}({})", items_path(list), id)
}

/// Quote a list title for use inside `getbytitle('...')`.
///
/// Single quotes are doubled per OData string literal rules; characters
/// that would end the path are percent-encoded.
fn escape_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        match c {
            '\'' => out.push_str("''"),
            '%' => out.push_str("%25"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '/' => out.push_str("%2F"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating or updating an item.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemPayload<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub letter: &'a str,
}

impl<'a> From<&'a RecordFields> for ItemPayload<'a> {
    fn from(fields: &'a RecordFields) -> Self {
        Self {
            title: &fields.title,
            body: &fields.body,
            letter: &fields.letter,
        }
    }
}

/// One item as returned by the service. Empty columns come back as null.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemResponse {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub letter: Option<String>,
}

impl ItemResponse {
    pub fn into_record(self) -> Result<Record> {
        Ok(Record::new(
            RecordId::new(self.id)?,
            RecordFields::new(
                self.title.unwrap_or_default(),
                self.body.unwrap_or_default(),
                self.letter.unwrap_or_default(),
            ),
        ))
    }
}

/// One page of items.
#[derive(Debug, Deserialize)]
pub struct ItemsResponse {
    pub value: Vec<ItemResponse>,
    /// Absolute URL of the next page, if any.
    #[serde(rename = "odata.nextLink", default)]
    pub next_link: Option<String>,
}

/// Error body returned by the service.
#[derive(Debug, Deserialize)]
pub struct ODataErrorResponse {
    #[serde(rename = "odata.error")]
    pub error: ODataError,
}

#[derive(Debug, Deserialize)]
pub struct ODataError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<ODataMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ODataMessage {
    #[serde(default)]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_path_for_default_list() {
        assert_eq!(
            items_path(&ListName::default()),
            "web/lists/getbytitle('FAQ')/items"
        );
    }

    #[test]
    fn quotes_are_doubled() {
        let list = ListName::new("Bob's FAQ").unwrap();
        assert_eq!(
            item_path(&list, RecordId::new(7).unwrap()),
            "web/lists/getbytitle('Bob''s FAQ')/items(7)"
        );
    }

    #[test]
    fn path_breaking_characters_are_encoded() {
        assert_eq!(escape_title("Q&A #1?/x%"), "Q&A %231%3F%2Fx%25");
    }

    #[test]
    fn null_columns_read_as_empty() {
        let item: ItemResponse =
            serde_json::from_str(r#"{"Id": 3, "Title": "Q", "Body": null}"#).unwrap();
        let record = item.into_record().unwrap();
        assert_eq!(record.body, "");
        assert_eq!(record.letter, "");
    }

    #[test]
    fn payload_uses_column_names() {
        let fields = RecordFields::new("Q", "A", "L");
        let json = serde_json::to_value(ItemPayload::from(&fields)).unwrap();
        assert_eq!(json, serde_json::json!({"Title": "Q", "Body": "A", "Letter": "L"}));
    }
}
