use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Product category as stored by the remote catalogue service.
///
/// The service owns the record; the admin UI only keeps a snapshot of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Image URL. `None` (or an empty string) renders a placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            images: None,
        }
    }

    /// Image URL if one is set and non-empty
    pub fn image_url(&self) -> Option<&str> {
        self.images.as_deref().filter(|url| !url.trim().is_empty())
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Body of `GET /showAllCategory`. A missing `data` field means "no categories".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryListResponse {
    #[serde(default)]
    pub data: Option<Vec<Category>>,
}

impl CategoryListResponse {
    pub fn into_categories(self) -> Vec<Category> {
        self.data.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_uses_mongo_id_field() {
        let json = r#"{"_id":"1","title":"Shirts","images":"https://cdn/shirts.png"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, "1");
        assert_eq!(category.title, "Shirts");
        assert_eq!(category.image_url(), Some("https://cdn/shirts.png"));
    }

    #[test]
    fn test_category_without_image() {
        let category: Category = serde_json::from_str(r#"{"_id":"2","title":"Shoes"}"#).unwrap();
        assert_eq!(category.images, None);
        assert_eq!(category.image_url(), None);

        let blank: Category =
            serde_json::from_str(r#"{"_id":"3","title":"Hats","images":""}"#).unwrap();
        assert_eq!(blank.image_url(), None);
    }

    #[test]
    fn test_list_response_keeps_server_order() {
        let json = r#"{"data":[{"_id":"1","title":"Shirts"},{"_id":"2","title":"Shoes"}]}"#;
        let response: CategoryListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_categories(),
            vec![Category::new("1", "Shirts"), Category::new("2", "Shoes")]
        );
    }

    #[test]
    fn test_untitled_entry_does_not_break_the_list() {
        let json = r#"{"data":[{"_id":"1"},{"_id":"2","title":"Shoes"}]}"#;
        let response: CategoryListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_categories(),
            vec![Category::new("1", ""), Category::new("2", "Shoes")]
        );
    }

    #[test]
    fn test_list_response_without_data_is_empty() {
        let response: CategoryListResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(response.into_categories().is_empty());

        let response: CategoryListResponse = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(response.into_categories().is_empty());
    }
}
