use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Code reported for a body that carried no `code` field at all.
pub const MISSING_CODE: i64 = -1;

fn missing_code() -> i64 {
    MISSING_CODE
}

/// `null` and a missing field both read as an empty message.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The `{code, message, data}` wrapper every backend response uses.
///
/// `code == 0` signals success; anything else, including a body that has no
/// `code`, is a business failure.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Envelope<T = Value> {
    #[serde(default = "missing_code")]
    pub code: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Envelope {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn failure(code: i64, message: impl Into<String>) -> Self {
        Envelope {
            code,
            message: message.into(),
            data: None,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Message to show the user, `None` when the server sent an empty one.
    pub fn message(&self) -> Option<&str> {
        Some(self.message.as_str()).filter(|m| !m.is_empty())
    }
}

/// Paged list payload used by every list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn first_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Page {
            items: Vec::new(),
            total: 0,
            page: first_page(),
            page_size: default_page_size(),
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages the server reports for the current page size.
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size as u64)
    }
}

/// `page`/`page_size` query parameters. Unset fields are left to the server defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PageParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        PageParams {
            page: Some(page),
            page_size: Some(page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_success() {
        let env: Envelope = serde_json::from_value(json!({
            "code": 0,
            "message": "success",
            "data": {"id": 1}
        }))
        .unwrap();
        assert!(env.is_success());
        assert_eq!(env.data, Some(json!({"id": 1})));
    }

    #[test]
    fn test_envelope_null_message() {
        let env: Envelope = serde_json::from_value(json!({
            "code": 0,
            "message": null,
            "data": {"id": 1}
        }))
        .unwrap();
        assert!(env.is_success());
        assert_eq!(env.message, "");
        assert_eq!(env.message(), None);
        assert_eq!(env.data, Some(json!({"id": 1})));
    }

    #[test]
    fn test_envelope_missing_fields() {
        let env: Envelope = serde_json::from_value(json!({})).unwrap();
        assert_eq!(env.code, MISSING_CODE);
        assert!(!env.is_success());
        assert_eq!(env.message(), None);
        assert_eq!(env.data, None);
    }

    #[test]
    fn test_envelope_null_data() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_value(json!({"code": 0, "message": "删除成功", "data": null}))
                .unwrap();
        assert!(env.is_success());
        assert_eq!(env.message(), Some("删除成功"));
        assert!(env.data.is_none());
    }

    #[test]
    fn test_page_count() {
        let page = Page::<u32> {
            items: vec![1, 2],
            total: 41,
            page: 1,
            page_size: 20,
        };
        assert_eq!(page.page_count(), 3);
        assert_eq!(Page::<u32>::default().page_count(), 0);
    }

    #[test]
    fn test_page_params_skip_none() {
        let value = serde_json::to_value(PageParams {
            page: Some(2),
            page_size: None,
        })
        .unwrap();
        assert_eq!(value, json!({"page": 2}));
    }
}
