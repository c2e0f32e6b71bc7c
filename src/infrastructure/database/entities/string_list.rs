//! String lists stored as JSON text columns

use log::warn;

use crate::domain::{DomainError, DomainResult};

pub fn encode_list(items: &[String]) -> DomainResult<String> {
    serde_json::to_string(items).map_err(|e| DomainError::Storage(e.to_string()))
}

/// Unreadable column contents decode as an empty list.
pub fn decode_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!("Discarding malformed list column {:?}: {}", raw, e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_are_json_arrays() {
        let encoded = encode_list(&["A".to_string(), "B".to_string()]).unwrap();
        assert_eq!(encoded, r#"["A","B"]"#);
        assert_eq!(decode_list(&encoded), vec!["A", "B"]);
        assert_eq!(encode_list(&[]).unwrap(), "[]");
    }

    #[test]
    fn malformed_column_decodes_empty() {
        assert!(decode_list("not json").is_empty());
        assert!(decode_list("").is_empty());
    }
}
