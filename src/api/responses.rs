// src/api/responses.rs
//! Response envelope shared by both v3 endpoints.

use crate::error::AppError;
use crate::model::BlockTable;
use serde::Deserialize;

/// Top-level response: both endpoints answer with a `recordMap`.
#[derive(Debug, Deserialize)]
pub struct RecordMapResponse {
    #[serde(rename = "recordMap")]
    pub record_map: RecordMap,
}

#[derive(Debug, Deserialize, Default)]
pub struct RecordMap {
    #[serde(default)]
    pub block: BlockTable,
}

/// Parses a response body into its record map.
pub fn parse_record_map(body: &str) -> Result<RecordMap, AppError> {
    let response: RecordMapResponse = serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse record map response: {}", e);
        AppError::MalformedResponse(e.to_string())
    })?;
    Ok(response.record_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_map_with_blocks() {
        let body = r#"{
            "recordMap": {
                "block": {
                    "11111111-1111-1111-1111-111111111111": {
                        "value": {
                            "id": "11111111-1111-1111-1111-111111111111",
                            "properties": { "title": [["피스타치오"]] }
                        }
                    }
                }
            }
        }"#;
        let map = parse_record_map(body).unwrap();
        assert_eq!(map.block.len(), 1);
    }

    #[test]
    fn missing_block_table_defaults_to_empty() {
        let map = parse_record_map(r#"{"recordMap": {}}"#).unwrap();
        assert!(map.block.is_empty());
    }

    #[test]
    fn missing_record_map_is_malformed() {
        assert!(parse_record_map(r#"{"unexpected": true}"#).is_err());
        assert!(parse_record_map("not json").is_err());
    }
}
