//! Dataset synopsis as returned by the synopsis service
//!
//! A synopsis describes the columns of a dataset together with a small
//! sample of values per column.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Type of a dataset column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColType {
    /// Free text
    Text,

    /// Calendar date
    Date,

    /// Numeric value
    Number,
}

impl Default for ColType {
    fn default() -> Self {
        ColType::Text
    }
}

/// Metadata and sample values for one dataset column
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    /// Column type
    pub col_type: ColType,

    /// Number of rows in the column
    pub num_rows: i64,

    /// Number of distinct values in the column
    pub num_unique_values: i64,

    /// Sample of values from the column
    pub sample: Vec<String>,

    /// Column header as it appears in the dataset
    pub sample_header: String,
}

impl Column {
    /// Remove sample entries that merely repeat the column header.
    ///
    /// Returns the number of entries removed.
    pub fn strip_header_samples(&mut self) -> usize {
        let before = self.sample.len();
        let header = &self.sample_header;
        self.sample.retain(|value| value != header);
        before - self.sample.len()
    }
}

/// Column metadata for a whole dataset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Synopsis {
    /// Columns in dataset order
    pub columns: Vec<Column>,

    /// Number of columns
    pub num_columns: i64,

    /// Number of rows
    pub num_rows: i64,
}

impl Synopsis {
    /// Headers of all columns, in column order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|col| col.sample_header.as_str())
    }

    /// Look up a column by its header
    pub fn column(&self, header: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.sample_header == header)
    }
}

/// Structured error reported by the synopsis service
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SynopsisError {
    /// Machine readable error code
    pub code: String,

    /// Human readable description
    pub description: String,
}

impl SynopsisError {
    /// Create a new synopsis error
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for SynopsisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

impl std::error::Error for SynopsisError {}

/// Body of a synopsis response.
///
/// The service answers 2xx for both outcomes, so the shape of the body
/// decides which one it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SynopsisResponse {
    /// Synopsis data
    Success {
        /// The synopsis
        data: Synopsis,

        /// Status reported by the service, normally "success"
        #[serde(default)]
        status: String,
    },

    /// Structured error
    Failure(SynopsisError),
}

impl SynopsisResponse {
    /// Whether the body carries synopsis data
    pub fn is_success(&self) -> bool {
        matches!(self, SynopsisResponse::Success { .. })
    }

    /// Split the body into synopsis data or the reported error
    pub fn into_result(self) -> std::result::Result<Synopsis, SynopsisError> {
        match self {
            SynopsisResponse::Success { data, .. } => Ok(data),
            SynopsisResponse::Failure(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_column_uses_api_field_names() {
        let column: Column = serde_json::from_value(json!({
            "colType": "Number",
            "numRows": 10,
            "numUniqueValues": 4,
            "sample": ["1", "2"],
            "sampleHeader": "score"
        }))
        .unwrap();

        assert_eq!(column.col_type, ColType::Number);
        assert_eq!(column.num_rows, 10);
        assert_eq!(column.num_unique_values, 4);
        assert_eq!(column.sample, vec!["1", "2"]);
        assert_eq!(column.sample_header, "score");

        let value = serde_json::to_value(&column).unwrap();
        assert_eq!(value["sampleHeader"], "score");
        assert_eq!(value["colType"], "Number");
    }

    #[test]
    fn test_strip_header_samples() {
        let mut column = Column {
            sample: vec!["a".into(), "header".into(), "b".into(), "header".into()],
            sample_header: "header".into(),
            ..Default::default()
        };

        assert_eq!(column.strip_header_samples(), 2);
        assert_eq!(column.sample, vec!["a", "b"]);
        assert_eq!(column.strip_header_samples(), 0);
    }

    #[test]
    fn test_success_response() {
        let body = json!({
            "data": {
                "columns": [{
                    "colType": "Text",
                    "numRows": -1,
                    "numUniqueValues": -1,
                    "sample": ["x"],
                    "sampleHeader": "name"
                }],
                "numColumns": 1,
                "numRows": -1
            },
            "status": "success"
        });

        let response: SynopsisResponse = serde_json::from_value(body).unwrap();
        assert!(response.is_success());

        let synopsis = response.into_result().unwrap();
        assert_eq!(synopsis.num_columns, 1);
        assert_eq!(synopsis.headers().collect::<Vec<_>>(), vec!["name"]);
        assert!(synopsis.column("name").is_some());
        assert!(synopsis.column("missing").is_none());
    }

    #[test]
    fn test_sparse_success_response() {
        let response: SynopsisResponse = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        match response {
            SynopsisResponse::Success { data, status } => {
                assert!(data.columns.is_empty());
                assert_eq!(status, "");
            }
            SynopsisResponse::Failure(_) => panic!("Expected Success variant"),
        }
    }

    #[test]
    fn test_failure_response() {
        let response: SynopsisResponse =
            serde_json::from_str(r#"{"code": "UNAUTHORIZED", "description": "bad token"}"#).unwrap();

        assert!(!response.is_success());
        let err = response.into_result().unwrap_err();
        assert_eq!(err, SynopsisError::new("UNAUTHORIZED", "bad token"));
        assert_eq!(err.to_string(), "UNAUTHORIZED: bad token");
    }

    #[test]
    fn test_unrecognised_body_is_rejected() {
        assert!(serde_json::from_str::<SynopsisResponse>(r#"{"message": "nope"}"#).is_err());
    }
}
