//! Filters assembled by the user against synopsis columns

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::utils;

/// Unique identifier of a filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterId(String);

impl FilterId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        FilterId(utils::generate_id())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FilterId {
    fn from(value: &str) -> Self {
        FilterId(value.to_string())
    }
}

impl From<String> for FilterId {
    fn from(value: String) -> Self {
        FilterId(value)
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterType {
    /// Newly added, not yet classified
    Default,

    /// Data filter
    Data,

    /// Search filter
    Search,

    /// Score filter, configured with a [`ScoreType`]
    Score,
}

impl FilterType {
    /// All filter types in display order
    pub const ALL: [FilterType; 4] = [
        FilterType::Default,
        FilterType::Data,
        FilterType::Search,
        FilterType::Score,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            FilterType::Default => "Default",
            FilterType::Data => "Data",
            FilterType::Search => "Search",
            FilterType::Score => "Score",
        }
    }
}

/// Scoring rule of a score filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreType {
    /// Mean score
    Average,

    /// Net promoter score
    #[serde(rename = "NPS")]
    Nps,

    /// Share above a threshold
    Threshold,
}

impl ScoreType {
    /// All score types in display order
    pub const ALL: [ScoreType; 3] = [ScoreType::Average, ScoreType::Nps, ScoreType::Threshold];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            ScoreType::Average => "Average",
            ScoreType::Nps => "NPS",
            ScoreType::Threshold => "Threshold",
        }
    }
}

impl Default for ScoreType {
    fn default() -> Self {
        ScoreType::Average
    }
}

/// A named criterion applied against a dataset column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// Unique identifier
    pub id: FilterId,

    /// Display name, initially the column header
    pub name: String,

    /// Filter kind
    #[serde(rename = "type")]
    pub filter_type: FilterType,

    /// Scoring rule; only meaningful for [`FilterType::Score`]
    pub score_type: Option<ScoreType>,
}

impl Filter {
    /// Create a fresh `Default` filter for a column
    pub fn for_column(sample_header: impl Into<String>) -> Self {
        Self {
            id: FilterId::generate(),
            name: sample_header.into(),
            filter_type: FilterType::Default,
            score_type: None,
        }
    }

    /// Copy of this filter with a new name
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Copy of this filter with a new type.
    ///
    /// The score type is kept even when leaving `Score`.
    pub fn with_type(&self, filter_type: FilterType) -> Self {
        Self {
            filter_type,
            ..self.clone()
        }
    }

    /// Copy of this filter with a scoring rule
    pub fn with_score_type(&self, score_type: ScoreType) -> Self {
        Self {
            score_type: Some(score_type),
            ..self.clone()
        }
    }

    /// Whether the filter needs a scoring rule configured
    pub fn needs_score_config(&self) -> bool {
        self.filter_type == FilterType::Score
    }

    /// Scoring rule to preselect when configuring the filter
    pub fn score_type_or_default(&self) -> ScoreType {
        self.score_type.unwrap_or_default()
    }
}
