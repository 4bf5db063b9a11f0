//! Filter form state and its reducer
//!
//! The form state is a plain value. Every user interaction and every
//! fetch outcome is expressed as a [`FilterAction`] and folded into the
//! state with [`reduce`], which never keeps anything between calls.

use serde::de::DeserializeOwned;
use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::models::{Filter, FilterId, Synopsis, SynopsisError};
use crate::normalize::normalize;

/// State of one filter form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Whether the synopsis fetch is still pending
    pub is_fetching_synopsis: bool,

    /// Normalized synopsis, once received
    pub synopsis: Option<Synopsis>,

    /// Fetch error, if the fetch failed
    pub error: Option<SynopsisError>,

    /// Filters in display order
    pub filters: Vec<Filter>,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            is_fetching_synopsis: true,
            synopsis: None,
            error: None,
            filters: Vec::new(),
        }
    }
}

/// A change to the form state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    try_from = "RawAction"
)]
pub enum FilterAction {
    /// Append a new filter for the column with this header
    FilterAdded(String),

    /// Replace the filter with the same id
    FilterUpdated(Filter),

    /// Remove the filter with this id
    FilterDeleted(FilterId),

    /// Replace the whole filter list
    FiltersUpdated(Vec<Filter>),

    /// Remove every filter
    FiltersCleared,

    /// The synopsis fetch succeeded
    SynopsisReceived(Synopsis),

    /// The synopsis fetch failed
    SynopsisErrorReceived(SynopsisError),

    /// Any action type this form does not know; ignored
    Unknown,
}

/// Wire shape of an action before its type is resolved
#[derive(Debug, Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,

    #[serde(default)]
    payload: Option<Value>,
}

fn payload<T: DeserializeOwned>(payload: Option<Value>) -> serde_json::Result<T> {
    serde_json::from_value(payload.unwrap_or(Value::Null))
}

impl TryFrom<RawAction> for FilterAction {
    type Error = serde_json::Error;

    fn try_from(raw: RawAction) -> serde_json::Result<Self> {
        let action = match raw.kind.as_str() {
            "FILTER_ADDED" => FilterAction::FilterAdded(payload(raw.payload)?),
            "FILTER_UPDATED" => FilterAction::FilterUpdated(payload(raw.payload)?),
            "FILTER_DELETED" => FilterAction::FilterDeleted(payload(raw.payload)?),
            "FILTERS_UPDATED" => FilterAction::FiltersUpdated(payload(raw.payload)?),
            "FILTERS_CLEARED" => FilterAction::FiltersCleared,
            "SYNOPSIS_RECEIVED" => FilterAction::SynopsisReceived(payload(raw.payload)?),
            "SYNOPSIS_ERROR_RECEIVED" => FilterAction::SynopsisErrorReceived(payload(raw.payload)?),
            _ => FilterAction::Unknown,
        };
        Ok(action)
    }
}

impl FilterAction {
    /// Wire name of the action
    pub fn kind(&self) -> &'static str {
        match self {
            FilterAction::FilterAdded(_) => "FILTER_ADDED",
            FilterAction::FilterUpdated(_) => "FILTER_UPDATED",
            FilterAction::FilterDeleted(_) => "FILTER_DELETED",
            FilterAction::FiltersUpdated(_) => "FILTERS_UPDATED",
            FilterAction::FiltersCleared => "FILTERS_CLEARED",
            FilterAction::SynopsisReceived(_) => "SYNOPSIS_RECEIVED",
            FilterAction::SynopsisErrorReceived(_) => "SYNOPSIS_ERROR_RECEIVED",
            FilterAction::Unknown => "UNKNOWN",
        }
    }
}

/// Compute the next form state.
pub fn reduce(state: FilterState, action: FilterAction) -> FilterState {
    match action {
        FilterAction::FilterAdded(sample_header) => {
            let mut filters = state.filters;
            filters.push(Filter::for_column(sample_header));
            FilterState { filters, ..state }
        }
        FilterAction::FilterUpdated(updated) => FilterState {
            filters: state
                .filters
                .into_iter()
                .map(|filter| if filter.id == updated.id { updated.clone() } else { filter })
                .collect(),
            ..state
        },
        FilterAction::FilterDeleted(id) => FilterState {
            filters: state
                .filters
                .into_iter()
                .filter(|filter| filter.id != id)
                .collect(),
            ..state
        },
        FilterAction::FiltersUpdated(filters) => FilterState { filters, ..state },
        FilterAction::FiltersCleared => FilterState {
            filters: Vec::new(),
            ..state
        },
        FilterAction::SynopsisReceived(synopsis) => FilterState {
            is_fetching_synopsis: false,
            error: None,
            synopsis: Some(normalize(synopsis)),
            ..state
        },
        FilterAction::SynopsisErrorReceived(error) => FilterState {
            is_fetching_synopsis: false,
            error: Some(error),
            ..state
        },
        FilterAction::Unknown => state,
    }
}

/// What the form should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase<'a> {
    /// Synopsis fetch still pending
    Loading,

    /// Synopsis fetch failed
    Failed(&'a SynopsisError),

    /// Synopsis available; filters can be edited
    Ready(&'a Synopsis),

    /// Fetch settled without data or error
    Empty,
}

impl FilterState {
    /// Initial state of a freshly opened form
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action, consuming the current state
    pub fn apply(self, action: FilterAction) -> Self {
        reduce(self, action)
    }

    /// Decide what to show: pending fetch first, then error, then data
    pub fn phase(&self) -> FormPhase<'_> {
        if self.is_fetching_synopsis {
            return FormPhase::Loading;
        }
        match (&self.error, &self.synopsis) {
            (Some(error), _) => FormPhase::Failed(error),
            (None, Some(synopsis)) => FormPhase::Ready(synopsis),
            (None, None) => FormPhase::Empty,
        }
    }

    /// Column headers a new filter can be created for
    pub fn addable_columns(&self) -> Vec<&str> {
        self.synopsis
            .as_ref()
            .map(|synopsis| synopsis.headers().collect())
            .unwrap_or_default()
    }

    /// Whether there is any column to add a filter for
    pub fn can_add_filter(&self) -> bool {
        !self.addable_columns().is_empty()
    }

    /// Look up a filter by id
    pub fn filter(&self, id: &FilterId) -> Option<&Filter> {
        self.filters.iter().find(|filter| &filter.id == id)
    }
}
