//! Plain text rendering of the filter form

use std::fmt::Write;
use filter_builder_core::{FilterState, FilterType, FormPhase, Icon, IconSet, ScoreType, Synopsis};

/// Renders form state for the terminal
pub struct Renderer {
    icons: IconSet,
}

impl Renderer {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    /// Render the form the way its current phase dictates
    pub fn render(&self, state: &FilterState) -> String {
        match state.phase() {
            FormPhase::Loading => "Loading...\n".to_string(),
            FormPhase::Failed(err) => {
                let payload = serde_json::to_string_pretty(err).unwrap_or_else(|_| err.to_string());
                format!("An error occurred\n{}\n", payload)
            }
            FormPhase::Empty => "No synopsis available\n".to_string(),
            FormPhase::Ready(_) => self.render_filters(state),
        }
    }

    fn render_filters(&self, state: &FilterState) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Filters ({})", state.filters.len());

        for (index, filter) in state.filters.iter().enumerate() {
            let _ = write!(out, "{:>3}. {} [{}]", index + 1, filter.name, filter.filter_type.label());
            if filter.needs_score_config() {
                let _ = write!(
                    out,
                    " {} {}",
                    self.icons.glyph(Icon::Cog),
                    filter.score_type_or_default().label()
                );
            }
            let _ = writeln!(out, " {}  ({})", self.icons.glyph(Icon::TrashAlt), filter.id);
        }

        if !state.filters.is_empty() {
            let types: Vec<_> = FilterType::ALL.iter().map(|t| t.label()).collect();
            let scores: Vec<_> = ScoreType::ALL.iter().map(|t| t.label()).collect();
            let _ = writeln!(out, "Types: {}", types.join(", "));
            let _ = writeln!(out, "Score types: {}", scores.join(", "));
        }

        let columns = state.addable_columns();
        if columns.is_empty() {
            out.push_str("No columns to add\n");
        } else {
            let _ = writeln!(out, "Add filter: {}", columns.join(", "));
        }
        out
    }

    /// Render synopsis columns as a table
    pub fn render_synopsis(&self, synopsis: &Synopsis) -> String {
        let width = synopsis
            .headers()
            .map(|h| h.chars().count())
            .max()
            .unwrap_or(0)
            .max("COLUMN".len());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<width$}  {:<6}  {:>8}  {:>8}  SAMPLE",
            "COLUMN", "TYPE", "ROWS", "UNIQUE",
            width = width
        );
        for col in &synopsis.columns {
            let _ = writeln!(
                out,
                "{:<width$}  {:<6}  {:>8}  {:>8}  {}",
                col.sample_header,
                format!("{:?}", col.col_type),
                col.num_rows,
                col.num_unique_values,
                col.sample.join(", "),
                width = width
            );
        }
        let _ = writeln!(out, "{} columns, {} rows", synopsis.num_columns, synopsis.num_rows);
        out
    }
}
