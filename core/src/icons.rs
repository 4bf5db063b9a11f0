//! Icons used by form renderers
//!
//! Renderers receive an [`IconSet`] when they are constructed instead of
//! looking icons up in a shared registry.

use std::collections::HashMap;

/// Icons a filter form may display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// External link
    Link,

    /// Signed-in user
    User,

    /// Sign out
    PowerOff,

    /// Delete a filter
    TrashAlt,

    /// Configure a score filter
    Cog,
}

impl Icon {
    /// Icon name as used by icon fonts
    pub fn name(self) -> &'static str {
        match self {
            Icon::Link => "link",
            Icon::User => "user",
            Icon::PowerOff => "power-off",
            Icon::TrashAlt => "trash-alt",
            Icon::Cog => "cog",
        }
    }
}

/// Mapping from icons to the glyphs a renderer draws
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    glyphs: HashMap<Icon, String>,
}

impl IconSet {
    /// Empty set; every icon falls back to its bracketed name
    pub fn new() -> Self {
        Self::default()
    }

    /// The icons used by the filter form
    pub fn standard() -> Self {
        Self::new()
            .with(Icon::Link, "🔗")
            .with(Icon::User, "👤")
            .with(Icon::PowerOff, "⏻")
            .with(Icon::TrashAlt, "🗑")
            .with(Icon::Cog, "⚙")
    }

    /// Add or replace the glyph for an icon
    pub fn with(mut self, icon: Icon, glyph: impl Into<String>) -> Self {
        self.glyphs.insert(icon, glyph.into());
        self
    }

    /// Whether the set has a glyph for the icon
    pub fn contains(&self, icon: Icon) -> bool {
        self.glyphs.contains_key(&icon)
    }

    /// Glyph for an icon
    pub fn glyph(&self, icon: Icon) -> String {
        self.glyphs
            .get(&icon)
            .cloned()
            .unwrap_or_else(|| format!("[{}]", icon.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_is_complete() {
        let icons = IconSet::standard();
        for icon in [Icon::Link, Icon::User, Icon::PowerOff, Icon::TrashAlt, Icon::Cog] {
            assert!(icons.contains(icon), "missing {}", icon.name());
        }
    }

    #[test]
    fn test_fallback_glyph() {
        let icons = IconSet::new().with(Icon::Cog, "*");
        assert_eq!(icons.glyph(Icon::Cog), "*");
        assert_eq!(icons.glyph(Icon::TrashAlt), "[trash-alt]");
    }
}
