//! Config - Grid Configuration

use serde::{Deserialize, Serialize};

use super::sort::SortSpec;
use crate::constants::{
    DEFAULT_OVERSCAN, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES, DEFAULT_ROW_HEIGHT,
    DEFAULT_SEARCH_MIN_CHARS,
};
use crate::error::{Error, Result};
use crate::i18n::{Locale, t_table};

/// Main grid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Locale for built-in texts (detected when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// Split rows into pages
    pub is_paginated: bool,
    /// Rows per page
    pub page_size: usize,
    /// Page sizes offered by the pagination view
    pub page_sizes: Vec<usize>,
    /// Minimum search text length before filtering applies
    pub search_min_chars: usize,
    /// Render only the rows inside the scroll viewport
    pub is_virtual_scrolling: bool,
    /// Show the footer information section
    pub show_rows_information: bool,
    /// Row height used by virtual scrolling
    pub row_height: f32,
    /// Extra rows rendered above and below the viewport
    pub overscan: usize,
    /// Column ids hidden at startup
    pub hidden_columns: Vec<String>,
    /// Sort applied at startup
    pub initial_sort: SortSpec,
    /// Per-key overrides of the localized texts
    pub texts: TextOverrides,
    /// Glyphs used by the views
    pub icons: TableIcons,
    /// Passthrough attributes per section
    pub additional_props: AdditionalProps,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            locale: None,
            is_paginated: true,
            page_size: DEFAULT_PAGE_SIZE,
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            search_min_chars: DEFAULT_SEARCH_MIN_CHARS,
            is_virtual_scrolling: false,
            show_rows_information: true,
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
            hidden_columns: Vec::new(),
            initial_sort: SortSpec::none(),
            texts: TextOverrides::default(),
            icons: TableIcons::default(),
            additional_props: AdditionalProps::default(),
        }
    }
}

impl GridConfig {
    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Invalid {
                message: "page_size must be greater than zero".to_string(),
            });
        }
        if self.page_sizes.contains(&0) {
            return Err(Error::Invalid {
                message: "page_sizes must not contain zero".to_string(),
            });
        }
        if self.row_height.is_nan() || self.row_height <= 0.0 {
            return Err(Error::Invalid {
                message: format!("row_height must be positive, got {}", self.row_height),
            });
        }
        Ok(())
    }

    /// Effective locale
    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_else(Locale::detect)
    }

    /// Localized texts with overrides applied
    pub fn texts(&self) -> TableTexts {
        TableTexts::for_locale(self.locale()).with_overrides(&self.texts)
    }
}

/// Resolved display texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTexts {
    pub search: String,
    pub total_rows: String,
    pub rows: String,
    pub selected: String,
    pub clear_selection: String,
    pub rows_per_page: String,
    pub page: String,
    pub of: String,
    pub prev: String,
    pub next: String,
    pub column_visibility: String,
    pub no_results: String,
    pub loading: String,
}

impl TableTexts {
    /// Texts from the translation resources
    pub fn for_locale(locale: Locale) -> Self {
        let t = |key: &str| t_table(locale, key);
        Self {
            search: t("search"),
            total_rows: t("total_rows"),
            rows: t("rows"),
            selected: t("selected"),
            clear_selection: t("clear_selection"),
            rows_per_page: t("rows_per_page"),
            page: t("page"),
            of: t("of"),
            prev: t("prev"),
            next: t("next"),
            column_visibility: t("column_visibility"),
            no_results: t("no_results"),
            loading: t("loading"),
        }
    }

    /// Apply host overrides
    pub fn with_overrides(mut self, overrides: &TextOverrides) -> Self {
        let apply = |target: &mut String, value: &Option<String>| {
            if let Some(value) = value {
                target.clone_from(value);
            }
        };
        apply(&mut self.search, &overrides.search);
        apply(&mut self.total_rows, &overrides.total_rows);
        apply(&mut self.rows, &overrides.rows);
        apply(&mut self.selected, &overrides.selected);
        apply(&mut self.clear_selection, &overrides.clear_selection);
        apply(&mut self.rows_per_page, &overrides.rows_per_page);
        apply(&mut self.page, &overrides.page);
        apply(&mut self.of, &overrides.of);
        apply(&mut self.prev, &overrides.prev);
        apply(&mut self.next, &overrides.next);
        apply(&mut self.column_visibility, &overrides.column_visibility);
        apply(&mut self.no_results, &overrides.no_results);
        apply(&mut self.loading, &overrides.loading);
        self
    }
}

/// Optional per-key text overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOverrides {
    pub search: Option<String>,
    pub total_rows: Option<String>,
    pub rows: Option<String>,
    pub selected: Option<String>,
    pub clear_selection: Option<String>,
    pub rows_per_page: Option<String>,
    pub page: Option<String>,
    pub of: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub column_visibility: Option<String>,
    pub no_results: Option<String>,
    pub loading: Option<String>,
}

/// Glyphs injected into the views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableIcons {
    pub clear_selection: String,
    pub sort_ascending: String,
    pub sort_descending: String,
    pub search: String,
    pub column_visibility: String,
}

impl Default for TableIcons {
    fn default() -> Self {
        Self {
            clear_selection: "✕".to_string(),
            sort_ascending: "↑".to_string(),
            sort_descending: "↓".to_string(),
            search: "⌕".to_string(),
            column_visibility: "⋮".to_string(),
        }
    }
}

/// Fixed set of attributes passed through to a rendered section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassthroughAttrs {
    pub class_name: Option<String>,
    pub id: Option<String>,
    pub test_id: Option<String>,
    pub title: Option<String>,
}

/// Passthrough attributes for each grid section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalProps {
    pub header: PassthroughAttrs,
    pub search: PassthroughAttrs,
    pub column_visibility: PassthroughAttrs,
    pub table: PassthroughAttrs,
    pub footer: PassthroughAttrs,
    pub information: PassthroughAttrs,
    pub pagination: PassthroughAttrs,
}
