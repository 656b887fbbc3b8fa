//! Footer Information
//!
//! Row counts and selection summary: `Total Rows: 100 | Rows: 0 - 20 | 2 Selected`,
//! followed by a clear-selection control while something is selected.

use crate::components::primitives::{Attrs, Button, ViewNode};
use crate::constants::INFO_SEPARATOR;
use crate::eventing::GridCommand;
use crate::state::table_manager::TableManager;

/// Optional replacements for the counts read from the table manager
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InformationOverrides {
    pub total_count: Option<usize>,
    pub page_size: Option<usize>,
    pub page_count: Option<usize>,
    pub selected_count: Option<usize>,
}

pub fn render_information(table_manager: &TableManager, overrides: &InformationOverrides) -> ViewNode {
    let config = &table_manager.config;
    let texts = &config.texts;

    let total_count = overrides.total_count.unwrap_or(table_manager.rows_api.total_rows);
    let page_size = overrides
        .page_size
        .unwrap_or(table_manager.pagination_api.page_size);
    let page_count = overrides
        .page_count
        .unwrap_or(table_manager.pagination_api.page_row_count());
    let selected_count = overrides
        .selected_count
        .unwrap_or(table_manager.row_selection_api.selected_count());
    let page = table_manager.pagination_api.page;

    let mut node = ViewNode::div("rgt-footer-items-information")
        .with_attrs(&Attrs::from(&config.additional_props.information))
        .child(
            ViewNode::span("rgt-footer-total-rows")
                .child(ViewNode::text(format!("{} {}", texts.total_rows, total_count))),
        );

    if config.is_paginated {
        let from = page_size * page.saturating_sub(1);
        node = node.child(ViewNode::span("rgt-footer-rows-range").child(ViewNode::text(format!(
            " {INFO_SEPARATOR} {} {} - {}",
            texts.rows,
            from,
            from + page_count
        ))));
    }

    if config.table_has_selection {
        node = node.child(ViewNode::span("rgt-footer-selected-count").child(ViewNode::text(
            format!(" {INFO_SEPARATOR} {} {}", selected_count, texts.selected),
        )));
        if selected_count > 0 {
            node = node.child(
                Button::new("rgt-footer-clear-selection-button", &config.icons.clear_selection)
                    .title(&texts.clear_selection)
                    .on_click(GridCommand::SetSelectedRows(Vec::new()))
                    .into_node(),
            );
        }
    }

    node
}
