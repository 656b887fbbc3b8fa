//! Header
//!
//! Search box and column visibility toggles above the grid.

use crate::components::primitives::{Attrs, Checkbox, InputBinding, TextInput, ViewNode};
use crate::eventing::GridCommand;
use crate::state::table_manager::TableManager;

fn render_search(table_manager: &TableManager) -> ViewNode {
    let config = &table_manager.config;
    ViewNode::div("rgt-search-container")
        .with_attrs(&Attrs::from(&config.additional_props.search))
        .child(
            ViewNode::element("label", Attrs::class("rgt-search-label"))
                .child(ViewNode::span("rgt-search-icon").child(ViewNode::text(&config.icons.search)))
                .child(ViewNode::text(&config.texts.search)),
        )
        .child(
            TextInput::new("rgt-search-input", InputBinding::SearchText)
                .value(&table_manager.params.search_text)
                .into_node(),
        )
}

fn render_column_visibility(table_manager: &TableManager) -> ViewNode {
    let config = &table_manager.config;
    let toggles = table_manager.columns_data.columns.iter().map(|column| {
        ViewNode::div("rgt-columns-manager-popover-row").child(
            Checkbox::new("rgt-columns-manager-checkbox")
                .checked(column.visible)
                .label(column.display_label())
                .test_id(format!("rgt-column-toggle-{}", column.id))
                .on_toggle(GridCommand::ToggleColumnVisibility(column.id.clone()))
                .into_node(),
        )
    });

    ViewNode::div("rgt-columns-manager-wrapper")
        .with_attrs(&Attrs::from(&config.additional_props.column_visibility))
        .child(
            ViewNode::span("rgt-columns-manager-label")
                .child(ViewNode::span("rgt-columns-manager-icon").child(ViewNode::text(&config.icons.column_visibility)))
                .child(ViewNode::text(&config.texts.column_visibility)),
        )
        .children(toggles)
}

pub fn render_header(table_manager: &TableManager) -> ViewNode {
    ViewNode::div("rgt-header-container")
        .with_attrs(&Attrs::from(&table_manager.config.additional_props.header))
        .child(render_search(table_manager))
        .child(render_column_visibility(table_manager))
}
