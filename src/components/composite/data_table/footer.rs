//! Footer
//!
//! Information on the left, pagination on the right; each part is optional.

use super::information::{InformationOverrides, render_information};
use super::pagination::render_pagination;
use crate::components::primitives::{Attrs, ViewNode};
use crate::state::table_manager::TableManager;

pub fn render_footer(table_manager: &TableManager) -> ViewNode {
    let config = &table_manager.config;

    ViewNode::div("rgt-footer")
        .with_attrs(&Attrs::from(&config.additional_props.footer))
        .child_opt(
            config
                .show_rows_information
                .then(|| render_information(table_manager, &InformationOverrides::default())),
        )
        .child_opt(config.is_paginated.then(|| render_pagination(table_manager)))
}
