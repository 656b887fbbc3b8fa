//! Table Rendering
//!
//! Header, body and overlays as a view tree, plus a plain-text renderer for
//! terminals.

use serde_json::Value;

use super::column::{CellContext, Column};
use crate::components::primitives::{Attrs, Checkbox, InputBinding, TextInput, ViewNode};
use crate::domain::Row;
use crate::domain::value::display_text;
use crate::eventing::GridCommand;
use crate::state::table_manager::TableManager;

/// Render the grid: header row, visible rows and the loading / empty overlay
pub fn render_table(table_manager: &TableManager) -> ViewNode {
    let columns: Vec<&Column> = table_manager.columns_data.visible().collect();

    let mut body = ViewNode::div("rgt-body");
    let window = table_manager.virtual_window;
    if let Some(window) = window {
        body = body.child(ViewNode::Spacer {
            height: window.top_spacer,
        });
    }
    body = body.children(
        table_manager
            .rendered_rows()
            .map(|(row_index, row)| render_row(table_manager, &columns, row, row_index)),
    );
    if let Some(window) = window {
        body = body.child(ViewNode::Spacer {
            height: window.bottom_spacer,
        });
    }

    ViewNode::div("rgt-wrapper")
        .with_attrs(&Attrs::from(&table_manager.config.additional_props.table))
        .child(render_header(table_manager, &columns))
        .child(body)
        .child_opt(render_overlay(table_manager))
}

/// Render the header row
fn render_header(table_manager: &TableManager, columns: &[&Column]) -> ViewNode {
    ViewNode::div("rgt-header-row").children(
        columns
            .iter()
            .map(|column| render_header_cell(table_manager, column)),
    )
}

fn render_header_cell(table_manager: &TableManager, column: &Column) -> ViewNode {
    let mut class_name = format!("rgt-cell-header rgt-cell-header-{}", column.id);
    class_name.push_str(if column.sortable {
        " rgt-cell-header-sortable"
    } else {
        " rgt-cell-header-not-sortable"
    });
    if column.pinned {
        class_name.push_str(" rgt-cell-header-pinned");
    }
    let cell = ViewNode::span(class_name).with_width(column.width.to_string());

    if column.is_selection() {
        let has_rows = !table_manager.rows_data.page_rows.is_empty();
        return cell.child(
            Checkbox::new("rgt-header-checkbox")
                .checked(table_manager.all_page_rows_selected())
                .disabled(!has_rows)
                .on_toggle(GridCommand::ToggleAllPageRows)
                .into_node(),
        );
    }

    let label = column.display_label().to_string();
    let cell = if column.sortable {
        cell.child(ViewNode::Button {
            attrs: Attrs::class("rgt-sort-button rgt-clickable"),
            label,
            disabled: false,
            on_click: vec![GridCommand::ToggleSort(column.id.clone())],
        })
    } else {
        cell.child(ViewNode::span("rgt-text-truncate").child(ViewNode::text(label)))
    };

    let sort = &table_manager.params.sort;
    let icons = &table_manager.config.icons;
    if sort.is_sorted_by(&column.id) {
        let icon = if sort.is_asc {
            &icons.sort_ascending
        } else {
            &icons.sort_descending
        };
        cell.child(ViewNode::span("rgt-sort-icon").child(ViewNode::text(icon)))
    } else {
        cell
    }
}

/// Render one data row
fn render_row(table_manager: &TableManager, columns: &[&Column], row: &Row, row_index: usize) -> ViewNode {
    let edit_api = &table_manager.row_edit_api;
    let edit_row = edit_api.edit_row.as_ref().filter(|edit| edit.id == row.id);
    let is_edit = edit_row.is_some();
    let data = edit_row.map(|edit| &edit.draft).unwrap_or(row);
    let is_selected = table_manager.row_selection_api.is_selected(&row.id);

    let mut class_name = format!("rgt-row rgt-row-{}", row_index % 2);
    if is_selected {
        class_name.push_str(" rgt-row-selected");
    }
    if is_edit {
        class_name.push_str(" rgt-row-edit");
    }
    let attrs = Attrs {
        class_name: Some(class_name),
        id: Some(format!("rgt-row-{}", row.id)),
        ..Attrs::default()
    };

    ViewNode::element("div", attrs).children(columns.iter().map(|column| {
        let value = column.value_of(data);
        let ctx = CellContext {
            table_manager,
            value: &value,
            field: column.field.as_deref(),
            data,
            column,
            row_index,
            search_text: &table_manager.params.search_text,
            is_edit,
        };
        ViewNode::span(format!("rgt-cell rgt-cell-{}", column.id))
            .with_width(column.width.to_string())
            .child(render_cell(&ctx, is_selected))
    }))
}

fn render_cell(ctx: &CellContext<'_>, is_selected: bool) -> ViewNode {
    let column = ctx.column;
    if column.is_selection() {
        return Checkbox::new("rgt-row-checkbox")
            .checked(is_selected)
            .disabled(ctx.is_edit)
            .on_toggle(GridCommand::ToggleRowSelection(ctx.data.id.clone()))
            .into_node();
    }

    if ctx.is_edit {
        if let Some(render) = &column.editor_cell_renderer {
            return render(ctx);
        }
        if let Some(field) = ctx.field {
            return default_editor(field, ctx.value);
        }
    }

    match &column.cell_renderer {
        Some(render) => render(ctx),
        None => default_cell(ctx.value),
    }
}

/// Text input bound to the draft field
pub fn default_editor(field: &str, value: &Value) -> ViewNode {
    TextInput::new(
        "rgt-cell-editor-input",
        InputBinding::EditField {
            field: field.to_string(),
        },
    )
    .value(display_text(value))
    .into_node()
}

/// Truncated text of the value
pub fn default_cell(value: &Value) -> ViewNode {
    let text = display_text(value);
    let attrs = Attrs {
        class_name: Some("rgt-cell-inner rgt-text-truncate".to_string()),
        title: Some(text.clone()),
        ..Attrs::default()
    };
    ViewNode::element("div", attrs).child(ViewNode::Text(text))
}

fn render_overlay(table_manager: &TableManager) -> Option<ViewNode> {
    let texts = &table_manager.config.texts;
    if table_manager.is_loading {
        return Some(ViewNode::div("rgt-container-overlay rgt-loading").child(ViewNode::text(&texts.loading)));
    }
    if table_manager.rows_data.page_rows.is_empty() {
        return Some(ViewNode::div("rgt-container-overlay rgt-no-results").child(ViewNode::text(&texts.no_results)));
    }
    None
}

/// Text shown for a cell in plain-text output
fn cell_text(cell: &ViewNode) -> String {
    let mut checkbox = None;
    cell.walk(&mut |node| {
        if let ViewNode::Checkbox { checked, .. } = node {
            checkbox.get_or_insert(*checked);
        }
    });
    match checkbox {
        Some(true) => "[x]".to_string(),
        Some(false) => "[ ]".to_string(),
        None => cell.text_content(),
    }
}

/// Render the grid as aligned text columns followed by the overlay text, if any
pub fn render_plain_text(table_manager: &TableManager) -> String {
    let table = render_table(table_manager);

    let header: Vec<String> = table
        .find_all_by_class("rgt-cell-header")
        .into_iter()
        .map(cell_text)
        .collect();
    let rows: Vec<Vec<String>> = table
        .find_all_by_class("rgt-row")
        .into_iter()
        .map(|row| {
            row.child_nodes()
                .iter()
                .filter(|cell| cell.has_class("rgt-cell"))
                .map(cell_text)
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let format_line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(&header)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(rows.iter().map(|row| format_line(row)));
    if let Some(overlay) = table.find_by_class("rgt-container-overlay") {
        lines.push(overlay.text_content());
    }
    lines.join("\n")
}
