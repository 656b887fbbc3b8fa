//! Demo Columns
//!
//! The user directory columns shown by both stories.

use std::cmp::Ordering;

use serde_json::Value;

use crate::components::composite::data_table::column::{CellContext, SortArgs};
use crate::components::composite::data_table::{Column, ColumnSet, ColumnWidth};
use crate::components::primitives::{Button, InputBinding, Select, SelectOption, TextInput, ViewNode};
use crate::domain::Row;
use crate::domain::value::display_text;
use crate::error::Result;
use crate::eventing::GridCommand;
use crate::i18n::{Locale, t_demo};
use crate::services::search::contains_ignore_case;

/// Reorder `dd/mm/yyyy` as `yyyy/mm/dd` so it sorts as text
fn date_key(value: &Value) -> String {
    let text = display_text(value);
    text.split('/').rev().collect::<Vec<_>>().join("/")
}

/// Compare `dd/mm/yyyy` dates by year, then month, then day
pub fn compare_day_month_year(args: SortArgs<'_>) -> Ordering {
    let order = date_key(args.a).cmp(&date_key(args.b));
    if args.is_ascending { order } else { order.reverse() }
}

fn render_username(ctx: &CellContext<'_>) -> ViewNode {
    let name = display_text(ctx.value);
    let initial: String = name.chars().take(1).flat_map(char::to_uppercase).collect();
    let body = if ctx.is_edit {
        TextInput::new(
            "rgt-cell-editor-input",
            InputBinding::EditField {
                field: ctx.field.unwrap_or("username").to_string(),
            },
        )
        .value(name)
        .into_node()
    } else {
        ViewNode::span("rgt-text-truncate").child(ViewNode::text(name))
    };
    ViewNode::div("demo-username")
        .child(ViewNode::span("demo-username-avatar").child(ViewNode::text(initial)))
        .child(body)
}

fn render_gender_editor(ctx: &CellContext<'_>) -> ViewNode {
    Select::new(
        "demo-gender-select",
        InputBinding::EditField {
            field: ctx.field.unwrap_or("gender").to_string(),
        },
    )
    .selected(display_text(ctx.value))
    .options(vec![
        SelectOption::new("Male", "Male"),
        SelectOption::new("Female", "Female"),
    ])
    .into_node()
}

fn render_actions(locale: Locale, ctx: &CellContext<'_>) -> ViewNode {
    ViewNode::div("demo-buttons-cell").child(
        Button::new("demo-edit-button", t_demo(locale, "edit"))
            .title(t_demo(locale, "edit"))
            .on_click(GridCommand::SetEditRow(Some(ctx.data.id.clone())))
            .into_node(),
    )
}

/// Working set with the edited row swapped for its draft
fn rows_with_draft(ctx: &CellContext<'_>) -> Vec<Row> {
    ctx.table_manager
        .rows_data
        .all_rows
        .iter()
        .map(|row| if row.id == ctx.data.id { ctx.data.clone() } else { row.clone() })
        .collect()
}

fn render_actions_editor(locale: Locale, ctx: &CellContext<'_>) -> ViewNode {
    ViewNode::div("demo-buttons-cell-editor")
        .child(
            Button::secondary("demo-cancel-button", t_demo(locale, "cancel"))
                .on_click(GridCommand::SetEditRow(None))
                .into_node(),
        )
        .child(
            Button::primary("demo-save-button", t_demo(locale, "save"))
                .on_click(GridCommand::SetRows(rows_with_draft(ctx)))
                .on_click(GridCommand::SetEditRow(None))
                .into_node(),
        )
}

/// Selection, identity, profile fields, last visit and the row actions
pub fn base_columns(locale: Locale) -> Result<ColumnSet> {
    let columns = vec![
        Column::checkbox().label("Select"),
        Column::with_field("id", "id").label("id"),
        Column::with_field(2u32, "username")
            .label("Username")
            .cell_renderer(render_username)
            .editor_cell_renderer(render_username),
        Column::with_field(3u32, "first_name").label("First Name"),
        Column::with_field(4u32, "last_name").label("Last Name"),
        Column::with_field(5u32, "email").label("Email"),
        Column::with_field(6u32, "gender")
            .label("Gender")
            .editor_cell_renderer(render_gender_editor),
        Column::with_field(7u32, "ip_address").label("IP Address"),
        Column::with_field(8u32, "last_visited")
            .label("Last Visited")
            .sort_with(compare_day_month_year),
        Column::new(9u32)
            .label("")
            .width(ColumnWidth::MaxContent)
            .pinned()
            .sortable(false)
            .searchable(false)
            .resizable(true)
            .cell_renderer(move |ctx| render_actions(locale, ctx))
            .editor_cell_renderer(move |ctx| render_actions_editor(locale, ctx)),
    ];
    ColumnSet::try_new(columns, contains_ignore_case())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::{DataMode, DataTable, render_table};
    use crate::domain::{ColumnId, GridConfig, RowId};
    use crate::features::demo::mock_data::mock_rows;
    use serde_json::json;

    fn demo_table() -> DataTable {
        let config = GridConfig {
            locale: Some(Locale::EnUS),
            ..GridConfig::default()
        };
        let columns = base_columns(Locale::EnUS).expect("columns");
        let mut table = DataTable::new(config, columns, DataMode::ClientSide).expect("table");
        table
            .dispatch(GridCommand::SetRows(mock_rows(25).expect("rows")))
            .expect("rows");
        table
    }

    #[test]
    fn test_last_visited_sorts_by_year_first() {
        let a = json!("01/02/2020");
        let b = json!("01/01/2021");
        let asc = SortArgs {
            a: &a,
            b: &b,
            is_ascending: true,
        };
        assert_eq!(compare_day_month_year(asc), Ordering::Less);
        let desc = SortArgs {
            is_ascending: false,
            ..asc
        };
        assert_eq!(compare_day_month_year(desc), Ordering::Greater);
    }

    #[test]
    fn test_edit_then_save_replaces_row() {
        let mut table = demo_table();
        let id = RowId::from(3u64);

        let tm = table.table_manager();
        let row = render_table(&tm)
            .find(&|node| node.attrs().and_then(|a| a.id.as_deref()) == Some("rgt-row-3"))
            .cloned()
            .expect("row");
        let edit = row.find_by_class("demo-edit-button").expect("edit");
        for command in edit.click() {
            table.dispatch(command).expect("edit");
        }
        assert_eq!(table.table_manager().row_edit_api.edit_row_id(), Some(&id));

        table
            .dispatch(GridCommand::UpdateEditDraft {
                field: "gender".into(),
                value: json!("Female"),
            })
            .expect("draft");
        table
            .dispatch(GridCommand::UpdateEditDraft {
                field: "first_name".into(),
                value: json!("Zed"),
            })
            .expect("draft");

        let tm = table.table_manager();
        let view = render_table(&tm);
        let save = view.find_by_class("demo-save-button").expect("save");
        for command in save.click() {
            table.dispatch(command).expect("save");
        }

        let tm = table.table_manager();
        assert!(tm.row_edit_api.edit_row.is_none());
        let saved = tm.rows_data.all_rows.iter().find(|r| r.id == id).expect("saved");
        assert_eq!(saved.get("first_name"), Some(&json!("Zed")));
        assert_eq!(saved.get("gender"), Some(&json!("Female")));
        assert_eq!(tm.rows_data.all_rows.len(), 25);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut table = demo_table();
        table.dispatch(GridCommand::SetEditRow(Some(RowId::from(1u64)))).expect("edit");
        table
            .dispatch(GridCommand::UpdateEditDraft {
                field: "email".into(),
                value: json!("changed@x.y"),
            })
            .expect("draft");

        let tm = table.table_manager();
        let view = render_table(&tm);
        let cancel = view.find_by_class("demo-cancel-button").expect("cancel");
        assert_eq!(cancel.click(), vec![GridCommand::SetEditRow(None)]);
        table.dispatch(GridCommand::SetEditRow(None)).expect("cancel");

        let tm = table.table_manager();
        let row = tm.rows_data.all_rows.iter().find(|r| r.id == RowId::from(1u64)).expect("row");
        assert_ne!(row.get("email"), Some(&json!("changed@x.y")));
    }

    #[test]
    fn test_gender_editor_offers_two_options() {
        let mut table = demo_table();
        table.dispatch(GridCommand::SetEditRow(Some(RowId::from(2u64)))).expect("edit");
        let tm = table.table_manager();
        let view = render_table(&tm);
        let select = view.find_by_class("demo-gender-select").expect("select");
        assert!(select.input("Other").is_none());
        assert_eq!(
            select.input("Male"),
            Some(GridCommand::UpdateEditDraft {
                field: "gender".into(),
                value: json!("Male"),
            })
        );
    }

    #[test]
    fn test_actions_column_is_not_sortable() {
        let columns = base_columns(Locale::EnUS).expect("columns");
        let actions = columns.get(&ColumnId::from(9u32)).expect("actions");
        assert!(!actions.sortable);
        assert!(actions.pinned);
        assert_eq!(actions.width, ColumnWidth::MaxContent);
    }
}
