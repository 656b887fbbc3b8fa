//! Pagination Component
//!
//! Page navigation for the DataTable, plus the page arithmetic the engine uses.

use crate::components::primitives::{Attrs, Button, InputBinding, Select, SelectOption, ViewNode};
use crate::eventing::GridCommand;
use crate::services::query::RowsRange;
use crate::state::table_manager::TableManager;

/// Number of pages for `total_rows`; never less than one
pub fn total_pages(total_rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_rows.div_ceil(page_size).max(1)
}

/// Index range of a 1-based page
pub fn page_range(page: usize, page_size: usize) -> RowsRange {
    let from = page.saturating_sub(1) * page_size;
    RowsRange::new(from, from + page_size)
}

/// Render the pagination bar: page size select, page indicator, prev/next
pub fn render_pagination(table_manager: &TableManager) -> ViewNode {
    let texts = &table_manager.config.texts;
    let api = &table_manager.pagination_api;
    let current = api.page;

    let mut page_sizes = api.page_sizes.clone();
    if !page_sizes.contains(&api.page_size) {
        page_sizes.push(api.page_size);
        page_sizes.sort_unstable();
    }
    let options = page_sizes
        .iter()
        .map(|size| SelectOption::new(size.to_string(), size.to_string()))
        .collect();

    let page_size = ViewNode::div("rgt-footer-page-size")
        .child(ViewNode::span("rgt-footer-page-size-label").child(ViewNode::text(&texts.rows_per_page)))
        .child(
            Select::new("rgt-footer-page-size-select", InputBinding::PageSize)
                .options(options)
                .selected(api.page_size.to_string())
                .into_node(),
        );

    let page_info = ViewNode::div("rgt-footer-page-input").child(ViewNode::text(format!(
        "{} {} {} {}",
        texts.page, current, texts.of, api.total_pages
    )));

    let prev = Button::new("rgt-footer-pagination-button rgt-footer-pagination-prev", &texts.prev)
        .disabled(!api.can_prev())
        .on_click(GridCommand::SetPage(current.saturating_sub(1).max(1)))
        .into_node();

    let next = Button::new("rgt-footer-pagination-button rgt-footer-pagination-next", &texts.next)
        .disabled(!api.can_next())
        .on_click(GridCommand::SetPage(current + 1))
        .into_node();

    ViewNode::div("rgt-footer-pagination")
        .with_attrs(&Attrs::from(&table_manager.config.additional_props.pagination))
        .child(page_size)
        .child(prev)
        .child(page_info)
        .child(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::test_support::{manager, rows};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(1, 20), RowsRange::new(0, 20));
        assert_eq!(page_range(3, 20), RowsRange::new(40, 60));
    }

    #[test]
    fn test_bounds_disable_buttons() {
        let tm = manager(rows(45), |_| {});
        let node = render_pagination(&tm);
        let prev = node.find_by_class("rgt-footer-pagination-prev").expect("prev");
        let next = node.find_by_class("rgt-footer-pagination-next").expect("next");
        assert!(prev.click().is_empty());
        assert_eq!(next.click(), vec![GridCommand::SetPage(2)]);
        assert_eq!(
            node.find_by_class("rgt-footer-page-input").map(ViewNode::text_content),
            Some("Page: 1 of 3".to_string())
        );
    }

    #[test]
    fn test_page_size_select() {
        let tm = manager(rows(45), |_| {});
        let node = render_pagination(&tm);
        let select = node.find_by_class("rgt-footer-page-size-select").expect("select");
        assert_eq!(select.input("50"), Some(GridCommand::SetPageSize(50)));
    }
}
