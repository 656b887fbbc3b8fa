//! Row Query
//!
//! Search, sort and slice over an in-memory row set, honoring the column
//! descriptors. The engine runs this in client-side mode; server-side hosts run the
//! same steps before answering a rows request.

use tracing::debug;

use crate::components::composite::data_table::column::ColumnSet;
use crate::domain::value::display_text;
use crate::domain::{Row, SortSpec};
use crate::error::Result;

/// Half-open `[from, to)` index range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RowsRange {
    pub from: usize,
    pub to: usize,
}

impl RowsRange {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Restrict the range to a collection of `len` items
    pub fn clamp(&self, len: usize) -> Self {
        let to = self.to.min(len);
        Self {
            from: self.from.min(to),
            to,
        }
    }
}

/// Search and sort parameters of a query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub search_text: String,
    pub search_min_chars: usize,
    pub sort: SortSpec,
}

impl QueryParams {
    /// Search filters only when the text is non-empty and long enough
    pub fn is_search_active(&self) -> bool {
        is_search_active(&self.search_text, self.search_min_chars)
    }
}

/// Whether a search text passes the minimum length threshold
pub fn is_search_active(search_text: &str, search_min_chars: usize) -> bool {
    !search_text.is_empty() && search_text.chars().count() >= search_min_chars
}

/// Filtered, sorted and sliced rows plus the size of the filtered set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub rows: Vec<Row>,
    pub total_rows: usize,
}

/// Whether some field of the row maps to a searchable column whose value matches
pub fn row_matches(row: &Row, columns: &ColumnSet, search_text: &str) -> bool {
    row.data.keys().any(|key| {
        let Some(column) = columns.by_field(key) else {
            return false;
        };
        if !column.searchable {
            return false;
        }
        let display = display_text(&column.value_of(row));
        columns.matches(column, &display, search_text)
    })
}

/// Keep the rows that match the search; returns everything when search is inactive
pub fn search_rows(rows: &[Row], columns: &ColumnSet, params: &QueryParams) -> Vec<Row> {
    if !params.is_search_active() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row_matches(row, columns, &params.search_text))
        .cloned()
        .collect()
}

/// Sort rows in place by the column named in the spec.
///
/// Unknown columns are a configuration error; non-sortable columns leave the order
/// untouched. The sort is stable, so ties keep their input order.
pub fn sort_rows(rows: &mut Vec<Row>, columns: &ColumnSet, sort: &SortSpec) -> Result<()> {
    let Some(col_id) = &sort.col_id else {
        return Ok(());
    };
    let column = columns.require(col_id)?;
    if !column.sortable {
        debug!(column = %col_id, "Column is not sortable, keeping order");
        return Ok(());
    }

    let mut keyed: Vec<_> = rows.drain(..).map(|row| (column.value_of(&row), row)).collect();
    keyed.sort_by(|(a, _), (b, _)| column.compare(a, b, sort.is_asc));
    rows.extend(keyed.into_iter().map(|(_, row)| row));
    Ok(())
}

/// Copy out the rows inside `range`
pub fn slice_rows(rows: &[Row], range: RowsRange) -> Vec<Row> {
    let range = range.clamp(rows.len());
    rows[range.from..range.to].to_vec()
}

/// Search, then sort, then slice
pub fn run_query(
    rows: &[Row],
    columns: &ColumnSet,
    params: &QueryParams,
    range: RowsRange,
) -> Result<QueryResult> {
    let mut matched = search_rows(rows, columns, params);
    sort_rows(&mut matched, columns, &params.sort)?;
    Ok(QueryResult {
        total_rows: matched.len(),
        rows: slice_rows(&matched, range),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::column::Column;
    use crate::error::Error;
    use crate::services::search::contains_ignore_case;
    use serde_json::json;

    fn row(value: serde_json::Value) -> Row {
        Row::from_json(value, 0).expect("row")
    }

    fn people() -> Vec<Row> {
        vec![
            row(json!({"id": 1, "name": "Alice", "city": "Paris", "secret": "abc"})),
            row(json!({"id": 2, "name": "bob", "city": "Berlin", "secret": "xyz"})),
            row(json!({"id": 3, "name": "Carol", "city": "Rome", "secret": "bob"})),
            row(json!({"id": 4, "name": "Dave", "city": "Berlin", "secret": "q"})),
        ]
    }

    fn columns() -> ColumnSet {
        ColumnSet::try_new(
            vec![
                Column::checkbox(),
                Column::with_field("name", "name"),
                Column::with_field("city", "city"),
                Column::with_field("secret", "secret").searchable(false),
                Column::new("actions").sortable(false),
            ],
            contains_ignore_case(),
        )
        .expect("columns")
    }

    fn params(text: &str, min: usize, sort: SortSpec) -> QueryParams {
        QueryParams {
            search_text: text.to_string(),
            search_min_chars: min,
            sort,
        }
    }

    fn ids(rows: &[Row]) -> Vec<String> {
        rows.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_search_skips_unsearchable_columns() {
        let result = search_rows(&people(), &columns(), &params("bob", 0, SortSpec::none()));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_search_below_min_chars_does_not_filter() {
        let p = params("ab", 3, SortSpec::none());
        let result = search_rows(&people(), &columns(), &p);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_empty_search_never_filters() {
        let result = search_rows(&people(), &columns(), &params("", 0, SortSpec::none()));
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_search_is_idempotent() {
        let cols = columns();
        let p = params("ber", 2, SortSpec::none());
        let once = search_rows(&people(), &cols, &p);
        let twice = search_rows(&once, &cols, &p);
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec!["2", "4"]);
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let cols = columns();
        let mut rows = people();
        sort_rows(&mut rows, &cols, &SortSpec::asc("name")).expect("sort");
        assert_eq!(ids(&rows), vec!["1", "2", "3", "4"]);
        sort_rows(&mut rows, &cols, &SortSpec::desc("name")).expect("sort");
        assert_eq!(ids(&rows), vec!["4", "3", "2", "1"]);
    }

    #[test]
    fn test_sort_keeps_ties_in_input_order() {
        let cols = columns();
        let mut first = people();
        let mut second = people();
        sort_rows(&mut first, &cols, &SortSpec::asc("city")).expect("sort");
        sort_rows(&mut second, &cols, &SortSpec::asc("city")).expect("sort");
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_sort_on_unsortable_column_is_noop() {
        let mut rows = people();
        sort_rows(&mut rows, &columns(), &SortSpec::asc("actions")).expect("sort");
        assert_eq!(ids(&rows), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_sort_on_unknown_column_fails() {
        let mut rows = people();
        let err = sort_rows(&mut rows, &columns(), &SortSpec::asc("nope")).expect_err("unknown");
        assert!(matches!(err, Error::UnknownColumn { .. }));
    }

    #[test]
    fn test_slice_bounds() {
        let rows = people();
        assert_eq!(slice_rows(&rows, RowsRange::new(0, 10)).len(), 4);
        assert!(slice_rows(&rows, RowsRange::new(4, 10)).is_empty());
        assert!(slice_rows(&rows, RowsRange::new(9, 3)).is_empty());
        assert_eq!(ids(&slice_rows(&rows, RowsRange::new(1, 3))), vec!["2", "3"]);
    }

    #[test]
    fn test_run_query_reports_filtered_total() {
        let result = run_query(
            &people(),
            &columns(),
            &params("berlin", 2, SortSpec::desc("name")),
            RowsRange::new(0, 1),
        )
        .expect("query");
        assert_eq!(result.total_rows, 2);
        assert_eq!(ids(&result.rows), vec!["4"]);
    }
}
