use std::cmp::Ordering;

/// Value of one table cell, used for display, sorting and filtering
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    /// Rendered as a placeholder; sorts after everything else
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Textual form used for exact-equality filtering
    pub fn filter_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Missing => String::new(),
        }
    }

    fn cmp_cell(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Missing, CellValue::Missing) => Ordering::Equal,
            (CellValue::Missing, _) => Ordering::Greater,
            (_, CellValue::Missing) => Ordering::Less,
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            _ => self.filter_text().cmp(&other.filter_text()),
        }
    }
}

/// One column of the table
///
/// `value` feeds display and sorting; `filter_value` (when set) feeds
/// exact-match filtering and the derived option sets, so a column can
/// show a humanized label while filtering on the raw field.
pub struct Column<R> {
    pub key: &'static str,
    pub value: fn(&R) -> CellValue,
    pub filter_value: Option<fn(&R) -> CellValue>,
}

impl<R> Column<R> {
    pub fn new(key: &'static str, value: fn(&R) -> CellValue) -> Self {
        Self {
            key,
            value,
            filter_value: None,
        }
    }

    pub fn with_filter_value(mut self, filter_value: fn(&R) -> CellValue) -> Self {
        self.filter_value = Some(filter_value);
        self
    }

    fn filter_text_of(&self, record: &R) -> String {
        let accessor = self.filter_value.unwrap_or(self.value);
        accessor(record).filter_text()
    }
}

/// Sort direction for the active key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Ascending,
    Descending,
}

/// Current sort selection, cycled by clicking a column header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Active {
        key: &'static str,
        dir: SortDir,
    },
}

impl SortState {
    /// Header-click cycle: unsorted -> ascending -> descending -> unsorted.
    /// Clicking a different key restarts the cycle at ascending.
    pub fn toggle(&mut self, key: &'static str) {
        *self = match *self {
            SortState::Active { key: current, dir } if current == key => match dir {
                SortDir::Ascending => SortState::Active {
                    key,
                    dir: SortDir::Descending,
                },
                SortDir::Descending => SortState::Unsorted,
            },
            _ => SortState::Active {
                key,
                dir: SortDir::Ascending,
            },
        };
    }

    /// Direction indicator for one header, if that key is active
    pub fn indicator(&self, key: &str) -> Option<SortDir> {
        match self {
            SortState::Active { key: current, dir } if *current == key => Some(*dir),
            _ => None,
        }
    }
}

/// One column filter; an empty value is a no-op (matches everything)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: &'static str,
    pub value: String,
}

impl Filter {
    pub fn new(column: &'static str, value: impl Into<String>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

/// Everything the table needs to compute the visible window
#[derive(Debug, Clone)]
pub struct TableQuery {
    pub filters: Vec<Filter>,
    pub sort: SortState,
    /// 1-based page index
    pub page: usize,
    pub page_size: usize,
}

impl TableQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: Vec::new(),
            sort: SortState::Unsorted,
            page: 1,
            page_size,
        }
    }

    /// Replace one column's filter value; resets to the first page since
    /// the old window may no longer exist
    pub fn set_filter(&mut self, column: &'static str, value: impl Into<String>) {
        let value = value.into();
        if let Some(filter) = self.filters.iter_mut().find(|f| f.column == column) {
            filter.value = value;
        } else {
            self.filters.push(Filter::new(column, value));
        }
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }
}

/// The visible page of rows after filter + sort + paginate
#[derive(Debug)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    pub total_rows: usize,
    pub total_pages: usize,
    pub page: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

/// Compute the visible window.
///
/// Filters AND together over the full record set; sorting is stable for
/// equal keys; pagination is cut last, so `can_prev`/`can_next` reflect
/// the filtered collection, never the unfiltered one.
///
/// Filtering on a key no column declares is a programming error and
/// panics.
pub fn view<'a, R>(
    records: &'a [R],
    columns: &[Column<R>],
    query: &TableQuery,
) -> TableView<'a, R> {
    let mut rows: Vec<&R> = records
        .iter()
        .filter(|record| {
            query.filters.iter().all(|filter| {
                if filter.value.is_empty() {
                    return true;
                }
                column(columns, filter.column).filter_text_of(record) == filter.value
            })
        })
        .collect();

    if let SortState::Active { key, dir } = query.sort {
        let accessor = column(columns, key).value;
        // Vec::sort_by is stable, so equal keys keep their original
        // relative order in both directions
        rows.sort_by(|a, b| {
            let ordering = accessor(a).cmp_cell(&accessor(b));
            match dir {
                SortDir::Ascending => ordering,
                SortDir::Descending => ordering.reverse(),
            }
        });
    }

    let total_rows = rows.len();
    let total_pages = if query.page_size == 0 {
        0
    } else {
        total_rows.div_ceil(query.page_size)
    };

    let start = query.page.saturating_sub(1) * query.page_size;
    let page_rows: Vec<&R> = if start >= total_rows {
        Vec::new()
    } else {
        rows[start..(start + query.page_size).min(total_rows)].to_vec()
    };

    TableView {
        rows: page_rows,
        total_rows,
        total_pages,
        page: query.page,
        can_prev: query.page > 1,
        can_next: query.page < total_pages,
    }
}

/// Distinct values for one column's filter dropdown, first-seen order.
///
/// Always computed from the unfiltered collection, so clearing one
/// filter never removes options from another filter's dropdown.
pub fn distinct_options<R>(records: &[R], column: &Column<R>) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for record in records {
        let value = column.filter_text_of(record);
        if !value.is_empty() && !options.contains(&value) {
            options.push(value);
        }
    }
    options
}

fn column<'c, R>(columns: &'c [Column<R>], key: &str) -> &'c Column<R> {
    columns
        .iter()
        .find(|c| c.key == key)
        .unwrap_or_else(|| panic!("unknown column '{}'", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        name: &'static str,
        genre: &'static str,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("name", |r: &Row| CellValue::text(r.name)),
            Column::new("genre", |r: &Row| CellValue::text(r.genre)),
        ]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Alien", genre: "Action" },
            Row { name: "Coherence", genre: "Comedy" },
            Row { name: "Brick", genre: "Action" },
            Row { name: "Alien", genre: "Comedy" },
            Row { name: "Dune", genre: "Action" },
        ]
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let data = rows();
        let mut query = TableQuery::new(10);
        query.set_filter("genre", "");
        let view = view(&data, &columns(), &query);
        assert_eq!(view.total_rows, 5);
    }

    #[test]
    fn test_exact_filter() {
        let data = vec![
            Row { name: "A", genre: "Action" },
            Row { name: "B", genre: "Comedy" },
        ];
        let mut query = TableQuery::new(10);
        query.set_filter("genre", "Action");
        let view = view(&data, &columns(), &query);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].name, "A");
    }

    #[test]
    fn test_filters_combine_with_and() {
        let data = rows();
        let mut query = TableQuery::new(10);
        query.set_filter("genre", "Comedy");
        query.set_filter("name", "Alien");
        let view = view(&data, &columns(), &query);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].genre, "Comedy");
    }

    #[test]
    fn test_sort_is_stable_and_descending_reverses() {
        let data = rows();
        let cols = columns();
        let mut query = TableQuery::new(10);
        query.sort.toggle("name");

        let asc = view(&data, &cols, &query);
        let asc_names: Vec<_> = asc.rows.iter().map(|r| r.name).collect();
        assert_eq!(asc_names, ["Alien", "Alien", "Brick", "Coherence", "Dune"]);
        // the two Aliens keep their original relative order
        assert_eq!(asc.rows[0].genre, "Action");
        assert_eq!(asc.rows[1].genre, "Comedy");

        query.sort.toggle("name");
        let desc = view(&data, &cols, &query);
        let desc_names: Vec<_> = desc.rows.iter().map(|r| r.name).collect();
        assert_eq!(desc_names, ["Dune", "Coherence", "Brick", "Alien", "Alien"]);
        // ties keep original order under descending too
        assert_eq!(desc.rows[3].genre, "Action");
        assert_eq!(desc.rows[4].genre, "Comedy");
    }

    #[test]
    fn test_toggle_cycles_back_to_unsorted() {
        let mut sort = SortState::default();
        sort.toggle("name");
        assert_eq!(sort.indicator("name"), Some(SortDir::Ascending));
        sort.toggle("name");
        assert_eq!(sort.indicator("name"), Some(SortDir::Descending));
        sort.toggle("name");
        assert_eq!(sort, SortState::Unsorted);
    }

    #[test]
    fn test_toggle_other_key_restarts_ascending() {
        let mut sort = SortState::default();
        sort.toggle("name");
        sort.toggle("genre");
        assert_eq!(sort.indicator("genre"), Some(SortDir::Ascending));
        assert_eq!(sort.indicator("name"), None);
    }

    #[test]
    fn test_pagination_windows() {
        let data = rows();
        let cols = columns();
        let mut query = TableQuery::new(2);

        let page1 = view(&data, &cols, &query);
        assert_eq!(page1.rows.len(), 2);
        assert_eq!(page1.rows[0].name, "Alien");
        assert_eq!(page1.rows[1].name, "Coherence");
        assert_eq!(page1.total_pages, 3);
        assert!(!page1.can_prev);
        assert!(page1.can_next);

        query.page = 3;
        let page3 = view(&data, &cols, &query);
        assert_eq!(page3.rows.len(), 1);
        assert_eq!(page3.rows[0].name, "Dune");
        assert!(page3.can_prev);
        assert!(!page3.can_next);
    }

    #[test]
    fn test_filter_applies_before_pagination() {
        let data = rows();
        let cols = columns();
        let mut query = TableQuery::new(2);
        query.set_filter("genre", "Action");
        query.page = 2;

        let page2 = view(&data, &cols, &query);
        // 3 Action rows -> page 2 holds the last one
        assert_eq!(page2.total_rows, 3);
        assert_eq!(page2.total_pages, 2);
        assert_eq!(page2.rows.len(), 1);
        assert_eq!(page2.rows[0].name, "Dune");
    }

    #[test]
    fn test_setting_filter_resets_page() {
        let mut query = TableQuery::new(2);
        query.page = 3;
        query.set_filter("genre", "Action");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_distinct_options_first_seen_order() {
        let data = rows();
        let cols = columns();
        let options = distinct_options(&data, &cols[1]);
        assert_eq!(options, ["Action", "Comedy"]);
    }

    #[test]
    fn test_empty_collection() {
        let data: Vec<Row> = Vec::new();
        let query = TableQuery::new(2);
        let view = view(&data, &columns(), &query);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 0);
        assert!(!view.can_prev);
        assert!(!view.can_next);
    }
}
