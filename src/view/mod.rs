// src/view/mod.rs
//
// Table View - Filter / Sort / Paginate
//
// Pure computations over an in-memory record slice. Filters and sorting
// always run over the full collection; the page window is cut last.

pub mod columns;
pub mod table;

pub use columns::{humanize, media_columns};
pub use table::{
    distinct_options, view, CellValue, Column, Filter, SortDir, SortState, TableQuery,
    TableView,
};
