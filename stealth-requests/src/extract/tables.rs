//! Column-oriented reconstruction of HTML tables.
//!
//! Every `table` element in the document is an independent extraction
//! unit, including tables nested inside other tables' cells. A table
//! contributes a record only when it has a usable header row; the rules
//! for finding one, and for aligning ragged data rows against it, live in
//! [`table_record`].

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::document::{children_named, normalized_text};
use crate::models::TableRecord;

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid selector"));

/// Extracts every qualifying table in document order.
///
/// Nested tables are extracted as independent records alongside their
/// container. Tables without a usable header row are skipped entirely.
#[must_use]
pub fn tables(document: &Html) -> Vec<TableRecord> {
    let records: Vec<TableRecord> = document.select(&TABLE).filter_map(table_record).collect();
    tracing::debug!(count = records.len(), "extracted tables");
    records
}

/// Reconstructs a single table as a column-oriented record.
///
/// Header detection prefers a `thead` row containing `th` cells; without
/// a `thead`, the first row qualifies only if it contains at least one
/// `th`. Returns `None` when no header row is found or any header label
/// normalizes to the empty string.
fn table_record(table: ElementRef<'_>) -> Option<TableRecord> {
    let mut header_rows: Vec<ElementRef<'_>> = Vec::new();
    let mut body_rows: Vec<ElementRef<'_>> = Vec::new();

    for child in children_named(table, &["thead", "tbody", "tfoot", "tr"]) {
        match child.value().name() {
            "thead" => header_rows.extend(children_named(child, &["tr"])),
            "tr" => body_rows.push(child),
            _ => body_rows.extend(children_named(child, &["tr"])),
        }
    }

    let header_cells: Vec<ElementRef<'_>> = if header_rows.is_empty() {
        // No header section: the first row counts only if it has header
        // cells, and header rows are never data rows.
        let first = *body_rows.first()?;
        let cells: Vec<_> = children_named(first, &["th"]).collect();
        if cells.is_empty() {
            return None;
        }
        body_rows.remove(0);
        cells
    } else {
        header_rows
            .iter()
            .map(|row| children_named(*row, &["th"]).collect::<Vec<_>>())
            .find(|cells| !cells.is_empty())?
    };

    let headers: Vec<String> = header_cells.into_iter().map(normalized_text).collect();
    if headers.iter().any(String::is_empty) {
        return None;
    }

    let rows: Vec<Vec<String>> = body_rows
        .into_iter()
        .map(|row| {
            children_named(row, &["td", "th"])
                .map(normalized_text)
                .collect()
        })
        .collect();

    // Positional alignment: short rows are right-padded with empty
    // strings, extra trailing cells are discarded.
    let mut record = TableRecord::with_capacity(headers.len());
    for (index, label) in headers.into_iter().enumerate() {
        let column: Vec<String> = rows
            .iter()
            .map(|cells| cells.get(index).cloned().unwrap_or_default())
            .collect();
        record.insert(label, column);
    }
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::parse_document;

    fn records(html: &str) -> Vec<TableRecord> {
        tables(&parse_document(html))
    }

    #[test]
    fn test_thead_header_with_tbody_rows() {
        let found = records(
            "<table><thead><tr><th>Name</th><th>Age</th></tr></thead>\
             <tbody><tr><td>Alice</td><td>30</td></tr><tr><td>Bob</td><td>25</td></tr></tbody></table>",
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["Name"], vec!["Alice", "Bob"]);
        assert_eq!(found[0]["Age"], vec!["30", "25"]);
    }

    #[test]
    fn test_header_order_matches_source_order() {
        let found = records(
            "<table><thead><tr><th>B</th><th>A</th></tr></thead>\
             <tbody><tr><td>1</td><td>2</td></tr></tbody></table>",
        );
        let keys: Vec<&String> = found[0].keys().collect();
        assert_eq!(keys, ["B", "A"]);
    }

    #[test]
    fn test_first_row_fallback_requires_th() {
        let with_th = records(
            "<table><tr><th>Color</th></tr><tr><td>Red</td></tr></table>",
        );
        assert_eq!(with_th.len(), 1);
        assert_eq!(with_th[0]["Color"], vec!["Red"]);

        let without_th = records("<table><tr><td>only</td></tr><tr><td>data</td></tr></table>");
        assert!(without_th.is_empty());
    }

    #[test]
    fn test_empty_header_label_skips_table() {
        let found = records(
            "<table><thead><tr><th>Good</th><th>  </th></tr></thead>\
             <tbody><tr><td>a</td><td>b</td></tr></tbody></table>",
        );
        assert!(found.is_empty());
    }

    #[test]
    fn test_table_with_no_rows_skipped() {
        assert!(records("<table></table>").is_empty());
    }

    #[test]
    fn test_header_only_table_yields_empty_columns() {
        let found = records("<table><thead><tr><th>Header</th></tr></thead></table>");
        assert_eq!(found.len(), 1);
        assert!(found[0]["Header"].is_empty());
    }

    #[test]
    fn test_ragged_rows_align_positionally() {
        let found = records(
            "<table><thead><tr><th>A</th><th>B</th><th>C</th></tr></thead>\
             <tbody><tr><td>1</td><td>2</td></tr><tr><td>3</td><td>4</td><td>5</td><td>6</td></tr></tbody></table>",
        );
        assert_eq!(found[0]["A"], vec!["1", "3"]);
        assert_eq!(found[0]["B"], vec!["2", "4"]);
        assert_eq!(found[0]["C"], vec!["", "5"]);
    }

    #[test]
    fn test_zero_cell_row_contributes_empty_strings() {
        let found = records(
            "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
             <tbody><tr></tr></tbody></table>",
        );
        assert_eq!(found[0]["A"], vec![""]);
        assert_eq!(found[0]["B"], vec![""]);
    }

    #[test]
    fn test_every_column_has_one_entry_per_data_row() {
        let found = records(
            "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
             <tbody><tr><td>1</td></tr><tr><td>2</td><td>3</td><td>x</td></tr><tr></tr></tbody></table>",
        );
        for column in found[0].values() {
            assert_eq!(column.len(), 3);
        }
    }

    #[test]
    fn test_nested_table_extracted_independently() {
        let found = records(
            "<table><thead><tr><th>Outer</th></tr></thead>\
             <tbody><tr><td>\
             <table><thead><tr><th>Inner</th></tr></thead>\
             <tbody><tr><td>nested</td></tr></tbody></table>\
             </td></tr></tbody></table>",
        );
        assert_eq!(found.len(), 2);
        let inner = found
            .iter()
            .find(|record| record.contains_key("Inner"))
            .expect("inner table extracted");
        assert_eq!(inner["Inner"], vec!["nested"]);
    }

    #[test]
    fn test_thead_without_th_skips_table() {
        let found = records(
            "<table><thead><tr></tr></thead><tbody><tr><td>data</td></tr></tbody></table>",
        );
        assert!(found.is_empty());
    }

    #[test]
    fn test_data_row_th_cells_count_positionally() {
        let found = records(
            "<table><thead><tr><th>K</th><th>V</th></tr></thead>\
             <tbody><tr><th>size</th><td>10</td></tr></tbody></table>",
        );
        assert_eq!(found[0]["K"], vec!["size"]);
        assert_eq!(found[0]["V"], vec!["10"]);
    }

    #[test]
    fn test_skipped_table_leaves_siblings_alone() {
        let found = records(
            "<table><thead><tr><th>Good</th></tr></thead><tbody><tr><td>yes</td></tr></tbody></table>\
             <table><tr><td>no</td><td>headers</td></tr></table>\
             <table><thead><tr><th>Also Good</th></tr></thead><tbody><tr><td>yep</td></tr></tbody></table>",
        );
        assert_eq!(found.len(), 2);
        assert_eq!(found[0]["Good"], vec!["yes"]);
        assert_eq!(found[1]["Also Good"], vec!["yep"]);
    }
}
