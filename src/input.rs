//! Schema and relational-input seam.
//!
//! The crate never reads files or talks to a database; input adapters live
//! elsewhere and hand the core two things: a table's *schema width* (which
//! bounds valid column indices) and rows of string values. [`TableSchema`]
//! carries the width plus column names, and [`RelationalInput`] is the
//! trait input adapters implement. [`MemoryInput`] is the in-memory
//! adapter used by tests and small profiling runs.

use crate::core::ColumnCombination;
use crate::error::{LatticeError, Result};

/// A table's name and ordered column names.
///
/// The schema is the validated entry point for building
/// [`ColumnCombination`]s: its width is the universe every index is checked
/// against, and its names translate opaque combinations back into
/// human-readable results.
///
/// # Examples
///
/// ```rust
/// use column_lattice::input::TableSchema;
///
/// let schema = TableSchema::new("orders", ["id", "customer", "date", "amount"]);
/// let c = schema.combination([0, 2])?;
/// assert_eq!(schema.names_of(&c)?, vec!["id", "date"]);
/// assert!(schema.combination([0, 4]).is_err());
/// # Ok::<(), column_lattice::LatticeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSchema {
    name: String,
    columns: Vec<String>,
}

impl TableSchema {
    /// Creates a schema from a table name and column names, in column order.
    pub fn new(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of columns, the universe size for combinations.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names in column order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Returns the name of column `index`, if it exists.
    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    /// Builds a combination from column indices, validated against this
    /// schema's width.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::ColumnOutOfRange`] for an index `>= width()`.
    pub fn combination(
        &self,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<ColumnCombination> {
        ColumnCombination::from_indices(indices, self.width())
    }

    /// Builds a combination from column names.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::UnknownColumn`] for a name not in the schema.
    pub fn combination_of<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<ColumnCombination> {
        let mut combination = ColumnCombination::empty();
        for name in names {
            let index = self
                .columns
                .iter()
                .position(|column| column == name)
                .ok_or_else(|| LatticeError::unknown_column(name))?;
            combination = combination.union(&ColumnCombination::singleton(index));
        }
        Ok(combination)
    }

    /// Translates a combination back into column names, in column order.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::ColumnOutOfRange`] if the combination has a
    /// member outside this schema.
    pub fn names_of(&self, combination: &ColumnCombination) -> Result<Vec<String>> {
        combination
            .iter_set_bits()
            .map(|index| {
                self.column_name(index)
                    .map(str::to_owned)
                    .ok_or_else(|| LatticeError::column_out_of_range(index, self.width()))
            })
            .collect()
    }
}

/// A source of rows for one table.
///
/// The Rust rendering of the classic relational-input interface: a schema
/// plus fallible row iteration. Unlike a plain iterator, `next_row` may
/// fail mid-stream (a malformed record, a dropped connection), which is why
/// it returns `Result<Option<_>>` rather than implementing `Iterator`
/// directly.
pub trait RelationalInput {
    /// The schema of the rows this input produces.
    fn schema(&self) -> &TableSchema;

    /// Returns the next row, `Ok(None)` once exhausted.
    ///
    /// Each row has exactly `schema().width()` values, one per column.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::Input`] if the underlying source fails.
    fn next_row(&mut self) -> Result<Option<Vec<String>>>;
}

/// An in-memory [`RelationalInput`] over owned rows.
///
/// Rows whose width disagrees with the schema surface as
/// [`LatticeError::Input`] when reached, not at construction, matching how
/// streaming adapters behave.
#[derive(Clone, Debug)]
pub struct MemoryInput {
    schema: TableSchema,
    rows: std::vec::IntoIter<Vec<String>>,
}

impl MemoryInput {
    /// Creates an input over the given rows.
    pub fn new(schema: TableSchema, rows: Vec<Vec<String>>) -> Self {
        Self {
            schema,
            rows: rows.into_iter(),
        }
    }
}

impl RelationalInput for MemoryInput {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn next_row(&mut self) -> Result<Option<Vec<String>>> {
        match self.rows.next() {
            Some(row) if row.len() != self.schema.width() => Err(LatticeError::input(format!(
                "row has {} values but table {:?} has {} columns",
                row.len(),
                self.schema.name(),
                self.schema.width()
            ))),
            other => Ok(other),
        }
    }
}
