//! Result-reporting seam.
//!
//! Lattice searches work entirely in terms of opaque
//! [`ColumnCombination`](crate::core::ColumnCombination)s; at this boundary
//! the accepted combinations are translated into named, serializable
//! results for whatever reporting layer sits on top.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ColumnCombination;
use crate::error::Result;
use crate::input::TableSchema;

/// A discovered uniqueness constraint: the named columns jointly hold no
/// duplicate value combination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueColumnCombination {
    /// The member columns, in column order.
    pub columns: Vec<String>,
}

impl UniqueColumnCombination {
    /// Translates a combination into a named result using `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::ColumnOutOfRange`](crate::LatticeError::ColumnOutOfRange)
    /// if the combination has a member outside the schema.
    pub fn from_combination(schema: &TableSchema, combination: &ColumnCombination) -> Result<Self> {
        Ok(Self {
            columns: schema.names_of(combination)?,
        })
    }
}

impl fmt::Display for UniqueColumnCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.columns.join(", "))
    }
}

/// A discovered functional dependency: the determinant columns fix the
/// value of the dependent column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionalDependency {
    /// The determinant columns, in column order.
    pub determinant: Vec<String>,
    /// The dependent column.
    pub dependent: String,
}

impl FunctionalDependency {
    /// Translates a determinant combination and dependent column index into
    /// a named result using `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::ColumnOutOfRange`](crate::LatticeError::ColumnOutOfRange)
    /// if the determinant or the dependent lies outside the schema.
    pub fn from_combination(
        schema: &TableSchema,
        determinant: &ColumnCombination,
        dependent: usize,
    ) -> Result<Self> {
        let dependent = schema.column_name(dependent).map(str::to_owned).ok_or(
            crate::LatticeError::ColumnOutOfRange {
                index: dependent,
                width: schema.width(),
            },
        )?;
        Ok(Self {
            determinant: schema.names_of(determinant)?,
            dependent,
        })
    }
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] --> {}", self.determinant.join(", "), self.dependent)
    }
}

/// The collected results of one profiling run over one table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilingReport {
    /// The profiled table.
    pub table: String,
    /// Discovered unique column combinations.
    pub unique_column_combinations: Vec<UniqueColumnCombination>,
    /// Discovered functional dependencies.
    pub functional_dependencies: Vec<FunctionalDependency>,
}

impl ProfilingReport {
    /// Creates an empty report for the named table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Records a discovered unique column combination.
    pub fn record_ucc(&mut self, ucc: UniqueColumnCombination) {
        debug!(table = %self.table, result = %ucc, "recorded unique column combination");
        self.unique_column_combinations.push(ucc);
    }

    /// Records a discovered functional dependency.
    pub fn record_fd(&mut self, fd: FunctionalDependency) {
        debug!(table = %self.table, result = %fd, "recorded functional dependency");
        self.functional_dependencies.push(fd);
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::Serialization`](crate::LatticeError::Serialization)
    /// if JSON encoding fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
