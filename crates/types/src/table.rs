//! Timestamp-indexed table of named numeric columns.

use crate::error::CoreError;

/// A named numeric column. Missing observations are `NaN`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Observations aligned to the table index
    pub values: Vec<f64>,
}

impl Column {
    /// Creates a new column.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of leading non-finite values (leading gap or filter warmup).
    #[must_use]
    pub fn leading_undefined(&self) -> usize {
        self.values.iter().take_while(|v| !v.is_finite()).count()
    }

    /// Number of finite observations.
    #[must_use]
    pub fn finite_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_finite()).count()
    }
}

/// Immutable table: strictly increasing epoch-ns index plus equally long columns.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SeriesTable {
    timestamps_ns: Vec<i64>,
    columns: Vec<Column>,
}

impl SeriesTable {
    /// Creates a table after checking shape, index order and name uniqueness.
    ///
    /// # Errors
    /// Returns [`CoreError::Table`] when a column length differs from the index,
    /// timestamps are not strictly increasing, or a column name repeats.
    pub fn new(timestamps_ns: Vec<i64>, columns: Vec<Column>) -> Result<Self, CoreError> {
        if let Some(i) = timestamps_ns.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CoreError::Table(format!(
                "Non-increasing timestamp at row {}: {} <= {}",
                i + 1,
                timestamps_ns[i + 1],
                timestamps_ns[i]
            )));
        }

        for (i, column) in columns.iter().enumerate() {
            if column.values.len() != timestamps_ns.len() {
                return Err(CoreError::Table(format!(
                    "Column '{}' has {} rows, index has {}",
                    column.name,
                    column.values.len(),
                    timestamps_ns.len()
                )));
            }
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(CoreError::Table(format!(
                    "Duplicate column name '{}'",
                    column.name
                )));
            }
        }

        Ok(Self {
            timestamps_ns,
            columns,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps_ns.len()
    }

    /// Returns true when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps_ns.is_empty()
    }

    /// Number of columns.
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Row index (epoch nanoseconds).
    #[must_use]
    pub fn timestamps_ns(&self) -> &[i64] {
        &self.timestamps_ns
    }

    /// All columns in order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns a copy without the first `rows` rows.
    #[must_use]
    pub fn skip_rows(&self, rows: usize) -> Self {
        let start = rows.min(self.len());
        Self {
            timestamps_ns: self.timestamps_ns[start..].to_vec(),
            columns: self
                .columns
                .iter()
                .map(|c| Column::new(c.name.clone(), c.values[start..].to_vec()))
                .collect(),
        }
    }

    /// Returns a copy restricted to `names`, in the given order.
    ///
    /// # Errors
    /// Returns [`CoreError::Table`] when a name is not present.
    pub fn select(&self, names: &[String]) -> Result<Self, CoreError> {
        let columns = names
            .iter()
            .map(|name| {
                self.column(name)
                    .cloned()
                    .ok_or_else(|| CoreError::Table(format!("Unknown column '{name}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(self.timestamps_ns.clone(), columns)
    }
}
