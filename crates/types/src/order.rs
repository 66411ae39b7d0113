//! Per-column minimum differencing order results.

use std::fmt;

/// Why a column has no usable differencing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedReason {
    /// Series too short for the weight width of every grid order
    InsufficientHistory,
    /// The stationarity test failed numerically (constant or collinear series)
    DegenerateSeries,
    /// Every grid order was tested and none passed
    NoStationaryOrderFound,
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UnresolvedReason::InsufficientHistory => "insufficient history",
            UnresolvedReason::DegenerateSeries => "degenerate series",
            UnresolvedReason::NoStationaryOrderFound => "no stationary order found",
        };
        f.write_str(label)
    }
}

/// Outcome of the minimum-order search for one column.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OrderResolution {
    /// Smallest grid order whose filtered series passed the test
    Resolved {
        /// Differencing order
        d: f64,
    },
    /// No usable order
    Unresolved {
        /// Failure kind
        reason: UnresolvedReason,
    },
}

impl OrderResolution {
    /// Creates a resolved entry.
    #[must_use]
    pub fn resolved(d: f64) -> Self {
        OrderResolution::Resolved { d }
    }

    /// Creates an unresolved entry.
    #[must_use]
    pub fn unresolved(reason: UnresolvedReason) -> Self {
        OrderResolution::Unresolved { reason }
    }

    /// Returns the order when resolved.
    #[must_use]
    pub fn order(&self) -> Option<f64> {
        match self {
            OrderResolution::Resolved { d } => Some(*d),
            OrderResolution::Unresolved { .. } => None,
        }
    }

    /// Returns true when a passing order was found.
    #[must_use]
    pub fn passes(&self) -> bool {
        matches!(self, OrderResolution::Resolved { .. })
    }

    /// Returns the failure kind when unresolved.
    #[must_use]
    pub fn reason(&self) -> Option<UnresolvedReason> {
        match self {
            OrderResolution::Resolved { .. } => None,
            OrderResolution::Unresolved { reason } => Some(*reason),
        }
    }
}

/// Column name → minimum order, in input column order.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MinOrderTable {
    entries: Vec<(String, OrderResolution)>,
}

impl MinOrderTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `name`.
    pub fn insert(&mut self, name: impl Into<String>, resolution: OrderResolution) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = resolution,
            None => self.entries.push((name, resolution)),
        }
    }

    /// Returns the entry for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OrderResolution> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, resolution)| resolution)
    }

    /// Returns the resolved order for `name`.
    #[must_use]
    pub fn order(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(OrderResolution::order)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrderResolution)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }

    /// Iterates over resolved entries.
    pub fn resolved(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter()
            .filter_map(|(name, resolution)| resolution.order().map(|d| (name, d)))
    }

    /// Iterates over unresolved entries.
    pub fn unresolved(&self) -> impl Iterator<Item = (&str, UnresolvedReason)> {
        self.iter()
            .filter_map(|(name, resolution)| resolution.reason().map(|r| (name, r)))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, OrderResolution)> for MinOrderTable {
    fn from_iter<I: IntoIterator<Item = (String, OrderResolution)>>(iter: I) -> Self {
        let mut table = MinOrderTable::new();
        for (name, resolution) in iter {
            table.insert(name, resolution);
        }
        table
    }
}
