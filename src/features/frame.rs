//! Feature frame: named columns aligned to candle indices

use std::collections::BTreeMap;

/// One row of features: name → value, undefined entries omitted.
pub type FeatureVector = BTreeMap<String, f64>;

/// Named feature columns aligned to candle indices.
///
/// `None` in a column means the feature's lookback window exceeded the
/// available history at that index. Undefined values propagate; they are
/// filtered by discarding startup rows, never raised as errors.
#[derive(Debug, Clone, Default)]
pub struct FeatureFrame {
    len: usize,
    columns: BTreeMap<String, Vec<Option<f64>>>,
}

impl FeatureFrame {
    /// Create an empty frame for `len` candle indices
    pub fn new(len: usize) -> Self {
        Self {
            len,
            columns: BTreeMap::new(),
        }
    }

    /// Number of rows (candle indices)
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the frame has no rows
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a column; its length must match the frame
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<Option<f64>>) {
        let name = name.into();
        debug_assert_eq!(values.len(), self.len, "column {name} length mismatch");
        self.columns.insert(name, values);
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    /// Feature names, in deterministic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|s| s.as_str())
    }

    /// Number of feature columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Extract the feature vector at index `t`, omitting undefined entries
    pub fn row(&self, t: usize) -> FeatureVector {
        self.columns
            .iter()
            .filter_map(|(name, col)| col.get(t).copied().flatten().map(|v| (name.clone(), v)))
            .collect()
    }

    /// First index at which every column is defined, if any
    pub fn first_complete_row(&self) -> Option<usize> {
        (0..self.len).find(|&t| {
            self.columns
                .values()
                .all(|col| col[t].is_some())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_omits_undefined() {
        let mut frame = FeatureFrame::new(3);
        frame.insert("a", vec![None, Some(1.0), Some(2.0)]);
        frame.insert("b", vec![Some(5.0), Some(6.0), Some(7.0)]);

        let row0 = frame.row(0);
        assert_eq!(row0.len(), 1);
        assert_eq!(row0.get("b"), Some(&5.0));

        let row1 = frame.row(1);
        assert_eq!(row1.len(), 2);
        assert_eq!(row1.get("a"), Some(&1.0));
    }

    #[test]
    fn test_first_complete_row() {
        let mut frame = FeatureFrame::new(3);
        frame.insert("a", vec![None, Some(1.0), Some(2.0)]);
        frame.insert("b", vec![Some(5.0), Some(6.0), Some(7.0)]);

        assert_eq!(frame.first_complete_row(), Some(1));
    }
}
