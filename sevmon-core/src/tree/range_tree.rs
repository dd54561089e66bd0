use crate::tree::Aggregate;

/// Segment tree over the dense index domain `[0, len)`.
///
/// Nodes live in one flat vector: node `k` covers `[start, end]` and its
/// children `2k + 1` / `2k + 2` cover the halves split at
/// `start + (end - start) / 2`. Capacity is fixed at construction.
#[derive(Debug, Clone)]
pub struct RangeAggregateTree {
    len: usize,
    nodes: Vec<Aggregate>,
}

impl RangeAggregateTree {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            // 4n nodes always cover a recursively halved domain; keep one
            // slot so the root exists even for an empty domain.
            nodes: vec![Aggregate::EMPTY; (4 * len).max(1)],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Aggregate over the whole domain.
    pub fn total(&self) -> Aggregate {
        self.nodes[0]
    }

    /// Folds `value` into the leaf at `index`. Repeated updates at the same
    /// index accumulate.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`. Indices come from the timestamp index, so an
    /// out-of-range value is a bug, not bad input.
    pub fn update(&mut self, index: usize, value: f64) {
        assert!(
            index < self.len,
            "index {index} out of range for tree of {} leaves",
            self.len
        );
        self.update_node(0, 0, self.len - 1, index, value);
    }

    fn update_node(&mut self, node: usize, start: usize, end: usize, index: usize, value: f64) {
        if start == end {
            self.nodes[node] = self.nodes[node].merge(&Aggregate::single(value));
            return;
        }

        let mid = start + (end - start) / 2;
        let (left, right) = (2 * node + 1, 2 * node + 2);
        if index <= mid {
            self.update_node(left, start, mid, index, value);
        } else {
            self.update_node(right, mid + 1, end, index, value);
        }

        self.nodes[node] = self.nodes[left].merge(&self.nodes[right]);
    }

    /// Aggregate over the inclusive range `[left, right]`.
    ///
    /// An inverted range, a range starting past the end, or any query on an
    /// empty tree yields [`Aggregate::EMPTY`]. `right` is clamped to the last
    /// index.
    pub fn query(&self, left: usize, right: usize) -> Aggregate {
        if self.len == 0 || left > right || left >= self.len {
            return Aggregate::EMPTY;
        }

        let right = right.min(self.len - 1);
        self.query_node(0, 0, self.len - 1, left, right)
    }

    fn query_node(&self, node: usize, start: usize, end: usize, left: usize, right: usize) -> Aggregate {
        // no overlap
        if start > right || end < left {
            return Aggregate::EMPTY;
        }

        // total overlap
        if left <= start && end <= right {
            return self.nodes[node];
        }

        let mid = start + (end - start) / 2;
        let lower = self.query_node(2 * node + 1, start, mid, left, right);
        let upper = self.query_node(2 * node + 2, mid + 1, end, left, right);
        lower.merge(&upper)
    }
}
