//! Variable order tracking for column swaps

/// Permutation recording which original variable occupies each column.
///
/// Position `p` holds the original index of the variable currently stored in
/// column `p` of the working matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableOrder {
    order: Vec<usize>,
}

impl VariableOrder {
    /// The identity permutation of size `n`
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Number of variables tracked
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` for a system without unknowns
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Original variable index at column `position`
    pub fn get(&self, position: usize) -> usize {
        self.order[position]
    }

    /// Exchange the variables held by two columns
    pub fn swap(&mut self, a: usize, b: usize) {
        self.order.swap(a, b);
    }

    /// Original variable index held by each column position
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Check that every index of `0..len` appears exactly once
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.order.len()];
        for &v in &self.order {
            if v >= seen.len() || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }

    /// Human-readable name of the variable in column `position` (`x1`, `x2`, ...)
    pub fn label(&self, position: usize) -> String {
        format!("x{}", self.order[position] + 1)
    }
}
