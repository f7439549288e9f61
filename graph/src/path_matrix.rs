use data_structure::BitVec;

use crate::{
    error::{Endpoint, GraphError, Result},
    matrix::fmt_bit_rows,
};

/// Reachability between every ordered pair of vertices.
///
/// Cell `(i, j)` holds the number of walks from `i` to `j` whose length is
/// between 1 and n, the vertex count. Walks are counted with saturating
/// arithmetic, so a nonzero count never wraps back to zero. A vertex is
/// reachable from itself only when it lies on a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatrix {
    names: Vec<String>,
    walks: Vec<Vec<u64>>,
    reachable: Vec<BitVec>,
}

impl PathMatrix {
    /// Sums the powers `A^1..=A^n` of the adjacency matrix, then thresholds.
    ///
    /// This takes n - 1 dense multiplications, one more than the longest
    /// simple path needs.
    pub(crate) fn compute(names: Vec<String>, adjacency: &[BitVec]) -> Self {
        let n = names.len();
        let base: Vec<Vec<u64>> = adjacency
            .iter()
            .map(|row| row.iter().by_vals().map(u64::from).collect())
            .collect();

        let mut power = base.clone();
        let mut walks = base.clone();
        for length in 2..=n {
            power = multiply(&power, &base);
            for (sum_row, power_row) in walks.iter_mut().zip(&power) {
                for (sum, count) in sum_row.iter_mut().zip(power_row) {
                    *sum = sum.saturating_add(*count);
                }
            }
            tracing::trace!(length, "accumulated walks");
        }

        let reachable = walks
            .iter()
            .map(|row| row.iter().map(|count| *count != 0).collect())
            .collect();
        Self {
            names,
            walks,
            reachable,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn rows(&self) -> &[BitVec] {
        &self.reachable
    }

    /// The accumulated walk counts before thresholding.
    pub fn walk_counts(&self) -> &[Vec<u64>] {
        &self.walks
    }

    pub fn is_reachable(&self, start: &str, end: &str) -> Result<bool> {
        let (i, j) = self.position_pair(start, end)?;
        Ok(self.reachable[i][j])
    }

    pub fn walk_count(&self, start: &str, end: &str) -> Result<u64> {
        let (i, j) = self.position_pair(start, end)?;
        Ok(self.walks[i][j])
    }

    fn position_pair(&self, start: &str, end: &str) -> Result<(usize, usize)> {
        let position = |name: &str, endpoint| {
            self.names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| GraphError::unknown(name, endpoint))
        };
        Ok((position(start, Endpoint::Start)?, position(end, Endpoint::End)?))
    }
}

fn multiply(lhs: &[Vec<u64>], rhs: &[Vec<u64>]) -> Vec<Vec<u64>> {
    let n = rhs.len();
    lhs.iter()
        .map(|row| {
            (0..n)
                .map(|j| {
                    row.iter()
                        .zip(rhs)
                        .fold(0u64, |acc, (a, rhs_row)| {
                            acc.saturating_add(a.saturating_mul(rhs_row[j]))
                        })
                })
                .collect()
        })
        .collect()
}

impl std::fmt::Display for PathMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_bit_rows(f, &self.reachable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(rows: &[&[u8]]) -> Vec<BitVec> {
        rows.iter()
            .map(|row| row.iter().map(|cell| *cell != 0).collect())
            .collect()
    }

    #[test]
    fn test_walk_counts_of_a_chain() {
        let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let matrix = PathMatrix::compute(names, &bits(&[&[0, 1, 0], &[0, 0, 1], &[0, 0, 0]]));
        assert_eq!(
            matrix.walk_counts(),
            &[vec![0, 1, 1], vec![0, 0, 1], vec![0, 0, 0]]
        );
        assert_eq!(matrix.is_reachable("a", "c"), Ok(true));
        assert_eq!(matrix.is_reachable("c", "a"), Ok(false));
        assert_eq!(matrix.to_string(), "0 1 1\n0 0 1\n0 0 0\n");
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = PathMatrix::compute(Vec::new(), &[]);
        assert!(matrix.rows().is_empty());
        assert_eq!(matrix.to_string(), "");
    }

    #[test]
    fn test_counts_saturate_instead_of_wrapping() {
        let big = vec![vec![u64::MAX, u64::MAX], vec![u64::MAX, 1]];
        let product = multiply(&big, &big);
        assert_eq!(product[0][0], u64::MAX);
        assert_eq!(product[1][1], u64::MAX);
    }
}
