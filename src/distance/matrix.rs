//! Dense distance matrix.

use super::metric::{City, EdgeWeightType};
use crate::error::{Result, TspError};

/// Cost stored on the diagonal of coordinate-built matrices.
///
/// A tour never hops from a city to itself, so this value is never summed.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// A dense n×n cost matrix stored in row-major order.
///
/// Symmetric for coordinate-based (`TSP`) instances; explicit matrices may
/// be asymmetric (`ATSP`). Built once per run and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use u_tspga::distance::{City, DistanceMatrix, EdgeWeightType};
///
/// let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0), City::new(6.0, 8.0)];
/// let dm = DistanceMatrix::from_coordinates(&cities, &EdgeWeightType::Euc2d).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the matrix from city coordinates.
    ///
    /// Every off-diagonal pair `(i, j)` gets the cost given by
    /// `edge_weight_type`; diagonal entries hold [`UNREACHABLE`].
    ///
    /// # Errors
    /// [`TspError::MalformedInput`] if `edge_weight_type` is not a
    /// coordinate-based type.
    pub fn from_coordinates(cities: &[City], edge_weight_type: &EdgeWeightType) -> Result<Self> {
        if !matches!(edge_weight_type, EdgeWeightType::Euc2d | EdgeWeightType::Att) {
            return Err(TspError::malformed(format!(
                "edge weight type {edge_weight_type} cannot be computed from coordinates"
            )));
        }

        let n = cities.len();
        let mut data = vec![UNREACHABLE; entry_count(n)?];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                if let Some(d) = edge_weight_type.distance(&cities[i], &cities[j]) {
                    data[i * n + j] = d;
                }
            }
        }
        Ok(Self { data, size: n })
    }

    /// Accepts an explicit `size × size` matrix verbatim.
    ///
    /// # Errors
    /// [`TspError::MalformedInput`] if the row count or any row length
    /// differs from `size`.
    pub fn from_rows(size: usize, rows: &[Vec<f64>]) -> Result<Self> {
        if rows.len() != size {
            return Err(TspError::malformed(format!(
                "expected {size} matrix rows, got {}",
                rows.len()
            )));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(TspError::malformed(format!(
                "matrix row {i} has {} entries, expected {size}",
                row.len()
            )));
        }
        Ok(Self { data: rows.concat(), size })
    }

    /// Accepts an explicit matrix given as a flat row-major slice.
    ///
    /// # Errors
    /// [`TspError::MalformedInput`] if `data.len() != size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        let expected = entry_count(size)?;
        if data.len() != expected {
            return Err(TspError::malformed(format!(
                "expected {expected} matrix entries for dimension {size}, got {}",
                data.len()
            )));
        }
        Ok(Self { data, size })
    }

    /// Returns the cost of travelling from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if off-diagonal costs are symmetric within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Length of the closed tour `path`, including the edge from the last
    /// city back to the first.
    ///
    /// An empty path has length 0.
    pub fn tour_length(&self, path: &[usize]) -> f64 {
        match (path.first(), path.last()) {
            (Some(&first), Some(&last)) if path.len() > 1 => {
                let open: f64 = path.windows(2).map(|w| self.get(w[0], w[1])).sum();
                open + self.get(last, first)
            }
            _ => 0.0,
        }
    }
}

/// `size²`, or an error when it does not fit in `usize`.
fn entry_count(size: usize) -> Result<usize> {
    size.checked_mul(size)
        .ok_or_else(|| TspError::malformed(format!("dimension {size} is too large")))
}
