//! Integer grid enumeration for the regular sampler.
//!
//! [`GridIndices`] walks every tuple in `[0, resolution)^dim` as a
//! mixed-radix odometer: the last coordinate varies fastest and the first
//! slowest, which is lexicographic order over the tuples. No recursion, so
//! high-dimensional grids cost nothing extra in stack depth.

use std::iter::FusedIterator;

use crate::error::GridError;

/// Number of tuples in a `resolution^dim` grid, or `None` on overflow.
fn grid_size(dim: usize, resolution: usize) -> Option<usize> {
    match resolution {
        0 => Some(0),
        1 => Some(1),
        _ => resolution.checked_pow(u32::try_from(dim).ok()?),
    }
}

/// Largest `r` with `r^dims <= count`: the number of grid steps per
/// dimension the regular sampler uses for a target of `count` points.
///
/// This is the exact integer floor of the `dims`-th root, so the delivered
/// `r^dims` never exceeds `count` and is usually smaller (e.g. a target of
/// 100 points on a 3-parameter embedding gives `r = 4`, 64 points).
/// Returns `0` when `count == 0` or `dims == 0`.
#[must_use]
pub fn grid_resolution(count: usize, dims: usize) -> usize {
    if count == 0 || dims == 0 {
        return 0;
    }
    if dims == 1 {
        return count;
    }
    let Ok(exp) = u32::try_from(dims) else {
        return 1;
    };
    let fits = |r: usize| r.checked_pow(exp).is_some_and(|p| p <= count);

    // Float root as a starting guess, then correct rounding either way.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let mut r = (count as f64).powf(1.0 / dims as f64).floor() as usize;
    while r > 0 && !fits(r) {
        r -= 1;
    }
    while fits(r + 1) {
        r += 1;
    }
    r
}

/// Enumerate every integer tuple in `[0, resolution)^dim` in lexicographic
/// order, first index varying slowest.
///
/// ```
/// use cloudgen_sampler::grid::enumerate_grid;
///
/// let tuples: Vec<Vec<usize>> = enumerate_grid(2, 2).unwrap().collect();
/// assert_eq!(tuples, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
///
/// # Errors
///
/// Returns [`GridError::ZeroDimension`] if `dim == 0` and
/// [`GridError::TooLarge`] if `resolution^dim` does not fit in `usize`.
/// `resolution == 0` is valid and yields nothing.
pub fn enumerate_grid(dim: usize, resolution: usize) -> Result<GridIndices, GridError> {
    if dim == 0 {
        return Err(GridError::ZeroDimension);
    }
    let total = grid_size(dim, resolution).ok_or(GridError::TooLarge { dim, resolution })?;
    Ok(GridIndices {
        resolution,
        current: vec![0; dim],
        remaining: total,
    })
}

/// Iterator over grid index tuples. Built by [`enumerate_grid`].
#[derive(Debug, Clone)]
pub struct GridIndices {
    resolution: usize,
    current: Vec<usize>,
    remaining: usize,
}

impl GridIndices {
    /// Tuple width.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.current.len()
    }

    #[must_use]
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// Step the odometer by one, carrying into slower digits.
    fn advance(&mut self) {
        for digit in self.current.iter_mut().rev() {
            *digit += 1;
            if *digit < self.resolution {
                return;
            }
            *digit = 0;
        }
    }
}

impl Iterator for GridIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.remaining == 0 {
            return None;
        }
        let out = self.current.clone();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for GridIndices {}

impl FusedIterator for GridIndices {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
