use crate::error::{Error, Result};

#[inline]
pub(crate) fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Index of the nearest centroid; ties go to the lowest index.
#[inline]
pub(crate) fn nearest(point: &[f64], centroids: &[Vec<f64>]) -> (usize, f64) {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (c, centroid) in centroids.iter().enumerate() {
        let d = squared_euclidean(point, centroid);
        if d < best_dist {
            best = c;
            best_dist = d;
        }
    }
    (best, best_dist)
}

/// Check that every point has the same, non-zero dimension and only finite
/// coordinates. Returns the dimension.
pub(crate) fn validate_points(data: &[Vec<f64>]) -> Result<usize> {
    let Some(first) = data.first() else {
        return Err(Error::EmptyInput);
    };
    let d = first.len();
    if d == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be at least 1",
        });
    }
    for (row, point) in data.iter().enumerate() {
        if point.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: point.len(),
            });
        }
        if let Some(col) = point.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonFiniteEntry { row, col });
        }
    }
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_tie_goes_low() {
        let centroids = vec![vec![1.0], vec![-1.0]];
        assert_eq!(nearest(&[0.0], &centroids).0, 0);
        assert_eq!(nearest(&[-0.5], &centroids), (1, 0.25));
    }

    #[test]
    fn test_validate_points() {
        assert!(matches!(validate_points(&[]), Err(Error::EmptyInput)));
        assert!(matches!(
            validate_points(&[vec![0.0, 1.0], vec![0.0]]),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            validate_points(&[vec![0.0, 1.0], vec![0.0, f64::INFINITY]]),
            Err(Error::NonFiniteEntry { row: 1, col: 1 })
        ));
        assert_eq!(validate_points(&[vec![0.0, 1.0]]).unwrap(), 2);
    }
}
