//! Evenly spaced sample grids.

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// `n == 1` yields `[start]`; `n == 0` yields nothing.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n as f64 - 1.0);
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        let g = linspace(0.0, 900.0, 10_000);
        assert_eq!(g.len(), 10_000);
        assert_eq!(g[0], 0.0);
        assert_eq!(g[9_999], 900.0);
        assert!(g.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(2.0, 2.0, 3), vec![2.0, 2.0, 2.0]);
    }
}
