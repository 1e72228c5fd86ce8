/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Uniform coordinate grids

/// Uniform partition of `[start, end]` with `n` points, both end points included
///
/// `n == 1` yields `[start]` and `n == 0` yields an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
