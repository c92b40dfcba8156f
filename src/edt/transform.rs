//! Separable 2D squared Euclidean distance transform.
//!
//! The row pass resolves horizontal displacement; running it again on the
//! transposed grid resolves vertical displacement, with the intermediate
//! horizontal distances acting as parabola heights. Squared distance
//! accumulates additively across the two axes, so the composition equals
//! the true 2D transform.
use crate::edt::envelope::{row_envelope, EnvelopeMethod, EnvelopeScratch};
use crate::grid::Grid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Squared Euclidean distance from every cell to the nearest seed
/// (height-0 cell) of `seeds`. Cells of a grid without any seed stay
/// `+inf`.
pub fn squared_distance_transform(seeds: &Grid, method: EnvelopeMethod) -> Grid {
    let horizontal = row_pass(seeds, method);
    let transposed = horizontal.transposed();
    let vertical = row_pass(&transposed, method);
    vertical.transposed()
}

fn row_pass(src: &Grid, method: EnvelopeMethod) -> Grid {
    let mut out = Grid::new(src.w, src.h);
    if src.is_empty() {
        return out;
    }
    run_rows(src, &mut out, method);
    out
}

#[cfg(not(feature = "parallel"))]
fn run_rows(src: &Grid, out: &mut Grid, method: EnvelopeMethod) {
    let mut scratch = EnvelopeScratch::default();
    for y in 0..src.h {
        row_envelope(src.row(y), out.row_mut(y), method, &mut scratch);
    }
}

#[cfg(feature = "parallel")]
fn run_rows(src: &Grid, out: &mut Grid, method: EnvelopeMethod) {
    out.data
        .par_chunks_mut(out.stride)
        .zip(src.data.par_chunks(src.stride))
        .for_each_init(EnvelopeScratch::default, |scratch, (dst_row, src_row)| {
            row_envelope(src_row, dst_row, method, scratch);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::{BinaryMask, Polarity};

    const METHODS: [EnvelopeMethod; 2] = [EnvelopeMethod::BruteForce, EnvelopeMethod::Linear];

    /// The transform by definition: min over all seeds of the squared
    /// Euclidean distance.
    fn brute_force_2d(seeds: &Grid) -> Grid {
        let mut out = Grid::filled(seeds.w, seeds.h, f32::INFINITY);
        for y in 0..seeds.h {
            for x in 0..seeds.w {
                let mut best = f32::INFINITY;
                for sy in 0..seeds.h {
                    for sx in 0..seeds.w {
                        let dy = sy as f32 - y as f32;
                        let dx = sx as f32 - x as f32;
                        best = best.min(seeds.get(sx, sy) + dy * dy + dx * dx);
                    }
                }
                out.set(x, y, best);
            }
        }
        out
    }

    fn seeds_from_cells(w: usize, h: usize, cells: &[(usize, usize)]) -> Grid {
        let mut g = Grid::filled(w, h, f32::INFINITY);
        for &(x, y) in cells {
            g.set(x, y, 0.0);
        }
        g
    }

    #[test]
    fn matches_brute_force_definition_on_small_grids() {
        let patterns: Vec<Grid> = vec![
            seeds_from_cells(5, 5, &[(2, 2)]),
            seeds_from_cells(5, 5, &[(0, 0), (4, 4)]),
            seeds_from_cells(5, 5, &[(0, 2), (2, 0), (4, 2), (2, 4)]),
            seeds_from_cells(5, 5, &[]),
            seeds_from_cells(7, 3, &[(6, 0), (1, 2)]),
        ];
        for seeds in &patterns {
            let expected = brute_force_2d(seeds);
            for method in METHODS {
                let got = squared_distance_transform(seeds, method);
                assert_eq!(got, expected, "{method:?}");
            }
        }
    }

    #[test]
    fn seed_cells_have_zero_distance() {
        let cells = [(0, 0), (3, 1), (2, 4)];
        let seeds = seeds_from_cells(5, 5, &cells);
        let dist = squared_distance_transform(&seeds, EnvelopeMethod::BruteForce);
        for (x, y) in cells {
            assert_eq!(dist.get(x, y), 0.0, "seed at ({x}, {y})");
        }
    }

    #[test]
    fn symmetric_input_gives_symmetric_output() {
        let seeds = seeds_from_cells(7, 7, &[(3, 3), (1, 1), (5, 5), (5, 1), (1, 5)]);
        let dist = squared_distance_transform(&seeds, EnvelopeMethod::BruteForce);
        for y in 0..7 {
            for x in 0..7 {
                assert_eq!(dist.get(x, y), dist.get(6 - x, y), "left-right mirror");
                assert_eq!(dist.get(x, y), dist.get(x, 6 - y), "top-bottom mirror");
            }
        }
    }

    #[test]
    fn distance_grows_monotonically_away_from_a_seed() {
        let seeds = seeds_from_cells(9, 9, &[(4, 4)]);
        let dist = squared_distance_transform(&seeds, EnvelopeMethod::Linear);
        // Stepping outward along any ray never decreases the value.
        for y in 0..9usize {
            for x in 0..9usize {
                let toward_x = if x < 4 { x + 1 } else { x.saturating_sub(1) };
                let toward_y = if y < 4 { y + 1 } else { y.saturating_sub(1) };
                if x != 4 {
                    assert!(dist.get(x, y) >= dist.get(toward_x, y));
                }
                if y != 4 {
                    assert!(dist.get(x, y) >= dist.get(x, toward_y));
                }
            }
        }
    }

    #[test]
    fn corner_seed_recovers_euclidean_distance() {
        let n = 8;
        let seeds = seeds_from_cells(n, n, &[(0, 0)]);
        for method in METHODS {
            let dist = squared_distance_transform(&seeds, method);
            for y in 0..n {
                for x in 0..n {
                    let expected = ((y * y + x * x) as f32).sqrt();
                    let got = dist.get(x, y).sqrt();
                    assert!(
                        (got - expected).abs() < 1e-4,
                        "{method:?}: ({x}, {y}): {got} vs {expected}"
                    );
                }
            }
        }
    }

    #[test]
    fn center_cell_example() {
        // Foreground = center cell of a 3x3 grid.
        let mask = BinaryMask::from_fn(3, 3, |x, y| x == 1 && y == 1);

        let from_fg = squared_distance_transform(
            &mask.seed_grid(Polarity::Foreground),
            EnvelopeMethod::BruteForce,
        );
        assert_eq!(from_fg.get(1, 1), 0.0);
        for (x, y) in [(1, 0), (0, 1), (2, 1), (1, 2)] {
            assert_eq!(from_fg.get(x, y), 1.0, "edge-adjacent ({x}, {y})");
        }
        for (x, y) in [(0, 0), (2, 0), (0, 2), (2, 2)] {
            assert_eq!(from_fg.get(x, y), 2.0, "corner ({x}, {y})");
        }

        let from_bg = squared_distance_transform(
            &mask.seed_grid(Polarity::Background),
            EnvelopeMethod::BruteForce,
        );
        assert_eq!(from_bg.get(1, 1), 1.0);
        for y in 0..3 {
            for x in 0..3 {
                if (x, y) != (1, 1) {
                    assert_eq!(from_bg.get(x, y), 0.0);
                }
            }
        }
    }
}
