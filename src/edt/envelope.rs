//! Row lower-envelope transform.
//!
//! Each seed at column `px` with height `h` defines an upward parabola
//! `f(x) = h + (px - x)^2`. The squared distance along the row to the
//! nearest seed is the pointwise minimum (lower envelope) of all such
//! parabolas. A `+inf` height means "no seed here": it survives addition
//! of any finite squared offset and is never selected over a finite
//! candidate, so a seedless row comes out all-`+inf` and the column pass
//! accepts such rows unchanged in meaning.
use serde::Deserialize;

/// Selects the 1D envelope implementation. Both variants produce the same
/// output up to floating-point rounding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnvelopeMethod {
    /// Direct minimum over every candidate parabola, O(n²) per row.
    #[default]
    BruteForce,
    /// Monotonic parabola stack (Felzenszwalb & Huttenlocher), O(n) per row.
    Linear,
}

/// Reusable scratch buffers for [`EnvelopeMethod::Linear`].
#[derive(Clone, Debug, Default)]
pub struct EnvelopeScratch {
    /// Columns of the parabolas currently on the envelope.
    locations: Vec<usize>,
    /// `locations[i]` has the least value on `[boundaries[i], boundaries[i+1])`.
    boundaries: Vec<f64>,
}

#[inline]
fn parabola(height: f32, px: usize, x: usize) -> f32 {
    let d = px as f32 - x as f32;
    d * d + height
}

/// Write the lower envelope of `src` into `dst`.
pub fn row_envelope(
    src: &[f32],
    dst: &mut [f32],
    method: EnvelopeMethod,
    scratch: &mut EnvelopeScratch,
) {
    debug_assert_eq!(src.len(), dst.len());
    match method {
        EnvelopeMethod::BruteForce => envelope_brute_force(src, dst),
        EnvelopeMethod::Linear => envelope_linear(src, dst, scratch),
    }
}

fn envelope_brute_force(src: &[f32], dst: &mut [f32]) {
    for (x, out) in dst.iter_mut().enumerate() {
        let mut best = src[x];
        for (px, &height) in src.iter().enumerate() {
            best = best.min(parabola(height, px, x));
        }
        *out = best;
    }
}

fn envelope_linear(src: &[f32], dst: &mut [f32], scratch: &mut EnvelopeScratch) {
    let n = src.len();
    if n == 0 {
        return;
    }
    let locations = &mut scratch.locations;
    let boundaries = &mut scratch.boundaries;
    locations.resize(n, 0);
    boundaries.resize(n + 1, 0.0);

    // Index of the rightmost parabola on the envelope.
    let mut k = 0usize;
    locations[0] = 0;
    boundaries[0] = f64::NEG_INFINITY;
    boundaries[1] = f64::INFINITY;

    for q in 1..n {
        if src[q].is_infinite() {
            continue;
        }
        // A placeholder infinite-height parabola loses to any finite one.
        if k == 0 && src[locations[0]].is_infinite() {
            locations[0] = q;
            continue;
        }
        let mut s = intersection(src, locations[k], q);
        while s <= boundaries[k] {
            k -= 1;
            s = intersection(src, locations[k], q);
        }
        k += 1;
        locations[k] = q;
        boundaries[k] = s;
        boundaries[k + 1] = f64::INFINITY;
    }

    let mut k = 0usize;
    for (x, out) in dst.iter_mut().enumerate() {
        while boundaries[k + 1] < x as f64 {
            k += 1;
        }
        let px = locations[k];
        *out = parabola(src[px], px, x);
    }
}

/// Abscissa where the parabolas rooted at `p` and `q` intersect.
fn intersection(heights: &[f32], p: usize, q: usize) -> f64 {
    let fp = heights[p] as f64;
    let fq = heights[q] as f64;
    let (p, q) = (p as f64, q as f64);
    ((fq + q * q) - (fp + p * p)) / (2.0 * q - 2.0 * p)
}
