/// Computes the mean bearing of a set of bearings, in degrees `[0, 360)`.
///
/// Angles cannot be averaged arithmetically across the 0°/360° seam (the mean of 350°
/// and 10° is 0°, not 180°), so each sample is treated as a unit vector: the sines and
/// cosines are summed and the result is `atan2(Σsin, Σcos)` converted back to degrees.
///
/// Samples are reduced modulo 360 first, so bearings that only differ by whole turns
/// produce identical results. An empty input yields `0.0`, which reads as calm.
///
/// # Examples
///
/// ```
/// use dmi::aggregation::circular_mean;
///
/// let mean = circular_mean(&[350.0, 10.0]);
/// assert!(mean < 1e-9 || 360.0 - mean < 1e-9);
/// assert_eq!(circular_mean(&[]), 0.0);
/// ```
pub fn circular_mean(bearings: &[f64]) -> f64 {
    if bearings.is_empty() {
        return 0.0;
    }

    let (sum_sin, sum_cos) = bearings.iter().fold((0.0_f64, 0.0_f64), |(s, c), bearing| {
        let radians = bearing.rem_euclid(360.0).to_radians();
        (s + radians.sin(), c + radians.cos())
    });

    let degrees = sum_sin.atan2(sum_cos).to_degrees();
    (degrees + 360.0) % 360.0
}
