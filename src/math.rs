//! Color math: direct conversions without external dependencies.
//! Hue is in degrees (0.0–360.0), everything else in 0.0–1.0.

/// HSV → RGB. Returns components in 0.0–1.0.
pub(crate) fn hsv_to_rgb(hue: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (hue / 60.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSV. Takes components in 0.0–1.0, returns (hue in degrees, s, v).
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (h * 60.0, s, v)
}

/// Round to the nearest 1 / `steps`.
pub(crate) fn quantize(fraction: f64, steps: f64) -> f64 {
    (fraction * steps).round() / steps
}

/// Normalized channel → 0–255.
pub(crate) fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
