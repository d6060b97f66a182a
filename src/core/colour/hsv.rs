use crate::core::data::colour::Colour;

fn channel(value: f64) -> u8 {
    (value * 255.0) as u8
}

/// HSV to RGB with `h`, `s` and `v` in `[0, 1]`.
///
/// `h = 1` wraps to red. Alpha is always opaque.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Colour {
    if s <= 0.0 {
        let grey = channel(v);
        return Colour::opaque(grey, grey, grey);
    }

    let mut hh = h * 360.0;
    if hh >= 360.0 {
        hh = 0.0;
    }
    hh /= 60.0;

    let sector = hh.floor();
    let ff = hh - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * ff);
    let t = v * (1.0 - s * (1.0 - ff));

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Colour::opaque(channel(r), channel(g), channel(b))
}
