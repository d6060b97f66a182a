use crate::core::data::colour::Colour;

const HUE_THIRD: f64 = 0.33333;
const HUE_TWO_THIRDS: f64 = 0.66666;

// Channels pass through a whole-percent stage before being scaled to 0..=255.
fn percent(value: f64) -> u8 {
    (value * 100.0) as u8
}

fn rescale(percent: u8) -> u8 {
    (f64::from(percent) / 100.0 * 255.0) as u8
}

fn hue_channel(temp1: f64, temp2: f64, temp3: f64) -> u8 {
    let value = if temp3 * 6.0 < 1.0 {
        temp2 + (temp1 - temp2) * 6.0 * temp3
    } else if temp3 * 2.0 < 1.0 {
        temp1
    } else if temp3 * 3.0 < 2.0 {
        temp2 + (temp1 - temp2) * (HUE_TWO_THIRDS - temp3) * 6.0
    } else {
        temp2
    };

    percent(value)
}

/// HSL to RGB with `h`, `s` and `l` in `[0, 1]`. Alpha is always opaque.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Colour {
    let (r, g, b) = if s <= 0.0 {
        let grey = percent(l);
        (grey, grey, grey)
    } else {
        let temp1 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let temp2 = 2.0 * l - temp1;

        let mut red = h + HUE_THIRD;
        if red > 1.0 {
            red -= 1.0;
        }
        let mut blue = h - HUE_THIRD;
        if blue < 0.0 {
            blue += 1.0;
        }

        (
            hue_channel(temp1, temp2, red),
            hue_channel(temp1, temp2, h),
            hue_channel(temp1, temp2, blue),
        )
    };

    Colour::opaque(rescale(r), rescale(g), rescale(b))
}
