use glam::Vec4;

/// Parse `#rrggbb` / `#rgb` into linear-ish RGBA floats (alpha 1).
///
/// Returns `None` for anything else; callers fall back to white.
pub fn parse_hex(hex: &str) -> Option<Vec4> {
    let digits = hex.strip_prefix('#').filter(|d| d.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
    match digits.len() {
        6 => Some(Vec4::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
            1.0,
        )),
        3 => {
            let expand = |i: usize| {
                let c = &digits[i..i + 1];
                channel(&format!("{c}{c}"))
            };
            Some(Vec4::new(expand(0)?, expand(1)?, expand(2)?, 1.0))
        }
        _ => None,
    }
}

#[inline]
pub fn hex_or_white(hex: &str) -> Vec4 {
    parse_hex(hex).unwrap_or(Vec4::ONE)
}

/// HSL (all in 0..1) to RGBA with alpha 1.
pub fn hsl(h: f32, s: f32, l: f32) -> Vec4 {
    if s <= 0.0 {
        return Vec4::new(l, l, l, 1.0);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hue = |mut t: f32| {
        t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };
    Vec4::new(hue(h + 1.0 / 3.0), hue(h), hue(h - 1.0 / 3.0), 1.0)
}
