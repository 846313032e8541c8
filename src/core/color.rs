/// HSL to RGB with the CSS convention: hue wraps around the unit interval,
/// saturation and lightness are clamped. All channels in \[0, 1\].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h - h.floor();
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

// The ramp arms can land a rounding error above 1.0, so the result is
// clamped to keep the channel contract exact.
fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t - t.floor();
    let c = if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    };
    c.clamp(0.0, 1.0)
}
