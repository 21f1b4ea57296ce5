use image::Rgba;

/// Lit une couleur canvas `#rrggbb` ou `#rrggbbaa`.
pub fn parse_canvas_color(s: &str) -> Option<Rgba<u8>> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

    match hex.len() {
        6 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, 0xff])),
        8 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
        _ => None,
    }
}
