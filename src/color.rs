use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// formatted as `#rrggbb`.
pub fn generate_palette(n: usize) -> Vec<String> {
    (0..n).map(|i| palette_color(i, n)).collect()
}

/// The `index`-th of `n` evenly spaced hues.
pub fn palette_color(index: usize, n: usize) -> String {
    let hue = (index as f32 / n.max(1) as f32) * 360.0;
    let hsl: Hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    format!(
        "#{:02x}{:02x}{:02x}",
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_size_and_format() {
        let colors = generate_palette(4);
        assert_eq!(colors.len(), 4);
        for c in &colors {
            assert_eq!(c.len(), 7);
            assert!(c.starts_with('#'));
            assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_palette_is_distinct_and_deterministic() {
        let a = generate_palette(3);
        let b = generate_palette(3);
        assert_eq!(a, b);
        assert_ne!(a[0], a[1]);
        assert_ne!(a[1], a[2]);
    }

    #[test]
    fn test_empty_palette() {
        assert!(generate_palette(0).is_empty());
    }
}
