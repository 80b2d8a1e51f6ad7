use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed series colours
// ---------------------------------------------------------------------------

pub const T1_COLOR: Color32 = Color32::from_rgb(31, 90, 230);
pub const T2_COLOR: Color32 = Color32::from_rgb(220, 40, 40);
pub const RATIO_COLOR: Color32 = Color32::from_rgb(30, 150, 60);
pub const MEAN_LINE_COLOR: Color32 = Color32::from_rgb(220, 40, 40);

/// Colours for the first files in the comparison view: blue, red, green, purple.
const FILE_COLORS: [Color32; 4] = [
    Color32::from_rgb(31, 90, 230),
    Color32::from_rgb(220, 40, 40),
    Color32::from_rgb(30, 150, 60),
    Color32::from_rgb(128, 50, 160),
];

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// One colour per compared file.
///
/// Up to four files get the fixed colours; beyond that the whole set is
/// drawn from an evenly spaced palette so no two files share a colour.
pub fn file_colors(n: usize) -> Vec<Color32> {
    if n <= FILE_COLORS.len() {
        FILE_COLORS[..n].to_vec()
    } else {
        generate_palette(n)
    }
}
