//! Built-in font metrics for the formpdf crate.
//!
//! Documents use the standard Type1 Helvetica face, which every PDF viewer
//! ships with, so no font files are embedded or looked up on disk.  Glyph
//! advances below come from the Adobe Helvetica AFM and are expressed in
//! thousandths of an em.

/// Millimetres per PostScript point.
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Resource name used for the body font inside page resource dictionaries.
pub const BODY_FONT_RESOURCE: &str = "F1";

/// Base font name written to the font dictionary.
pub const BODY_FONT_NAME: &str = "Helvetica";

/// Ascender height of Helvetica in thousandths of an em.
const ASCENT_UNITS: f64 = 718.0;

/// Advance used for characters outside the printable ASCII table.
const FALLBACK_WIDTH: u16 = 556;

/// Advances for U+0020 through U+007E.
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Returns the advance of `c` in thousandths of an em.
pub fn char_width_units(c: char) -> u16 {
    match c as u32 {
        code @ 0x20..=0x7e => ASCII_WIDTHS[(code - 0x20) as usize],
        _ => FALLBACK_WIDTH,
    }
}

/// Converts a font size in points to millimetres.
pub fn pt_to_mm(size: f64) -> f64 {
    size * MM_PER_PT
}

/// Width of `text` in millimetres when set at `font_size` points.
pub fn text_width(text: &str, font_size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(char_width_units(c))).sum();
    f64::from(units) / 1000.0 * pt_to_mm(font_size)
}

/// Distance from the top of a line box to the baseline, in millimetres.
pub fn ascent(font_size: f64) -> f64 {
    ASCENT_UNITS / 1000.0 * pt_to_mm(font_size)
}

/// Encodes `text` for a WinAnsi-encoded simple font.
///
/// Latin-1 characters map to their own byte.  Characters the encoding cannot
/// express, including the C1 control range, are replaced with `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            code @ (0x20..=0x7e | 0xa0..=0xff) => code as u8,
            _ => b'?',
        })
        .collect()
}
