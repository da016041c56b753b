// ============================================================================
// Embedded 5x7 bitmap font for axis labels
// ============================================================================

/// Each glyph: 7 rows, each row's lower 5 bits = pixels (MSB=left).
pub const GLYPH_W: usize = 5;
pub const GLYPH_H: usize = 7;

/// Horizontal advance per character (glyph plus one column of spacing).
pub const ADVANCE: usize = GLYPH_W + 1;

#[rustfmt::skip]
const DIGITS: [[u8; GLYPH_H]; 10] = [
    [0x0E,0x11,0x13,0x15,0x19,0x11,0x0E], // '0'
    [0x04,0x0C,0x04,0x04,0x04,0x04,0x0E], // '1'
    [0x0E,0x11,0x01,0x02,0x04,0x08,0x1F], // '2'
    [0x1F,0x02,0x04,0x02,0x01,0x11,0x0E], // '3'
    [0x02,0x06,0x0A,0x12,0x1F,0x02,0x02], // '4'
    [0x1F,0x10,0x1E,0x01,0x01,0x11,0x0E], // '5'
    [0x06,0x08,0x10,0x1E,0x11,0x11,0x0E], // '6'
    [0x1F,0x01,0x02,0x04,0x08,0x08,0x08], // '7'
    [0x0E,0x11,0x11,0x0E,0x11,0x11,0x0E], // '8'
    [0x0E,0x11,0x11,0x0F,0x01,0x02,0x0C], // '9'
];

const MINUS: [u8; GLYPH_H] = [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00];

/// Bitmap for `ch`, or `None` for characters the label font does not carry.
pub fn glyph(ch: char) -> Option<&'static [u8; GLYPH_H]> {
    match ch {
        '0'..='9' => Some(&DIGITS[ch as usize - '0' as usize]),
        '-' => Some(&MINUS),
        _ => None,
    }
}

/// Rendered `(width, height)` of `text` in pixels, without trailing spacing.
pub fn text_size(text: &str) -> (usize, usize) {
    let n = text.chars().count();
    if n == 0 {
        return (0, 0);
    }
    (n * ADVANCE - 1, GLYPH_H)
}

/// True if glyph row `row` has its pixel at column `col` set.
#[inline]
pub fn is_set(bits: u8, col: usize) -> bool {
    bits & (0x10 >> col) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_size() {
        assert_eq!(text_size(""), (0, 0));
        assert_eq!(text_size("0"), (5, 7));
        assert_eq!(text_size("50"), (11, 7));
        assert_eq!(text_size("350"), (17, 7));
    }

    #[test]
    fn test_digit_glyphs_present() {
        for ch in '0'..='9' {
            assert!(glyph(ch).is_some(), "missing glyph for {ch}");
        }
        assert!(glyph('x').is_none());
    }

    #[test]
    fn test_is_set_reads_msb_first() {
        // '1' top row 0x04 = 00100: only the middle column
        let bits = glyph('1').unwrap()[0];
        let cols: Vec<usize> = (0..GLYPH_W).filter(|&c| is_set(bits, c)).collect();
        assert_eq!(cols, vec![2]);
    }
}
