use std::ops::Deref;

use super::error::{QRError, QRResult};

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub(crate) fn new(pattern: u8) -> Self {
        debug_assert!(pattern < 8, "Invalid masking pattern");
        Self(pattern)
    }

    pub fn try_new(pattern: u8) -> QRResult<Self> {
        if pattern >= 8 {
            return Err(QRError::InvalidMaskingPattern(pattern));
        }
        Ok(Self(pattern))
    }
}

impl Default for MaskPattern {
    // Generated codes always use pattern 3 unless told otherwise. No penalty
    // evaluation is done to pick a better one.
    fn default() -> Self {
        Self(3)
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Mask functions take (row, column), i.e. (i, j) in the notation of table 10.
mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_functions(self) -> fn(i16, i16) -> bool {
        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Invalid pattern"),
        }
    }
}

#[cfg(test)]
mod mask_tests {
    use super::MaskPattern;
    use crate::common::error::QRError;

    #[test]
    fn test_default_is_diagonal() {
        let mask = MaskPattern::default();
        assert_eq!(*mask, 3);
        let f = mask.mask_functions();
        assert!(f(0, 0));
        assert!(f(1, 2));
        assert!(f(2, 1));
        assert!(f(5, 4));
        assert!(!f(0, 1));
        assert!(!f(1, 1));
        assert!(!f(3, 2));
    }

    #[test]
    fn test_mask_is_symmetric() {
        let f = MaskPattern::default().mask_functions();
        for r in 0..21 {
            for c in 0..21 {
                assert_eq!(f(r, c), f(c, r));
                assert_eq!(f(r, c), (r + c) % 3 == 0);
            }
        }
    }

    #[test]
    fn test_try_new() {
        assert_eq!(MaskPattern::try_new(7), Ok(MaskPattern::new(7)));
        assert_eq!(MaskPattern::try_new(8), Err(QRError::InvalidMaskingPattern(8)));
    }

    #[test]
    fn test_mask_functions_first_row() {
        let exp = [
            "101010101010",
            "111111111111",
            "100100100100",
            "100100100100",
            "111000111000",
            "111111111111",
            "111111111111",
            "101010101010",
        ];
        for (m, row) in exp.iter().enumerate() {
            let f = MaskPattern::new(m as u8).mask_functions();
            let got: String = (0..12).map(|c| if f(0, c) { '1' } else { '0' }).collect();
            assert_eq!(&got, row, "mask {m}");
        }
    }
}
