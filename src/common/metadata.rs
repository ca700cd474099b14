use std::ops::Deref;

use super::error::{QRError, QRResult};
use super::mask::MaskPattern;
use super::version_db::{
    VersionInfo, ALIGNMENT_PATTERN_POSITIONS, MAX_VERSION, MIN_VERSION, VERSION_DB,
};

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(&self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl From<bool> for Color {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct Version(usize);

impl Version {
    /// Returns `None` for versions outside the supported range.
    pub fn new(version: usize) -> Option<Self> {
        (MIN_VERSION..=MAX_VERSION).contains(&version).then_some(Self(version))
    }

    pub fn try_new(version: usize) -> QRResult<Self> {
        Self::new(version).ok_or(QRError::InvalidVersion(version))
    }

    /// Smallest version whose capacity holds `len` bytes.
    pub fn fitting(len: usize) -> Option<Self> {
        VERSION_DB.iter().find(|v| v.input_bytes() >= len).map(|v| Self(v.version))
    }

    pub fn smallest() -> Self {
        Self(MIN_VERSION)
    }

    pub fn largest() -> Self {
        Self(MAX_VERSION)
    }

    pub fn info(self) -> &'static VersionInfo {
        &VERSION_DB[self.0 - 1]
    }

    pub fn width(self) -> usize {
        self.info().size
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_POSITIONS[self.0 - 1]
    }

    pub fn char_cnt_bits(self) -> usize {
        if self.0 <= 9 {
            8
        } else {
            16
        }
    }

    pub fn remainder_bits(self) -> usize {
        match self.0 {
            1 | 7..=13 => 0,
            2..=6 => 7,
            14..=20 => 3,
            21..=26 => 4,
            _ => unreachable!("Unsupported version {}", self.0),
        }
    }

    /// 18-bit version information word for versions 7 and above. See annex D.
    pub fn info_bits(self) -> u32 {
        debug_assert!(self.0 >= 7, "Version info only exists from version 7: {}", self.0);
        let data = self.0 as u32;
        (data << VERSION_ERROR_BIT_LEN) | bch_remainder(data, VERSION_INFO_GENERATOR, 12)
    }
}

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Largest payload accepted by any supported version.
pub fn max_input_bytes() -> usize {
    Version::largest().info().input_bytes()
}

// Format information
//------------------------------------------------------------------------------

/// 15-bit format word for level M and the given mask, BCH(15,5) protected and
/// XORed with the fixed format mask. See section 7.9.
pub fn format_info(mask: MaskPattern) -> u32 {
    let data = (EC_LEVEL_M_BITS << 3) | *mask as u32;
    let bits = (data << FORMAT_ERROR_BIT_LEN) | bch_remainder(data, FORMAT_INFO_GENERATOR, 10);
    bits ^ FORMAT_MASK
}

/// Recovers the EC level bits and mask id from a painted format word, or
/// `None` if the BCH check fails.
#[cfg(test)]
pub fn parse_format_info(format: u32) -> Option<(u32, MaskPattern)> {
    let bits = format ^ FORMAT_MASK;
    let data = bits >> FORMAT_ERROR_BIT_LEN;
    let check = bits & ((1 << FORMAT_ERROR_BIT_LEN) - 1);
    if bch_remainder(data, FORMAT_INFO_GENERATOR, 10) != check {
        return None;
    }
    Some((data >> 3, MaskPattern::new((data & 0b111) as u8)))
}

fn bch_remainder(data: u32, generator: u32, ec_len: u32) -> u32 {
    let gen_len = 32 - generator.leading_zeros();
    let mut rem = data << ec_len;
    while rem != 0 && 32 - rem.leading_zeros() >= gen_len {
        let shift = (32 - rem.leading_zeros()) - gen_len;
        rem ^= generator << shift;
    }
    rem
}


// Global constants
//------------------------------------------------------------------------------

// Level M is encoded as 00. See table 12.
pub const EC_LEVEL_M_BITS: u32 = 0b00;

pub const FORMAT_INFO_BIT_LEN: usize = 15;
pub const FORMAT_ERROR_BIT_LEN: u32 = 10;
pub const FORMAT_INFO_GENERATOR: u32 = 0b101_0011_0111;
pub const FORMAT_MASK: u32 = 0b101_0100_0001_0010;

pub const VERSION_INFO_BIT_LEN: usize = 18;
pub const VERSION_ERROR_BIT_LEN: u32 = 12;
pub const VERSION_INFO_GENERATOR: u32 = 0b1_1111_0010_0101;

// Coordinates are (row, column), most significant bit first. Negative values
// count from the bottom or right edge.
pub static FORMAT_INFO_COORDS_QR_MAIN: [(i16, i16); FORMAT_INFO_BIT_LEN] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

pub static FORMAT_INFO_COORDS_QR_SIDE: [(i16, i16); FORMAT_INFO_BIT_LEN] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];

pub static VERSION_INFO_COORDS_BL: [(i16, i16); VERSION_INFO_BIT_LEN] = [
    (-9, 5),
    (-10, 5),
    (-11, 5),
    (-9, 4),
    (-10, 4),
    (-11, 4),
    (-9, 3),
    (-10, 3),
    (-11, 3),
    (-9, 2),
    (-10, 2),
    (-11, 2),
    (-9, 1),
    (-10, 1),
    (-11, 1),
    (-9, 0),
    (-10, 0),
    (-11, 0),
];

pub static VERSION_INFO_COORDS_TR: [(i16, i16); VERSION_INFO_BIT_LEN] = [
    (5, -9),
    (5, -10),
    (5, -11),
    (4, -9),
    (4, -10),
    (4, -11),
    (3, -9),
    (3, -10),
    (3, -11),
    (2, -9),
    (2, -10),
    (2, -11),
    (1, -9),
    (1, -10),
    (1, -11),
    (0, -9),
    (0, -10),
    (0, -11),
];
