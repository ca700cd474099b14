use std::ops::Deref;

use crate::common::{
    bit_utils::BitStream,
    iter::EncRegionIter,
    mask::MaskPattern,
    metadata::{
        format_info, Color, Version, FORMAT_INFO_BIT_LEN, FORMAT_INFO_COORDS_QR_MAIN,
        FORMAT_INFO_COORDS_QR_SIDE, VERSION_INFO_BIT_LEN, VERSION_INFO_COORDS_BL,
        VERSION_INFO_COORDS_TR,
    },
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Version(Color),
    Format(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Version(c) => c,
            Module::Format(c) => c,
            Module::Data(c) => c,
        }
    }
}

impl Module {
    pub fn is_structural(&self) -> bool {
        matches!(self, Module::Func(_) | Module::Version(_) | Module::Format(_))
    }
}

/// Working grid of a single generation. Coordinates are (row, column) and
/// negative values count back from the bottom or right edge.
#[derive(Debug, Clone)]
pub struct QR {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub fn new(ver: Version) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Empty; w * w], w, ver }
    }

    #[cfg(test)]
    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Version(Color::Dark) => 'v',
                    Module::Version(Color::Light) => 'V',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r as usize) * self.w + c as usize
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }
}

#[cfg(test)]
mod qr_util_tests {
    use super::{Module, QR};
    use crate::common::metadata::{Color, Version};

    #[test]
    fn test_index_wrap() {
        let mut qr = QR::new(Version::new(1).unwrap());
        let w = qr.w as i16;
        qr.set(-1, -1, Module::Func(Color::Dark));
        assert_eq!(qr.get(w - 1, w - 1), Module::Func(Color::Dark));
        qr.set(0, 0, Module::Func(Color::Dark));
        assert_eq!(qr.get(-w, -w), Module::Func(Color::Dark));
        qr.set(-8, 8, Module::Format(Color::Dark));
        assert_eq!(qr.grid()[(qr.w - 8) * qr.w + 8], Module::Format(Color::Dark));
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_bound() {
        let qr = QR::new(Version::new(1).unwrap());
        let w = qr.w as i16;
        qr.get(w, 0);
    }

    #[test]
    #[should_panic]
    fn test_col_index_overwrap() {
        let qr = QR::new(Version::new(1).unwrap());
        let w = qr.w as i16;
        qr.get(0, -(w + 1));
    }
}

// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    // Each finder comes with its one-tile light separator
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                let clr = match (i, j) {
                    (4 | -4, _) | (_, 4 | -4) => Color::Light,
                    (3 | -3, _) | (_, 3 | -3) => Color::Dark,
                    (2 | -2, _) | (_, 2 | -2) => Color::Light,
                    _ => Color::Dark,
                };
                self.set(r + i, c + j, Module::Func(clr));
            }
        }
    }
}


// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    // Runs between the separators, dark on even indices
    fn draw_timing_pattern(&mut self) {
        let w = self.w as i16;
        self.draw_line(6, 8, 6, w - 9);
        self.draw_line(8, 6, w - 9, 6);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                self.set(r1, j, Module::Func(Color::from(j & 1 == 0)));
            }
        } else {
            for i in r1..=r2 {
                self.set(i, c1, Module::Func(Color::from(i & 1 == 0)));
            }
        }
    }
}


// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) {
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                self.draw_alignment_pattern_at(r, c)
            }
        }
    }

    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        let w = self.w as i16;
        // Centres that would overlap a finder pattern
        if (r == 6 && (c == 6 || c - w == -7)) || (r - w == -7 && c == 6) {
            return;
        }
        for i in -2..=2 {
            for j in -2..=2 {
                let clr = match (i, j) {
                    (-2 | 2, _) | (_, -2 | 2) | (0, 0) => Color::Dark,
                    _ => Color::Light,
                };
                self.set(r + i, c + j, Module::Func(clr));
            }
        }
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
        self.draw_alignment_patterns();
        self.reserve_format_area();
        self.draw_version_info();
    }
}

// Format & version info
//------------------------------------------------------------------------------

impl QR {
    // Claims the format cells and the dark module before placement
    fn reserve_format_area(&mut self) {
        self.draw_format_info((1 << FORMAT_INFO_BIT_LEN) - 1);
    }

    fn draw_format_info(&mut self, format_info: u32) {
        self.draw_number(
            format_info,
            FORMAT_INFO_BIT_LEN,
            Module::Format(Color::Light),
            Module::Format(Color::Dark),
            &FORMAT_INFO_COORDS_QR_MAIN,
        );
        self.draw_number(
            format_info,
            FORMAT_INFO_BIT_LEN,
            Module::Format(Color::Light),
            Module::Format(Color::Dark),
            &FORMAT_INFO_COORDS_QR_SIDE,
        );
        // Dark module
        self.set(-8, 8, Module::Format(Color::Dark));
    }

    fn draw_version_info(&mut self) {
        if *self.ver < 7 {
            return;
        }
        let ver_info = self.ver.info_bits();
        self.draw_number(
            ver_info,
            VERSION_INFO_BIT_LEN,
            Module::Version(Color::Light),
            Module::Version(Color::Dark),
            &VERSION_INFO_COORDS_BL,
        );
        self.draw_number(
            ver_info,
            VERSION_INFO_BIT_LEN,
            Module::Version(Color::Light),
            Module::Version(Color::Dark),
            &VERSION_INFO_COORDS_TR,
        );
    }

    // Paints `number` MSB first over `coords`
    fn draw_number(
        &mut self,
        number: u32,
        bit_len: usize,
        off_clr: Module,
        on_clr: Module,
        coords: &[(i16, i16)],
    ) {
        debug_assert_eq!(coords.len(), bit_len, "Coordinate count doesn't match bit length");
        let mut mask = 1 << (bit_len - 1);
        for &(r, c) in coords {
            if number & mask == 0 {
                self.set(r, c, off_clr);
            } else {
                self.set(r, c, on_clr);
            }
            mask >>= 1;
        }
    }

    #[cfg(test)]
    pub fn read_format_info(&self, coords: &[(i16, i16)]) -> u32 {
        coords.iter().fold(0, |acc, &(r, c)| (acc << 1) | (*self.get(r, c) == Color::Dark) as u32)
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl QR {
    /// Places the interleaved codewords and writes the final format word.
    /// Function patterns must already be drawn.
    pub fn draw_encoding_region(&mut self, payload: BitStream, mask: MaskPattern) {
        self.draw_payload(payload, mask);
        self.draw_format_info(format_info(mask));

        debug_assert!(!self.grid.contains(&Module::Empty), "Empty module found in debug");
    }

    // Every data bit is masked as it is placed
    fn draw_payload(&mut self, payload: BitStream, mask: MaskPattern) {
        let mask_fn = mask.mask_functions();
        let mut coords = EncRegionIter::new(self.ver);
        for bit in payload {
            for (r, c) in coords.by_ref() {
                if matches!(self.get(r, c), Module::Empty) {
                    self.set(r, c, Module::Data(Color::from(bit ^ mask_fn(r, c))));
                    break;
                }
            }
        }
        self.fill_remainder_bits(coords, mask_fn);
    }

    fn fill_remainder_bits(
        &mut self,
        coords: impl Iterator<Item = (i16, i16)>,
        mask_fn: fn(i16, i16) -> bool,
    ) {
        let n = self.ver.remainder_bits();
        let mut filled = 0;
        for (r, c) in coords {
            if filled == n {
                break;
            }
            if matches!(self.get(r, c), Module::Empty) {
                self.set(r, c, Module::Data(Color::from(mask_fn(r, c))));
                filled += 1;
            }
        }
        debug_assert_eq!(filled, n, "Remainder bits don't match the free tiles");
    }

    pub fn into_generated(self) -> GeneratedCode {
        let tiles = self
            .grid
            .iter()
            .map(|m| {
                debug_assert!(*m != Module::Empty, "Empty module found while exporting");
                let dark = m.select(0, GeneratedCode::DARK);
                if m.is_structural() {
                    dark | GeneratedCode::STRUCTURAL
                } else {
                    dark
                }
            })
            .collect();
        GeneratedCode { tiles, size: self.w, version: self.ver }
    }
}


// Generated code
//------------------------------------------------------------------------------

/// Finished symbol: one byte per tile in row-major order. Bit 0 marks a dark
/// tile and bit 1 a tile belonging to a structural element (finder, timing,
/// alignment, format or version information, or the dark module).
///
/// No quiet zone is included; renderers must surround the grid with
/// [`GeneratedCode::QUIET_ZONE`] light tiles on every side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    tiles: Vec<u8>,
    size: usize,
    version: Version,
}

impl GeneratedCode {
    pub const DARK: u8 = 0b01;
    pub const STRUCTURAL: u8 = 0b10;
    pub const QUIET_ZONE: usize = 4;

    /// Tiles along each side.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn into_tiles(self) -> Vec<u8> {
        self.tiles
    }

    /// Tile at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not below [`GeneratedCode::size`].
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.size && y < self.size, "Tile out of bounds: ({x}, {y})");
        self.tiles[y * self.size + x]
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.get(x, y) & Self::DARK != 0
    }

    pub fn is_structural(&self, x: usize, y: usize) -> bool {
        self.get(x, y) & Self::STRUCTURAL != 0
    }
}
