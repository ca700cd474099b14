use super::metadata::Version;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

/// Walks the symbol in two-column strips from the bottom right corner, going
/// up the first strip and alternating direction on each following one. Within
/// a strip the right column is visited before the left. The vertical timing
/// column is stepped over, so every other tile is yielded exactly once.
pub struct EncRegionIter {
    r: i16,
    // Right column of the current strip
    c: i16,
    width: i16,
    upward: bool,
    at_right: bool,
}

impl EncRegionIter {
    pub fn new(version: Version) -> Self {
        let w = version.width() as i16;
        Self { r: w - 1, c: w - 1, width: w, upward: true, at_right: true }
    }

    fn next_strip(&mut self) {
        self.c -= 2;
        if self.c == VERT_TIMING_COL {
            self.c -= 1;
        }
        self.upward = !self.upward;
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        if self.c < 0 {
            return None;
        }
        let res = if self.at_right { (self.r, self.c) } else { (self.r, self.c - 1) };

        if self.at_right {
            self.at_right = false;
            return Some(res);
        }

        self.at_right = true;
        match self.upward {
            true if self.r > 0 => self.r -= 1,
            false if self.r < self.width - 1 => self.r += 1,
            _ => self.next_strip(),
        }
        Some(res)
    }
}


// Global constants
//------------------------------------------------------------------------------

const VERT_TIMING_COL: i16 = 6;
