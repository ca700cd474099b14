// Version database
//------------------------------------------------------------------------------

/// Per-version constants for error correction level M, taken from table 9 of
/// ISO 18004. A version splits its codewords into group 0 and, for some
/// versions, group 1; every segment in a group has the same size.
#[derive(Debug, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: usize,
    /// Tiles along each side of the symbol.
    pub size: usize,
    /// Sum of `group_bytes` for each group.
    pub total_bytes: usize,
    pub group_bytes: usize,
    pub num_segments: usize,
    pub segment_data_bytes: usize,
    pub group_bytes_1: usize,
    pub num_segments_1: usize,
    pub segment_data_bytes_1: usize,
}

impl VersionInfo {
    pub const fn total_size(&self) -> usize {
        self.size * self.size
    }

    pub const fn segment_bytes(&self) -> usize {
        self.group_bytes / self.num_segments
    }

    pub const fn segment_ec_bytes(&self) -> usize {
        self.segment_bytes() - self.segment_data_bytes
    }

    pub const fn data_bytes(&self) -> usize {
        self.segment_data_bytes * self.num_segments
    }

    pub const fn segment_bytes_1(&self) -> usize {
        if self.num_segments_1 == 0 {
            return 0;
        }
        self.group_bytes_1 / self.num_segments_1
    }

    pub const fn segment_ec_bytes_1(&self) -> usize {
        if self.num_segments_1 == 0 {
            return 0;
        }
        self.segment_bytes_1() - self.segment_data_bytes_1
    }

    pub const fn data_bytes_1(&self) -> usize {
        self.segment_data_bytes_1 * self.num_segments_1
    }

    pub const fn total_data_bytes(&self) -> usize {
        self.data_bytes() + self.data_bytes_1()
    }

    pub const fn total_segments(&self) -> usize {
        self.num_segments + self.num_segments_1
    }

    /// Bytes of mode indicator, character count and terminator. Versions up to
    /// 9 use an 8-bit count (4 + 8 + 4 bits), later versions a 16-bit count.
    pub const fn framing_bytes(&self) -> usize {
        if self.version <= 9 {
            2
        } else {
            3
        }
    }

    /// Largest payload, in bytes, that fits this version.
    pub const fn input_bytes(&self) -> usize {
        self.total_data_bytes() - self.framing_bytes()
    }
}

const fn vi(
    version: usize,
    (num_segments, segment_data_bytes): (usize, usize),
    (num_segments_1, segment_data_bytes_1): (usize, usize),
    segment_ec_bytes: usize,
) -> VersionInfo {
    let group_bytes = num_segments * (segment_data_bytes + segment_ec_bytes);
    let group_bytes_1 = num_segments_1 * (segment_data_bytes_1 + segment_ec_bytes);
    VersionInfo {
        version,
        size: version * 4 + 17,
        total_bytes: group_bytes + group_bytes_1,
        group_bytes,
        num_segments,
        segment_data_bytes,
        group_bytes_1,
        num_segments_1,
        segment_data_bytes_1,
    }
}

pub static VERSION_DB: [VersionInfo; MAX_VERSION] = VERSION_TABLE;

/// Looks up a version by number; `None` outside `MIN_VERSION..=MAX_VERSION`.
pub fn version_info(version: usize) -> Option<&'static VersionInfo> {
    version.checked_sub(1).and_then(|i| VERSION_DB.get(i))
}

// Version, (segments, data bytes) for group 0 & group 1, EC bytes per segment
const VERSION_TABLE: [VersionInfo; MAX_VERSION] = [
    vi(1, (1, 16), (0, 0), 10),
    vi(2, (1, 28), (0, 0), 16),
    vi(3, (1, 44), (0, 0), 26),
    vi(4, (2, 32), (0, 0), 18),
    vi(5, (2, 43), (0, 0), 24),
    vi(6, (4, 27), (0, 0), 16),
    vi(7, (4, 31), (0, 0), 18),
    vi(8, (2, 38), (2, 39), 22),
    vi(9, (3, 36), (2, 37), 22),
    vi(10, (4, 43), (1, 44), 26),
    vi(11, (1, 50), (4, 51), 30),
    vi(12, (6, 36), (2, 37), 22),
    vi(13, (8, 37), (1, 38), 22),
    vi(14, (4, 40), (5, 41), 24),
    vi(15, (5, 41), (5, 42), 24),
    vi(16, (7, 45), (3, 46), 28),
    vi(17, (10, 46), (1, 47), 28),
    vi(18, (9, 43), (4, 44), 26),
    vi(19, (3, 44), (11, 45), 26),
    vi(20, (3, 41), (13, 42), 26),
    vi(21, (17, 42), (0, 0), 26),
    vi(22, (17, 46), (0, 0), 28),
    vi(23, (4, 47), (14, 48), 28),
    vi(24, (6, 45), (14, 46), 28),
    vi(25, (8, 47), (13, 48), 28),
    vi(26, (19, 46), (4, 47), 28),
];

// Total codewords per version from table 1, used to check the table above.
const TOTAL_CODEWORDS: [usize; MAX_VERSION] = [
    26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706,
];

const _: () = {
    let mut i = 0;
    while i < MAX_VERSION {
        let v = &VERSION_TABLE[i];
        assert!(v.version == i + 1);
        assert!(v.num_segments != 0);
        assert!(v.total_bytes == v.group_bytes + v.group_bytes_1);
        assert!(v.total_bytes == TOTAL_CODEWORDS[i]);
        assert!(v.group_bytes % v.num_segments == 0);
        assert!(v.num_segments_1 == 0 || v.group_bytes_1 % v.num_segments_1 == 0);
        assert!(v.num_segments_1 == 0 || v.segment_ec_bytes() == v.segment_ec_bytes_1());
        i += 1;
    }
};

// Alignment pattern centres from table E.1
pub static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; MAX_VERSION] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
];

pub const MIN_VERSION: usize = 1;
pub const MAX_VERSION: usize = 26;
