use super::bit_utils::BitStream;
use super::error::{QRError, QRResult};
use super::metadata::{max_input_bytes, Version};

// Encoder
//------------------------------------------------------------------------------

/// Frames `data` as a single byte mode segment in the smallest version that
/// fits, padded to the full data capacity of that version.
pub fn encode(data: &[u8]) -> QRResult<(BitStream, Version)> {
    let len = data.len();
    let max = max_input_bytes();
    let ver = Version::fitting(len).ok_or(QRError::CapacityExceeded { len, max })?;
    let bs = encode_with_version(data, ver)?;
    Ok((bs, ver))
}

pub fn encode_with_version(data: &[u8], ver: Version) -> QRResult<BitStream> {
    let info = ver.info();
    let len = data.len();
    if len > info.input_bytes() {
        return Err(QRError::DataTooLong { len, version: *ver, max: info.input_bytes() });
    }

    let bcap = info.total_data_bytes() << 3;
    let mut bs = BitStream::new(bcap);
    push_header(len, ver, &mut bs);
    data.iter().for_each(|&b| bs.push_bits(b, 8));
    push_terminator(&mut bs);
    pad_remaining_capacity(&mut bs);

    debug_assert_eq!(bs.len(), bcap, "Encoded data doesn't fill the data capacity exactly");
    Ok(bs)
}

// Writer
//------------------------------------------------------------------------------

fn push_header(len: usize, ver: Version, bs: &mut BitStream) {
    bs.push_bits(MODE_BYTE, MODE_INDICATOR_BIT_LEN);
    match ver.char_cnt_bits() {
        8 => bs.push_bits(len as u8, 8),
        _ => bs.push_bits(len as u16, 16),
    }
}

fn push_terminator(bs: &mut BitStream) {
    let bit_len = bs.len();
    let bit_cap = bs.capacity();
    if bit_len < bit_cap {
        let term_len = TERMINATOR_BIT_LEN.min(bit_cap - bit_len);
        bs.push_bits(0u8, term_len);
    }
}

fn pad_remaining_capacity(bs: &mut BitStream) {
    // Zero bits up to the next codeword boundary
    let offset = bs.len() & 7;
    if offset > 0 {
        bs.push_bits(0u8, 8 - offset);
    }

    let remaining = (bs.capacity() - bs.len()) >> 3;
    PADDING_CODEWORDS.iter().cycle().take(remaining).for_each(|&pc| bs.push_bits(pc, 8));
}

#[cfg(test)]
mod encode_tests {
    use test_case::test_case;

    use super::{encode, encode_with_version};
    use crate::common::{error::QRError, metadata::Version};

    #[test]
    fn test_encode_empty() {
        let (bs, ver) = encode(b"").unwrap();
        assert_eq!(*ver, 1);
        let mut exp = vec![0x40, 0x00];
        exp.extend([0xEC, 0x11].repeat(6));
        assert_eq!(&bs.data()[..14], &exp[..]);
        assert_eq!(&bs.data()[14..], [0xEC, 0x11]);
    }

    #[test]
    fn test_encode_hello() {
        let (bs, ver) = encode(b"Hi").unwrap();
        assert_eq!(*ver, 1);
        assert_eq!(&bs.data()[..5], [0x40, 0x24, 0x86, 0x90, 0xEC]);
        assert_eq!(bs.len(), 16 * 8);
    }

    #[test]
    fn test_encode_full_version_1() {
        let data = [0xFF; 14];
        let (bs, ver) = encode(&data).unwrap();
        assert_eq!(*ver, 1);
        let out = bs.data();
        assert_eq!(out.len(), 16);
        assert_eq!(out[0], 0x40);
        assert_eq!(out[1], 0xEF);
        assert!(out[2..15].iter().all(|&b| b == 0xFF));
        // Last nibble of the payload followed by the terminator
        assert_eq!(out[15], 0xF0);
    }

    #[test]
    fn test_encode_long_char_count() {
        let data = vec![0x5A; 200];
        let (bs, ver) = encode(&data).unwrap();
        assert_eq!(*ver, 10);
        assert_eq!(&bs.data()[..4], [0x40, 0x0C, 0x85, 0xA5]);
        assert_eq!(bs.len(), ver.info().total_data_bytes() * 8);
    }

    #[test_case(14, 1)]
    #[test_case(15, 2)]
    #[test_case(84, 5)]
    #[test_case(85, 6)]
    #[test_case(180, 9)]
    #[test_case(181, 10)]
    #[test_case(1059, 26)]
    fn test_version_selection(len: usize, exp: usize) {
        let data = vec![0u8; len];
        let (_, ver) = encode(&data).unwrap();
        assert_eq!(*ver, exp);
    }

    #[test]
    fn test_capacity_exceeded() {
        let data = vec![0u8; 1060];
        assert_eq!(encode(&data).unwrap_err(), QRError::CapacityExceeded { len: 1060, max: 1059 });
    }

    #[test]
    fn test_data_too_long_for_version() {
        let data = vec![0u8; 15];
        let ver = Version::new(1).unwrap();
        assert_eq!(
            encode_with_version(&data, ver).unwrap_err(),
            QRError::DataTooLong { len: 15, version: 1, max: 14 }
        );
        assert!(encode_with_version(&data, Version::new(2).unwrap()).is_ok());
    }
}

// Global constants
//------------------------------------------------------------------------------

const MODE_BYTE: u8 = 0b0100;

const MODE_INDICATOR_BIT_LEN: usize = 4;

const TERMINATOR_BIT_LEN: usize = 4;

const PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];
