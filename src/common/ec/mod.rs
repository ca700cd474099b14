mod galois;

pub use galois::{generator_poly, G};

use super::metadata::Version;

// Error correction
//------------------------------------------------------------------------------

/// Splits the data codewords into segments and appends a Reed-Solomon block to
/// each. Every segment of a version shares one generator polynomial.
pub fn compute_ecc(data: &[u8], version: Version) -> (Vec<&[u8]>, Vec<Vec<u8>>) {
    let data_blocks = blockify(data, version);

    let ec_len = version.info().segment_ec_bytes();
    let gen_poly = generator_poly(ec_len);
    let ecc_blocks = data_blocks.iter().map(|b| ecc(b, &gen_poly)).collect::<Vec<_>>();

    (data_blocks, ecc_blocks)
}

pub fn blockify(data: &[u8], version: Version) -> Vec<&[u8]> {
    let info = version.info();
    let block_size = info.segment_data_bytes;
    let block1_size = info.segment_data_bytes_1;
    let total_block_size = info.data_bytes();

    debug_assert!(
        info.total_data_bytes() == data.len(),
        "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
        data.len(),
        info.total_data_bytes()
    );

    let mut data_blocks = Vec::with_capacity(info.total_segments());
    data_blocks.extend(data[..total_block_size].chunks(block_size));
    if block1_size > 0 {
        data_blocks.extend(data[total_block_size..].chunks(block1_size));
    }
    data_blocks
}

// Polynomial long division of data(z) * z^n by the generator polynomial. The
// coefficients of the remainder are the ecc, highest power first.
pub fn ecc(block: &[u8], gen_poly: &[G]) -> Vec<u8> {
    let len = block.len();
    let ec_len = gen_poly.len() - 1;
    debug_assert!(gen_poly[0] == G(1), "Generator polynomial should be monic");

    let mut res = block.to_vec();
    res.resize(len + ec_len, 0);

    for i in 0..len {
        let lead_coeff = G(res[i]);
        if lead_coeff.0 == 0 {
            continue;
        }

        for (u, &v) in res[i + 1..].iter_mut().zip(gen_poly[1..].iter()) {
            *u = (G(*u) + v * lead_coeff).into();
        }
    }

    res.split_off(len)
}

#[cfg(test)]
mod ec_tests {
    use test_case::test_case;

    use super::{blockify, compute_ecc, ecc, galois::gf_mul, generator_poly};
    use crate::common::metadata::Version;

    fn ecc_of(block: &[u8], ec_len: usize) -> Vec<u8> {
        ecc(block, &generator_poly(ec_len))
    }

    // Shift register division using only the bitwise field multiply
    fn reference_ecc(block: &[u8], ec_len: usize) -> Vec<u8> {
        let gen = generator_poly(ec_len).iter().map(|g| g.0).collect::<Vec<_>>();
        let mut reg = vec![0u8; ec_len];
        for &b in block {
            let factor = b ^ reg[0];
            reg.rotate_left(1);
            reg[ec_len - 1] = 0;
            for (r, &g) in reg.iter_mut().zip(gen[1..].iter()) {
                *r ^= gf_mul(g, factor);
            }
        }
        reg
    }

    #[test]
    fn test_poly_mod_1() {
        let res = ecc_of(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11", 10);
        assert_eq!(&*res, b"\xc4#'w\xeb\xd7\xe7\xe2]\x17");
    }

    #[test]
    fn test_poly_mod_2() {
        let res = ecc_of(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec", 13);
        assert_eq!(&*res, b"\xa8H\x16R\xd96\x9c\x00.\x0f\xb4z\x10");
    }

    #[test]
    fn test_poly_mod_3() {
        let res = ecc_of(b"CUF\x86W&U\xc2w2\x06\x12\x06g&", 18);
        assert_eq!(&*res, b"\xd5\xc7\x0b-s\xf7\xf1\xdf\xe5\xf8\x9au\x9aoV\xa1o'");
    }

    #[test]
    fn test_zero_block() {
        assert_eq!(ecc_of(&[0; 16], 10), vec![0; 10]);
    }

    #[test_case(43, 24)]
    #[test_case(16, 10)]
    #[test_case(47, 28)]
    #[test_case(39, 26)]
    fn test_matches_reference(dlen: usize, ec_len: usize) {
        let block = (0..dlen).map(|i| (i * 37 + 11) as u8).collect::<Vec<_>>();
        assert_eq!(ecc_of(&block, ec_len), reference_ecc(&block, ec_len));
    }

    #[test]
    fn test_add_ec_simple() {
        let msg = b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11";
        let expected_ecc = [b"\xc4\x23\x27\x77\xeb\xd7\xe7\xe2\x5d\x17"];
        let (blocks, ecc) = compute_ecc(msg, Version::new(1).unwrap());
        assert_eq!(blocks, vec![&msg[..]]);
        assert_eq!(&*ecc, expected_ecc);
    }

    #[test]
    fn test_blockify_single_group() {
        let data = (0..86u8).collect::<Vec<_>>();
        let blocks = blockify(&data, Version::new(5).unwrap());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], &data[..43]);
        assert_eq!(blocks[1], &data[43..]);
    }

    #[test]
    fn test_blockify_two_groups() {
        let ver = Version::new(26).unwrap();
        let data = vec![0u8; ver.info().total_data_bytes()];
        let blocks = blockify(&data, ver);
        assert_eq!(blocks.len(), 23);
        assert!(blocks[..19].iter().all(|b| b.len() == 46));
        assert!(blocks[19..].iter().all(|b| b.len() == 47));
    }

    #[test]
    fn test_ecc_len_per_version() {
        let ver = Version::new(13).unwrap();
        let data = vec![0xA5u8; ver.info().total_data_bytes()];
        let (blocks, ecc) = compute_ecc(&data, ver);
        assert_eq!(blocks.len(), ecc.len());
        assert!(ecc.iter().all(|e| e.len() == ver.info().segment_ec_bytes()));
    }
}
