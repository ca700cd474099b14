mod qr;

pub use qr::GeneratedCode;
pub(crate) use qr::QR;

#[cfg(test)]
pub(crate) use qr::Module;

use std::ops::Deref;

use log::{debug, trace};

use crate::common::{
    bit_utils::BitStream,
    codec::{encode, encode_with_version},
    ec::compute_ecc,
    error::QRResult,
    mask::MaskPattern,
    metadata::Version,
};

/// Configures and generates a level M code. Without further configuration the
/// smallest fitting version and mask pattern 3 are used.
pub struct QRBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
    mask: MaskPattern,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, version: None, mask: MaskPattern::default() }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = mask;
        self
    }

    pub fn metadata(&self) -> String {
        match self.version {
            Some(v) => format!("{{ Version: {}, Ec level: M, Mask: {} }}", *v, *self.mask),
            None => format!("{{ Version: None, Ec level: M, Mask: {} }}", *self.mask),
        }
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<GeneratedCode> {
        debug!("Generating QR {}", self.metadata());

        let (encoded_data, version) = match self.version {
            Some(v) => (encode_with_version(self.data, v)?, v),
            None => {
                debug!("Finding smallest fitting version");
                encode(self.data)?
            }
        };
        debug!("Encoded {} bytes in version {}", self.data.len(), *version);

        let total_codewords = version.info().total_bytes;
        let (data_blocks, ecc_blocks) = compute_ecc(encoded_data.data(), version);
        debug!(
            "Computed ecc for {} blocks of {} bytes each",
            ecc_blocks.len(),
            version.info().segment_ec_bytes()
        );

        let mut payload = BitStream::new(total_codewords << 3);
        payload.extend(&Self::interleave(&data_blocks));
        payload.extend(&Self::interleave(&ecc_blocks));
        debug_assert_eq!(payload.len(), total_codewords << 3, "Payload doesn't fill the symbol");

        let mut qr = QR::new(version);

        debug!("Drawing function patterns");
        qr.draw_all_function_patterns();

        debug!("Drawing encoding region with mask {}", *self.mask);
        qr.draw_encoding_region(payload, self.mask);

        let total_modules = version.width() * version.width();
        let dark_modules = qr.count_dark_modules();
        trace!(
            "Dark modules: {}, Light modules: {}, Balance: {}%",
            dark_modules,
            total_modules - dark_modules,
            dark_modules * 100 / total_modules
        );

        Ok(qr.into_generated())
    }

    // Takes the i-th codeword of every block in turn, skipping blocks that
    // have run out. See section 7.6.
    pub(crate) fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
        let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
        let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
        let mut res = Vec::with_capacity(total_size);
        for i in 0..max_block_size {
            for b in blocks {
                if i < b.len() {
                    res.push(b[i]);
                }
            }
        }
        res
    }
}
