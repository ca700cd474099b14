//! # qrgen
//!
//! A Rust library for generating QR codes at error correction level M with
//! Reed-Solomon error correction. Payloads are encoded in byte mode into the
//! smallest of versions 1 to 26 that fits, and the result is an abstract tile
//! grid that callers render however they like.
//!
//! ## Features
//!
//! - **Byte mode encoding**: Any `&[u8]` payload up to 1059 bytes
//! - **Automatic version selection**: Smallest version from 21x21 up to 121x121 tiles
//! - **Reed-Solomon error correction**: Level M blocks with ISO 18004 interleaving
//! - **Tile grid output**: One byte per tile flagging dark and structural tiles
//!
//! ## Quick Start
//!
//! ### Simple QR Code Generation
//!
//! ```rust
//! use qrgen::{generate, GeneratedCode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = generate(b"Hello, World!")?;
//! assert_eq!(code.size(), 21);
//!
//! // Render as text, leaving the light quiet zone around the grid
//! let qz = GeneratedCode::QUIET_ZONE;
//! let side = code.size() + 2 * qz;
//! let mut canvas = String::new();
//! for y in 0..side {
//!     for x in 0..side {
//!         let inside = (qz..qz + code.size()).contains(&x) && (qz..qz + code.size()).contains(&y);
//!         let dark = inside && code.is_dark(x - qz, y - qz);
//!         canvas.push(if dark { ' ' } else { '█' });
//!     }
//!     canvas.push('\n');
//! }
//! assert_eq!(canvas.lines().count(), 29);
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrgen::{MaskPattern, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = QRBuilder::new(b"Hello, World!")
//!     .version(Version::try_new(7)?)        // if not provided, finds smallest version to fit data
//!     .mask(MaskPattern::try_new(3)?)       // if not provided, defaults to pattern 3
//!     .build()?;
//!
//! assert_eq!(code.size(), 45);
//! # Ok(())
//! # }
//! ```
//!
//! ## Output
//!
//! [`GeneratedCode::tiles`] holds `size * size` bytes in row-major order. Bit 0
//! is set for dark tiles and bit 1 for tiles of a structural element (finder,
//! timing and alignment patterns, format and version information, and the dark
//! module). The grid carries no quiet zone.
//!
//! ## Errors
//!
//! Generation only fails with [`QRError::CapacityExceeded`] when the payload
//! is larger than [`max_input_bytes`]. Forcing a version through
//! [`QRBuilder::version`] may also yield [`QRError::DataTooLong`].
//!
//! ## Logging
//!
//! Each stage of generation is reported through the [`log`] facade at debug
//! level. Nothing is printed by the library itself.

pub mod builder;
pub(crate) mod common;

pub use builder::{GeneratedCode, QRBuilder};
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{max_input_bytes, Version};
pub use common::version_db::{version_info, VersionInfo};

/// Generates a code for `data` with the smallest fitting version and mask
/// pattern 3.
pub fn generate(data: &[u8]) -> QRResult<GeneratedCode> {
    QRBuilder::new(data).build()
}

#[cfg(test)]
mod generate_tests {
    use super::{generate, max_input_bytes, QRError};

    #[test]
    fn test_generate_empty() {
        let code = generate(&[]).unwrap();
        assert_eq!(code.size(), 21);
        assert_eq!(code.tiles().len(), 21 * 21);
    }

    #[test]
    fn test_generate_limits() {
        let max = max_input_bytes();
        assert_eq!(max, 1059);
        assert_eq!(generate(&vec![0x42; max]).map(|c| c.size()), Ok(121));
        assert_eq!(
            generate(&vec![0x42; max + 1]),
            Err(QRError::CapacityExceeded { len: max + 1, max })
        );
    }
}
