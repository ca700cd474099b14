use std::ops::{Add, AddAssign, Mul};

// Galois field element of GF(2^8) mod x^8 + x^4 + x^3 + x^2 + 1
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct G(pub u8);

impl G {
    /// α^i where α = 2 is the primitive element
    pub fn gen_pow(i: usize) -> Self {
        Self(EXP_TABLE[i % 255])
    }

    pub fn log(self) -> usize {
        debug_assert!(self.0 != 0, "Log of zero is undefined");
        LOG_TABLE[self.0 as usize] as usize
    }
}

impl From<G> for u8 {
    fn from(g: G) -> Self {
        g.0
    }
}

// Addition is XOR in a field of characteristic two
impl Add for G {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl AddAssign for G {
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Mul for G {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        if self.0 == 0 || rhs.0 == 0 {
            return Self(0);
        }
        Self(EXP_TABLE[self.log() + rhs.log()])
    }
}

/// Carry-less multiplication followed by reduction with the field modulus.
/// Independent of the log/antilog tables.
pub fn gf_mul(a: u8, b: u8) -> u8 {
    let (mut a, mut b) = (a as u16, b as u16);
    let mut acc = 0u16;
    while b != 0 {
        if b & 1 == 1 {
            acc ^= a;
        }
        a <<= 1;
        b >>= 1;
    }

    let mut modulus = FIELD_MODULUS << 7;
    for i in (8..16).rev() {
        if acc & (1 << i) != 0 {
            acc ^= modulus;
        }
        modulus >>= 1;
    }
    acc as u8
}

// Generator polynomial
//------------------------------------------------------------------------------

/// Coefficients of Π (z - α^i) for 0 <= i < `degree`, highest power first.
/// The leading coefficient is always 1.
pub fn generator_poly(degree: usize) -> Vec<G> {
    let mut poly = Vec::with_capacity(degree + 1);
    poly.push(G(1));
    for i in 0..degree {
        let root = G::gen_pow(i).0;
        poly.push(G(0));
        for j in (1..poly.len()).rev() {
            let carry = G(gf_mul(poly[j - 1].0, root));
            poly[j] += carry;
        }
    }
    poly
}


// Global constants
//------------------------------------------------------------------------------

// x^8 + x^4 + x^3 + x^2 + 1
const FIELD_MODULUS: u16 = 0b1_0001_1101;

const fn build_exp_table() -> [u8; 512] {
    let mut table = [0u8; 512];
    let mut x = 1u16;
    let mut i = 0;
    while i < 255 {
        table[i] = x as u8;
        table[i + 255] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= FIELD_MODULUS;
        }
        i += 1;
    }
    table
}

const fn build_log_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[EXP[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const EXP: [u8; 512] = build_exp_table();

// Doubled so that the sum of two logs can index it without a modulo
pub static EXP_TABLE: [u8; 512] = EXP;

pub static LOG_TABLE: [u8; 256] = build_log_table();
