//! Reed-Solomon error correction over GF(2^8) with reduction polynomial 0x11D.

/// Largest number of error correction codewords in one block.
pub const MAX_DEGREE: usize = 30;

/// Generator polynomial `(x - r^0)(x - r^1)...(x - r^{degree-1})` with `r = 0x02`.
///
/// The leading coefficient (always 1) is dropped; the remaining `degree` coefficients are
/// stored in order of descending powers.
pub struct ReedSolomonGenerator {
    divisor: [u8; MAX_DEGREE],
    degree: usize,
}

impl ReedSolomonGenerator {
    pub fn new(degree: usize) -> Self {
        assert!((1..=MAX_DEGREE).contains(&degree), "Degree out of range");
        let mut divisor = [0u8; MAX_DEGREE];
        let coeffs = &mut divisor[..degree];
        coeffs[degree - 1] = 1;
        let mut root: u8 = 1;
        for _ in 0..degree {
            // Multiply the current product by (x - root)
            for j in 0..degree {
                coeffs[j] = multiply(coeffs[j], root);
                if j + 1 < degree {
                    coeffs[j] ^= coeffs[j + 1];
                }
            }
            root = multiply(root, 0x02);
        }
        Self { divisor, degree }
    }

    pub fn coefficients(&self) -> &[u8] {
        &self.divisor[..self.degree]
    }

    /// Divides `data` by the generator and writes the `degree` remainder bytes to `result`.
    pub fn compute_remainder(&self, data: &[u8], result: &mut [u8]) {
        assert_eq!(result.len(), self.degree);
        self.compute_remainder_strided(data, result, 1);
    }

    /// Like [`Self::compute_remainder`], but remainder coefficient `j` lives at
    /// `result[j * stride]`. This lets each block write its error correction bytes straight
    /// into their interleaved positions.
    pub fn compute_remainder_strided(&self, data: &[u8], result: &mut [u8], stride: usize) {
        let degree = self.degree;
        debug_assert!(stride >= 1 && (degree - 1) * stride < result.len());
        for j in 0..degree {
            result[j * stride] = 0;
        }
        for &b in data {
            let factor = b ^ result[0];
            for j in 1..degree {
                result[(j - 1) * stride] = result[j * stride];
            }
            result[(degree - 1) * stride] = 0;
            for (j, &coeff) in self.coefficients().iter().enumerate() {
                result[j * stride] ^= multiply(coeff, factor);
            }
        }
    }
}

/// Product of two field elements, by Russian peasant multiplication.
pub fn multiply(x: u8, y: u8) -> u8 {
    let mut z: u16 = 0;
    for i in (0..8).rev() {
        z = (z << 1) ^ ((z >> 7) * 0x11d);
        z ^= u16::from((y >> i) & 1) * u16::from(x);
    }
    z as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_field_identities() {
        assert_eq!(multiply(0, 0x53), 0);
        assert_eq!(multiply(1, 0x53), 0x53);
        assert_eq!(multiply(0x02, 0x80), 0x1d);
        assert_eq!(multiply(0x53, 0xca), multiply(0xca, 0x53));
        // 2^255 == 1, so 2^254 is the inverse of 2
        let mut p: u8 = 1;
        for _ in 0..254 {
            p = multiply(p, 2);
        }
        assert_eq!(multiply(p, 2), 1);
    }

    #[test]
    fn generator_degree_seven() {
        // Version 1-L block divisor
        let rs = ReedSolomonGenerator::new(7);
        assert_eq!(rs.coefficients(), &[0x7f, 0x7a, 0x9a, 0xa4, 0x0b, 0x44, 0x75]);
    }

    #[test]
    fn remainder_of_version_one_medium_block() {
        // "01234567" at 1-M from ISO/IEC 18004 Annex I.
        let data = [
            0x10, 0x20, 0x0c, 0x56, 0x61, 0x80, 0xec, 0x11, 0xec, 0x11, 0xec, 0x11, 0xec, 0x11,
            0xec, 0x11,
        ];
        let rs = ReedSolomonGenerator::new(10);
        let mut ecc = [0u8; 10];
        rs.compute_remainder(&data, &mut ecc);
        assert_eq!(ecc, [0xa5, 0x24, 0xd4, 0xc1, 0xed, 0x36, 0xc7, 0x87, 0x2c, 0x55]);
    }

    #[test]
    fn strided_remainder_matches_contiguous() {
        let data: Vec<u8> = (0u8..40).map(|i| i.wrapping_mul(37)).collect();
        let rs = ReedSolomonGenerator::new(18);
        let mut plain = [0u8; 18];
        rs.compute_remainder(&data, &mut plain);
        let mut strided = [0xaau8; 18 * 3];
        rs.compute_remainder_strided(&data, &mut strided[1..], 3);
        for j in 0..18 {
            assert_eq!(strided[1 + j * 3], plain[j]);
            assert_eq!(strided[j * 3], 0xaa);
        }
    }

    #[test]
    #[should_panic(expected = "Degree out of range")]
    fn rejects_oversized_degree() {
        ReedSolomonGenerator::new(31);
    }
}
