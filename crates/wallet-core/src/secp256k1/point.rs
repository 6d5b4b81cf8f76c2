//! secp256k1 affine point arithmetic (`y^2 = x^3 + 7` over [`FieldElement`]).

use super::field::FieldElement;
use super::scalar::Scalar;
use crate::error::{Error, Result};

/// A point on the curve, including the point at infinity.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Point {
    Identity,
    Affine(FieldElement, FieldElement),
}

const GENERATOR_X: [u8; 32] = [
    0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B, 0x07,
    0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8, 0x17, 0x98,
];

const GENERATOR_Y: [u8; 32] = [
    0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08, 0xA8,
    0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10, 0xD4, 0x4B,
];

impl Point {
    pub(crate) fn generator() -> Point {
        Point::Affine(
            FieldElement::from_bytes_be(&GENERATOR_X),
            FieldElement::from_bytes_be(&GENERATOR_Y),
        )
    }

    pub(crate) fn is_identity(self) -> bool {
        matches!(self, Point::Identity)
    }

    pub(crate) fn double(self) -> Point {
        match self {
            Point::Identity => Point::Identity,
            Point::Affine(x, y) => {
                if y.is_zero() {
                    return Point::Identity;
                }
                let three = FieldElement::from_bytes_be(&{
                    let mut b = [0u8; 32];
                    b[31] = 3;
                    b
                });
                let two = FieldElement::from_bytes_be(&{
                    let mut b = [0u8; 32];
                    b[31] = 2;
                    b
                });
                let lambda = three.mul(x.square()).mul(two.mul(y).invert());
                let x3 = lambda.square().sub(x).sub(x);
                let y3 = lambda.mul(x.sub(x3)).sub(y);
                Point::Affine(x3, y3)
            }
        }
    }

    pub(crate) fn add(self, other: Point) -> Point {
        match (self, other) {
            (Point::Identity, p) => p,
            (p, Point::Identity) => p,
            (Point::Affine(x1, y1), Point::Affine(x2, y2)) => {
                if x1 == x2 {
                    if y1.add(y2).is_zero() {
                        return Point::Identity;
                    }
                    return self.double();
                }
                let lambda = y2.sub(y1).mul(x2.sub(x1).invert());
                let x3 = lambda.square().sub(x1).sub(x2);
                let y3 = lambda.mul(x1.sub(x3)).sub(y1);
                Point::Affine(x3, y3)
            }
        }
    }

    /// Double-and-add scalar multiplication, most-significant bit first.
    pub(crate) fn scalar_mul(self, scalar: Scalar) -> Point {
        let mut acc = Point::Identity;
        for bit in scalar.bits_be() {
            acc = acc.double();
            if bit {
                acc = acc.add(self);
            }
        }
        acc
    }

    /// SEC1 compressed encoding: `0x02`/`0x03` prefix plus the 32-byte
    /// big-endian x-coordinate.
    pub(crate) fn to_compressed(self) -> Result<[u8; 33]> {
        match self {
            Point::Identity => Err(Error::Crypto),
            Point::Affine(x, y) => {
                let mut out = [0u8; 33];
                out[0] = if y.is_even() { 0x02 } else { 0x03 };
                out[1..].copy_from_slice(&x.to_bytes_be());
                Ok(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_times_one_is_generator() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        let one = Scalar::from_bytes_be(&bytes);
        let g = Point::generator();
        assert_eq!(g.scalar_mul(one), g);
    }

    #[test]
    fn generator_times_two_equals_double() {
        let mut bytes = [0u8; 32];
        bytes[31] = 2;
        let two = Scalar::from_bytes_be(&bytes);
        let g = Point::generator();
        assert_eq!(g.scalar_mul(two), g.double());
    }

    #[test]
    fn private_key_one_yields_generator_compressed() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        let one = Scalar::from_bytes_be(&bytes);
        let pubkey = Point::generator().scalar_mul(one).to_compressed().unwrap();
        // Known compressed encoding of the secp256k1 generator point.
        assert_eq!(pubkey[0], 0x02);
        assert_eq!(&pubkey[1..], &GENERATOR_X[..]);
    }
}
