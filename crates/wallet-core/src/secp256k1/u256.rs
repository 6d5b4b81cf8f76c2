//! Minimal 256-bit unsigned integer arithmetic.
//!
//! `secp256k1` has no native big-integer type in Rust, so field and scalar
//! arithmetic is built on a plain 4-limb (little-endian `u64`) representation
//! with schoolbook multiplication and binary long-division reduction.
//! Performance is explicitly a non-goal here; clarity and bit-exactness are
//! what matter.

/// 256-bit unsigned integer as four little-endian 64-bit limbs.
pub(crate) type Limbs = [u64; 4];

/// Zero-extend a [`Limbs`] value into a 5-limb (320-bit) buffer, used as
/// headroom during modular addition and reduction.
fn widen(a: &Limbs) -> [u64; 5] {
    [a[0], a[1], a[2], a[3], 0]
}

/// Narrow a 5-limb value back to [`Limbs`], asserting the top limb is clear.
fn narrow(a: &[u64; 5]) -> Limbs {
    debug_assert_eq!(a[4], 0, "narrowed value lost significant bits");
    [a[0], a[1], a[2], a[3]]
}

pub(crate) fn is_zero(a: &Limbs) -> bool {
    a.iter().all(|&limb| limb == 0)
}

pub(crate) fn cmp(a: &Limbs, b: &Limbs) -> core::cmp::Ordering {
    for i in (0..4).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    core::cmp::Ordering::Equal
}

pub(crate) fn lt(a: &Limbs, b: &Limbs) -> bool {
    cmp(a, b) == core::cmp::Ordering::Less
}

fn ge5(a: &[u64; 5], b: &[u64; 5]) -> bool {
    for i in (0..5).rev() {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

fn add5(a: &[u64; 5], b: &[u64; 5]) -> [u64; 5] {
    let mut out = [0u64; 5];
    let mut carry: u128 = 0;
    for i in 0..5 {
        let sum = a[i] as u128 + b[i] as u128 + carry;
        out[i] = sum as u64;
        carry = sum >> 64;
    }
    out
}

fn sub5(a: &[u64; 5], b: &[u64; 5]) -> [u64; 5] {
    let mut out = [0u64; 5];
    let mut borrow: i128 = 0;
    for i in 0..5 {
        let diff = a[i] as i128 - b[i] as i128 - borrow;
        if diff < 0 {
            out[i] = (diff + (1i128 << 64)) as u64;
            borrow = 1;
        } else {
            out[i] = diff as u64;
            borrow = 0;
        }
    }
    out
}

fn shl1_5(a: &mut [u64; 5], in_bit: u64) {
    let mut carry = in_bit & 1;
    for limb in a.iter_mut() {
        let next_carry = *limb >> 63;
        *limb = (*limb << 1) | carry;
        carry = next_carry;
    }
}

/// `(a + b) mod m`, given `a, b < m`.
pub(crate) fn add_mod(a: &Limbs, b: &Limbs, m: &Limbs) -> Limbs {
    let sum = add5(&widen(a), &widen(b));
    let m5 = widen(m);
    if ge5(&sum, &m5) {
        narrow(&sub5(&sum, &m5))
    } else {
        narrow(&sum)
    }
}

/// `(a - b) mod m`, given `a, b < m`.
pub(crate) fn sub_mod(a: &Limbs, b: &Limbs, m: &Limbs) -> Limbs {
    if !lt(a, b) {
        let diff = sub5(&widen(a), &widen(b));
        narrow(&diff)
    } else {
        let sum = add5(&widen(a), &widen(m));
        narrow(&sub5(&sum, &widen(b)))
    }
}

/// Full 256x256 -> 512-bit schoolbook multiplication.
fn mul_wide(a: &Limbs, b: &Limbs) -> [u64; 8] {
    let mut result = [0u64; 8];
    for i in 0..4 {
        let mut carry: u128 = 0;
        for j in 0..4 {
            let idx = i + j;
            let prod = (a[i] as u128) * (b[j] as u128) + (result[idx] as u128) + carry;
            result[idx] = prod as u64;
            carry = prod >> 64;
        }
        let mut k = i + 4;
        while carry > 0 {
            let sum = result[k] as u128 + carry;
            result[k] = sum as u64;
            carry = sum >> 64;
            k += 1;
        }
    }
    result
}

fn bit_at_wide(a: &[u64; 8], index: usize) -> u64 {
    let limb = index / 64;
    let shift = index % 64;
    (a[limb] >> shift) & 1
}

/// Reduce a 512-bit value modulo a 256-bit modulus by binary long division.
fn reduce_wide(value: &[u64; 8], m: &Limbs) -> Limbs {
    let m5 = widen(m);
    let mut remainder = [0u64; 5];
    for bit_index in (0..512).rev() {
        let bit = bit_at_wide(value, bit_index);
        shl1_5(&mut remainder, bit);
        if ge5(&remainder, &m5) {
            remainder = sub5(&remainder, &m5);
        }
    }
    narrow(&remainder)
}

/// `(a * b) mod m`.
pub(crate) fn mul_mod(a: &Limbs, b: &Limbs, m: &Limbs) -> Limbs {
    let wide = mul_wide(a, b);
    reduce_wide(&wide, m)
}

/// `a^e mod m` via square-and-multiply (`e` given as big-endian bytes).
pub(crate) fn pow_mod(a: &Limbs, exponent: &Limbs, m: &Limbs) -> Limbs {
    let mut result: Limbs = [1, 0, 0, 0];
    let mut base = *a;
    for limb_index in 0..4 {
        let limb = exponent[limb_index];
        for bit in 0..64 {
            if (limb >> bit) & 1 == 1 {
                result = mul_mod(&result, &base, m);
            }
            base = mul_mod(&base, &base, m);
        }
    }
    result
}

pub(crate) fn from_bytes_be(bytes: &[u8; 32]) -> Limbs {
    let mut limbs = [0u64; 4];
    for (i, chunk) in bytes.chunks_exact(8).enumerate() {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        // `bytes` is big-endian; chunk 0 holds the most significant 8 bytes,
        // which belongs in the highest limb.
        limbs[3 - i] = u64::from_be_bytes(buf);
    }
    limbs
}

pub(crate) fn to_bytes_be(limbs: &Limbs) -> [u8; 32] {
    let mut out = [0u8; 32];
    for i in 0..4 {
        out[(3 - i) * 8..(3 - i) * 8 + 8].copy_from_slice(&limbs[i].to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Limbs = [
        0xFFFFFFFEFFFFFC2F,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
    ];

    #[test]
    fn roundtrip_bytes() {
        let bytes = [0xAB; 32];
        assert_eq!(to_bytes_be(&from_bytes_be(&bytes)), bytes);
    }

    #[test]
    fn add_then_sub_mod_identity() {
        let a = from_bytes_be(&[1u8; 32]);
        let b = from_bytes_be(&[2u8; 32]);
        let sum = add_mod(&a, &b, &P);
        let back = sub_mod(&sum, &b, &P);
        assert_eq!(back, a);
    }

    #[test]
    fn mul_mod_by_one_is_identity() {
        let a = from_bytes_be(&[7u8; 32]);
        let one: Limbs = [1, 0, 0, 0];
        assert_eq!(mul_mod(&a, &one, &P), a);
    }

    #[test]
    fn pow_mod_fermat_inverse_roundtrip() {
        let a = from_bytes_be(&[3u8; 32]);
        let mut p_minus_2 = P;
        let mut borrow = 2i128;
        let mut i = 0;
        while borrow != 0 {
            let v = p_minus_2[i] as i128 - borrow;
            if v < 0 {
                p_minus_2[i] = (v + (1i128 << 64)) as u64;
                borrow = 1;
            } else {
                p_minus_2[i] = v as u64;
                borrow = 0;
            }
            i += 1;
        }
        let inv = pow_mod(&a, &p_minus_2, &P);
        let check = mul_mod(&a, &inv, &P);
        assert_eq!(check, [1, 0, 0, 0]);
    }
}
