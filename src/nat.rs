/*
    Copyright 2024 M. Devi Prasad (dp@web3pleb.org)

    Licensed under the Apache License, Version 2.0 (the "License");
    you may not use this file except in compliance with the License.
    You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

    Unless required by applicable law or agreed to in writing, software
    distributed under the License is distributed on an "AS IS" BASIS,
    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
    See the License for the specific language governing permissions and
    limitations under the License.
*/

use std::cmp::Ordering;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::bits::{add_with_carry, len_binary_digit, mul_add_carry, sub_with_borrow};
use crate::{hex, Digit, Error};

// largest power of ten that fits a digit, and its exponent.
const DEC_CHUNK: Digit = 10_000_000_000_000_000_000;
const DEC_CHUNK_LEN: usize = 19;

/// An unbounded non-negative integer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nat {
    // The magnitude, as a sequence of digits stored in little-endian format.
    // The leading digit is never zero; zero itself has no digits at all.
    // This invariant is maintained by all operations.
    pub(crate) mag: Vec<Digit>,
}

impl Nat {
    fn valid(&self) {
        #[cfg(any(debug_assertions, release_test))]
        assert!(self.mag.last() != Some(&0), "Nat::valid - leading zero digit in {:X?}", self.mag);
    }

    fn trim(mut self) -> Self {
        while let Some(&0) = self.mag.last() {
            self.mag.pop();
        }
        self.valid();
        self
    }

    pub fn zero() -> Self {
        Nat { mag: Vec::new() }
    }

    pub fn one() -> Self {
        Self::from_digit(1)
    }

    pub fn from_digit(d: Digit) -> Self {
        Nat { mag: vec![d] }.trim()
    }

    pub fn from_le_digits(digits: Vec<Digit>) -> Self {
        Nat { mag: digits }.trim()
    }

    /// 2^e
    pub fn pow2(e: u32) -> Self {
        let mut mag = vec![0; (e / Digit::BITS) as usize + 1];
        if let Some(top) = mag.last_mut() {
            *top = 1 << (e % Digit::BITS);
        }
        Nat { mag }
    }

    pub fn digits(&self) -> &[Digit] {
        &self.mag
    }

    pub fn width(&self) -> usize {
        self.mag.len()
    }

    pub fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.mag == [1]
    }

    pub fn is_odd(&self) -> bool {
        self.test_bit(0)
    }

    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    // count of significant bits; zero for zero.
    pub fn bit_len(&self) -> u32 {
        match self.mag.last() {
            None => 0,
            Some(&ld) => (self.mag.len() as u32 - 1) * Digit::BITS + len_binary_digit(ld),
        }
    }

    pub fn test_bit(&self, pos: u32) -> bool {
        let (l, p) = ((pos / Digit::BITS) as usize, pos % Digit::BITS);
        self.mag.get(l).map_or(false, |&d| d & (1 << p) != 0)
    }

    // the value, when it fits a single digit.
    pub fn digit_value(&self) -> Option<Digit> {
        match self.mag.len() {
            0 => Some(0),
            1 => Some(self.mag[0]),
            _ => None,
        }
    }

    pub fn add(&self, n2: &Nat) -> Nat {
        let (long, short) = if self.width() >= n2.width() { (self, n2) } else { (n2, self) };
        let mut mag = Vec::with_capacity(long.width() + 1);
        let mut carry: Digit = 0;
        for (i, &x) in long.mag.iter().enumerate() {
            let y = short.mag.get(i).copied().unwrap_or(0);
            let sum: Digit;
            (sum, carry) = add_with_carry(x, y, carry);
            mag.push(sum);
        }
        mag.push(carry);
        Nat { mag }.trim()
    }

    pub fn checked_sub(&self, n2: &Nat) -> Option<Nat> {
        if self < n2 {
            return None;
        }
        let mut borrow: Digit = 0;
        let mut mag = Vec::with_capacity(self.width());
        for (i, &x) in self.mag.iter().enumerate() {
            let y = n2.mag.get(i).copied().unwrap_or(0);
            let diff: Digit;
            (diff, borrow) = sub_with_borrow(x, y, borrow);
            mag.push(diff);
        }
        debug_assert_eq!(borrow, 0);
        Some(Nat { mag }.trim())
    }

    // pre-condition: self >= n2
    pub fn sub(&self, n2: &Nat) -> Nat {
        match self.checked_sub(n2) {
            Some(diff) => diff,
            None => panic!("Nat::sub - underflow"),
        }
    }

    // acc += self * x
    fn add_mul_row(&self, x: Digit, acc: &mut [Digit]) -> Digit {
        debug_assert_eq!(self.width(), acc.len(), "add_mul_row - length mismatch.");
        let mut carry: Digit = 0;
        for (i, &a) in self.mag.iter().enumerate() {
            (acc[i], carry) = mul_add_carry(a, x, acc[i], carry);
        }
        carry
    }

    // elementary school-book multiplication
    pub fn mul(&self, n2: &Nat) -> Nat {
        if self.is_zero() || n2.is_zero() {
            return Nat::zero();
        }
        let w = n2.width();
        let mut acc: Vec<Digit> = vec![0; self.width() + w];
        for (i, &a) in self.mag.iter().enumerate() {
            let carry = n2.add_mul_row(a, &mut acc[i..i + w]);
            // the carry lands in the column 'right' of i + count_digits_in_n2
            acc[i + w] = carry;
        }
        Nat { mag: acc }.trim()
    }

    // self * m + a
    pub fn mul_add_digit(&self, m: Digit, a: Digit) -> Nat {
        let mut mag = Vec::with_capacity(self.width() + 1);
        let mut carry = a;
        for &d in self.mag.iter() {
            let lo: Digit;
            (lo, carry) = mul_add_carry(d, m, 0, carry);
            mag.push(lo);
        }
        mag.push(carry);
        Nat { mag }.trim()
    }

    pub fn shl(&self, count: u32) -> Nat {
        if self.is_zero() {
            return Nat::zero();
        }
        let (offset, shift) = ((count / Digit::BITS) as usize, count % Digit::BITS);
        let mut mag = vec![0; offset];
        if shift == 0 {
            mag.extend_from_slice(&self.mag);
        } else {
            let mut carry: Digit = 0;
            for &d in self.mag.iter() {
                mag.push((d << shift) | carry);
                carry = d >> (Digit::BITS - shift);
            }
            mag.push(carry);
        }
        Nat { mag }.trim()
    }

    pub fn shr(&self, count: u32) -> Nat {
        let (offset, shift) = ((count / Digit::BITS) as usize, count % Digit::BITS);
        if offset >= self.width() {
            return Nat::zero();
        }
        let src = &self.mag[offset..];
        let mag: Vec<Digit> = if shift == 0 {
            src.to_vec()
        } else {
            src.iter()
                .enumerate()
                .map(|(i, &d)| {
                    let hi = src.get(i + 1).map_or(0, |&n| n << (Digit::BITS - shift));
                    (d >> shift) | hi
                })
                .collect()
        };
        Nat { mag }.trim()
    }

    // self mod 2^count
    pub fn low_bits(&self, count: u32) -> Nat {
        let (len, rem) = ((count / Digit::BITS) as usize, count % Digit::BITS);
        if len >= self.width() {
            return self.clone();
        }
        let mut mag = self.mag[..len].to_vec();
        if rem > 0 {
            mag.push(self.mag[len] & ((1 << rem) - 1));
        }
        Nat { mag }.trim()
    }

    pub fn hex_str(&self) -> String {
        let mut s = String::from("0x");
        match self.mag.split_last() {
            None => s.push('0'),
            Some((&ld, rest)) => {
                s.push_str(&format!("{ld:x}"));
                for &v in rest.iter().rev() {
                    s.push_str(&format!("{v:016x}"));
                }
            }
        }
        s
    }

    pub fn dec_str(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        // peel off base 10^19 chunks, least-significant first.
        let mut chunks: Vec<Digit> = Vec::new();
        let mut n = self.clone();
        while !n.is_zero() {
            let (q, r) = n.divide_by_digit(DEC_CHUNK);
            chunks.push(r);
            n = q;
        }
        let mut s = String::new();
        for (i, c) in chunks.iter().rev().enumerate() {
            if i == 0 {
                s.push_str(&c.to_string());
            } else {
                s.push_str(&format!("{c:0width$}", width = DEC_CHUNK_LEN));
            }
        }
        s
    }

    pub fn from_dec_str(s: &str) -> Result<Nat, Error> {
        let parse_err = |reason| Error::Parse { input: s.to_string(), reason };
        let chars: Vec<u8> = s.bytes().filter(|&c| c != b'_').collect();
        if chars.is_empty() {
            return Err(parse_err("no decimal digits"));
        }
        let mut n = Nat::zero();
        for chunk in chars.chunks(DEC_CHUNK_LEN) {
            let mut v: Digit = 0;
            for &c in chunk {
                if !c.is_ascii_digit() {
                    return Err(parse_err("bad decimal char"));
                }
                v = v * 10 + (c - b'0') as Digit;
            }
            n = n.mul_add_digit(10_u64.pow(chunk.len() as u32), v);
        }
        Ok(n)
    }
}

impl Ord for Nat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.width()
            .cmp(&other.width())
            .then_with(|| self.mag.iter().rev().cmp(other.mag.iter().rev()))
    }
}

impl PartialOrd for Nat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Digit> for Nat {
    fn from(d: Digit) -> Self {
        Nat::from_digit(d)
    }
}

impl From<u128> for Nat {
    fn from(v: u128) -> Self {
        Nat::from_le_digits(vec![v as Digit, (v >> Digit::BITS) as Digit])
    }
}

impl From<bool> for Nat {
    fn from(b: bool) -> Self {
        Nat::from_digit(b as Digit)
    }
}

impl FromStr for Nat {
    type Err = Error;

    // decimal, or hex with a "0x" prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match hex::strip_prefix(s) {
            Some(_) => Ok(Nat::from_le_digits(hex::le_digits(s)?)),
            None => Nat::from_dec_str(s),
        }
    }
}

impl std::fmt::Display for Nat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(true, "", &self.dec_str())
    }
}

impl std::fmt::LowerHex for Nat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = self.hex_str();
        f.pad_integral(true, "0x", &s[2..])
    }
}

#[cfg(test)]
mod nat_test {
    use quickcheck_macros::quickcheck;

    use crate::nat::Nat;
    use crate::Error;

    fn init() {
        crate::init_logger(true)
    }

    #[test]
    fn nat_create() {
        init();
        assert!(Nat::zero().is_zero());
        assert_eq!(Nat::from_digit(0), Nat::zero());
        assert_eq!(Nat::from_le_digits(vec![7, 0, 0]).digits(), [7]);
        assert!(Nat::one().is_one());
        assert_eq!(Nat::pow2(0), Nat::one());
        assert_eq!(Nat::pow2(64).digits(), [0, 1]);
        assert_eq!(Nat::pow2(256).bit_len(), 257);
        assert_eq!(Nat::pow2(130).digits(), [0, 0, 4]);
    }

    #[test]
    fn nat_bits() {
        init();
        let n = Nat::from_le_digits(vec![0x8000000000000001, 0b101]);
        assert_eq!(n.bit_len(), 67);
        assert!(n.test_bit(0));
        assert!(!n.test_bit(1));
        assert!(n.test_bit(63));
        assert!(n.test_bit(64));
        assert!(!n.test_bit(65));
        assert!(n.test_bit(66));
        assert!(!n.test_bit(4096));
        assert!(n.is_odd());
        assert_eq!(Nat::zero().bit_len(), 0);
        assert!(Nat::zero().is_even());
    }

    #[test]
    fn nat_cmp() {
        init();
        let n0 = Nat::zero();
        let n1 = Nat::one();
        let n2 = Nat::from_digit(2);
        let big = Nat::from_le_digits(vec![0, 1]);
        let bigger = Nat::from_le_digits(vec![5, 1]);
        assert!(n0 < n1 && n1 < n2);
        assert!(n2 < big && big < bigger);
        assert!(bigger > Nat::from_digit(u64::MAX));
        assert_eq!(big.clone().max(bigger.clone()), bigger);
    }

    #[test]
    fn nat_add_sub() {
        init();
        let max = Nat::from_le_digits(vec![u64::MAX, u64::MAX]);
        let sum = max.add(&Nat::one());
        assert_eq!(sum.digits(), [0, 0, 1]);
        assert_eq!(sum.sub(&Nat::one()), max);
        assert_eq!(sum.sub(&sum), Nat::zero());
        assert_eq!(Nat::one().checked_sub(&Nat::from_digit(2)), None);
        assert_eq!(Nat::from_digit(9).checked_sub(&Nat::zero()), Some(Nat::from_digit(9)));
    }

    #[test]
    #[should_panic(expected = "Nat::sub - underflow")]
    fn nat_sub_underflow() {
        let _ = Nat::one().sub(&Nat::from_digit(2));
    }

    #[test]
    fn nat_mul() {
        init();
        let max = Nat::from_digit(u64::MAX);
        assert_eq!(max.mul(&max).digits(), [1, u64::MAX - 1]);
        assert_eq!(max.mul(&Nat::zero()), Nat::zero());
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        let m = Nat::from(u128::MAX);
        assert_eq!(m.mul(&m).digits(), [1, 0, u64::MAX - 1, u64::MAX]);
        assert_eq!(Nat::from_digit(10).mul_add_digit(10, 5), Nat::from_digit(105));
    }

    #[test]
    fn nat_shifts() {
        init();
        let n = Nat::from_le_digits(vec![0xAAA, 0xBBB, 0xCCC, 0xDDD]);
        assert_eq!(n.shl(0), n);
        assert_eq!(n.shr(0), n);
        assert_eq!(n.shl(128).digits(), [0, 0, 0xAAA, 0xBBB, 0xCCC, 0xDDD]);
        assert_eq!(n.shr(128).digits(), [0xCCC, 0xDDD]);
        assert_eq!(n.shr(4).digits(), [
            0xB0000000_000000AA,
            0xC0000000_000000BB,
            0xD0000000_000000CC,
            0x00000000_000000DD,
        ]);
        assert_eq!(n.shl(60).digits(), [
            0xA0000000_00000000,
            0xB0000000_000000AA,
            0xC0000000_000000BB,
            0xD0000000_000000CC,
            0xDD,
        ]);
        assert_eq!(n.shr(256), Nat::zero());
        assert_eq!(Nat::zero().shl(77), Nat::zero());
    }

    #[test]
    fn nat_low_bits() {
        init();
        let n = Nat::from_le_digits(vec![u64::MAX, u64::MAX, 3]);
        assert_eq!(n.low_bits(0), Nat::zero());
        assert_eq!(n.low_bits(4).digits(), [0xF]);
        assert_eq!(n.low_bits(64).digits(), [u64::MAX]);
        assert_eq!(n.low_bits(129).digits(), [u64::MAX, u64::MAX, 1]);
        assert_eq!(n.low_bits(512), n);
        assert_eq!(Nat::pow2(512).low_bits(512), Nat::zero());
    }

    #[test]
    fn nat_strings() {
        init();
        let n: Nat = "340282366920938463463374607431768211456".parse().unwrap();
        assert_eq!(n, Nat::pow2(128));
        assert_eq!(n.to_string(), "340282366920938463463374607431768211456");
        assert_eq!(n.hex_str(), "0x100000000000000000000000000000000");
        assert_eq!(format!("{:x}", n), "100000000000000000000000000000000");
        assert_eq!(format!("{:#x}", Nat::from_digit(255)), "0xff");
        let h: Nat = "0x1_0000_0000_0000_0000".parse().unwrap();
        assert_eq!(h, Nat::pow2(64));
        assert_eq!(Nat::zero().to_string(), "0");
        assert_eq!(Nat::zero().hex_str(), "0x0");
        assert_eq!("10000000000000000000".parse::<Nat>().unwrap().digits(), [10_000_000_000_000_000_000]);
        assert!(matches!("12a".parse::<Nat>(), Err(Error::Parse { .. })));
        assert!(matches!("".parse::<Nat>(), Err(Error::Parse { .. })));
    }

    #[quickcheck]
    fn qc_matches_u128(a: u64, b: u64, c: u64) -> bool {
        let (x, y) = (a as u128, ((b as u128) << 64) | c as u128);
        let sum = Nat::from(x).add(&Nat::from(y));
        let prod = Nat::from(x).mul(&Nat::from(b as u128));
        x.checked_add(y).map_or(true, |s| sum == Nat::from(s))
            && sum.shr(1).add(&sum.shr(1)).add(&Nat::from(sum.is_odd())) == sum
            && prod == Nat::from(x * b as u128)
            && Nat::from(y).checked_sub(&Nat::from(x)) == y.checked_sub(x).map(Nat::from)
            && (x < y) == (Nat::from(x) < Nat::from(y))
    }

    #[quickcheck]
    fn qc_sub_from_sum(a: Nat, b: Nat) -> bool {
        a.add(&b).sub(&a) == b
    }

    #[quickcheck]
    fn qc_shift_round_trip(a: Nat, s: u16) -> bool {
        let s = s as u32 % 1024;
        a.shl(s).shr(s) == a && a.shl(s).low_bits(s).is_zero()
    }

    #[quickcheck]
    fn qc_dec_round_trip(a: Nat) -> bool {
        a.to_string().parse::<Nat>() == Ok(a.clone()) && a.hex_str().parse::<Nat>() == Ok(a)
    }
}
