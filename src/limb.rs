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

//! The limb codec: 256-bit words to and from unbounded naturals.
//!
//! A multi-word value is a little-endian sequence of limbs; limb `i` carries
//! weight (2^256)^i.

use std::fmt::Formatter;
use std::str::FromStr;

use crate::nat::Nat;
use crate::{Digit, Error};

pub const LIMB_BITS: u32 = 256;
pub const LIMB_DIGITS: usize = (LIMB_BITS / Digit::BITS) as usize;

/// One 256-bit word, as little-endian 64-bit digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Limb(pub [Digit; LIMB_DIGITS]);

impl Limb {
    pub const ZERO: Limb = Limb([0; LIMB_DIGITS]);
    pub const ONE: Limb = Limb([1, 0, 0, 0]);
    pub const MAX: Limb = Limb([Digit::MAX; LIMB_DIGITS]);

    pub fn to_nat(&self) -> Nat {
        Nat::from_le_digits(self.0.to_vec())
    }
}

impl From<Digit> for Limb {
    fn from(d: Digit) -> Self {
        Limb([d, 0, 0, 0])
    }
}

impl From<Limb> for Nat {
    fn from(limb: Limb) -> Self {
        limb.to_nat()
    }
}

impl TryFrom<&Nat> for Limb {
    type Error = Error;

    fn try_from(n: &Nat) -> Result<Self, Self::Error> {
        if n.bit_len() > LIMB_BITS {
            return Err(Error::Headroom { bits: n.bit_len(), limbs: 1 });
        }
        let mut r = [0; LIMB_DIGITS];
        for (dst, &src) in r.iter_mut().zip(n.digits()) {
            *dst = src;
        }
        Ok(Limb(r))
    }
}

impl FromStr for Limb {
    type Err = Error;

    // decimal, or hex with a "0x" prefix; the value must fit 256 bits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: Nat = s.parse()?;
        Limb::try_from(&n).map_err(|_| Error::Parse { input: s.to_string(), reason: "value exceeds 256 bits" })
    }
}

impl std::fmt::Display for Limb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.to_nat(), f)
    }
}

impl std::fmt::LowerHex for Limb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.to_nat(), f)
    }
}

/// Σ limbs[i] · (2^256)^i
pub fn reconstruct(limbs: &[Limb]) -> Nat {
    let digits: Vec<Digit> = limbs.iter().flat_map(|l| l.0).collect();
    Nat::from_le_digits(digits)
}

/// Splits `value` into exactly `limb_count` limbs, least-significant first.
///
/// Limb `i` is the value's digits `4i..4i+4`, i.e. the remainder of
/// value / (2^256)^i by 2^256. A value that does not fit, or a zero
/// `limb_count`, is a headroom error, never a silent wrap: callers size
/// `limb_count` for the operator's worst case.
pub fn decompose(value: &Nat, limb_count: usize) -> Result<Vec<Limb>, Error> {
    let needed = value.digits().len().div_ceil(LIMB_DIGITS);
    if limb_count == 0 || needed > limb_count {
        let bits = value.bit_len();
        log::debug!("decompose - {bits}-bit value overflows {limb_count} limb(s)");
        return Err(Error::Headroom { bits, limbs: limb_count });
    }
    let mut limbs = vec![Limb::ZERO; limb_count];
    for (limb, chunk) in limbs.iter_mut().zip(value.digits().chunks(LIMB_DIGITS)) {
        limb.0[..chunk.len()].copy_from_slice(chunk);
    }
    Ok(limbs)
}
