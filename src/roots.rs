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

//! Exact integer square root, base-2 logarithm and inverses modulo powers of two.
//!
//! Every routine works on the full magnitude; no floating point is involved,
//! so results stay exact at any width.

use crate::nat::Nat;

impl Nat {
    /// floor(sqrt(self)), by Newton's iteration on integers.
    pub fn sqrt(&self) -> Nat {
        if self.is_zero() {
            return Nat::zero();
        }
        // 2^ceil(bits/2) is never below the root, so the iterates decrease
        // monotonically until they reach it.
        let mut x = Nat::pow2((self.bit_len() + 1) / 2);
        loop {
            let y = x.add(&self.div(&x)).shr(1);
            if y >= x {
                return x;
            }
            x = y;
        }
    }

    /// floor(log2(self)); None for zero.
    pub fn log2(&self) -> Option<u32> {
        self.bit_len().checked_sub(1)
    }

    /// The inverse of self modulo 2^k, by Newton/Hensel lifting.
    /// None when self is even, since it then shares the factor 2 with the modulus.
    pub fn inverse_mod_pow2(&self, k: u32) -> Option<Nat> {
        let b = self.low_bits(k);
        if b.is_even() {
            return None;
        }
        // every odd b satisfies b * b == 1 (mod 8); each step doubles the correct bits.
        let two_plus_modulus = Nat::pow2(k).add(&Nat::from_digit(2));
        let mut x = b.low_bits(3);
        let mut precision = 3;
        while precision < k {
            let bx = b.mul(&x).low_bits(k);
            x = x.mul(&two_plus_modulus.sub(&bx)).low_bits(k);
            precision *= 2;
        }
        let x = x.low_bits(k);
        debug_assert!(k == 0 || b.mul(&x).low_bits(k).is_one());
        Some(x)
    }
}
