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

use crate::bits::leading_zeroes_count;
use crate::nat::Nat;
use crate::Digit;

const BASE: u128 = 1 << Digit::BITS;

impl Nat {
    /// Floor division with remainder.
    ///
    /// Panics when the divisor is zero; callers that must not fault
    /// substitute the divisor beforehand.
    pub fn div_rem(&self, divisor: &Nat) -> (/* quotient */ Nat, /* remainder */ Nat) {
        assert!(!divisor.is_zero(), "Nat::div_rem - division by zero error");

        if self < divisor {
            (Nat::zero(), self.clone())
        } else if let Some(d) = divisor.digit_value() {
            let (q, r) = self.divide_by_digit(d);
            (q, Nat::from_digit(r))
        } else {
            self.div_knuth(divisor)
        }
    }

    pub fn div(&self, divisor: &Nat) -> Nat {
        self.div_rem(divisor).0
    }

    pub fn rem(&self, divisor: &Nat) -> Nat {
        self.div_rem(divisor).1
    }

    // short division, one digit at a time from the most significant end.
    pub(crate) fn divide_by_digit(&self, d: Digit) -> (Nat, Digit) {
        assert!(d > 0, "Nat::divide_by_digit - division by zero error");
        let mut q = vec![0; self.width()];
        let mut r: u128 = 0;
        for (i, &nd) in self.mag.iter().enumerate().rev() {
            let cur = (r << Digit::BITS) | nd as u128;
            q[i] = (cur / d as u128) as Digit;
            r = cur % d as u128;
        }
        (Nat::from_le_digits(q), r as Digit)
    }

    // Knuth, TAOCP vol 2, 4.3.1, algorithm D.
    // pre-conditions:
    // divisor has at least two digits, and self >= divisor.
    fn div_knuth(&self, divisor: &Nat) -> (Nat, Nat) {
        let m = self.width();
        let n = divisor.width();
        assert!(n > 1 && m >= n);

        // D1. normalize: shift both operands so that the divisor's leading bit is set.
        let s = leading_zeroes_count(divisor.mag[n - 1]);
        let vn = divisor.shl(s).mag;
        debug_assert_eq!(vn.len(), n);
        debug_assert_eq!(vn[n - 1] >> (Digit::BITS - 1), 1);
        let mut un = self.shl(s).mag;
        un.resize(m + 1, 0);
        log::trace!("div_knuth - m = {m}, n = {n}, s = {s}");

        let vn_ld = vn[n - 1] as u128;
        let vn_sd = vn[n - 2] as u128;
        let mut quotient = vec![0 as Digit; m - n + 1];

        for j in (0..=m - n).rev() {
            // D3. estimate q from the leading two digits of the current remainder.
            let un_s2d = ((un[j + n] as u128) << Digit::BITS) | un[j + n - 1] as u128;
            let mut q = un_s2d / vn_ld;
            let mut r = un_s2d % vn_ld;
            while q >= BASE || q * vn_sd > ((r << Digit::BITS) | un[j + n - 2] as u128) {
                q -= 1;
                r += vn_ld;
                if r >= BASE {
                    break;
                }
            }

            // D4. multiply and subtract q * vn from un[j..=j + n].
            let mut borrow: Digit = 0;
            let mut carry: Digit = 0;
            for i in 0..n {
                let p = q * vn[i] as u128 + carry as u128;
                carry = (p >> Digit::BITS) as Digit;
                let (t, b1) = un[i + j].overflowing_sub(p as Digit);
                let (t, b2) = t.overflowing_sub(borrow);
                un[i + j] = t;
                borrow = b1 as Digit + b2 as Digit;
            }
            let (t, b1) = un[j + n].overflowing_sub(carry);
            let (t, b2) = t.overflowing_sub(borrow);
            un[j + n] = t;

            // D6. add back; q was one too large.
            if b1 || b2 {
                log::trace!("div_knuth - D6. add-back at j = {j}");
                q -= 1;
                let mut k: Digit = 0;
                for i in 0..n {
                    let t = un[i + j] as u128 + vn[i] as u128 + k as u128;
                    un[i + j] = t as Digit;
                    k = (t >> Digit::BITS) as Digit;
                }
                un[j + n] = un[j + n].wrapping_add(k);
            }
            // D5.
            quotient[j] = q as Digit;
        }

        // D8. unnormalize the remainder.
        un.truncate(n);
        let remainder = Nat::from_le_digits(un).shr(s);
        (Nat::from_le_digits(quotient), remainder)
    }
}
