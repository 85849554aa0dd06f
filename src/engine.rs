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

//! The operation engine.
//!
//! Results mirror a virtual machine that does not revert: a zero divisor
//! behaves as one, and a subtraction that would go negative yields the
//! smallest value needing one limb more than the operands,
//! (2^256)^operand_limbs.

use crate::limb::{decompose, reconstruct, Limb, LIMB_BITS, LIMB_DIGITS};
use crate::nat::Nat;
use crate::op::Operator;
use crate::profile::Profile;
use crate::{Digit, Error};

/// The modulus of `modinv` is fixed at the square of the limb base.
pub const MODINV_MODULUS_BITS: u32 = 2 * LIMB_BITS;

/// What `log2` reports for the exact power 2^256.
pub const LOG2_MAX_EXPONENT: u32 = LIMB_BITS - 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operands {
    pub left: Nat,
    pub right: Option<Nat>,
}

impl Operands {
    pub fn binary(left: Nat, right: Nat) -> Self {
        Operands { left, right: Some(right) }
    }

    pub fn unary(left: Nat) -> Self {
        Operands { left, right: None }
    }

    // splits the raw limbs at the profile's operand boundary; the caller
    // has checked the limb count.
    pub(crate) fn from_limbs(profile: &Profile, limbs: &[Limb]) -> Self {
        let (l, r) = limbs.split_at(profile.left_limbs.min(limbs.len()));
        let left = reconstruct(l);
        match profile.right_limbs {
            0 => Operands::unary(left),
            _ => Operands::binary(left, reconstruct(r)),
        }
    }

    fn count(&self) -> usize {
        1 + self.right.is_some() as usize
    }
}

// (2^256)^operand_limbs, built digit by digit so any width is exact.
fn underflow_sentinel(operand_limbs: usize) -> Nat {
    let mut digits = vec![0; LIMB_DIGITS * operand_limbs];
    digits.push(1);
    Nat::from_le_digits(digits)
}

fn substitute_divisor(op: Operator, divisor: &Nat) -> Nat {
    if divisor.is_zero() {
        log::debug!("{op} - zero divisor treated as one");
        Nat::one()
    } else {
        divisor.clone()
    }
}

/// Computes one operation and applies the substitution policy.
///
/// `operand_limbs` is the nominal operand width; it only shapes the
/// subtraction underflow sentinel.
pub fn evaluate(op: Operator, operands: &Operands, operand_limbs: usize) -> Result<Nat, Error> {
    let a = &operands.left;
    let b = match (&operands.right, op.arity()) {
        (Some(b), 2) => Some(b),
        (None, 1) => None,
        _ => return Err(Error::Operands { op, expected: op.arity(), found: operands.count() }),
    };

    let result = match (op, b) {
        (Operator::Add, Some(b)) => a.add(b),
        (Operator::Sub, Some(b)) => match a.checked_sub(b) {
            Some(diff) => diff,
            None => {
                log::debug!("sub - underflow, sentinel (2^{LIMB_BITS})^{operand_limbs}");
                underflow_sentinel(operand_limbs)
            }
        },
        (Operator::Mul, Some(b)) => a.mul(b),
        (Operator::Div, Some(b)) => a.div(&substitute_divisor(op, b)),
        (Operator::Mod, Some(b)) => a.rem(&substitute_divisor(op, b)),
        (Operator::Lt, Some(b)) => Nat::from(a < b),
        (Operator::Gt, Some(b)) => Nat::from(a > b),
        (Operator::Eq, Some(b)) => Nat::from(a == b),
        (Operator::Ge, Some(b)) => Nat::from(a > b || a == b),
        (Operator::Sqrt, None) => a.sqrt(),
        (Operator::Log2, None) => {
            let e = a.log2().ok_or(Error::Domain { op, reason: "logarithm of zero" })?;
            // only the exact power 2^256 is reported one lower
            let e = if *a == Nat::pow2(LIMB_BITS) { LOG2_MAX_EXPONENT } else { e };
            Nat::from_digit(e as Digit)
        }
        (Operator::ModInv, None) => a
            .inverse_mod_pow2(MODINV_MODULUS_BITS)
            .ok_or(Error::Domain { op, reason: "even operand has no inverse modulo 2^512" })?,
        _ => unreachable!("operand count checked against arity"),
    };
    log::trace!("{op} - {} bit result", result.bit_len());
    Ok(result)
}

impl Profile {
    /// limbs → reconstruct → evaluate → decompose, for one operator of this profile.
    pub fn run(&self, op: Operator, limbs: &[Limb]) -> Result<Vec<Limb>, Error> {
        self.check(op, limbs.len())?;
        let operands = Operands::from_limbs(self, limbs);
        let result = evaluate(op, &operands, self.left_limbs)?;
        decompose(&result, self.output_limbs_for(op))
    }
}
