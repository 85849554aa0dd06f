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

use crate::Digit;

// sub_with_borrow calculates: diff = x - y - borrow.
// The borrow input must be 0 or 1.
// The borrow_out is guaranteed to be 0 or 1.
pub fn sub_with_borrow(x: Digit, y: Digit, borrow: Digit) -> (/* diff */ Digit, /* borrow_out */ Digit) {
    debug_assert!(borrow <= 1);
    let (diff, o1) = x.overflowing_sub(y);
    let (diff, o2) = diff.overflowing_sub(borrow);
    (diff, o1 as Digit | o2 as Digit)
}

pub fn add_with_carry(x: Digit, y: Digit, carry: Digit) -> (/* sum */ Digit, /* carry_out */ Digit) {
    debug_assert!(carry <= 1);
    let (sum, o1) = x.overflowing_add(y);
    let (sum, o2) = sum.overflowing_add(carry);
    (sum, o1 as Digit | o2 as Digit)
}

// x * m + a + carry never exceeds 128 bits, so the (lo, hi) pair is exact.
pub fn mul_add_carry(x: Digit, m: Digit, a: Digit, carry: Digit) -> (/* lo */ Digit, /* hi */ Digit) {
    let t: u128 = x as u128 * m as u128 + a as u128 + carry as u128;
    (t as Digit, (t >> Digit::BITS) as Digit)
}

pub fn leading_zeroes_count(x: Digit) -> u32 {
    Digit::BITS - len_binary_digit(x)
}

pub fn len_binary_digit(a: Digit) -> u32 {
    let mut len = 0;
    let mut x = a;
    if x >= 1 << 32 {
        x >>= 32;
        len += 32;
    }
    if x >= 1 << 16 {
        x >>= 16;
        len += 16;
    }
    if x >= 1 << 8 {
        x >>= 8;
        len += 8;
    }
    len + LEN_8[x as usize] as u32
}

// "length" of a 8-bit value in binary representation.
pub const LEN_8: [u8; 256] = [
    0, 1, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8
];
