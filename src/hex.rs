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

use crate::{Digit, Error};

const HEX_CHARS_PER_DIGIT: usize = (Digit::BITS / 4) as usize;

pub fn val(c: u8) -> Result<u8, char> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(10 + c - b'a'),
        b'A'..=b'F' => Ok(10 + c - b'A'),
        _ => {
            log::debug!("hex - reject '{}'", c as char);
            Err(c as char)
        },
    }
}

// obtains the digit value of at most 16 hex chars.
fn to_digit(s: &[u8]) -> Result<Digit, char> {
    debug_assert!(!s.is_empty() && s.len() <= HEX_CHARS_PER_DIGIT);
    let mut n: Digit = 0;
    for &hd in s.iter() {
        n = (n << 4) | val(hd)? as Digit;
    }
    Ok(n)
}

pub fn strip_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

// creates a little-endian vector of digits from a "0x" prefixed hex str.
// underscores may separate groups of hex chars.
pub fn le_digits(s: &str) -> Result<Vec<Digit>, Error> {
    let parse_err = |reason| Error::Parse { input: s.to_string(), reason };
    let body = strip_prefix(s).ok_or_else(|| parse_err("hex string must start with '0x'"))?;
    let chars: Vec<u8> = body.bytes().filter(|&c| c != b'_').collect();
    if chars.is_empty() {
        return Err(parse_err("no hex digits"));
    }
    // chunk from the least-significant end so that only the leading chunk is short.
    chars
        .rchunks(HEX_CHARS_PER_DIGIT)
        .map(|hc| to_digit(hc).map_err(|_| parse_err("bad hex char")))
        .collect()
}

#[cfg(test)]
mod hex_tests {
    use crate::hex::le_digits;
    use crate::Error;

    #[test]
    fn short_and_long_chunks() {
        crate::init_logger(true);
        {
            let v = le_digits("0x0").unwrap();
            assert_eq!(v, [0]);
        }
        {
            let s = "0x000000000000000100000000000000020000000000000003000000000000000400000000000000050000000000000006";
            let v = le_digits(s).unwrap();
            assert_eq!(v, [6, 5, 4, 3, 2, 1]);
        }
        {
            let v = le_digits("0xffff").unwrap();
            assert_eq!(v, [0xffff]);
        }
        {
            let v = le_digits("0X10000").unwrap();
            assert_eq!(v, [65536]);
        }
        {
            let v = le_digits("0xffffffffffffffffffffffffffffffff").unwrap();
            assert_eq!(v, [0xffffffffffffffff, 0xffffffffffffffff]);
        }
        {
            let v = le_digits("0x2f684bda12f684bdc71c71c71c71c71c8e38e38e38e38e38f684bda12f684bda").unwrap();
            assert_eq!(v, [0xf684bda12f684bda, 0x8e38e38e38e38e38, 0xc71c71c71c71c71c, 0x2f684bda12f684bd]);
        }
        {
            let v = le_digits("0x100000000000000010000000000000002").unwrap();
            assert_eq!(v, [2, 1, 1]);
            let v = le_digits("0x4_0000_0000_0000_0001").unwrap();
            assert_eq!(v, [1, 4]);
        }
    }

    #[test]
    fn rejects_bad_input() {
        crate::init_logger(true);
        assert!(matches!(le_digits("ff"), Err(Error::Parse { .. })));
        assert!(matches!(le_digits("0x"), Err(Error::Parse { .. })));
        assert!(matches!(le_digits("0x12g4"), Err(Error::Parse { .. })));
    }
}
