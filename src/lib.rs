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

//! Reference arithmetic for multi-word unsigned integers.
//!
//! Operands arrive as little-endian sequences of 256-bit limbs. They are
//! reconstructed into unbounded naturals, combined by one [`Operator`], and the
//! result is split back into limbs, substituting the sentinel values a
//! non-reverting virtual machine would produce instead of failing.

use std::io::Write;

use chrono::Local;
use env_logger::Builder;
use log::LevelFilter;

pub mod bits;
pub mod engine;
pub mod error;
pub mod hex;
pub mod kdiv;
pub mod limb;
pub mod nat;
pub mod op;
pub mod profile;
pub mod roots;

pub use engine::{evaluate, Operands};
pub use error::Error;
pub use limb::{decompose, reconstruct, Limb, LIMB_BITS};
pub use nat::Nat;
pub use op::Operator;
pub use profile::Profile;

pub type Digit = u64;

// RUST_LOG, when set, takes precedence over the Info default.
pub fn init_logger(is_test: bool) {
    let _ = Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                     "{} [{}] - {}",
                     Local::now().format("%Y-%m-%dT%H:%M:%S"),
                     record.level(),
                     record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .is_test(is_test)
        .try_init();
}

#[cfg(test)]
use quickcheck::Arbitrary;

#[cfg(test)]
impl Arbitrary for Nat {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // keep operands within a few thousand bits
        let len = usize::arbitrary(g) % 17;
        let digits: Vec<Digit> = (0..len).map(|_| Digit::arbitrary(g)).collect();
        Nat::from_le_digits(digits)
    }
}

#[cfg(test)]
impl Arbitrary for Limb {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut r = [0 as Digit; limb::LIMB_DIGITS];
        for d in r.iter_mut() {
            *d = Digit::arbitrary(g);
        }
        Limb(r)
    }
}
