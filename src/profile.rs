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

//! Operand-width configurations.
//!
//! A profile fixes how many limbs each operand spans, how many limbs the
//! result is split into, and which operators the configuration defines.

use crate::op::Operator;
use crate::Error;

const ARITH: &[Operator] = &[
    Operator::Add,
    Operator::Sub,
    Operator::Mul,
    Operator::Div,
    Operator::Mod,
    Operator::Lt,
    Operator::Gt,
    Operator::Eq,
    Operator::Ge,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub left_limbs: usize,
    // zero for profiles of unary operators.
    pub right_limbs: usize,
    // None derives the count from the operator's headroom.
    pub output_limbs: Option<usize>,
    pub operators: &'static [Operator],
}

impl Profile {
    pub const ARITH_512: Profile = Profile {
        name: "arith512",
        left_limbs: 2,
        right_limbs: 2,
        output_limbs: None,
        operators: ARITH,
    };

    pub const ARITH_1024: Profile = Profile {
        name: "arith1024",
        left_limbs: 4,
        right_limbs: 4,
        output_limbs: None,
        operators: ARITH,
    };

    pub const DIV_512_BY_256: Profile = Profile {
        name: "div512x256",
        left_limbs: 2,
        right_limbs: 1,
        output_limbs: Some(2),
        operators: &[Operator::Div],
    };

    // 512-bit operands arrive padded to three limbs.
    pub const MUL_512_IN_1024: Profile = Profile {
        name: "mul512x512",
        left_limbs: 3,
        right_limbs: 3,
        output_limbs: Some(4),
        operators: &[Operator::Mul],
    };

    pub const DIV_1024_IN_1024: Profile = Profile {
        name: "div1024x1024",
        left_limbs: 4,
        right_limbs: 4,
        output_limbs: Some(4),
        operators: &[Operator::Div],
    };

    pub const MUL_INVERSE_512: Profile = Profile {
        name: "mulinv512",
        left_limbs: 2,
        right_limbs: 0,
        output_limbs: Some(4),
        operators: &[Operator::ModInv],
    };

    pub const LOG2: Profile = Profile {
        name: "log2",
        left_limbs: 2,
        right_limbs: 0,
        output_limbs: Some(1),
        operators: &[Operator::Log2],
    };

    pub const SQRT_512: Profile = Profile {
        name: "sqrt512",
        left_limbs: 2,
        right_limbs: 0,
        output_limbs: None,
        operators: &[Operator::Sqrt],
    };

    pub const SQRT_1024: Profile = Profile {
        name: "sqrt1024",
        left_limbs: 4,
        right_limbs: 0,
        output_limbs: None,
        operators: &[Operator::Sqrt],
    };

    pub const ALL: [Profile; 9] = [
        Profile::ARITH_512,
        Profile::ARITH_1024,
        Profile::DIV_512_BY_256,
        Profile::MUL_512_IN_1024,
        Profile::DIV_1024_IN_1024,
        Profile::MUL_INVERSE_512,
        Profile::LOG2,
        Profile::SQRT_512,
        Profile::SQRT_1024,
    ];

    pub fn by_name(name: &str) -> Result<Profile, Error> {
        Profile::ALL
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::UnknownProfile(name.to_string()))
    }

    pub fn input_limbs(&self) -> usize {
        self.left_limbs + self.right_limbs
    }

    pub fn supports(&self, op: Operator) -> bool {
        self.operators.contains(&op)
    }

    pub fn output_limbs_for(&self, op: Operator) -> usize {
        self.output_limbs.unwrap_or_else(|| op.headroom(self.left_limbs))
    }

    pub(crate) fn check(&self, op: Operator, found: usize) -> Result<(), Error> {
        if !self.supports(op) {
            return Err(Error::UnsupportedOperator { op, profile: self.name });
        }
        if found != self.input_limbs() {
            return Err(Error::LimbCount { profile: self.name, expected: self.input_limbs(), found });
        }
        Ok(())
    }
}

#[cfg(test)]
mod profile_tests {
    use crate::op::Operator;
    use crate::profile::Profile;
    use crate::Error;

    #[test]
    fn lookup() {
        crate::init_logger(true);
        for p in Profile::ALL {
            assert_eq!(Profile::by_name(p.name), Ok(p));
            // every operator a profile defines matches its operand layout
            for &op in p.operators {
                assert_eq!(op.arity() == 1, p.right_limbs == 0, "{} {}", p.name, op);
            }
        }
        assert_eq!(Profile::by_name("arith2048"), Err(Error::UnknownProfile("arith2048".to_string())));
    }

    #[test]
    fn output_limbs() {
        crate::init_logger(true);
        assert_eq!(Profile::ARITH_512.output_limbs_for(Operator::Add), 3);
        assert_eq!(Profile::ARITH_512.output_limbs_for(Operator::Mul), 4);
        assert_eq!(Profile::ARITH_1024.output_limbs_for(Operator::Sub), 5);
        assert_eq!(Profile::ARITH_1024.output_limbs_for(Operator::Mul), 8);
        assert_eq!(Profile::DIV_1024_IN_1024.output_limbs_for(Operator::Div), 4);
        assert_eq!(Profile::SQRT_1024.output_limbs_for(Operator::Sqrt), 4);
        assert_eq!(Profile::MUL_INVERSE_512.output_limbs_for(Operator::ModInv), 4);
    }

    #[test]
    fn check_rejects_mismatches() {
        crate::init_logger(true);
        assert_eq!(Profile::ARITH_1024.check(Operator::Add, 8), Ok(()));
        assert_eq!(Profile::ARITH_1024.check(Operator::Add, 7),
                   Err(Error::LimbCount { profile: "arith1024", expected: 8, found: 7 }));
        assert_eq!(Profile::DIV_512_BY_256.check(Operator::Mul, 3),
                   Err(Error::UnsupportedOperator { op: Operator::Mul, profile: "div512x256" }));
        assert!(Profile::ARITH_512.check(Operator::Sqrt, 4).is_err());
    }
}
