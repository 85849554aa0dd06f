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

use thiserror::Error;

use crate::op::Operator;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid operator '{0}'")]
    InvalidOperator(String),
    #[error("operator '{op}' is not defined for the {profile} profile")]
    UnsupportedOperator { op: Operator, profile: &'static str },
    #[error("unknown profile '{0}'")]
    UnknownProfile(String),
    #[error("{profile} expects {expected} limbs, found {found}")]
    LimbCount { profile: &'static str, expected: usize, found: usize },
    #[error("operator '{op}' takes {expected} operand(s), found {found}")]
    Operands { op: Operator, expected: usize, found: usize },
    #[error("operator '{op}' is undefined for this operand: {reason}")]
    Domain { op: Operator, reason: &'static str },
    #[error("a {bits}-bit value does not fit in {limbs} limb(s)")]
    Headroom { bits: u32, limbs: usize },
    #[error("cannot parse '{input}': {reason}")]
    Parse { input: String, reason: &'static str },
}
