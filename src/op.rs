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

use std::fmt::Formatter;
use std::str::FromStr;

use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    Gt,
    Eq,
    Ge,
    Sqrt,
    Log2,
    ModInv,
}

impl Operator {
    pub const ALL: [Operator; 12] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
        Operator::Lt,
        Operator::Gt,
        Operator::Eq,
        Operator::Ge,
        Operator::Sqrt,
        Operator::Log2,
        Operator::ModInv,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
            Operator::Mod => "mod",
            Operator::Lt => "lt",
            Operator::Gt => "gt",
            Operator::Eq => "eq",
            Operator::Ge => "ge",
            Operator::Sqrt => "sqrt",
            Operator::Log2 => "log2",
            Operator::ModInv => "modinv",
        }
    }

    // count of operands
    pub fn arity(&self) -> usize {
        match self {
            Operator::Sqrt | Operator::Log2 | Operator::ModInv => 1,
            _ => 2,
        }
    }

    /// Output limbs that hold the worst-case result for operands of
    /// `operand_limbs` limbs, sentinels included.
    pub fn headroom(&self, operand_limbs: usize) -> usize {
        match self {
            Operator::Mul => 2 * operand_limbs,
            Operator::Sqrt => operand_limbs,
            Operator::Log2 => 1,
            // inverse modulo 2^512
            Operator::ModInv => 2,
            _ => operand_limbs + 1,
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::InvalidOperator(s.to_string()))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
