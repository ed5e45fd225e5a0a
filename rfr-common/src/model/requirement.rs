// rfr-common/src/model/requirement.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RfrError};

/// The six relational operators a requirement may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOperator {
    Less,
    LessOrEqual,
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
}

impl CompareOperator {
    pub const ALL: [CompareOperator; 6] = [
        CompareOperator::Less,
        CompareOperator::LessOrEqual,
        CompareOperator::Equal,
        CompareOperator::NotEqual,
        CompareOperator::Greater,
        CompareOperator::GreaterOrEqual,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOperator::Less => "<",
            CompareOperator::LessOrEqual => "<=",
            CompareOperator::Equal => "==",
            CompareOperator::NotEqual => "!=",
            CompareOperator::Greater => ">",
            CompareOperator::GreaterOrEqual => ">=",
        }
    }

    /// Evaluates `lhs <op> rhs`. Operand order is fixed.
    pub fn apply<T: Ord + ?Sized>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            CompareOperator::Less => lhs < rhs,
            CompareOperator::LessOrEqual => lhs <= rhs,
            CompareOperator::Equal => lhs == rhs,
            CompareOperator::NotEqual => lhs != rhs,
            CompareOperator::Greater => lhs > rhs,
            CompareOperator::GreaterOrEqual => lhs >= rhs,
        }
    }
}

impl FromStr for CompareOperator {
    type Err = RfrError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "<" => Ok(CompareOperator::Less),
            "<=" => Ok(CompareOperator::LessOrEqual),
            "==" => Ok(CompareOperator::Equal),
            "!=" => Ok(CompareOperator::NotEqual),
            ">" => Ok(CompareOperator::Greater),
            ">=" => Ok(CompareOperator::GreaterOrEqual),
            other => Err(RfrError::InvalidArgument(format!(
                "unsupported comparison operator '{other}' (expected one of <, <=, ==, !=, >, >=)"
            ))),
        }
    }
}

impl fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// What a requirement compares against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetSpec {
    /// Whatever the package index reports as newest.
    Latest,
    /// A version literal, used verbatim.
    Literal(String),
}

impl TargetSpec {
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("latest") {
            TargetSpec::Latest
        } else {
            TargetSpec::Literal(s.to_string())
        }
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSpec::Latest => f.write_str("latest"),
            TargetSpec::Literal(v) => f.write_str(v),
        }
    }
}

/// A declared dependency of a run: `name operator target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageRequirement {
    name: String,
    operator: CompareOperator,
    target: TargetSpec,
}

impl PackageRequirement {
    /// Validates the operator symbol and package name. Nothing is looked up.
    pub fn new(name: &str, operator: &str, target: &str) -> Result<Self> {
        let operator = CompareOperator::from_str(operator)?;
        Self::with_operator(name, operator, TargetSpec::parse(target))
    }

    pub fn with_operator(name: &str, operator: CompareOperator, target: TargetSpec) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RfrError::InvalidArgument(
                "package name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            operator,
            target,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operator(&self) -> CompareOperator {
        self.operator
    }

    pub fn target(&self) -> &TargetSpec {
        &self.target
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '!' | '~')
}

/// Parses `name<op>target`, e.g. `robotframework>=6.1` or `requests == latest`.
impl FromStr for PackageRequirement {
    type Err = RfrError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let name_end = input.find(|c: char| !is_name_char(c)).unwrap_or(input.len());
        let (name, rest) = input.split_at(name_end);
        let rest = rest.trim_start();
        let op_end = rest.find(|c: char| !is_operator_char(c)).unwrap_or(rest.len());
        let (op, target) = rest.split_at(op_end);
        let target = target.trim();

        if op.is_empty() {
            return Err(RfrError::InvalidArgument(format!(
                "requirement '{input}' has no comparison operator"
            )));
        }
        if target.is_empty() {
            return Err(RfrError::InvalidArgument(format!(
                "requirement '{input}' has no target version"
            )));
        }
        PackageRequirement::new(name, op, target)
    }
}

impl fmt::Display for PackageRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, self.operator, self.target)
    }
}
