//! Domain entities: rule outline shapes

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_yaml::Value;

use crate::domain::error::{BuildResult, FormatError};

/// Label prefix for plain statements. Nodes carrying it are never renamed.
pub const IT_PREFIX: &str = "It ";

/// One rule entry as written in the outline, before validation.
///
/// Every field is optional so shape problems can be reported with
/// the rule's location instead of a bare deserializer message.
/// `it` and `comment` take any scalar as its YAML text (`it: 42` is `It 42`).
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RawRule {
    #[serde(deserialize_with = "scalar_field")]
    pub comment: Option<String>,
    pub given: Option<String>,
    pub when: Option<String>,
    #[serde(deserialize_with = "scalar_field")]
    pub it: Option<String>,
    pub and: Option<Vec<RawRule>>,
    pub then: Option<Vec<RawRule>>,
}

/// What a rule states. Exactly one per rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `given`: a precondition
    Given(String),
    /// `when`: an action
    When(String),
    /// `it`: a plain assertion
    It(String),
}

impl Statement {
    /// Display label with its role prefix.
    ///
    /// Preconditions and actions are sanitized, assertions are kept verbatim.
    pub fn label(&self) -> String {
        match self {
            Statement::Given(phrase) => format!("Given {}", sanitize(phrase)),
            Statement::When(phrase) => format!("When {}", sanitize(phrase)),
            Statement::It(phrase) => format!("{}{}", IT_PREFIX, phrase),
        }
    }
}

/// Nested rules below a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branches {
    /// `and`: continues the same kind of statement
    And(Vec<Rule>),
    /// `then`: branches into consequences
    Then(Vec<Rule>),
}

impl Branches {
    pub fn into_rules(self) -> Vec<Rule> {
        match self {
            Branches::And(rules) | Branches::Then(rules) => rules,
        }
    }
}

/// A validated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub statement: Statement,
    pub branches: Option<Branches>,
    pub comment: Option<String>,
}

/// Location of a rule inside the outline, e.g. `Root[0].then[1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulePath(String);

impl RulePath {
    pub fn root(key: &str) -> Self {
        Self(key.to_string())
    }

    pub fn index(&self, idx: usize) -> Self {
        Self(format!("{}[{}]", self.0, idx))
    }

    pub fn field(&self, name: &str) -> Self {
        Self(format!("{}.{}", self.0, name))
    }
}

impl fmt::Display for RulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Rule {
    /// Validate a raw rule and all rules nested below it.
    ///
    /// Statement precedence: `given`, then `when`, then `it`.
    /// Branch precedence: a non-empty `and` wins over `then`.
    pub fn from_raw(raw: RawRule, path: &RulePath) -> BuildResult<Self> {
        let RawRule {
            comment,
            given,
            when,
            it,
            and,
            then,
        } = raw;

        let statement = if let Some(phrase) = non_empty(given) {
            Statement::Given(phrase)
        } else if let Some(phrase) = non_empty(when) {
            Statement::When(phrase)
        } else if let Some(phrase) = non_empty(it) {
            Statement::It(phrase)
        } else {
            return Err(FormatError::MissingStatement {
                path: path.to_string(),
            });
        };

        let branches = match (non_empty_list(and), non_empty_list(then)) {
            (Some(rules), _) => Some(Branches::And(Self::from_raw_list(
                rules,
                &path.field("and"),
            )?)),
            (None, Some(rules)) => Some(Branches::Then(Self::from_raw_list(
                rules,
                &path.field("then"),
            )?)),
            (None, None) => None,
        };

        Ok(Self {
            statement,
            branches,
            comment: non_empty(comment),
        })
    }

    fn from_raw_list(rules: Vec<RawRule>, path: &RulePath) -> BuildResult<Vec<Self>> {
        rules
            .into_iter()
            .enumerate()
            .map(|(idx, raw)| Self::from_raw(raw, &path.index(idx)))
            .collect()
    }
}

/// Text of a scalar YAML value; `None` for collections, tagged values and null.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar_text(&value)
            .map(Some)
            .ok_or_else(|| de::Error::custom("expected a scalar value")),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn non_empty_list(value: Option<Vec<RawRule>>) -> Option<Vec<RawRule>> {
    value.filter(|v| !v.is_empty())
}

/// Strip everything outside `[A-Za-z0-9 ]` and trim surrounding whitespace.
pub fn sanitize(phrase: &str) -> String {
    static UNSAFE_CHARS: OnceLock<Regex> = OnceLock::new();
    let re = UNSAFE_CHARS.get_or_init(|| Regex::new(r"[^a-zA-Z0-9 ]").unwrap());
    re.replace_all(phrase, "").trim().to_string()
}
