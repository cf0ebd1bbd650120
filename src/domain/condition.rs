//! Conditional line recognition and condition evaluation.
//!
//! Handles lines of the shape `if <condition> then <command> [else <command>]`.
//! Branch commands are passed through verbatim — pipes and further chaining
//! inside a branch are interpreted by re-entering the normal pipeline, not
//! here. The condition grammar is a single comparison clause or a boolean
//! literal; anything else evaluates to `false` rather than erroring.

use regex::Regex;

use crate::domain::{ChainError, StateSnapshot};

/// Comparison operator of a condition clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Gt,
    Lt,
    Ge,
    Le,
    Eq,
    Ne,
}

impl Comparator {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(Self::Gt),
            "<" => Some(Self::Lt),
            ">=" => Some(Self::Ge),
            "<=" => Some(Self::Le),
            "==" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            _ => None,
        }
    }

    fn holds(self, actual: i64, expected: i64) -> bool {
        match self {
            Self::Gt => actual > expected,
            Self::Lt => actual < expected,
            Self::Ge => actual >= expected,
            Self::Le => actual <= expected,
            Self::Eq => actual == expected,
            Self::Ne => actual != expected,
        }
    }
}

/// A parsed condition: a literal, or one `field cmp value` comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionClause {
    Literal(bool),
    Compare {
        field: String,
        cmp: Comparator,
        value: i64,
    },
}

/// An `if` line split into its condition and branch commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalLine {
    pub condition: String,
    pub then_branch: String,
    pub else_branch: Option<String>,
}

impl ConditionalLine {
    /// Split an `if … then … [else …]` line, keywords case-insensitive.
    ///
    /// Returns `None` when the line is not an `if` line at all, and
    /// `Some(Err(MissingThen))` when it starts with `if` but has no `then`.
    pub fn parse(line: &str) -> Option<Result<Self, ChainError>> {
        let trimmed = line.trim();
        let rest = strip_keyword(trimmed, "if")?;

        let Some((condition, after_then)) = split_keyword(rest, "then") else {
            return Some(Err(ChainError::MissingThen));
        };

        let (then_branch, else_branch) = match split_keyword(after_then, "else") {
            Some((then_part, else_part)) => (then_part, Some(else_part.to_string())),
            None => (after_then, None),
        };

        Some(Ok(Self {
            condition: condition.to_string(),
            then_branch: then_branch.to_string(),
            else_branch,
        }))
    }
}

/// Strip a leading keyword followed by whitespace, case-insensitively.
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let head = text.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &text[keyword.len()..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_start())
}

/// Split `text` at the first whitespace-delimited occurrence of `keyword`,
/// case-insensitively, returning the trimmed halves.
fn split_keyword<'a>(text: &'a str, keyword: &str) -> Option<(&'a str, &'a str)> {
    // ASCII lowercasing keeps byte offsets aligned with the original text.
    let lower = text.to_ascii_lowercase();
    let needle = format!(" {keyword} ");
    let mut from = 0;
    while let Some(pos) = lower[from..].find(&needle) {
        let at = from + pos;
        let before = &text[..at];
        let after = &text[at + needle.len()..];
        let before = before.trim_end();
        let after = after.trim_start();
        if !before.is_empty() && !after.is_empty() {
            return Some((before, after));
        }
        from = at + 1;
    }
    None
}

/// Evaluates condition strings against a read-only state snapshot.
///
/// The clause grammar is compiled once; two-character comparators come first
/// in the alternation so `>=` is never read as `>`.
pub struct ConditionEvaluator {
    clause_re: Regex,
}

impl ConditionEvaluator {
    pub fn new() -> Self {
        let clause_re = Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*(>=|<=|==|!=|>|<)\s*(-?\d+)$")
            .expect("clause grammar is a valid regex");
        Self { clause_re }
    }

    /// Parse a condition string into a clause, or `None` when it matches
    /// neither grammar form.
    pub fn parse_clause(&self, condition: &str) -> Option<ConditionClause> {
        let condition = condition.trim();
        if condition.eq_ignore_ascii_case("true") {
            return Some(ConditionClause::Literal(true));
        }
        if condition.eq_ignore_ascii_case("false") {
            return Some(ConditionClause::Literal(false));
        }

        let caps = self.clause_re.captures(condition)?;
        let cmp = Comparator::from_symbol(&caps[2])?;
        let value = caps[3].parse().ok()?;
        Some(ConditionClause::Compare {
            field: caps[1].to_lowercase(),
            cmp,
            value,
        })
    }

    /// Evaluate a condition against the snapshot.
    ///
    /// Ungrammatical conditions and unknown fields evaluate to `false` —
    /// never an error.
    pub fn eval(&self, condition: &str, state: &StateSnapshot) -> bool {
        match self.parse_clause(condition) {
            Some(ConditionClause::Literal(value)) => value,
            Some(ConditionClause::Compare { field, cmp, value }) => match state.get(&field) {
                Some(actual) => cmp.holds(actual, value),
                None => false,
            },
            None => false,
        }
    }
}

impl Default for ConditionEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> StateSnapshot {
        StateSnapshot::from([("heat", 60), ("cash", 250), ("level", 3)])
    }

    #[test]
    fn test_split_if_then() {
        let cond = ConditionalLine::parse("if heat > 50 then hideout")
            .unwrap()
            .unwrap();
        assert_eq!(cond.condition, "heat > 50");
        assert_eq!(cond.then_branch, "hideout");
        assert_eq!(cond.else_branch, None);
    }

    #[test]
    fn test_split_if_then_else() {
        let cond = ConditionalLine::parse("if cash >= 100 then bank deposit else crime")
            .unwrap()
            .unwrap();
        assert_eq!(cond.condition, "cash >= 100");
        assert_eq!(cond.then_branch, "bank deposit");
        assert_eq!(cond.else_branch.as_deref(), Some("crime"));
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let cond = ConditionalLine::parse("IF heat > 50 THEN hideout ELSE status")
            .unwrap()
            .unwrap();
        assert_eq!(cond.then_branch, "hideout");
        assert_eq!(cond.else_branch.as_deref(), Some("status"));
    }

    #[test]
    fn test_branches_kept_verbatim() {
        let cond = ConditionalLine::parse("if true then status | grep cash && bank")
            .unwrap()
            .unwrap();
        assert_eq!(cond.then_branch, "status | grep cash && bank");
    }

    #[test]
    fn test_if_without_then_is_error() {
        assert_eq!(
            ConditionalLine::parse("if heat > 50"),
            Some(Err(ChainError::MissingThen))
        );
    }

    #[test]
    fn test_non_if_lines_pass_through() {
        assert_eq!(ConditionalLine::parse("status"), None);
        assert_eq!(ConditionalLine::parse("iffy command"), None);
        // 'if' as the whole line is not an if-line either
        assert_eq!(ConditionalLine::parse("if"), None);
    }

    #[test]
    fn test_literals() {
        let ev = ConditionEvaluator::new();
        assert!(ev.eval("true", &state()));
        assert!(ev.eval("TRUE", &state()));
        assert!(!ev.eval("false", &state()));
    }

    #[test]
    fn test_comparisons() {
        let ev = ConditionEvaluator::new();
        assert!(ev.eval("heat > 50", &state()));
        assert!(!ev.eval("heat > 60", &state()));
        assert!(ev.eval("heat >= 60", &state()));
        assert!(ev.eval("cash <= 250", &state()));
        assert!(ev.eval("level == 3", &state()));
        assert!(ev.eval("level != 4", &state()));
        assert!(!ev.eval("cash < 0", &state()));
    }

    #[test]
    fn test_identifier_lowercased() {
        let ev = ConditionEvaluator::new();
        assert!(ev.eval("HEAT > 50", &state()));
    }

    #[test]
    fn test_compact_clause_still_parses() {
        let ev = ConditionEvaluator::new();
        assert!(ev.eval("heat>=60", &state()));
        assert!(!ev.eval("heat>60", &state()));
    }

    #[test]
    fn test_unknown_field_is_false() {
        let ev = ConditionEvaluator::new();
        assert!(!ev.eval("karma > 0", &state()));
    }

    #[test]
    fn test_ungrammatical_condition_is_false() {
        let ev = ConditionEvaluator::new();
        assert!(!ev.eval("heat > 50 and cash > 10", &state()));
        assert!(!ev.eval("heat >", &state()));
        assert!(!ev.eval("> 50", &state()));
        assert!(!ev.eval("heat ~ 50", &state()));
    }

    #[test]
    fn test_negative_values() {
        let ev = ConditionEvaluator::new();
        assert!(ev.eval("heat > -10", &state()));
    }
}
