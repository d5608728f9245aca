//! Pure text rewriting - no I/O.
//!
//! The engine works on the whole file content as one string. Rules apply in
//! the order given, each scanning the output of the previous rule. Matching
//! is literal substring search; zero occurrences is a valid outcome, not an
//! error.

use crate::rules::Rule;

/// What one rule did to the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Identifier of the rule that ran.
    pub rule_id: &'static str,
    /// Number of occurrences replaced (0 means the rule was a no-op).
    pub occurrences: usize,
}

/// Result of running the full rule table over a text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "Rewrite holds the transformed text; dropping it discards the work"]
pub struct Rewrite {
    /// The fully transformed text.
    pub text: String,
    /// One outcome per rule, in application order.
    pub outcomes: Vec<RuleOutcome>,
}

impl Rewrite {
    /// True if any rule replaced at least one occurrence.
    pub fn changed(&self) -> bool {
        self.outcomes.iter().any(|o| o.occurrences > 0)
    }

    /// Total occurrences replaced across all rules.
    pub fn total_occurrences(&self) -> usize {
        self.outcomes.iter().map(|o| o.occurrences).sum()
    }
}

/// Apply a single rule to `text`, replacing every non-overlapping occurrence
/// left to right. Returns the new text and the occurrence count.
pub fn apply_rule(text: &str, rule: &Rule) -> (String, usize) {
    let occurrences = text.matches(rule.find).count();
    if occurrences == 0 {
        return (text.to_string(), 0);
    }

    let grown = rule.replace_with.len().saturating_sub(rule.find.len()) * occurrences;
    let mut out = String::with_capacity(text.len() + grown);
    let mut rest = text;
    while let Some(pos) = rest.find(rule.find) {
        out.push_str(&rest[..pos]);
        out.push_str(rule.replace_with);
        rest = &rest[pos + rule.find.len()..];
    }
    out.push_str(rest);

    (out, occurrences)
}

/// Run the rule table over `text` sequentially.
pub fn rewrite(text: &str, rules: &[Rule]) -> Rewrite {
    let mut current = text.to_string();
    let mut outcomes = Vec::with_capacity(rules.len());

    for rule in rules {
        let (next, occurrences) = apply_rule(&current, rule);
        current = next;
        outcomes.push(RuleOutcome {
            rule_id: rule.id,
            occurrences,
        });
    }

    Rewrite {
        text: current,
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RULES;

    #[test]
    fn test_apply_rule_replaces_all_occurrences() {
        let input = "a\nteamDir += formation.Direction;\nb\nteamDir += formation.Direction;\nc";
        let (out, count) = apply_rule(input, &RULES[0]);
        assert_eq!(count, 2);
        assert_eq!(
            out,
            "a\nteamDir += new Vec3(formation.Direction.X, formation.Direction.Y, 0);\nb\nteamDir += new Vec3(formation.Direction.X, formation.Direction.Y, 0);\nc"
        );
    }

    #[test]
    fn test_apply_rule_absent_pattern_is_noop() {
        let input = "no matching text here";
        let (out, count) = apply_rule(input, &RULES[0]);
        assert_eq!(count, 0);
        assert_eq!(out, input);
    }

    #[test]
    fn test_apply_rule_literal_not_regex() {
        // The pattern contains '+' and '.'; a regex engine would treat these
        // as metacharacters. A literal matcher must not.
        let input = "teamDirXX formationXDirection;";
        let (out, count) = apply_rule(input, &RULES[0]);
        assert_eq!(count, 0);
        assert_eq!(out, input);
    }

    #[test]
    fn test_enum_comparison_rewrite() {
        let input = "if (enemyFormation.ArrangementOrder.OrderType != ArrangementOrder.ArrangementOrderEnum.Square) { retreat(); }";
        let (out, count) = apply_rule(input, &RULES[1]);
        assert_eq!(count, 1);
        assert_eq!(
            out,
            "if (!enemyFormation.ArrangementOrder.OrderType.ToString().Contains(\"Square\")) { retreat(); }"
        );
    }

    #[test]
    fn test_rewrite_runs_rules_in_order() {
        let input = "teamDir += formation.Direction;\nif (enemyFormation.ArrangementOrder.OrderType != ArrangementOrder.ArrangementOrderEnum.Square) return;";
        let result = rewrite(input, RULES);
        assert_eq!(result.outcomes.len(), 2);
        assert_eq!(result.outcomes[0].rule_id, "vec2-to-vec3-direction");
        assert_eq!(result.outcomes[0].occurrences, 1);
        assert_eq!(result.outcomes[1].rule_id, "arrangement-order-string-check");
        assert_eq!(result.outcomes[1].occurrences, 1);
        assert_eq!(
            result.text,
            "teamDir += new Vec3(formation.Direction.X, formation.Direction.Y, 0);\nif (!enemyFormation.ArrangementOrder.OrderType.ToString().Contains(\"Square\")) return;"
        );
        assert!(result.changed());
        assert_eq!(result.total_occurrences(), 2);
    }

    #[test]
    fn test_rewrite_no_match_is_byte_identical() {
        let input = "public void Tick() { }\n";
        let result = rewrite(input, RULES);
        assert_eq!(result.text, input);
        assert!(!result.changed());
        assert_eq!(result.total_occurrences(), 0);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let input = "x\nteamDir += formation.Direction;\ny";
        let once = rewrite(input, RULES);
        let twice = rewrite(&once.text, RULES);
        assert_eq!(once.text, twice.text);
        assert!(!twice.changed());
    }
}
