//! Compiled-in migration rules.
//!
//! The target path and both replacement rules are fixed at build time. They
//! are kept as named records rather than inlined literals so the table can
//! be enumerated, tested rule-by-rule, and extended without touching the
//! rewrite or file-handling logic.

/// A single literal search/replace rule.
///
/// `find` is matched as an exact substring - no regex metacharacters, no
/// capture groups. Every non-overlapping occurrence is replaced, left to
/// right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Stable identifier used in reports.
    pub id: &'static str,
    /// Exact text to search for.
    pub find: &'static str,
    /// Text substituted for each occurrence.
    pub replace_with: &'static str,
}

impl Rule {
    /// True if re-running this rule over its own output changes nothing,
    /// i.e. the replacement text does not itself contain the pattern.
    pub fn is_stable(&self) -> bool {
        !self.replace_with.contains(self.find)
    }
}

/// File rewritten by this tool, relative to the invocation directory.
pub const TARGET_FILE: &str = "src/Tactics/TacticalPlanner.cs";

/// The single line printed to stdout on success.
pub const SUCCESS_MESSAGE: &str = "Fixed Vec2 to Vec3 conversions in TacticalPlanner.cs";

/// The migration rules, in application order. Each rule scans the output of
/// the previous one.
pub const RULES: &[Rule] = &[
    // Formation.Direction became a 2D vector; team direction stayed 3D.
    Rule {
        id: "vec2-to-vec3-direction",
        find: "teamDir += formation.Direction;",
        replace_with: "teamDir += new Vec3(formation.Direction.X, formation.Direction.Y, 0);",
    },
    // ArrangementOrderEnum is no longer comparable directly; match on the
    // rendered order name instead.
    Rule {
        id: "arrangement-order-string-check",
        find: "enemyFormation.ArrangementOrder.OrderType != ArrangementOrder.ArrangementOrderEnum.Square",
        replace_with: "!enemyFormation.ArrangementOrder.OrderType.ToString().Contains(\"Square\")",
    },
];
