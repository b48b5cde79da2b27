//! Label combination semantics
//!
//! | Semantics | Membership rule | MATCH fragment |
//! |-----------|-----------------|----------------|
//! | All | vertex carries every partition label | node pattern `(n:A:B)` |
//! | Any | vertex carries at least one partition label | pattern for one label, predicate `(n:A OR n:B)` otherwise |

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a partition combines its labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSemantics {
    /// Conjunction: every partition label must be present
    All,

    /// Disjunction: at least one partition label must be present
    Any,
}

impl LabelSemantics {
    /// Both semantics (for iteration)
    pub const ALL: [LabelSemantics; 2] = [LabelSemantics::All, LabelSemantics::Any];

    /// Short identifier used in configuration files
    pub const fn id(&self) -> &'static str {
        match self {
            LabelSemantics::All => "all",
            LabelSemantics::Any => "any",
        }
    }

    /// Parse from short identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "all" => Some(LabelSemantics::All),
            "any" => Some(LabelSemantics::Any),
            _ => None,
        }
    }
}

impl fmt::Display for LabelSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
