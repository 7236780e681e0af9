use crate::models::AdjusterAssignment;
use std::collections::BTreeMap;

/// Licensed adjuster per state. Lookups are exact, case-sensitive matches on
/// the two-letter state code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjusterDirectory {
    adjusters: BTreeMap<String, String>,
}

impl Default for AdjusterDirectory {
    fn default() -> Self {
        Self::from_pairs([
            ("GA", "Sarah Mitchell"),
            ("FL", "Carlos Rodriguez"),
            ("TX", "Jennifer Thompson"),
            ("AL", "Michael Chen"),
        ])
    }
}

impl AdjusterDirectory {
    pub fn from_pairs<I, S, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, N)>,
        S: Into<String>,
        N: Into<String>,
    {
        Self {
            adjusters: pairs
                .into_iter()
                .map(|(state, name)| (state.into(), name.into()))
                .collect(),
        }
    }

    pub fn lookup(&self, state: &str) -> Option<AdjusterAssignment> {
        self.adjusters.get(state).map(|name| AdjusterAssignment {
            name: name.clone(),
            licensed_state: state.to_string(),
        })
    }

    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.adjusters.keys().map(String::as_str)
    }
}
