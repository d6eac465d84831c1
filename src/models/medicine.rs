use serde::Serialize;

use crate::money::Money;

/// An over-the-counter product in the pharmacy catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Medicine {
    pub key: &'static str,
    pub name: &'static str,
    pub price: Money,
    pub stock: u32,
    /// Offered strengths; the first one is preselected.
    pub dosages: &'static [&'static str],
}

impl Medicine {
    pub fn default_dosage(&self) -> &'static str {
        self.dosages.first().copied().unwrap_or_default()
    }

    /// Resolve a requested dosage against the offered ones.
    /// `None` falls back to the default; an unknown dosage yields `None`.
    pub fn resolve_dosage(&self, requested: Option<&str>) -> Option<&'static str> {
        match requested {
            None => Some(self.default_dosage()),
            Some(wanted) => self.dosages.iter().copied().find(|d| *d == wanted.trim()),
        }
    }
}
