use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A merchant category code, e.g. `sportcheck`.
///
/// Codes are free-form strings rather than a closed enum so that callers can
/// substitute their own taxonomy without touching the engine.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCode(String);

impl CategoryCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// The set of recognized merchant categories plus the designated catch-all.
///
/// Transactions tagged with a merchant outside the recognized set are folded
/// into the catch-all during aggregation. The catch-all is inserted into the
/// recognized set at construction, so it is always a member.
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    recognized: BTreeSet<CategoryCode>,
    catch_all: CategoryCode,
}

impl Taxonomy {
    pub fn new(recognized: impl IntoIterator<Item = CategoryCode>, catch_all: CategoryCode) -> Self {
        let mut recognized: BTreeSet<CategoryCode> = recognized.into_iter().collect();
        recognized.insert(catch_all.clone());
        Self {
            recognized,
            catch_all,
        }
    }

    /// The default taxonomy the reference catalog is written against.
    pub fn reference() -> Self {
        Self::new(
            ["sportcheck", "tim_hortons", "subway"]
                .into_iter()
                .map(CategoryCode::from),
            CategoryCode::from("other"),
        )
    }

    pub fn recognizes(&self, code: &CategoryCode) -> bool {
        self.recognized.contains(code)
    }

    pub fn catch_all(&self) -> &CategoryCode {
        &self.catch_all
    }

    pub fn recognized(&self) -> impl Iterator<Item = &CategoryCode> {
        self.recognized.iter()
    }

    /// Remaps unrecognized codes to the catch-all.
    pub fn normalize(&self, code: &CategoryCode) -> CategoryCode {
        if self.recognizes(code) {
            code.clone()
        } else {
            self.catch_all.clone()
        }
    }
}
