use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Cardinality bounds of a data section.
///
/// JSON accepts three shapes: `null`/absent (unbounded), a single integer `n`
/// (exactly `n` fields) and a pair `[min, max]` where `max` may be `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionLimit {
    #[default]
    Unbounded,
    Exact(usize),
    Range { min: usize, max: Option<usize> },
}

impl SectionLimit {
    #[must_use]
    pub fn range(min: usize, max: usize) -> Self {
        Self::Range {
            min,
            max: Some(max),
        }
    }

    #[must_use]
    pub fn at_least(min: usize) -> Self {
        Self::Range { min, max: None }
    }

    #[must_use]
    pub fn min(self) -> usize {
        match self {
            Self::Unbounded => 0,
            Self::Exact(count) => count,
            Self::Range { min, .. } => min,
        }
    }

    /// Upper bound, `None` when unbounded.
    #[must_use]
    pub fn max(self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Exact(count) => Some(count),
            Self::Range { max, .. } => max,
        }
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    #[must_use]
    pub fn is_under_upper_bound(self, count: usize) -> bool {
        self.max().is_none_or(|max| count <= max)
    }

    #[must_use]
    pub fn has_reached_lower_bound(self, count: usize) -> bool {
        count >= self.min()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SectionLimitRepr {
    Exact(usize),
    Range(usize, Option<usize>),
}

impl Serialize for SectionLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match *self {
            Self::Unbounded => None,
            Self::Exact(count) => Some(SectionLimitRepr::Exact(count)),
            Self::Range { min, max } => Some(SectionLimitRepr::Range(min, max)),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SectionLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<SectionLimitRepr>::deserialize(deserializer)? {
            None => Self::Unbounded,
            Some(SectionLimitRepr::Exact(count)) => Self::Exact(count),
            Some(SectionLimitRepr::Range(min, max)) => Self::Range { min, max },
        })
    }
}
