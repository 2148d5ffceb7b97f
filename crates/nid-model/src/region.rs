use std::collections::BTreeSet;

/// Permissible administrative division codes.
///
/// Built once from a reference file and never mutated afterwards; the
/// validator only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionCodeSet {
    codes: BTreeSet<String>,
}

impl RegionCodeSet {
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.codes.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.codes.last().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for RegionCodeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_codes(iter)
    }
}
