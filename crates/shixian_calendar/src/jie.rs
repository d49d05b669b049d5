//! The twelve principal solar terms (jie).
//!
//! Each jie opens a solar month and hence a month pillar. Order here starts at
//! Lichun, the first jie of the term year.

/// The twelve principal solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Jie {
    Lichun,
    Jingzhe,
    Qingming,
    Lixia,
    Mangzhong,
    Xiaoshu,
    Liqiu,
    Bailu,
    Hanlu,
    Lidong,
    Daxue,
    Xiaohan,
}

/// All twelve jie in term-year order (index 0 = Lichun).
pub const ALL_JIE: [Jie; 12] = [
    Jie::Lichun,
    Jie::Jingzhe,
    Jie::Qingming,
    Jie::Lixia,
    Jie::Mangzhong,
    Jie::Xiaoshu,
    Jie::Liqiu,
    Jie::Bailu,
    Jie::Hanlu,
    Jie::Lidong,
    Jie::Daxue,
    Jie::Xiaohan,
];

const ALL_JIE_NAMES: [&str; 12] = [
    "立春", "惊蛰", "清明", "立夏", "芒种", "小暑", "立秋", "白露", "寒露", "立冬", "大雪", "小寒",
];

impl Jie {
    /// Chinese name of the term.
    pub fn name(self) -> &'static str {
        ALL_JIE_NAMES[self.index() as usize]
    }

    /// 0-based index (Lichun=0 .. Xiaohan=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Jie at position `i` of a principal-term sequence that starts with the
    /// prior year's Xiaohan (see [`principal_terms_since_spring`]).
    ///
    /// [`principal_terms_since_spring`]: crate::principal_terms_since_spring
    pub const fn from_sequence_index(i: usize) -> Self {
        ALL_JIE[(i + 11) % 12]
    }
}

impl std::fmt::Display for Jie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_jie_count() {
        assert_eq!(ALL_JIE.len(), 12);
    }

    #[test]
    fn indices_sequential() {
        for (i, j) in ALL_JIE.iter().enumerate() {
            assert_eq!(j.index() as usize, i);
        }
    }

    #[test]
    fn sequence_starts_with_xiaohan() {
        assert_eq!(Jie::from_sequence_index(0), Jie::Xiaohan);
        assert_eq!(Jie::from_sequence_index(1), Jie::Lichun);
        assert_eq!(Jie::from_sequence_index(12), Jie::Xiaohan);
        assert_eq!(Jie::from_sequence_index(15), Jie::Qingming);
    }

    #[test]
    fn names() {
        assert_eq!(Jie::Lichun.name(), "立春");
        assert_eq!(Jie::Mangzhong.to_string(), "芒种");
        assert_eq!(Jie::Xiaohan.name(), "小寒");
    }
}
