//! Heavenly stems, earthly branches and the 60-pillar cycle.
//!
//! A pillar is identified by its cycle index 0..=59 (0 = 甲子). Its stem is
//! the index mod 10 and its branch the index mod 12, so only stem/branch
//! pairs of equal parity exist.

/// The ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// Chinese name.
    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Yang stems have even indices.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

/// The twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

impl Branch {
    /// Chinese name.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// One sexagenary pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pillar(u8);

impl Pillar {
    /// Pillar with cycle index `cycle`, reduced mod 60.
    pub const fn new(cycle: i64) -> Self {
        Self(cycle.rem_euclid(60) as u8)
    }

    /// Pillar with the given stem and branch, if their parities match.
    pub const fn from_stem_branch(stem: Stem, branch: Branch) -> Option<Self> {
        let s = stem.index() as i64;
        let b = branch.index() as i64;
        if (s - b) % 2 != 0 {
            return None;
        }
        Some(Self::new(6 * s - 5 * b))
    }

    /// Cycle index 0..=59.
    pub const fn cycle(self) -> u8 {
        self.0
    }

    pub const fn stem(self) -> Stem {
        ALL_STEMS[(self.0 % 10) as usize]
    }

    pub const fn branch(self) -> Branch {
        ALL_BRANCHES[(self.0 % 12) as usize]
    }

    /// The pillar `n` steps later in the cycle (earlier for negative `n`).
    pub const fn offset(self, n: i64) -> Self {
        Self::new(self.0 as i64 + n)
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem().name(), self.branch().name())
    }
}
