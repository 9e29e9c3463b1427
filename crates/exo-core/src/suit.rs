//! Suit sections, per-section variant selection, and stat aggregation.

use crate::constants::{TIER_A_MIN, TIER_B_MIN, TIER_S_MIN, VARIANTS_PER_SECTION};
use std::fmt;
use std::ops::{Add, AddAssign, Index};

/// Armor body-part slot. The order here is the navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Helmet,
    Chest,
    Arms,
    Legs,
}

impl Section {
    pub const COUNT: usize = 4;
    pub const ALL: [Section; Section::COUNT] =
        [Section::Helmet, Section::Chest, Section::Arms, Section::Legs];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Helmet => "helmet",
            Self::Chest => "chest",
            Self::Arms => "arms",
            Self::Legs => "legs",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name))
    }

    /// Neighbor in navigation order, wrapping at both ends.
    pub fn offset(self, step: i32) -> Self {
        let n = Self::COUNT as i32;
        let i = (self.index() as i32 + step).rem_euclid(n);
        Self::ALL[i as usize]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant index, always in `0..VARIANTS_PER_SECTION`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variant(u8);

impl Variant {
    pub const COUNT: u8 = VARIANTS_PER_SECTION;

    pub fn new(index: u8) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Step forward or backward, wrapping.
    pub fn cycled(self, delta: i32) -> Self {
        let n = Self::COUNT as i32;
        Self((self.0 as i32 + delta).rem_euclid(n) as u8)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0 + 1)
    }
}

/// Chosen variant for every section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SuitSelection {
    variants: [Variant; Section::COUNT],
}

impl SuitSelection {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, section: Section) -> Variant {
        self.variants[section.index()]
    }

    /// Replace one section's variant, returning the updated selection.
    pub fn with(mut self, section: Section, variant: Variant) -> Self {
        self.variants[section.index()] = variant;
        self
    }

    pub fn set(&mut self, section: Section, variant: Variant) {
        self.variants[section.index()] = variant;
    }

    pub fn cycle(&mut self, section: Section, delta: i32) -> Variant {
        let v = self.get(section).cycled(delta);
        self.set(section, v);
        v
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, Variant)> + '_ {
        Section::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

impl Index<Section> for SuitSelection {
    type Output = Variant;

    fn index(&self, section: Section) -> &Variant {
        &self.variants[section.index()]
    }
}

/// Five-axis stat vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StatProfile {
    pub power: u32,
    pub speed: u32,
    pub defense: u32,
    pub intelligence: u32,
    pub energy: u32,
}

impl StatProfile {
    pub const fn new(power: u32, speed: u32, defense: u32, intelligence: u32, energy: u32) -> Self {
        Self {
            power,
            speed,
            defense,
            intelligence,
            energy,
        }
    }

    /// Sum of all five stats, saturating at `u32::MAX`.
    #[inline]
    pub fn score(&self) -> u32 {
        self.entries()
            .iter()
            .fold(0u32, |acc, (_, v)| acc.saturating_add(*v))
    }

    /// `(label, value)` pairs in display order.
    pub fn entries(&self) -> [(StatKey, u32); 5] {
        [
            (StatKey::Power, self.power),
            (StatKey::Speed, self.speed),
            (StatKey::Defense, self.defense),
            (StatKey::Intelligence, self.intelligence),
            (StatKey::Energy, self.energy),
        ]
    }
}

impl Add for StatProfile {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            power: self.power.saturating_add(rhs.power),
            speed: self.speed.saturating_add(rhs.speed),
            defense: self.defense.saturating_add(rhs.defense),
            intelligence: self.intelligence.saturating_add(rhs.intelligence),
            energy: self.energy.saturating_add(rhs.energy),
        }
    }
}

impl AddAssign for StatProfile {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatKey {
    Power,
    Speed,
    Defense,
    Intelligence,
    Energy,
}

impl StatKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Speed => "speed",
            Self::Defense => "defense",
            Self::Intelligence => "intelligence",
            Self::Energy => "energy",
        }
    }
}

/// Ordinal quality label; `S` is best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    C,
    B,
    A,
    S,
}

impl Tier {
    /// Tier for `score` under the default breakpoints.
    pub fn from_score(score: u32) -> Self {
        TierBreakpoints::default().tier_for(score)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive lower bounds for each tier above `C`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierBreakpoints {
    pub s: u32,
    pub a: u32,
    pub b: u32,
}

impl Default for TierBreakpoints {
    fn default() -> Self {
        Self {
            s: TIER_S_MIN,
            a: TIER_A_MIN,
            b: TIER_B_MIN,
        }
    }
}

impl TierBreakpoints {
    pub fn tier_for(&self, score: u32) -> Tier {
        if score >= self.s {
            Tier::S
        } else if score >= self.a {
            Tier::A
        } else if score >= self.b {
            Tier::B
        } else {
            Tier::C
        }
    }
}

/// Aggregate stats for a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuitStats {
    pub total: StatProfile,
    pub score: u32,
    pub tier: Tier,
}

type SectionTable = [StatProfile; VARIANTS_PER_SECTION as usize];

const BUILTIN_TABLE: [SectionTable; Section::COUNT] = [
    // helmet
    [
        StatProfile::new(14, 18, 12, 24, 22),
        StatProfile::new(20, 12, 18, 20, 17),
        StatProfile::new(16, 16, 14, 26, 18),
    ],
    // chest
    [
        StatProfile::new(28, 8, 30, 16, 25),
        StatProfile::new(24, 14, 24, 18, 27),
        StatProfile::new(20, 18, 20, 22, 29),
    ],
    // arms
    [
        StatProfile::new(27, 15, 20, 10, 18),
        StatProfile::new(22, 20, 18, 14, 19),
        StatProfile::new(18, 24, 16, 17, 20),
    ],
    // legs
    [
        StatProfile::new(18, 26, 18, 12, 16),
        StatProfile::new(22, 20, 20, 14, 18),
        StatProfile::new(24, 16, 22, 16, 21),
    ],
];

/// Stat table per (section, variant) plus the tier breakpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCatalog {
    table: [SectionTable; Section::COUNT],
    pub breakpoints: TierBreakpoints,
}

impl Default for StatCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StatCatalog {
    pub fn builtin() -> Self {
        Self {
            table: BUILTIN_TABLE,
            breakpoints: TierBreakpoints::default(),
        }
    }

    /// Catalog where every variant of every section has the same profile.
    pub fn uniform(profile: StatProfile) -> Self {
        Self {
            table: [[profile; VARIANTS_PER_SECTION as usize]; Section::COUNT],
            breakpoints: TierBreakpoints::default(),
        }
    }

    pub fn with_profile(mut self, section: Section, variant: Variant, profile: StatProfile) -> Self {
        self.table[section.index()][variant.index()] = profile;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: TierBreakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    #[inline]
    pub fn profile(&self, section: Section, variant: Variant) -> StatProfile {
        self.table[section.index()][variant.index()]
    }

    pub fn compute(&self, selection: &SuitSelection) -> SuitStats {
        let total = selection
            .iter()
            .map(|(section, variant)| self.profile(section, variant))
            .fold(StatProfile::default(), Add::add);
        let score = total.score();
        SuitStats {
            total,
            score,
            tier: self.breakpoints.tier_for(score),
        }
    }
}

/// Stats for `selection` under the built-in catalog.
pub fn compute_suit_stats(selection: &SuitSelection) -> SuitStats {
    StatCatalog::builtin().compute(selection)
}
