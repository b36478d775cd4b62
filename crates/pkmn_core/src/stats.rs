//! Stat formulas, natures, shininess and experience curves.
//!
//! Every formula truncates after each step exactly as the cartridge does.
//! Reordering a multiplication and a division changes results.

use serde::{Deserialize, Serialize};

use crate::species::BaseStats;

pub const MAX_LEVEL: u8 = 100;
pub const GEN3_MAX_IV: u8 = 31;
pub const GEN12_MAX_DV: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    Speed,
    SpAttack,
    SpDefense,
}

impl Stat {
    /// Storage order shared by effort values and individual values.
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::Speed,
        Stat::SpAttack,
        Stat::SpDefense,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::Speed => "Speed",
            Stat::SpAttack => "Sp. Attack",
            Stat::SpDefense => "Sp. Defense",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
}

impl StatBlock {
    pub fn from_fn(mut f: impl FnMut(Stat) -> u16) -> Self {
        Self {
            hp: f(Stat::Hp),
            attack: f(Stat::Attack),
            defense: f(Stat::Defense),
            speed: f(Stat::Speed),
            sp_attack: f(Stat::SpAttack),
            sp_defense: f(Stat::SpDefense),
        }
    }

    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Speed => self.speed,
            Stat::SpAttack => self.sp_attack,
            Stat::SpDefense => self.sp_defense,
        }
    }
}

pub fn base_value(base: &BaseStats, stat: Stat) -> u8 {
    match stat {
        Stat::Hp => base.hp,
        Stat::Attack => base.attack,
        Stat::Defense => base.defense,
        Stat::Speed => base.speed,
        Stat::SpAttack => base.sp_attack,
        Stat::SpDefense => base.sp_defense,
    }
}

pub const NATURE_NAMES: [&str; 25] = [
    "Hardy", "Lonely", "Brave", "Adamant", "Naughty", "Bold", "Docile", "Relaxed", "Impish",
    "Lax", "Timid", "Hasty", "Serious", "Jolly", "Naive", "Modest", "Mild", "Quiet", "Bashful",
    "Rash", "Calm", "Gentle", "Sassy", "Careful", "Quirky",
];

const NATURE_STATS: [Stat; 5] = [
    Stat::Attack,
    Stat::Defense,
    Stat::Speed,
    Stat::SpAttack,
    Stat::SpDefense,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nature(u8);

impl Nature {
    pub fn from_personality(personality: u32) -> Self {
        Self((personality % 25) as u8)
    }

    pub fn from_index(index: u8) -> Option<Self> {
        (index < 25).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        NATURE_NAMES[usize::from(self.0)]
    }

    pub fn is_neutral(self) -> bool {
        self.0 / 5 == self.0 % 5
    }

    pub fn increased(self) -> Option<Stat> {
        (!self.is_neutral()).then(|| NATURE_STATS[usize::from(self.0 / 5)])
    }

    pub fn decreased(self) -> Option<Stat> {
        (!self.is_neutral()).then(|| NATURE_STATS[usize::from(self.0 % 5)])
    }
}

/// Generation 3 stat formula.
pub fn derive_stat(base: u8, iv: u8, ev: u8, level: u8, nature: Nature, stat: Stat) -> u16 {
    let level = u32::from(level);
    let raw = (2 * u32::from(base) + u32::from(iv) + u32::from(ev) / 4) * level / 100;

    let value = match stat {
        // Shedinja is the only species with base HP 1 and always has 1 HP.
        Stat::Hp if base == 1 => 1,
        Stat::Hp => raw + level + 10,
        _ => {
            let value = raw + 5;
            if nature.increased() == Some(stat) {
                value * 110 / 100
            } else if nature.decreased() == Some(stat) {
                value * 90 / 100
            } else {
                value
            }
        }
    };
    value as u16
}

pub fn derive_stats(
    base: &BaseStats,
    ivs: [u8; 6],
    evs: [u8; 6],
    level: u8,
    nature: Nature,
) -> StatBlock {
    StatBlock::from_fn(|stat| {
        derive_stat(
            base_value(base, stat),
            ivs[stat.index()],
            evs[stat.index()],
            level,
            nature,
            stat,
        )
    })
}

/// Stat experience bonus: `ceil(sqrt(stat_exp))` capped at 255, then quartered.
fn stat_exp_bonus(stat_exp: u16) -> u32 {
    let target = u32::from(stat_exp);
    let mut root = 0u32;
    while root < 255 && root * root < target {
        root += 1;
    }
    root / 4
}

/// Generation 1 and 2 stat formula.
pub fn gen12_stat(base: u8, dv: u8, stat_exp: u16, level: u8, stat: Stat) -> u16 {
    let level = u32::from(level);
    let raw = ((u32::from(base) + u32::from(dv)) * 2 + stat_exp_bonus(stat_exp)) * level / 100;
    let value = match stat {
        Stat::Hp => raw + level + 10,
        _ => raw + 5,
    };
    value as u16
}

/// Generation 1 and 2 individual values, one nibble each. HP is not stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dvs {
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    pub special: u8,
}

impl Dvs {
    pub fn from_bytes(hi: u8, lo: u8) -> Self {
        Self {
            attack: hi >> 4,
            defense: hi & 0x0F,
            speed: lo >> 4,
            special: lo & 0x0F,
        }
    }

    pub fn to_bytes(self) -> [u8; 2] {
        [
            (self.attack << 4) | (self.defense & 0x0F),
            (self.speed << 4) | (self.special & 0x0F),
        ]
    }

    pub fn hp(self) -> u8 {
        ((self.attack & 1) << 3)
            | ((self.defense & 1) << 2)
            | ((self.speed & 1) << 1)
            | (self.special & 1)
    }

    /// Six-entry view in [`Stat::ALL`] order; both special stats share one DV.
    pub fn as_array(self) -> [u8; 6] {
        [
            self.hp(),
            self.attack,
            self.defense,
            self.speed,
            self.special,
            self.special,
        ]
    }

    pub fn is_shiny(self) -> bool {
        self.defense == 10
            && self.speed == 10
            && self.special == 10
            && matches!(self.attack, 2 | 3 | 6 | 7 | 10 | 11 | 14 | 15)
    }
}

/// Stat experience in [`Stat::ALL`] order. Generation 1 stores one Special
/// value which is repeated for both special stats.
pub fn derive_gen12_stats(base: &BaseStats, dvs: Dvs, stat_exp: [u16; 6], level: u8) -> StatBlock {
    let dv = dvs.as_array();
    StatBlock::from_fn(|stat| {
        gen12_stat(
            base_value(base, stat),
            dv[stat.index()],
            stat_exp[stat.index()],
            level,
            stat,
        )
    })
}

pub fn gen3_is_shiny(personality: u32, ot_id: u32) -> bool {
    shiny_value(personality, ot_id) < 8
}

pub(crate) fn shiny_value(personality: u32, ot_id: u32) -> u32 {
    let tid = ot_id & 0xFFFF;
    let sid = ot_id >> 16;
    tid ^ sid ^ (personality >> 16) ^ (personality & 0xFFFF)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthRate {
    MediumFast,
    Erratic,
    Fluctuating,
    MediumSlow,
    Fast,
    Slow,
}

impl GrowthRate {
    /// Minimum experience for `level`. Level 1 always needs 0.
    pub fn exp_for_level(self, level: u8) -> u32 {
        let level = level.clamp(1, MAX_LEVEL);
        if level == 1 {
            return 0;
        }
        let n = i64::from(level);
        let cube = n * n * n;
        let exp = match self {
            Self::Fast => 4 * cube / 5,
            Self::MediumFast => cube,
            Self::MediumSlow => 6 * cube / 5 - 15 * n * n + 100 * n - 140,
            Self::Slow => 5 * cube / 4,
            Self::Erratic => match n {
                2..=50 => cube * (100 - n) / 50,
                51..=68 => cube * (150 - n) / 100,
                69..=98 => cube * ((1911 - 10 * n) / 3) / 500,
                _ => cube * (160 - n) / 100,
            },
            Self::Fluctuating => match n {
                2..=15 => cube * ((n + 1) / 3 + 24) / 50,
                16..=36 => cube * (n + 14) / 50,
                _ => cube * (n / 2 + 32) / 50,
            },
        };
        exp.max(0) as u32
    }

    pub fn level_for_exp(self, exp: u32) -> u8 {
        (2..=MAX_LEVEL)
            .take_while(|&level| self.exp_for_level(level) <= exp)
            .last()
            .unwrap_or(1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MediumFast => "Medium Fast",
            Self::Erratic => "Erratic",
            Self::Fluctuating => "Fluctuating",
            Self::MediumSlow => "Medium Slow",
            Self::Fast => "Fast",
            Self::Slow => "Slow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEUTRAL: Nature = Nature(0);

    #[test]
    fn nature_table_shape() {
        assert_eq!(Nature::from_personality(3).name(), "Adamant");
        assert_eq!(Nature(3).increased(), Some(Stat::Attack));
        assert_eq!(Nature(3).decreased(), Some(Stat::SpAttack));
        assert_eq!(Nature(15).name(), "Modest");
        assert_eq!(Nature(15).increased(), Some(Stat::SpAttack));
        assert_eq!(Nature(15).decreased(), Some(Stat::Attack));

        let neutral: Vec<_> = (0..25)
            .filter(|&i| Nature(i).is_neutral())
            .map(|i| Nature(i).name())
            .collect();
        assert_eq!(neutral, ["Hardy", "Docile", "Serious", "Bashful", "Quirky"]);
    }

    #[test]
    fn gen3_formula_matches_known_maximums() {
        assert_eq!(derive_stat(100, 31, 252, 100, NEUTRAL, Stat::Hp), 404);
        assert_eq!(derive_stat(100, 31, 252, 100, NEUTRAL, Stat::Attack), 299);
        assert_eq!(derive_stat(100, 31, 252, 100, Nature(3), Stat::Attack), 328);
        assert_eq!(derive_stat(100, 31, 252, 100, Nature(3), Stat::SpAttack), 269);
        assert_eq!(derive_stat(1, 31, 252, 100, NEUTRAL, Stat::Hp), 1);
    }

    #[test]
    fn shedinja_keeps_one_hp() {
        let shedinja = crate::species::by_national(292).unwrap();
        assert_eq!(shedinja.name, "Shedinja");
        let stats = derive_stats(&shedinja.base, [31; 6], [255; 6], 100, NEUTRAL);
        assert_eq!(stats.hp, 1);
        assert!(stats.attack > 1);
    }

    #[test]
    fn gen3_formula_truncates_each_step() {
        // (2*45 + 10 + 7/4) * 5 / 100 = 101 * 5 / 100 = 5
        assert_eq!(derive_stat(45, 10, 7, 5, NEUTRAL, Stat::Hp), 5 + 5 + 10);
        // (2*49 + 0 + 0) * 5 / 100 + 5 = 9, then 9 * 110 / 100 = 9
        assert_eq!(derive_stat(49, 0, 0, 5, Nature(1), Stat::Attack), 9);
    }

    #[test]
    fn gen3_formula_is_monotone() {
        for nature in 0..25 {
            let nature = Nature(nature);
            for stat in Stat::ALL {
                let mut previous = 0;
                for level in 1..=MAX_LEVEL {
                    let value = derive_stat(80, 20, 100, level, nature, stat);
                    assert!(value >= previous);
                    previous = value;
                }
                let mut previous = 0;
                for iv in 0..=GEN3_MAX_IV {
                    let value = derive_stat(80, iv, 100, 50, nature, stat);
                    assert!(value >= previous);
                    previous = value;
                }
                let mut previous = 0;
                for ev in 0..=255 {
                    let value = derive_stat(80, 20, ev, 50, nature, stat);
                    assert!(value >= previous);
                    previous = value;
                }
            }
        }
    }

    #[test]
    fn gen12_formula() {
        assert_eq!(gen12_stat(100, 15, 0, 50, Stat::Attack), 120);
        assert_eq!(gen12_stat(100, 15, 10_000, 50, Stat::Attack), 132);
        assert_eq!(gen12_stat(100, 15, 0, 50, Stat::Hp), 115 + 50 + 10);
        assert_eq!(
            gen12_stat(154, 15, 65_535, 100, Stat::SpAttack),
            gen12_stat(154, 15, 65_025, 100, Stat::SpAttack)
        );
    }

    #[test]
    fn hp_dv_is_built_from_low_bits() {
        let dvs = Dvs::from_bytes(0xF1, 0x10);
        assert_eq!(dvs.attack, 15);
        assert_eq!(dvs.defense, 1);
        assert_eq!(dvs.hp(), 0b1110);
        assert_eq!(dvs.to_bytes(), [0xF1, 0x10]);
    }

    #[test]
    fn shiny_predicates() {
        assert!(Dvs::from_bytes(0xAA, 0xAA).is_shiny());
        assert!(Dvs::from_bytes(0x2A, 0xAA).is_shiny());
        assert!(!Dvs::from_bytes(0x4A, 0xAA).is_shiny());
        assert!(!Dvs::from_bytes(0xAA, 0xAB).is_shiny());

        let ot_id = 0x1234_5678;
        assert!(gen3_is_shiny(0x5678_1234 ^ 0x0000_0003, ot_id));
        assert!(!gen3_is_shiny(0x0000_0000, ot_id));
    }

    #[test]
    fn growth_curves_hit_known_totals() {
        assert_eq!(GrowthRate::MediumFast.exp_for_level(100), 1_000_000);
        assert_eq!(GrowthRate::Fast.exp_for_level(100), 800_000);
        assert_eq!(GrowthRate::Slow.exp_for_level(100), 1_250_000);
        assert_eq!(GrowthRate::MediumSlow.exp_for_level(100), 1_059_860);
        assert_eq!(GrowthRate::Erratic.exp_for_level(100), 600_000);
        assert_eq!(GrowthRate::Fluctuating.exp_for_level(100), 1_640_000);
        assert_eq!(GrowthRate::MediumSlow.exp_for_level(2), 9);
        assert_eq!(GrowthRate::MediumSlow.exp_for_level(5), 135);
        for rate in [
            GrowthRate::MediumFast,
            GrowthRate::Erratic,
            GrowthRate::Fluctuating,
            GrowthRate::MediumSlow,
            GrowthRate::Fast,
            GrowthRate::Slow,
        ] {
            assert_eq!(rate.exp_for_level(1), 0);
        }
    }

    #[test]
    fn level_for_exp_inverts_curve() {
        for rate in [GrowthRate::MediumSlow, GrowthRate::Erratic, GrowthRate::Fluctuating] {
            for level in 1..=MAX_LEVEL {
                let exp = rate.exp_for_level(level);
                assert_eq!(rate.level_for_exp(exp), level);
            }
            assert_eq!(rate.level_for_exp(u32::MAX), MAX_LEVEL);
        }
    }
}
