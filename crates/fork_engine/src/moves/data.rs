//! Move identifiers and static move data.
//!
//! The table is the closed, pre-validated data store consumed by the
//! generator and damage calculator. Entries spell out only the fields
//! that differ from `Move::DEFAULT`; everything else (secondaries,
//! drain/recoil/crash fractions, guaranteed stat changes) defaults off.

use serde::{Deserialize, Serialize};

use crate::state::{PokemonBoostableStat, PokemonStatus, VolatileStatus};
use crate::types::PokemonType;

use crate::state::PokemonBoostableStat as Stat;
use crate::types::PokemonType as T;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct MoveFlags: u16 {
        /// Makes physical contact (triggers contact abilities/items)
        const CONTACT        = 1 << 0;
        /// Blocked by a protecting target
        const PROTECT        = 1 << 1;
        /// Powder move (grass types and overcoat are immune)
        const POWDER         = 1 << 2;
        /// Healing move (triage priority)
        const HEAL           = 1 << 3;
        /// User switches out after a successful hit
        const PIVOT          = 1 << 4;
        /// Forces the target to switch to a random reserve
        const DRAG           = 1 << 5;
        /// Two-turn move (charges on the first turn)
        const CHARGE         = 1 << 6;
        /// Sound-based (goes through substitute)
        const SOUND          = 1 << 7;
        /// Damage is not halved by the user's burn
        const IGNORES_BURN   = 1 << 8;
        /// Ignores and removes the target's screens
        const BREAKS_SCREENS = 1 << 9;
    }
}

/// Who a move is aimed at. Self-targeting moves skip the accuracy roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveTarget {
    User,
    Opponent,
}

/// Guaranteed stat stage changes applied on a successful hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatChanges {
    pub target: MoveTarget,
    pub changes: &'static [(PokemonBoostableStat, i8)],
}

/// Guaranteed major status applied on a successful hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusEffect {
    pub target: MoveTarget,
    pub status: PokemonStatus,
}

/// Guaranteed volatile applied on a successful hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VolatileEffect {
    pub target: MoveTarget,
    pub volatile_status: VolatileStatus,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SecondaryEffect {
    Status(PokemonStatus),
    VolatileStatus(VolatileStatus),
    Boost(&'static [(PokemonBoostableStat, i8)]),
}

/// A chance-gated extra effect. `chance` is a percentage in (0, 100].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Secondary {
    pub chance: u8,
    pub target: MoveTarget,
    pub effect: SecondaryEffect,
}

/// Static move data.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub name: &'static str,
    pub move_type: PokemonType,
    pub category: MoveCategory,
    pub base_power: u16,
    /// Percent accuracy; 0 means the move cannot miss
    pub accuracy: u8,
    pub pp: i8,
    pub priority: i8,
    pub target: MoveTarget,
    pub flags: MoveFlags,
    pub boosts: Option<StatChanges>,
    pub status: Option<StatusEffect>,
    pub volatile_status: Option<VolatileEffect>,
    pub secondaries: &'static [Secondary],
    /// Fraction of damage dealt restored to the user
    pub drain: Option<(i16, i16)>,
    /// Fraction of damage dealt taken by the user
    pub recoil: Option<(i16, i16)>,
    /// Fraction of the user's max HP lost when the move misses
    pub crash: Option<(i16, i16)>,
    /// Fraction of the user's max HP restored on use
    pub heal: Option<(i16, i16)>,
}

impl Move {
    pub const DEFAULT: Move = Move {
        name: "",
        move_type: T::Typeless,
        category: MoveCategory::Status,
        base_power: 0,
        accuracy: 100,
        pp: 0,
        priority: 0,
        target: MoveTarget::Opponent,
        flags: MoveFlags::empty(),
        boosts: None,
        status: None,
        volatile_status: None,
        secondaries: &[],
        drain: None,
        recoil: None,
        crash: None,
        heal: None,
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum MoveId {
    #[default]
    None,
    Acrobatics,
    Aerialace,
    Airslash,
    Aquajet,
    Auroraveil,
    Bodypress,
    Boltbeak,
    Bravebird,
    Brine,
    Bugbuzz,
    Bulkup,
    Bulletpunch,
    Calmmind,
    Charm,
    Closecombat,
    Confuseray,
    Crunch,
    Darkpulse,
    Dazzlinggleam,
    Defog,
    Doubleedge,
    Dracometeor,
    Dragonclaw,
    Dragondance,
    Dragonpulse,
    Drainpunch,
    Earthpower,
    Earthquake,
    Electricterrain,
    Energyball,
    Eruption,
    Extremespeed,
    Facade,
    Fireblast,
    Firepunch,
    Flamethrower,
    Flareblitz,
    Flipturn,
    Focusblast,
    Foulplay,
    Futuresight,
    Gigadrain,
    Grassknot,
    Grassyglide,
    Grassyterrain,
    Growl,
    Gunkshot,
    Haze,
    Heavyslam,
    Hex,
    Highjumpkick,
    Hurricane,
    Hydropump,
    Hypervoice,
    Icebeam,
    Icefang,
    Icepunch,
    Iceshard,
    Ironhead,
    Knockoff,
    Leafstorm,
    Leechseed,
    Lightscreen,
    Liquidation,
    Megahorn,
    Mistyterrain,
    Moonblast,
    Nastyplot,
    Nightshade,
    Overheat,
    Phantomforce,
    Playrough,
    Poisonjab,
    Powerwhip,
    Protect,
    Psychic,
    Psychicfangs,
    Psychicterrain,
    Psyshock,
    Pursuit,
    Quickattack,
    Raindance,
    Rapidspin,
    Recover,
    Reflect,
    Roar,
    Rockslide,
    Sandstorm,
    Scald,
    Seismictoss,
    Shadowball,
    Shadowsneak,
    Slackoff,
    Sleeppowder,
    Sludgebomb,
    Snowscape,
    Spikes,
    Spore,
    Stealthrock,
    Stickyweb,
    Stoneedge,
    Stunspore,
    Substitute,
    Suckerpunch,
    Sunnyday,
    Superfang,
    Superpower,
    Surf,
    Swift,
    Swordsdance,
    Tackle,
    Tailwind,
    Taunt,
    Thunder,
    Thunderbolt,
    Thunderpunch,
    Thunderwave,
    Toxic,
    Toxicspikes,
    Trick,
    Trickroom,
    Uturn,
    Venoshock,
    Voltswitch,
    Waterfall,
    Watergun,
    Whirlwind,
    Willowisp,
    Wish,
    Zenheadbutt,
}

impl MoveId {
    /// Total number of moves
    pub const COUNT: usize = 131;

    /// Look up move by key string
    #[inline]
    pub fn from_str(s: &str) -> Option<Self> {
        MOVE_NAMES.get(&s.to_lowercase()).copied()
    }

    /// Get move data
    #[inline]
    pub fn data(self) -> &'static Move {
        &MOVES[self as usize]
    }
}

const CONTACT_PROTECT: MoveFlags = MoveFlags::CONTACT.union(MoveFlags::PROTECT);

/// Static move data array, ordered identically to `MoveId`.
pub static MOVES: [Move; MoveId::COUNT] = [
    // None
    Move { name: "none", accuracy: 0, target: MoveTarget::User, ..Move::DEFAULT },
    Move {
        name: "acrobatics",
        move_type: T::Flying,
        category: MoveCategory::Physical,
        base_power: 55,
        pp: 15,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "aerialace",
        move_type: T::Flying,
        category: MoveCategory::Physical,
        base_power: 60,
        accuracy: 0,
        pp: 20,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "airslash",
        move_type: T::Flying,
        category: MoveCategory::Special,
        base_power: 75,
        accuracy: 95,
        pp: 15,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 30,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::VolatileStatus(VolatileStatus::FLINCH),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "aquajet",
        move_type: T::Water,
        category: MoveCategory::Physical,
        base_power: 40,
        pp: 20,
        priority: 1,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "auroraveil",
        move_type: T::Ice,
        accuracy: 0,
        pp: 20,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "bodypress",
        move_type: T::Fighting,
        category: MoveCategory::Physical,
        base_power: 80,
        pp: 10,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "boltbeak",
        move_type: T::Electric,
        category: MoveCategory::Physical,
        base_power: 85,
        pp: 10,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "bravebird",
        move_type: T::Flying,
        category: MoveCategory::Physical,
        base_power: 120,
        pp: 15,
        flags: CONTACT_PROTECT,
        recoil: Some((33, 100)),
        ..Move::DEFAULT
    },
    Move {
        name: "brine",
        move_type: T::Water,
        category: MoveCategory::Special,
        base_power: 65,
        pp: 10,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "bugbuzz",
        move_type: T::Bug,
        category: MoveCategory::Special,
        base_power: 90,
        pp: 10,
        flags: MoveFlags::PROTECT.union(MoveFlags::SOUND),
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Boost(&[(Stat::SpecialDefense, -1)]),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "bulkup",
        move_type: T::Fighting,
        accuracy: 0,
        pp: 20,
        target: MoveTarget::User,
        boosts: Some(StatChanges {
            target: MoveTarget::User,
            changes: &[(Stat::Attack, 1), (Stat::Defense, 1)],
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "bulletpunch",
        move_type: T::Steel,
        category: MoveCategory::Physical,
        base_power: 40,
        pp: 30,
        priority: 1,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "calmmind",
        move_type: T::Psychic,
        accuracy: 0,
        pp: 20,
        target: MoveTarget::User,
        boosts: Some(StatChanges {
            target: MoveTarget::User,
            changes: &[(Stat::SpecialAttack, 1), (Stat::SpecialDefense, 1)],
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "charm",
        move_type: T::Fairy,
        pp: 20,
        flags: MoveFlags::PROTECT,
        boosts: Some(StatChanges {
            target: MoveTarget::Opponent,
            changes: &[(Stat::Attack, -2)],
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "closecombat",
        move_type: T::Fighting,
        category: MoveCategory::Physical,
        base_power: 120,
        pp: 5,
        flags: CONTACT_PROTECT,
        boosts: Some(StatChanges {
            target: MoveTarget::User,
            changes: &[(Stat::Defense, -1), (Stat::SpecialDefense, -1)],
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "confuseray",
        move_type: T::Ghost,
        pp: 10,
        flags: MoveFlags::PROTECT,
        volatile_status: Some(VolatileEffect {
            target: MoveTarget::Opponent,
            volatile_status: VolatileStatus::CONFUSION,
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "crunch",
        move_type: T::Dark,
        category: MoveCategory::Physical,
        base_power: 80,
        pp: 15,
        flags: CONTACT_PROTECT,
        secondaries: &[Secondary {
            chance: 20,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Boost(&[(Stat::Defense, -1)]),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "darkpulse",
        move_type: T::Dark,
        category: MoveCategory::Special,
        base_power: 80,
        pp: 15,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 20,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::VolatileStatus(VolatileStatus::FLINCH),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "dazzlinggleam",
        move_type: T::Fairy,
        category: MoveCategory::Special,
        base_power: 80,
        pp: 10,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "defog",
        move_type: T::Flying,
        accuracy: 0,
        pp: 15,
        flags: MoveFlags::PROTECT,
        boosts: Some(StatChanges {
            target: MoveTarget::Opponent,
            changes: &[(Stat::Evasion, -1)],
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "doubleedge",
        move_type: T::Normal,
        category: MoveCategory::Physical,
        base_power: 120,
        pp: 15,
        flags: CONTACT_PROTECT,
        recoil: Some((33, 100)),
        ..Move::DEFAULT
    },
    Move {
        name: "dracometeor",
        move_type: T::Dragon,
        category: MoveCategory::Special,
        base_power: 130,
        accuracy: 90,
        pp: 5,
        flags: MoveFlags::PROTECT,
        boosts: Some(StatChanges {
            target: MoveTarget::User,
            changes: &[(Stat::SpecialAttack, -2)],
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "dragonclaw",
        move_type: T::Dragon,
        category: MoveCategory::Physical,
        base_power: 80,
        pp: 15,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "dragondance",
        move_type: T::Dragon,
        accuracy: 0,
        pp: 20,
        target: MoveTarget::User,
        boosts: Some(StatChanges {
            target: MoveTarget::User,
            changes: &[(Stat::Attack, 1), (Stat::Speed, 1)],
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "dragonpulse",
        move_type: T::Dragon,
        category: MoveCategory::Special,
        base_power: 85,
        pp: 10,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "drainpunch",
        move_type: T::Fighting,
        category: MoveCategory::Physical,
        base_power: 75,
        pp: 10,
        flags: CONTACT_PROTECT.union(MoveFlags::HEAL),
        drain: Some((1, 2)),
        ..Move::DEFAULT
    },
    Move {
        name: "earthpower",
        move_type: T::Ground,
        category: MoveCategory::Special,
        base_power: 90,
        pp: 10,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Boost(&[(Stat::SpecialDefense, -1)]),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "earthquake",
        move_type: T::Ground,
        category: MoveCategory::Physical,
        base_power: 100,
        pp: 10,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "electricterrain",
        move_type: T::Electric,
        accuracy: 0,
        pp: 10,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "energyball",
        move_type: T::Grass,
        category: MoveCategory::Special,
        base_power: 90,
        pp: 10,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Boost(&[(Stat::SpecialDefense, -1)]),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "eruption",
        move_type: T::Fire,
        category: MoveCategory::Special,
        base_power: 150,
        pp: 5,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "extremespeed",
        move_type: T::Normal,
        category: MoveCategory::Physical,
        base_power: 80,
        pp: 5,
        priority: 2,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "facade",
        move_type: T::Normal,
        category: MoveCategory::Physical,
        base_power: 70,
        pp: 20,
        flags: CONTACT_PROTECT.union(MoveFlags::IGNORES_BURN),
        ..Move::DEFAULT
    },
    Move {
        name: "fireblast",
        move_type: T::Fire,
        category: MoveCategory::Special,
        base_power: 110,
        accuracy: 85,
        pp: 5,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Status(PokemonStatus::Burn),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "firepunch",
        move_type: T::Fire,
        category: MoveCategory::Physical,
        base_power: 75,
        pp: 15,
        flags: CONTACT_PROTECT,
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Status(PokemonStatus::Burn),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "flamethrower",
        move_type: T::Fire,
        category: MoveCategory::Special,
        base_power: 90,
        pp: 15,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Status(PokemonStatus::Burn),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "flareblitz",
        move_type: T::Fire,
        category: MoveCategory::Physical,
        base_power: 120,
        pp: 15,
        flags: CONTACT_PROTECT,
        recoil: Some((33, 100)),
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Status(PokemonStatus::Burn),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "flipturn",
        move_type: T::Water,
        category: MoveCategory::Physical,
        base_power: 60,
        pp: 20,
        flags: CONTACT_PROTECT.union(MoveFlags::PIVOT),
        ..Move::DEFAULT
    },
    Move {
        name: "focusblast",
        move_type: T::Fighting,
        category: MoveCategory::Special,
        base_power: 120,
        accuracy: 70,
        pp: 5,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Boost(&[(Stat::SpecialDefense, -1)]),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "foulplay",
        move_type: T::Dark,
        category: MoveCategory::Physical,
        base_power: 95,
        pp: 15,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "futuresight",
        move_type: T::Psychic,
        category: MoveCategory::Special,
        base_power: 120,
        pp: 10,
        ..Move::DEFAULT
    },
    Move {
        name: "gigadrain",
        move_type: T::Grass,
        category: MoveCategory::Special,
        base_power: 75,
        pp: 10,
        flags: MoveFlags::PROTECT.union(MoveFlags::HEAL),
        drain: Some((1, 2)),
        ..Move::DEFAULT
    },
    Move {
        name: "grassknot",
        move_type: T::Grass,
        category: MoveCategory::Special,
        base_power: 0,
        pp: 20,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "grassyglide",
        move_type: T::Grass,
        category: MoveCategory::Physical,
        base_power: 55,
        pp: 20,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "grassyterrain",
        move_type: T::Grass,
        accuracy: 0,
        pp: 10,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "growl",
        move_type: T::Normal,
        pp: 40,
        flags: MoveFlags::PROTECT.union(MoveFlags::SOUND),
        boosts: Some(StatChanges {
            target: MoveTarget::Opponent,
            changes: &[(Stat::Attack, -1)],
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "gunkshot",
        move_type: T::Poison,
        category: MoveCategory::Physical,
        base_power: 120,
        accuracy: 80,
        pp: 5,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 30,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Status(PokemonStatus::Poison),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "haze",
        move_type: T::Ice,
        accuracy: 0,
        pp: 30,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "heavyslam",
        move_type: T::Steel,
        category: MoveCategory::Physical,
        base_power: 0,
        pp: 10,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "hex",
        move_type: T::Ghost,
        category: MoveCategory::Special,
        base_power: 65,
        pp: 10,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "highjumpkick",
        move_type: T::Fighting,
        category: MoveCategory::Physical,
        base_power: 130,
        accuracy: 90,
        pp: 10,
        flags: CONTACT_PROTECT,
        crash: Some((1, 2)),
        ..Move::DEFAULT
    },
    Move {
        name: "hurricane",
        move_type: T::Flying,
        category: MoveCategory::Special,
        base_power: 110,
        accuracy: 70,
        pp: 10,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 30,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::VolatileStatus(VolatileStatus::CONFUSION),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "hydropump",
        move_type: T::Water,
        category: MoveCategory::Special,
        base_power: 110,
        accuracy: 80,
        pp: 5,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "hypervoice",
        move_type: T::Normal,
        category: MoveCategory::Special,
        base_power: 90,
        pp: 10,
        flags: MoveFlags::PROTECT.union(MoveFlags::SOUND),
        ..Move::DEFAULT
    },
    Move {
        name: "icebeam",
        move_type: T::Ice,
        category: MoveCategory::Special,
        base_power: 90,
        pp: 10,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Status(PokemonStatus::Freeze),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "icefang",
        move_type: T::Ice,
        category: MoveCategory::Physical,
        base_power: 65,
        accuracy: 95,
        pp: 15,
        flags: CONTACT_PROTECT,
        secondaries: &[
            Secondary {
                chance: 10,
                target: MoveTarget::Opponent,
                effect: SecondaryEffect::Status(PokemonStatus::Freeze),
            },
            Secondary {
                chance: 10,
                target: MoveTarget::Opponent,
                effect: SecondaryEffect::VolatileStatus(VolatileStatus::FLINCH),
            },
        ],
        ..Move::DEFAULT
    },
    Move {
        name: "icepunch",
        move_type: T::Ice,
        category: MoveCategory::Physical,
        base_power: 75,
        pp: 15,
        flags: CONTACT_PROTECT,
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Status(PokemonStatus::Freeze),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "iceshard",
        move_type: T::Ice,
        category: MoveCategory::Physical,
        base_power: 40,
        pp: 30,
        priority: 1,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "ironhead",
        move_type: T::Steel,
        category: MoveCategory::Physical,
        base_power: 80,
        pp: 15,
        flags: CONTACT_PROTECT,
        secondaries: &[Secondary {
            chance: 30,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::VolatileStatus(VolatileStatus::FLINCH),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "knockoff",
        move_type: T::Dark,
        category: MoveCategory::Physical,
        base_power: 65,
        pp: 20,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "leafstorm",
        move_type: T::Grass,
        category: MoveCategory::Special,
        base_power: 130,
        accuracy: 90,
        pp: 5,
        flags: MoveFlags::PROTECT,
        boosts: Some(StatChanges {
            target: MoveTarget::User,
            changes: &[(Stat::SpecialAttack, -2)],
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "leechseed",
        move_type: T::Grass,
        accuracy: 90,
        pp: 10,
        flags: MoveFlags::PROTECT,
        volatile_status: Some(VolatileEffect {
            target: MoveTarget::Opponent,
            volatile_status: VolatileStatus::LEECH_SEED,
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "lightscreen",
        move_type: T::Psychic,
        accuracy: 0,
        pp: 30,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "liquidation",
        move_type: T::Water,
        category: MoveCategory::Physical,
        base_power: 85,
        pp: 10,
        flags: CONTACT_PROTECT,
        secondaries: &[Secondary {
            chance: 20,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Boost(&[(Stat::Defense, -1)]),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "megahorn",
        move_type: T::Bug,
        category: MoveCategory::Physical,
        base_power: 120,
        accuracy: 85,
        pp: 10,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "mistyterrain",
        move_type: T::Fairy,
        accuracy: 0,
        pp: 10,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "moonblast",
        move_type: T::Fairy,
        category: MoveCategory::Special,
        base_power: 95,
        pp: 15,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 30,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Boost(&[(Stat::SpecialAttack, -1)]),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "nastyplot",
        move_type: T::Dark,
        accuracy: 0,
        pp: 20,
        target: MoveTarget::User,
        boosts: Some(StatChanges {
            target: MoveTarget::User,
            changes: &[(Stat::SpecialAttack, 2)],
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "nightshade",
        move_type: T::Ghost,
        category: MoveCategory::Special,
        base_power: 0,
        pp: 15,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "overheat",
        move_type: T::Fire,
        category: MoveCategory::Special,
        base_power: 130,
        accuracy: 90,
        pp: 5,
        flags: MoveFlags::PROTECT,
        boosts: Some(StatChanges {
            target: MoveTarget::User,
            changes: &[(Stat::SpecialAttack, -2)],
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "phantomforce",
        move_type: T::Ghost,
        category: MoveCategory::Physical,
        base_power: 90,
        pp: 10,
        flags: MoveFlags::CONTACT.union(MoveFlags::CHARGE),
        ..Move::DEFAULT
    },
    Move {
        name: "playrough",
        move_type: T::Fairy,
        category: MoveCategory::Physical,
        base_power: 90,
        accuracy: 90,
        pp: 10,
        flags: CONTACT_PROTECT,
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Boost(&[(Stat::Attack, -1)]),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "poisonjab",
        move_type: T::Poison,
        category: MoveCategory::Physical,
        base_power: 80,
        pp: 20,
        flags: CONTACT_PROTECT,
        secondaries: &[Secondary {
            chance: 30,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Status(PokemonStatus::Poison),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "powerwhip",
        move_type: T::Grass,
        category: MoveCategory::Physical,
        base_power: 120,
        accuracy: 85,
        pp: 10,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "protect",
        move_type: T::Normal,
        accuracy: 0,
        pp: 10,
        priority: 4,
        target: MoveTarget::User,
        volatile_status: Some(VolatileEffect {
            target: MoveTarget::User,
            volatile_status: VolatileStatus::PROTECT,
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "psychic",
        move_type: T::Psychic,
        category: MoveCategory::Special,
        base_power: 90,
        pp: 10,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Boost(&[(Stat::SpecialDefense, -1)]),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "psychicfangs",
        move_type: T::Psychic,
        category: MoveCategory::Physical,
        base_power: 85,
        pp: 10,
        flags: CONTACT_PROTECT.union(MoveFlags::BREAKS_SCREENS),
        ..Move::DEFAULT
    },
    Move {
        name: "psychicterrain",
        move_type: T::Psychic,
        accuracy: 0,
        pp: 10,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "psyshock",
        move_type: T::Psychic,
        category: MoveCategory::Special,
        base_power: 80,
        pp: 10,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "pursuit",
        move_type: T::Dark,
        category: MoveCategory::Physical,
        base_power: 40,
        pp: 20,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "quickattack",
        move_type: T::Normal,
        category: MoveCategory::Physical,
        base_power: 40,
        pp: 30,
        priority: 1,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "raindance",
        move_type: T::Water,
        accuracy: 0,
        pp: 5,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "rapidspin",
        move_type: T::Normal,
        category: MoveCategory::Physical,
        base_power: 50,
        pp: 40,
        flags: CONTACT_PROTECT,
        secondaries: &[Secondary {
            chance: 100,
            target: MoveTarget::User,
            effect: SecondaryEffect::Boost(&[(Stat::Speed, 1)]),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "recover",
        move_type: T::Normal,
        accuracy: 0,
        pp: 5,
        target: MoveTarget::User,
        flags: MoveFlags::HEAL,
        heal: Some((1, 2)),
        ..Move::DEFAULT
    },
    Move {
        name: "reflect",
        move_type: T::Psychic,
        accuracy: 0,
        pp: 20,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "roar",
        move_type: T::Normal,
        accuracy: 0,
        pp: 20,
        priority: -6,
        flags: MoveFlags::PROTECT.union(MoveFlags::DRAG).union(MoveFlags::SOUND),
        ..Move::DEFAULT
    },
    Move {
        name: "rockslide",
        move_type: T::Rock,
        category: MoveCategory::Physical,
        base_power: 75,
        accuracy: 90,
        pp: 10,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 30,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::VolatileStatus(VolatileStatus::FLINCH),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "sandstorm",
        move_type: T::Rock,
        accuracy: 0,
        pp: 10,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "scald",
        move_type: T::Water,
        category: MoveCategory::Special,
        base_power: 80,
        pp: 15,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 30,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Status(PokemonStatus::Burn),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "seismictoss",
        move_type: T::Fighting,
        category: MoveCategory::Physical,
        base_power: 0,
        pp: 20,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "shadowball",
        move_type: T::Ghost,
        category: MoveCategory::Special,
        base_power: 80,
        pp: 15,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 20,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Boost(&[(Stat::SpecialDefense, -1)]),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "shadowsneak",
        move_type: T::Ghost,
        category: MoveCategory::Physical,
        base_power: 40,
        pp: 30,
        priority: 1,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "slackoff",
        move_type: T::Normal,
        accuracy: 0,
        pp: 5,
        target: MoveTarget::User,
        flags: MoveFlags::HEAL,
        heal: Some((1, 2)),
        ..Move::DEFAULT
    },
    Move {
        name: "sleeppowder",
        move_type: T::Grass,
        accuracy: 75,
        pp: 15,
        flags: MoveFlags::PROTECT.union(MoveFlags::POWDER),
        status: Some(StatusEffect {
            target: MoveTarget::Opponent,
            status: PokemonStatus::Sleep,
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "sludgebomb",
        move_type: T::Poison,
        category: MoveCategory::Special,
        base_power: 90,
        pp: 10,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 30,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Status(PokemonStatus::Poison),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "snowscape",
        move_type: T::Ice,
        accuracy: 0,
        pp: 10,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "spikes",
        move_type: T::Ground,
        accuracy: 0,
        pp: 20,
        ..Move::DEFAULT
    },
    Move {
        name: "spore",
        move_type: T::Grass,
        pp: 15,
        flags: MoveFlags::PROTECT.union(MoveFlags::POWDER),
        status: Some(StatusEffect {
            target: MoveTarget::Opponent,
            status: PokemonStatus::Sleep,
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "stealthrock",
        move_type: T::Rock,
        accuracy: 0,
        pp: 20,
        ..Move::DEFAULT
    },
    Move {
        name: "stickyweb",
        move_type: T::Bug,
        accuracy: 0,
        pp: 20,
        ..Move::DEFAULT
    },
    Move {
        name: "stoneedge",
        move_type: T::Rock,
        category: MoveCategory::Physical,
        base_power: 100,
        accuracy: 80,
        pp: 5,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "stunspore",
        move_type: T::Grass,
        accuracy: 75,
        pp: 30,
        flags: MoveFlags::PROTECT.union(MoveFlags::POWDER),
        status: Some(StatusEffect {
            target: MoveTarget::Opponent,
            status: PokemonStatus::Paralyze,
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "substitute",
        move_type: T::Normal,
        accuracy: 0,
        pp: 10,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "suckerpunch",
        move_type: T::Dark,
        category: MoveCategory::Physical,
        base_power: 70,
        pp: 5,
        priority: 1,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "sunnyday",
        move_type: T::Fire,
        accuracy: 0,
        pp: 5,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "superfang",
        move_type: T::Normal,
        category: MoveCategory::Physical,
        base_power: 0,
        accuracy: 90,
        pp: 10,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "superpower",
        move_type: T::Fighting,
        category: MoveCategory::Physical,
        base_power: 120,
        pp: 5,
        flags: CONTACT_PROTECT,
        boosts: Some(StatChanges {
            target: MoveTarget::User,
            changes: &[(Stat::Attack, -1), (Stat::Defense, -1)],
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "surf",
        move_type: T::Water,
        category: MoveCategory::Special,
        base_power: 90,
        pp: 15,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "swift",
        move_type: T::Normal,
        category: MoveCategory::Special,
        base_power: 60,
        accuracy: 0,
        pp: 20,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "swordsdance",
        move_type: T::Normal,
        accuracy: 0,
        pp: 20,
        target: MoveTarget::User,
        boosts: Some(StatChanges {
            target: MoveTarget::User,
            changes: &[(Stat::Attack, 2)],
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "tackle",
        move_type: T::Normal,
        category: MoveCategory::Physical,
        base_power: 40,
        pp: 35,
        flags: CONTACT_PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "tailwind",
        move_type: T::Flying,
        accuracy: 0,
        pp: 15,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "taunt",
        move_type: T::Dark,
        pp: 20,
        flags: MoveFlags::PROTECT,
        volatile_status: Some(VolatileEffect {
            target: MoveTarget::Opponent,
            volatile_status: VolatileStatus::TAUNT,
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "thunder",
        move_type: T::Electric,
        category: MoveCategory::Special,
        base_power: 110,
        accuracy: 70,
        pp: 10,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 30,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Status(PokemonStatus::Paralyze),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "thunderbolt",
        move_type: T::Electric,
        category: MoveCategory::Special,
        base_power: 90,
        pp: 15,
        flags: MoveFlags::PROTECT,
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Status(PokemonStatus::Paralyze),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "thunderpunch",
        move_type: T::Electric,
        category: MoveCategory::Physical,
        base_power: 75,
        pp: 15,
        flags: CONTACT_PROTECT,
        secondaries: &[Secondary {
            chance: 10,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::Status(PokemonStatus::Paralyze),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "thunderwave",
        move_type: T::Electric,
        accuracy: 90,
        pp: 20,
        flags: MoveFlags::PROTECT,
        status: Some(StatusEffect {
            target: MoveTarget::Opponent,
            status: PokemonStatus::Paralyze,
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "toxic",
        move_type: T::Poison,
        accuracy: 90,
        pp: 10,
        flags: MoveFlags::PROTECT,
        status: Some(StatusEffect {
            target: MoveTarget::Opponent,
            status: PokemonStatus::Toxic,
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "toxicspikes",
        move_type: T::Poison,
        accuracy: 0,
        pp: 20,
        ..Move::DEFAULT
    },
    Move {
        name: "trick",
        move_type: T::Psychic,
        pp: 10,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "trickroom",
        move_type: T::Psychic,
        accuracy: 0,
        pp: 5,
        priority: -7,
        target: MoveTarget::User,
        ..Move::DEFAULT
    },
    Move {
        name: "uturn",
        move_type: T::Bug,
        category: MoveCategory::Physical,
        base_power: 70,
        pp: 20,
        flags: CONTACT_PROTECT.union(MoveFlags::PIVOT),
        ..Move::DEFAULT
    },
    Move {
        name: "venoshock",
        move_type: T::Poison,
        category: MoveCategory::Special,
        base_power: 65,
        pp: 10,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "voltswitch",
        move_type: T::Electric,
        category: MoveCategory::Special,
        base_power: 70,
        pp: 20,
        flags: MoveFlags::PROTECT.union(MoveFlags::PIVOT),
        ..Move::DEFAULT
    },
    Move {
        name: "waterfall",
        move_type: T::Water,
        category: MoveCategory::Physical,
        base_power: 80,
        pp: 15,
        flags: CONTACT_PROTECT,
        secondaries: &[Secondary {
            chance: 20,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::VolatileStatus(VolatileStatus::FLINCH),
        }],
        ..Move::DEFAULT
    },
    Move {
        name: "watergun",
        move_type: T::Water,
        category: MoveCategory::Special,
        base_power: 40,
        pp: 25,
        flags: MoveFlags::PROTECT,
        ..Move::DEFAULT
    },
    Move {
        name: "whirlwind",
        move_type: T::Normal,
        accuracy: 0,
        pp: 20,
        priority: -6,
        flags: MoveFlags::PROTECT.union(MoveFlags::DRAG),
        ..Move::DEFAULT
    },
    Move {
        name: "willowisp",
        move_type: T::Fire,
        accuracy: 85,
        pp: 15,
        flags: MoveFlags::PROTECT,
        status: Some(StatusEffect {
            target: MoveTarget::Opponent,
            status: PokemonStatus::Burn,
        }),
        ..Move::DEFAULT
    },
    Move {
        name: "wish",
        move_type: T::Normal,
        accuracy: 0,
        pp: 10,
        target: MoveTarget::User,
        flags: MoveFlags::HEAL,
        ..Move::DEFAULT
    },
    Move {
        name: "zenheadbutt",
        move_type: T::Psychic,
        category: MoveCategory::Physical,
        base_power: 80,
        accuracy: 90,
        pp: 15,
        flags: CONTACT_PROTECT,
        secondaries: &[Secondary {
            chance: 20,
            target: MoveTarget::Opponent,
            effect: SecondaryEffect::VolatileStatus(VolatileStatus::FLINCH),
        }],
        ..Move::DEFAULT
    },
];

static MOVE_NAMES: phf::Map<&'static str, MoveId> = phf::phf_map! {
    "acrobatics" => MoveId::Acrobatics,
    "aerialace" => MoveId::Aerialace,
    "airslash" => MoveId::Airslash,
    "aquajet" => MoveId::Aquajet,
    "auroraveil" => MoveId::Auroraveil,
    "bodypress" => MoveId::Bodypress,
    "boltbeak" => MoveId::Boltbeak,
    "bravebird" => MoveId::Bravebird,
    "brine" => MoveId::Brine,
    "bugbuzz" => MoveId::Bugbuzz,
    "bulkup" => MoveId::Bulkup,
    "bulletpunch" => MoveId::Bulletpunch,
    "calmmind" => MoveId::Calmmind,
    "charm" => MoveId::Charm,
    "closecombat" => MoveId::Closecombat,
    "confuseray" => MoveId::Confuseray,
    "crunch" => MoveId::Crunch,
    "darkpulse" => MoveId::Darkpulse,
    "dazzlinggleam" => MoveId::Dazzlinggleam,
    "defog" => MoveId::Defog,
    "doubleedge" => MoveId::Doubleedge,
    "dracometeor" => MoveId::Dracometeor,
    "dragonclaw" => MoveId::Dragonclaw,
    "dragondance" => MoveId::Dragondance,
    "dragonpulse" => MoveId::Dragonpulse,
    "drainpunch" => MoveId::Drainpunch,
    "earthpower" => MoveId::Earthpower,
    "earthquake" => MoveId::Earthquake,
    "electricterrain" => MoveId::Electricterrain,
    "energyball" => MoveId::Energyball,
    "eruption" => MoveId::Eruption,
    "extremespeed" => MoveId::Extremespeed,
    "facade" => MoveId::Facade,
    "fireblast" => MoveId::Fireblast,
    "firepunch" => MoveId::Firepunch,
    "flamethrower" => MoveId::Flamethrower,
    "flareblitz" => MoveId::Flareblitz,
    "flipturn" => MoveId::Flipturn,
    "focusblast" => MoveId::Focusblast,
    "foulplay" => MoveId::Foulplay,
    "futuresight" => MoveId::Futuresight,
    "gigadrain" => MoveId::Gigadrain,
    "grassknot" => MoveId::Grassknot,
    "grassyglide" => MoveId::Grassyglide,
    "grassyterrain" => MoveId::Grassyterrain,
    "growl" => MoveId::Growl,
    "gunkshot" => MoveId::Gunkshot,
    "haze" => MoveId::Haze,
    "heavyslam" => MoveId::Heavyslam,
    "hex" => MoveId::Hex,
    "highjumpkick" => MoveId::Highjumpkick,
    "hurricane" => MoveId::Hurricane,
    "hydropump" => MoveId::Hydropump,
    "hypervoice" => MoveId::Hypervoice,
    "icebeam" => MoveId::Icebeam,
    "icefang" => MoveId::Icefang,
    "icepunch" => MoveId::Icepunch,
    "iceshard" => MoveId::Iceshard,
    "ironhead" => MoveId::Ironhead,
    "knockoff" => MoveId::Knockoff,
    "leafstorm" => MoveId::Leafstorm,
    "leechseed" => MoveId::Leechseed,
    "lightscreen" => MoveId::Lightscreen,
    "liquidation" => MoveId::Liquidation,
    "megahorn" => MoveId::Megahorn,
    "mistyterrain" => MoveId::Mistyterrain,
    "moonblast" => MoveId::Moonblast,
    "nastyplot" => MoveId::Nastyplot,
    "nightshade" => MoveId::Nightshade,
    "none" => MoveId::None,
    "overheat" => MoveId::Overheat,
    "phantomforce" => MoveId::Phantomforce,
    "playrough" => MoveId::Playrough,
    "poisonjab" => MoveId::Poisonjab,
    "powerwhip" => MoveId::Powerwhip,
    "protect" => MoveId::Protect,
    "psychic" => MoveId::Psychic,
    "psychicfangs" => MoveId::Psychicfangs,
    "psychicterrain" => MoveId::Psychicterrain,
    "psyshock" => MoveId::Psyshock,
    "pursuit" => MoveId::Pursuit,
    "quickattack" => MoveId::Quickattack,
    "raindance" => MoveId::Raindance,
    "rapidspin" => MoveId::Rapidspin,
    "recover" => MoveId::Recover,
    "reflect" => MoveId::Reflect,
    "roar" => MoveId::Roar,
    "rockslide" => MoveId::Rockslide,
    "sandstorm" => MoveId::Sandstorm,
    "scald" => MoveId::Scald,
    "seismictoss" => MoveId::Seismictoss,
    "shadowball" => MoveId::Shadowball,
    "shadowsneak" => MoveId::Shadowsneak,
    "slackoff" => MoveId::Slackoff,
    "sleeppowder" => MoveId::Sleeppowder,
    "sludgebomb" => MoveId::Sludgebomb,
    "snowscape" => MoveId::Snowscape,
    "spikes" => MoveId::Spikes,
    "spore" => MoveId::Spore,
    "stealthrock" => MoveId::Stealthrock,
    "stickyweb" => MoveId::Stickyweb,
    "stoneedge" => MoveId::Stoneedge,
    "stunspore" => MoveId::Stunspore,
    "substitute" => MoveId::Substitute,
    "suckerpunch" => MoveId::Suckerpunch,
    "sunnyday" => MoveId::Sunnyday,
    "superfang" => MoveId::Superfang,
    "superpower" => MoveId::Superpower,
    "surf" => MoveId::Surf,
    "swift" => MoveId::Swift,
    "swordsdance" => MoveId::Swordsdance,
    "tackle" => MoveId::Tackle,
    "tailwind" => MoveId::Tailwind,
    "taunt" => MoveId::Taunt,
    "thunder" => MoveId::Thunder,
    "thunderbolt" => MoveId::Thunderbolt,
    "thunderpunch" => MoveId::Thunderpunch,
    "thunderwave" => MoveId::Thunderwave,
    "toxic" => MoveId::Toxic,
    "toxicspikes" => MoveId::Toxicspikes,
    "trick" => MoveId::Trick,
    "trickroom" => MoveId::Trickroom,
    "uturn" => MoveId::Uturn,
    "venoshock" => MoveId::Venoshock,
    "voltswitch" => MoveId::Voltswitch,
    "waterfall" => MoveId::Waterfall,
    "watergun" => MoveId::Watergun,
    "whirlwind" => MoveId::Whirlwind,
    "willowisp" => MoveId::Willowisp,
    "wish" => MoveId::Wish,
    "zenheadbutt" => MoveId::Zenheadbutt,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_round_trip() {
        // Every name maps to an entry whose table row carries the same name,
        // which pins the enum ordering to the data array ordering.
        for (name, id) in MOVE_NAMES.entries() {
            assert_eq!(id.data().name, *name, "table misaligned at {}", name);
        }
        assert_eq!(MOVE_NAMES.len(), MoveId::COUNT);
    }

    #[test]
    fn test_basic_data() {
        let tackle = MoveId::Tackle.data();
        assert_eq!(tackle.base_power, 40);
        assert_eq!(tackle.category, MoveCategory::Physical);
        assert!(tackle.flags.contains(MoveFlags::CONTACT));

        let tbolt = MoveId::Thunderbolt.data();
        assert_eq!(tbolt.secondaries.len(), 1);
        assert_eq!(tbolt.secondaries[0].chance, 10);

        assert_eq!(MoveId::from_str("Ice Beam".replace(' ', "").as_str()), Some(MoveId::Icebeam));
        assert_eq!(MoveId::from_str("notamove"), None);
    }

    #[test]
    fn test_priority_and_flags() {
        assert_eq!(MoveId::Extremespeed.data().priority, 2);
        assert_eq!(MoveId::Trickroom.data().priority, -7);
        assert_eq!(MoveId::Whirlwind.data().priority, -6);
        assert!(MoveId::Uturn.data().flags.contains(MoveFlags::PIVOT));
        assert!(MoveId::Spore.data().flags.contains(MoveFlags::POWDER));
        assert!(MoveId::Phantomforce.data().flags.contains(MoveFlags::CHARGE));
        assert!(!MoveId::Phantomforce.data().flags.contains(MoveFlags::PROTECT));
    }

    #[test]
    fn test_self_targeting_moves_cannot_miss() {
        for id in [
            MoveId::Swordsdance,
            MoveId::Recover,
            MoveId::Substitute,
            MoveId::Protect,
            MoveId::Raindance,
        ] {
            let data = id.data();
            assert_eq!(data.target, MoveTarget::User);
            assert_eq!(data.accuracy, 0);
        }
    }
}
