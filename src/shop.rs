//! Static upgrade catalog for the cat shop.
//!
//! The catalog is fixed at compile time. Catalog order defines the shop's
//! display order; it carries no other meaning.

use serde::{Deserialize, Serialize};

/// What an upgrade improves when purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    /// Adds passive production (happy per second).
    Production,
    /// Adds flat pet power to every manual click.
    Click,
}

/// Number of entries in [`SHOP`]. `owned` counts are stored as an array of
/// this length, indexed by [`UpgradeId`].
pub const UPGRADE_COUNT: usize = 14;

/// Unique identifier for each shop upgrade.
///
/// Discriminant order matches [`SHOP`] order, so `id as usize` indexes the
/// catalog and the owned-counts array directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeId {
    Toy,
    Feeder,
    Tower,
    Petting,
    SilkGloves,
    AromaLamp,
    AuroraOil,
    StarlightHub,
    CosmicGloves,
    DreamOrchestra,
    MythicHalo,
    CelestialPalace,
    GalaxyWhisper,
    QuantumGarden,
}

impl UpgradeId {
    /// All upgrade ids in catalog order.
    pub const ALL: [UpgradeId; UPGRADE_COUNT] = [
        UpgradeId::Toy,
        UpgradeId::Feeder,
        UpgradeId::Tower,
        UpgradeId::Petting,
        UpgradeId::SilkGloves,
        UpgradeId::AromaLamp,
        UpgradeId::AuroraOil,
        UpgradeId::StarlightHub,
        UpgradeId::CosmicGloves,
        UpgradeId::DreamOrchestra,
        UpgradeId::MythicHalo,
        UpgradeId::CelestialPalace,
        UpgradeId::GalaxyWhisper,
        UpgradeId::QuantumGarden,
    ];

    /// Stable string key used in the save record.
    pub fn key(self) -> &'static str {
        match self {
            UpgradeId::Toy => "toy",
            UpgradeId::Feeder => "feeder",
            UpgradeId::Tower => "tower",
            UpgradeId::Petting => "petting",
            UpgradeId::SilkGloves => "silk_gloves",
            UpgradeId::AromaLamp => "aroma_lamp",
            UpgradeId::AuroraOil => "aurora_oil",
            UpgradeId::StarlightHub => "starlight_hub",
            UpgradeId::CosmicGloves => "cosmic_gloves",
            UpgradeId::DreamOrchestra => "dream_orchestra",
            UpgradeId::MythicHalo => "mythic_halo",
            UpgradeId::CelestialPalace => "celestial_palace",
            UpgradeId::GalaxyWhisper => "galaxy_whisper",
            UpgradeId::QuantumGarden => "quantum_garden",
        }
    }

    /// Parses a save-record key. Unknown keys (from newer versions) yield
    /// `None` and are dropped by the codec.
    pub fn from_key(key: &str) -> Option<UpgradeId> {
        UpgradeId::ALL.into_iter().find(|id| id.key() == key)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Static definition of a shop upgrade.
#[derive(Debug, Clone)]
pub struct UpgradeDef {
    pub id: UpgradeId,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: UpgradeKind,
    pub base_cost: f64,
    /// PPS added per copy (Production) or pet power added per copy (Click).
    pub gain: f64,
}

/// All shop upgrades in display order.
pub const SHOP: &[UpgradeDef] = &[
    UpgradeDef {
        id: UpgradeId::Toy,
        name: "Teaser Wand",
        description: "PPS +0.2 / a little exercise keeps the mood up",
        kind: UpgradeKind::Production,
        base_cost: 18.0,
        gain: 0.2,
    },
    UpgradeDef {
        id: UpgradeId::Feeder,
        name: "Treat Dispenser",
        description: "PPS +1.5 / snacks appear on a whim",
        kind: UpgradeKind::Production,
        base_cost: 130.0,
        gain: 1.5,
    },
    UpgradeDef {
        id: UpgradeId::Tower,
        name: "Cat Tower",
        description: "PPS +12 / climb, play, refresh",
        kind: UpgradeKind::Production,
        base_cost: 980.0,
        gain: 12.0,
    },
    UpgradeDef {
        id: UpgradeId::Petting,
        name: "Petting Practice",
        description: "Click +1 / stronger fundamentals of the manual pet",
        kind: UpgradeKind::Click,
        base_cost: 70.0,
        gain: 1.0,
    },
    UpgradeDef {
        id: UpgradeId::SilkGloves,
        name: "Moonlight Silk Gloves",
        description: "Click +6 / handwork honed under moonlight",
        kind: UpgradeKind::Click,
        base_cost: 4_500.0,
        gain: 6.0,
    },
    UpgradeDef {
        id: UpgradeId::AromaLamp,
        name: "Drowsy Aroma Lamp",
        description: "PPS +75 / a sleep-inducing scent boosts idle income",
        kind: UpgradeKind::Production,
        base_cost: 8_200.0,
        gain: 75.0,
    },
    UpgradeDef {
        id: UpgradeId::AuroraOil,
        name: "Aurora Paw Oil",
        description: "Click +18 / paw pads melt at the touch",
        kind: UpgradeKind::Click,
        base_cost: 22_000.0,
        gain: 18.0,
    },
    UpgradeDef {
        id: UpgradeId::StarlightHub,
        name: "Starlight Cat Hub",
        description: "PPS +420 / a cosmic-scale comfort machine",
        kind: UpgradeKind::Production,
        base_cost: 180_000.0,
        gain: 420.0,
    },
    UpgradeDef {
        id: UpgradeId::CosmicGloves,
        name: "Cosmic Gloves",
        description: "Click +85 / galaxy-grade petting strength",
        kind: UpgradeKind::Click,
        base_cost: 350_000.0,
        gain: 85.0,
    },
    UpgradeDef {
        id: UpgradeId::DreamOrchestra,
        name: "Dreamwalker Music Box",
        description: "PPS +3,200 / a melody that beckons sleep",
        kind: UpgradeKind::Production,
        base_cost: 2_400_000.0,
        gain: 3_200.0,
    },
    UpgradeDef {
        id: UpgradeId::MythicHalo,
        name: "Mythic Cat Halo",
        description: "Click +680 / blessing of legend",
        kind: UpgradeKind::Click,
        base_cost: 6_800_000.0,
        gain: 680.0,
    },
    UpgradeDef {
        id: UpgradeId::CelestialPalace,
        name: "Celestial Cat Palace",
        description: "PPS +18,000 / build a paradise above the clouds",
        kind: UpgradeKind::Production,
        base_cost: 18_500_000.0,
        gain: 18_000.0,
    },
    UpgradeDef {
        id: UpgradeId::GalaxyWhisper,
        name: "Galaxy Whisper Brush",
        description: "Click +5,400 / a stroke watched over by the stars",
        kind: UpgradeKind::Click,
        base_cost: 74_000_000.0,
        gain: 5_400.0,
    },
    UpgradeDef {
        id: UpgradeId::QuantumGarden,
        name: "Quantum Cat Garden",
        description: "PPS +125,000 / care beyond dimensions",
        kind: UpgradeKind::Production,
        base_cost: 520_000_000.0,
        gain: 125_000.0,
    },
];

/// Looks up the static definition for an upgrade id.
pub fn get_upgrade(id: UpgradeId) -> &'static UpgradeDef {
    &SHOP[id.index()]
}
