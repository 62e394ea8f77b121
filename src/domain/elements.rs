//! Element Definitions - particle kinds, ids and display colors
//!
//! Ids are what the grid stores (`kinds[]`) and what JS reads through
//! `kinds_ptr`, so they are stable: 0 is always empty.

use serde::Serialize;

pub type ElementId = u8;

pub const EL_EMPTY: ElementId = 0;
pub const EL_SAND: ElementId = 1;
pub const EL_WATER: ElementId = 2;
pub const EL_STONE: ElementId = 3;
pub const EL_DIRT: ElementId = 4;
pub const EL_CLOUD: ElementId = 5;
pub const EL_GRASS: ElementId = 6;

/// Number of ids including empty
pub const ELEMENT_COUNT: usize = 7;

// Colors in ABGR format (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA])
pub const COLOR_SAND: u32 = 0xFF00A5FF; // orange
pub const COLOR_WATER: u32 = 0xFFFF0000; // blue
pub const COLOR_STONE: u32 = 0xFF808080; // gray
pub const COLOR_DIRT: u32 = 0xFF2A2AA5; // brown
pub const COLOR_CLOUD: u32 = 0xFF808080; // gray
pub const COLOR_GRASS: u32 = 0xFF008000; // green

/// Closed set of particle kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ParticleKind {
    Sand = EL_SAND,
    Water = EL_WATER,
    Stone = EL_STONE,
    Dirt = EL_DIRT,
    Cloud = EL_CLOUD,
    Grass = EL_GRASS,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 6] = [
        ParticleKind::Sand,
        ParticleKind::Water,
        ParticleKind::Stone,
        ParticleKind::Dirt,
        ParticleKind::Cloud,
        ParticleKind::Grass,
    ];

    #[inline]
    pub fn id(self) -> ElementId {
        self as ElementId
    }

    /// Kind stored under a grid id, `None` for empty or unknown ids
    #[inline]
    pub fn from_id(id: ElementId) -> Option<Self> {
        match id {
            EL_SAND => Some(ParticleKind::Sand),
            EL_WATER => Some(ParticleKind::Water),
            EL_STONE => Some(ParticleKind::Stone),
            EL_DIRT => Some(ParticleKind::Dirt),
            EL_CLOUD => Some(ParticleKind::Cloud),
            EL_GRASS => Some(ParticleKind::Grass),
            _ => None,
        }
    }

    /// Selector label as shown in the particle dropdown ("Sand", "Water", ...)
    pub fn display_name(self) -> &'static str {
        match self {
            ParticleKind::Sand => "Sand",
            ParticleKind::Water => "Water",
            ParticleKind::Stone => "Stone",
            ParticleKind::Dirt => "Dirt",
            ParticleKind::Cloud => "Cloud",
            ParticleKind::Grass => "Grass",
        }
    }

    /// Lowercase type tag ("sand", "water", ...)
    pub fn type_name(self) -> &'static str {
        match self {
            ParticleKind::Sand => "sand",
            ParticleKind::Water => "water",
            ParticleKind::Stone => "stone",
            ParticleKind::Dirt => "dirt",
            ParticleKind::Cloud => "cloud",
            ParticleKind::Grass => "grass",
        }
    }

    /// Exact, case-sensitive match on the selector label
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.display_name() == name)
    }

    #[inline]
    pub fn base_color(self) -> u32 {
        match self {
            ParticleKind::Sand => COLOR_SAND,
            ParticleKind::Water => COLOR_WATER,
            ParticleKind::Stone => COLOR_STONE,
            ParticleKind::Dirt => COLOR_DIRT,
            ParticleKind::Cloud => COLOR_CLOUD,
            ParticleKind::Grass => COLOR_GRASS,
        }
    }
}

/// Shift each RGB channel of an ABGR color by a small seeded amount
pub fn color_with_variation(base: u32, seed: u8) -> u32 {
    let i = (seed & 31) as i32;
    let variation = (i - 16) * 2;

    let a = (base >> 24) & 0xFF;
    let b = (((base >> 16) & 0xFF) as i32 + variation).clamp(0, 255) as u32;
    let g = (((base >> 8) & 0xFF) as i32 + variation).clamp(0, 255) as u32;
    let r = ((base & 0xFF) as i32 + variation).clamp(0, 255) as u32;

    (a << 24) | (b << 16) | (g << 8) | r
}
