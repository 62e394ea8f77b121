//! Particle value and the particle factory
//!
//! A particle does not know where it is. The grid owns placement; this is
//! just what a cell holds.

use super::elements::ParticleKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Particle {
    pub kind: ParticleKind,
    pub color: u32,
    wet: bool,
}

impl Particle {
    pub fn new(kind: ParticleKind) -> Self {
        Self {
            kind,
            color: kind.base_color(),
            wet: false,
        }
    }

    #[inline]
    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Only dirt can carry the wet flag; other kinds ignore the request
    #[inline]
    pub fn with_wet(mut self, wet: bool) -> Self {
        self.wet = wet && self.kind == ParticleKind::Dirt;
        self
    }

    #[inline]
    pub fn is_wet(&self) -> bool {
        self.wet
    }

    /// Lowercase type tag, e.g. "sand"
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

/// Create a particle from a selector label.
///
/// Recognises exactly "Sand", "Water", "Stone", "Dirt", "Cloud" and "Grass";
/// anything else yields `None`.
pub fn check_particle_type(name: &str) -> Option<Particle> {
    ParticleKind::from_display_name(name).map(Particle::new)
}
