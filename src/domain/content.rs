//! Particle manifest for the host UI (selector labels, ids, colors)

use serde::Serialize;

use crate::elements::{ElementId, ParticleKind};

const MANIFEST_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParticleManifest {
    format_version: u32,
    particles: Vec<ParticleManifestEntry>,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleManifestEntry {
    pub id: ElementId,
    /// Label the factory accepts, e.g. "Sand"
    pub name: &'static str,
    /// Lowercase type tag, e.g. "sand"
    #[serde(rename = "type")]
    pub kind: ParticleKind,
    pub color: u32,
}

pub fn manifest_entries() -> Vec<ParticleManifestEntry> {
    ParticleKind::ALL
        .into_iter()
        .map(|kind| ParticleManifestEntry {
            id: kind.id(),
            name: kind.display_name(),
            kind,
            color: kind.base_color(),
        })
        .collect()
}

pub fn manifest_json() -> Result<String, String> {
    let out = ParticleManifest {
        format_version: MANIFEST_FORMAT_VERSION,
        particles: manifest_entries(),
    };
    serde_json::to_string(&out).map_err(|e| e.to_string())
}
