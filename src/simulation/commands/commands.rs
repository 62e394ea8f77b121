use crate::elements::{color_with_variation, ParticleKind};
use crate::particle::{check_particle_type, Particle};

use super::WorldCore;

fn place(world: &mut WorldCore, row: i32, col: i32, mut particle: Particle) -> bool {
    if !world.grid.is_empty(row, col) {
        return false;
    }

    if world.color_variation {
        let seed = ((col as u32)
            .wrapping_mul(7)
            .wrapping_add((row as u32).wrapping_mul(13))
            .wrapping_add(world.frame as u32)
            & 31) as u8;
        particle = particle.with_color(color_with_variation(particle.color, seed));
    }

    world.grid.set_particle(row, col, Some(particle));
    true
}

pub(super) fn add_particle(world: &mut WorldCore, row: i32, col: i32, name: &str) -> bool {
    let Some(particle) = check_particle_type(name) else {
        console_warn!("unknown particle type: {:?}", name);
        return false;
    };
    place(world, row, col, particle)
}

pub(super) fn add_particle_kind(world: &mut WorldCore, row: i32, col: i32, id: u8) -> bool {
    let Some(kind) = ParticleKind::from_id(id) else {
        return false;
    };
    place(world, row, col, Particle::new(kind))
}

pub(super) fn add_particles_in_radius(
    world: &mut WorldCore,
    row: i32,
    col: i32,
    radius: i32,
    name: &str,
) -> u32 {
    let Some(particle) = check_particle_type(name) else {
        console_warn!("unknown particle type: {:?}", name);
        return 0;
    };

    let (rows, cols) = (world.grid.rows(), world.grid.cols());
    let mut placed = 0;
    for_each_in_disc(rows, cols, row, col, radius, |r, c| {
        if place(world, r, c, particle) {
            placed += 1;
        }
    });
    placed
}

pub(super) fn remove_particle(world: &mut WorldCore, row: i32, col: i32) -> bool {
    if world.grid.get_particle(row, col).is_none() {
        return false;
    }
    world.grid.set_particle(row, col, None);
    true
}

pub(super) fn remove_particles_in_radius(world: &mut WorldCore, row: i32, col: i32, radius: i32) -> u32 {
    let (rows, cols) = (world.grid.rows(), world.grid.cols());
    let mut removed = 0;
    for_each_in_disc(rows, cols, row, col, radius, |r, c| {
        if remove_particle(world, r, c) {
            removed += 1;
        }
    });
    removed
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.frame = 0;
}

/// Visit every in-bounds cell within `radius` of the center (Euclidean, inclusive).
/// The scan is clipped to the grid first, so it never visits more than rows * cols cells.
/// `|dr|, |dc| <= radius <= i32::MAX`, so the squared distance fits in `i64`.
fn for_each_in_disc(
    rows: u32,
    cols: u32,
    row: i32,
    col: i32,
    radius: i32,
    mut f: impl FnMut(i32, i32),
) {
    if radius < 0 || rows == 0 || cols == 0 {
        return;
    }
    let (row, col, radius) = (row as i64, col as i64, radius as i64);
    let r2 = radius * radius;

    let row_lo = (row - radius).max(0);
    let row_hi = (row + radius).min(rows as i64 - 1);
    let col_lo = (col - radius).max(0);
    let col_hi = (col + radius).min(cols as i64 - 1);

    for r in row_lo..=row_hi {
        let dr = r - row;
        for c in col_lo..=col_hi {
            let dc = c - col;
            if dr * dr + dc * dc <= r2 {
                f(r as i32, c as i32);
            }
        }
    }
}
