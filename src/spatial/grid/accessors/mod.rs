mod particle_ops;
mod updated;
mod pointers;
