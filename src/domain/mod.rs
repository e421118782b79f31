//! Domain layer: core entities and the data-access trait seams.

pub mod entities;
pub mod repositories;
