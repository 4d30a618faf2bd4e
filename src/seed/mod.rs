pub mod neighborhood;
pub mod reduction;
pub mod shape;
mod shape_codes;

pub use neighborhood::{neighborhoods, Seed, MAX_SEED_WEIGHT};
pub use reduction::{Reduction, MURPHY_10};
pub use shape::{Shape, ShapeConfig, ShapeSet, MAX_SHAPE_LEN};
pub use shape_codes::SHAPE_CODES;
