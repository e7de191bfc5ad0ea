mod ray;
mod vector;

pub use ray::*;
pub use vector::*;
