pub mod conic;
pub mod line;
pub mod line_conic;

pub use conic::{intersect_conics, IntersectConfig};

use crate::r2::R2;

pub trait Intersect<D, O> {
    fn intersect(&self, o: &O) -> Vec<R2<D>>;
}
