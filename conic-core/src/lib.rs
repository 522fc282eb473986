#![allow(mixed_script_confusables)]

#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod conic;
pub mod error;
pub mod intersect;
pub mod math;
pub mod r2;
pub mod rotate;
pub mod shape;
pub mod shapes;

pub use conic::{ConicSection, ConicSectionType, Sign};
pub use error::{ConicError, Result};
pub use intersect::{intersect_conics, Intersect, IntersectConfig};
pub use math::Scalar;
pub use r2::R2;
pub use shape::Shape;

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> log::LevelFilter {
    match level {
        Some("error") => log::LevelFilter::Error,
        Some("warn") => log::LevelFilter::Warn,
        Some("info") | Some("") | None => log::LevelFilter::Info,
        Some("debug") => log::LevelFilter::Debug,
        Some("trace") => log::LevelFilter::Trace,
        Some(level) => panic!("invalid log level: {}", level),
    }
}
