mod collections;
mod primitives;
mod tuple;

#[cfg(feature = "math")]
mod math;
