//! Physical quantities shared by the cluster generator crates.

pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod time_test;

pub use length::Length;
pub use mass::Mass;
pub use temperature::Temperature;
pub use time::Time;
