#[macro_use]
mod macros;

pub mod cost;
pub mod distance;
pub mod mass;
pub mod percent;
pub mod rate;
pub mod speed;
pub mod time;
