mod length;
mod lowest_point;

pub use length::Length;
pub use lowest_point::LowestPoint;
