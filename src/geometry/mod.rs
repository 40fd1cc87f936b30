pub mod params;
pub mod sample;

pub use params::CurveParameters;
pub use sample::CatenarySample;
