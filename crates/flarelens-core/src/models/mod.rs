pub mod assessment;
pub mod sample;
