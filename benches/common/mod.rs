pub mod samples;
pub mod timing;
