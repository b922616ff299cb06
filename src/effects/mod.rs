pub mod distortion;
