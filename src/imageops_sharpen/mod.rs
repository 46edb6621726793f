pub mod channels;
pub mod config;
pub mod laplacian;
pub mod pipeline;
pub mod raw;
pub mod sharpen_ext;
pub mod unsharp_mask;
