//! I/O layer for scanning input directories and decoding images.
//! Provides the `reader` (directory scan + decode) and `writers`
//! for PNG/JPEG outputs.
pub mod reader;
pub use reader::{DirScan, load_image, scan_input_dir};

pub mod writers;
