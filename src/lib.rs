#![doc = r#"
ROUNDPIC — a batch circular profile-picture generator.

This crate turns directories of photos into uniform circular avatar assets.
Images from the "circle" input directory are assumed to be circular already
and are only resized; images from the "non-circle" directory are first
cropped to the inscribed circle of their top-left square region. Every
processed image is exported twice: as a transparent PNG (maximum lossless
compression) and as a JPEG (quality 100) with transparency flattened to
white. It powers the ROUNDPIC CLI and can be embedded in your own Rust
applications.

Quick start: process two directories to a path
----------------------------------------------
```rust,no_run
use std::path::Path;
use roundpic::{process_directory_to_path, ProcessingParams, ResizeMode};

fn main() -> roundpic::Result<()> {
    let params = ProcessingParams {
        target_size: 100,
        resize_mode: ResizeMode::Legacy,
    };

    let report = process_directory_to_path(
        Some(Path::new("/photos/circles")),
        Some(Path::new("/photos/rectangles")),
        Path::new("/out/avatars"),
        &params,
        true, // continue_on_error
    )?;

    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Process in-memory images
------------------------
```rust
use image::DynamicImage;
use roundpic::{process_image, ProcessingParams, SourceKind};

fn crop(photo: DynamicImage) -> roundpic::Result<DynamicImage> {
    process_image(photo, SourceKind::NonCircle, &ProcessingParams::default())
}
```

Resize semantics
----------------
The historical behavior this crate reproduces resizes circularized images
to a fixed 100x100 with bicubic resampling, ignoring the configured target
size, while circle-sourced images honor the configured size. That is
`ResizeMode::Legacy` (the default); `ResizeMode::Unified` applies the
configured size on both paths.

Error handling
--------------
All public functions return `roundpic::Result<T>`; match on
`roundpic::Error` to handle specific cases, e.g. a missing input directory
or an undecodable file.

```rust,no_run
use std::path::Path;
use roundpic::{process_directory_to_path, Error, ProcessingParams};

fn main() {
    let params = ProcessingParams::default();
    match process_directory_to_path(Some(Path::new("/bad/path")), None, Path::new("/out"), &params, true) {
        Ok(report) => println!("processed: {}", report.processed),
        Err(Error::InputDirNotFound { path }) => eprintln!("missing input: {}", path.display()),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `SourceKind`, `ResizeMode`).
- [`io`] — directory scanning, decoding, and PNG/JPEG writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{LEGACY_NON_CIRCLE_SIZE, ProcessingParams};
pub use crate::error::{Error, Result};
pub use crate::types::{ResampleFilter, ResizeMode, SourceKind};

// Readers and writers
pub use crate::io::reader::{DirScan, load_image, scan_input_dir};

// High-level API re-exports
pub use crate::api::{
    BatchReport, process_directory_to_path, process_file_to_path, process_image,
};
