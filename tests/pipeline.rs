//! End-to-end tests for the directory pipeline: scan, transform, and
//! dual-format export.

use std::fs;
use std::path::Path;

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use roundpic::{Error, ProcessingParams, ResizeMode, process_directory_to_path};

fn write_opaque_png(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
    let [r, g, b] = rgb;
    RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]))
        .save(path)
        .unwrap();
}

fn params(target_size: u32, resize_mode: ResizeMode) -> ProcessingParams {
    ProcessingParams {
        target_size,
        resize_mode,
    }
}

#[test]
fn circle_batch_honors_target_size_and_stays_opaque() {
    let root = tempfile::tempdir().unwrap();
    let circle_dir = root.path().join("circles");
    let out_dir = root.path().join("out");
    fs::create_dir(&circle_dir).unwrap();
    write_opaque_png(&circle_dir.join("ada.png"), 200, 200, [180, 40, 40]);

    let report = process_directory_to_path(
        Some(&circle_dir),
        None,
        &out_dir,
        &params(50, ResizeMode::Legacy),
        true,
    )
    .unwrap();

    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 0);

    let png = image::open(out_dir.join("ada.png")).unwrap();
    assert_eq!(png.dimensions(), (50, 50));
    assert!(png.into_rgba8().pixels().all(|p| p.0[3] == 255));

    let jpg = image::open(out_dir.join("ada.jpg")).unwrap();
    assert_eq!(jpg.dimensions(), (50, 50));
}

#[test]
fn non_circle_batch_is_circularized_and_resized_to_legacy_size() {
    let root = tempfile::tempdir().unwrap();
    let input_dir = root.path().join("rects");
    let out_dir = root.path().join("out");
    fs::create_dir(&input_dir).unwrap();
    write_opaque_png(&input_dir.join("grace.png"), 300, 150, [30, 30, 200]);

    let report = process_directory_to_path(
        None,
        Some(&input_dir),
        &out_dir,
        &params(50, ResizeMode::Legacy),
        true,
    )
    .unwrap();
    assert_eq!(report.processed, 1);

    // Legacy mode ignores the configured 50 and lands on 100x100
    let png = image::open(out_dir.join("grace.png")).unwrap();
    assert_eq!(png.dimensions(), (100, 100));

    let png = png.into_rgba8();
    // corners are outside the inscribed circle, center is inside
    assert_eq!(png.get_pixel(0, 0).0[3], 0);
    assert_eq!(png.get_pixel(99, 99).0[3], 0);
    assert_eq!(png.get_pixel(50, 50).0[3], 255);

    // the JPEG flattens those corners to white
    let jpg = image::open(out_dir.join("grace.jpg")).unwrap().into_rgb8();
    assert!(jpg.get_pixel(0, 0).0.iter().all(|&c| c >= 250));
}

#[test]
fn unified_mode_applies_target_size_to_both_batches() {
    let root = tempfile::tempdir().unwrap();
    let circle_dir = root.path().join("circles");
    let rect_dir = root.path().join("rects");
    let out_dir = root.path().join("out");
    fs::create_dir(&circle_dir).unwrap();
    fs::create_dir(&rect_dir).unwrap();
    write_opaque_png(&circle_dir.join("a.png"), 120, 120, [1, 2, 3]);
    write_opaque_png(&rect_dir.join("b.png"), 90, 140, [4, 5, 6]);

    process_directory_to_path(
        Some(&circle_dir),
        Some(&rect_dir),
        &out_dir,
        &params(64, ResizeMode::Unified),
        true,
    )
    .unwrap();

    for name in ["a.png", "b.png", "a.jpg", "b.jpg"] {
        let img = image::open(out_dir.join(name)).unwrap();
        assert_eq!(img.dimensions(), (64, 64), "{name}");
    }
}

#[test]
fn output_directory_is_created_when_missing() {
    let root = tempfile::tempdir().unwrap();
    let circle_dir = root.path().join("circles");
    fs::create_dir(&circle_dir).unwrap();
    write_opaque_png(&circle_dir.join("x.png"), 10, 10, [0, 0, 0]);

    let out_dir = root.path().join("deeply").join("nested").join("out");
    assert!(!out_dir.exists());

    process_directory_to_path(
        Some(&circle_dir),
        None,
        &out_dir,
        &ProcessingParams::default(),
        true,
    )
    .unwrap();

    assert!(out_dir.join("x.png").is_file());
    assert!(out_dir.join("x.jpg").is_file());
}

#[test]
fn missing_input_directory_is_reported_with_its_path() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("does-not-exist");
    let out_dir = root.path().join("out");

    let err = process_directory_to_path(
        Some(&missing),
        None,
        &out_dir,
        &ProcessingParams::default(),
        true,
    )
    .unwrap_err();

    match err {
        Error::InputDirNotFound { path } => assert_eq!(path, missing),
        other => panic!("expected InputDirNotFound, got {other:?}"),
    }
}

#[test]
fn undecodable_file_is_isolated_unless_strict() {
    let root = tempfile::tempdir().unwrap();
    let circle_dir = root.path().join("circles");
    let out_dir = root.path().join("out");
    fs::create_dir(&circle_dir).unwrap();
    fs::write(circle_dir.join("broken.png"), b"not an image").unwrap();
    write_opaque_png(&circle_dir.join("fine.png"), 20, 20, [7, 7, 7]);

    // default: continue past the broken file and report it
    let report = process_directory_to_path(
        Some(&circle_dir),
        None,
        &out_dir,
        &ProcessingParams::default(),
        true,
    )
    .unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 1);
    assert!(out_dir.join("fine.png").is_file());

    // strict: the first error aborts the batch
    let err = process_directory_to_path(
        Some(&circle_dir),
        None,
        &out_dir,
        &ProcessingParams::default(),
        false,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Image(_)));
}

#[test]
fn reruns_produce_byte_identical_artifacts() {
    let root = tempfile::tempdir().unwrap();
    let rect_dir = root.path().join("rects");
    let out_dir = root.path().join("out");
    fs::create_dir(&rect_dir).unwrap();
    write_opaque_png(&rect_dir.join("pic.png"), 130, 90, [60, 120, 180]);

    let run = || {
        process_directory_to_path(
            None,
            Some(&rect_dir),
            &out_dir,
            &ProcessingParams::default(),
            true,
        )
        .unwrap();
        (
            fs::read(out_dir.join("pic.png")).unwrap(),
            fs::read(out_dir.join("pic.jpg")).unwrap(),
        )
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[test]
fn png_round_trip_preserves_processed_pixels() {
    let root = tempfile::tempdir().unwrap();
    let rect_dir = root.path().join("rects");
    let out_dir = root.path().join("out");
    fs::create_dir(&rect_dir).unwrap();
    write_opaque_png(&rect_dir.join("p.png"), 150, 150, [9, 90, 200]);

    let processed = roundpic::process_image(
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(150, 150, Rgba([9, 90, 200, 255]))),
        roundpic::SourceKind::NonCircle,
        &ProcessingParams::default(),
    )
    .unwrap();

    process_directory_to_path(
        None,
        Some(&rect_dir),
        &out_dir,
        &ProcessingParams::default(),
        true,
    )
    .unwrap();

    let decoded = image::open(out_dir.join("p.png")).unwrap();
    assert_eq!(decoded.into_rgba8(), processed.into_rgba8());
}

#[test]
fn files_from_both_batches_land_in_one_output_directory() {
    let root = tempfile::tempdir().unwrap();
    let circle_dir = root.path().join("circles");
    let rect_dir = root.path().join("rects");
    let out_dir = root.path().join("out");
    fs::create_dir(&circle_dir).unwrap();
    fs::create_dir(&rect_dir).unwrap();
    write_opaque_png(&circle_dir.join("one.png"), 40, 40, [1, 1, 1]);
    write_opaque_png(&rect_dir.join("two.png"), 40, 60, [2, 2, 2]);

    let report = process_directory_to_path(
        Some(&circle_dir),
        Some(&rect_dir),
        &out_dir,
        &ProcessingParams::default(),
        true,
    )
    .unwrap();

    assert_eq!(report.processed, 2);
    let mut names: Vec<_> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, ["one.jpg", "one.png", "two.jpg", "two.png"]);
}
