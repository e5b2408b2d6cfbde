//! Shared types and enums used across ROUNDPIC.
//! Includes `SourceKind`, `ResizeMode`, and `ResampleFilter`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which input batch an image came from. Circle-sourced images are assumed
/// to be circular already and skip the circular crop.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum SourceKind {
    Circle,
    NonCircle,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Circle => write!(f, "circle"),
            SourceKind::NonCircle => write!(f, "non-circle"),
        }
    }
}

/// How the configured target size is applied to the non-circle path.
///
/// The historical behavior resizes circularized images to a fixed 100x100
/// regardless of the configured target size; `Legacy` reproduces that,
/// `Unified` honors the configured size on both paths.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ResizeMode {
    Legacy,
    Unified,
}

impl std::fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizeMode::Legacy => write!(f, "Legacy"),
            ResizeMode::Unified => write!(f, "Unified"),
        }
    }
}

/// Resampling filter used when scaling to the target square.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ResampleFilter {
    Nearest,
    Bicubic,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Nearest => write!(f, "Nearest"),
            ResampleFilter::Bicubic => write!(f, "Bicubic"),
        }
    }
}
