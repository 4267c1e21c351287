//! Image processing.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader::into_dimensions` |
//! | **Primary** | fit-inside `resize_exact` (Lanczos3) → lossy WebP |
//! | **Thumbnail** | center crop to 4:3 + resize → lossy WebP |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::calculate_fit_inside_dimensions;
pub use operations::{
    PrimaryConfig, ThumbnailConfig, create_primary, create_thumbnail, get_dimensions,
};
pub use params::{Effort, Quality};
pub use rust_backend::RustBackend;
