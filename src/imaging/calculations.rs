//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate dimensions that fit inside a bounding box, preserving aspect ratio.
///
/// Never enlarges: a source already inside the box is returned unchanged.
/// Both output edges are at least 1px.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `bounds` - Maximum allowed dimensions (width, height)
///
/// # Examples
/// ```
/// # use imgopt::imaging::calculate_fit_inside_dimensions;
/// // 2000x1500 into 1920x1080 → height is the binding edge
/// assert_eq!(calculate_fit_inside_dimensions((2000, 1500), (1920, 1080)), (1440, 1080));
///
/// // Already small enough → untouched
/// assert_eq!(calculate_fit_inside_dimensions((200, 150), (1920, 1080)), (200, 150));
/// ```
pub fn calculate_fit_inside_dimensions(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (max_w, max_h) = bounds;

    if src_w <= max_w && src_h <= max_h {
        return source;
    }

    let scale = (max_w as f64 / src_w as f64).min(max_h as f64 / src_h as f64);
    let w = ((src_w as f64 * scale).round() as u32).clamp(1, max_w.max(1));
    let h = ((src_h as f64 * scale).round() as u32).clamp(1, max_h.max(1));
    (w, h)
}

/// Source-space rectangle `(x, y, width, height)` for a centered "cover" crop.
///
/// The rectangle has the target's aspect ratio and is as large as the source
/// allows, so cropping first and then resizing to `target` gives the same
/// framing as scale-to-fill followed by a center crop, while the buffer never
/// grows past the source size.
pub fn calculate_cover_crop(source: (u32, u32), target: (u32, u32)) -> (u32, u32, u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let source_is_wider =
        u64::from(src_w) * u64::from(tgt_h) > u64::from(tgt_w) * u64::from(src_h);
    let (crop_w, crop_h) = if source_is_wider {
        // Keep full height, trim the sides
        let w = (src_h as f64 * tgt_w as f64 / tgt_h as f64).round() as u32;
        (w.clamp(1, src_w.max(1)), src_h)
    } else {
        // Keep full width, trim top and bottom
        let h = (src_w as f64 * tgt_h as f64 / tgt_w as f64).round() as u32;
        (src_w, h.clamp(1, src_h.max(1)))
    };

    let (x, y) = calculate_center_crop_offset(source, (crop_w, crop_h));
    (x, y, crop_w, crop_h)
}

/// Top-left offset of a centered crop of `crop` out of `outer`.
pub fn calculate_center_crop_offset(outer: (u32, u32), crop: (u32, u32)) -> (u32, u32) {
    (
        outer.0.saturating_sub(crop.0) / 2,
        outer.1.saturating_sub(crop.1) / 2,
    )
}
