// SPDX-License-Identifier: MPL-2.0
//! Illustration loading and rasterization.
//!
//! All artwork ships as SVG embedded in the binary and is rasterized on first
//! use with resvg, then cached as ready-to-draw image handles for the process
//! lifetime. Body-element avatars additionally get a circular alpha mask so
//! the image widget shows the round crop the layout calls for.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use resvg::usvg;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

#[derive(RustEmbed)]
#[folder = "assets/illustrations/"]
struct Asset;

/// Opaque identifier for one embedded illustration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageId {
    Inversions,
    QuickYoga,
    Stretching,
    Tabata,
    Hiit,
    PreNatalYoga,
    ShortMantras,
    NatureMeditations,
    StressAndAnxiety,
    SelfMassage,
    Overwhelmed,
    NightlyWindDown,
}

impl ImageId {
    pub const ALL: [ImageId; 12] = [
        ImageId::Inversions,
        ImageId::QuickYoga,
        ImageId::Stretching,
        ImageId::Tabata,
        ImageId::Hiit,
        ImageId::PreNatalYoga,
        ImageId::ShortMantras,
        ImageId::NatureMeditations,
        ImageId::StressAndAnxiety,
        ImageId::SelfMassage,
        ImageId::Overwhelmed,
        ImageId::NightlyWindDown,
    ];

    fn asset_name(self) -> &'static str {
        match self {
            ImageId::Inversions => "ab_inversions.svg",
            ImageId::QuickYoga => "ab_quick_yoga.svg",
            ImageId::Stretching => "ab_stretching.svg",
            ImageId::Tabata => "ab_tabata.svg",
            ImageId::Hiit => "ab_hiit.svg",
            ImageId::PreNatalYoga => "ab_pre_natal_yoga.svg",
            ImageId::ShortMantras => "fc_short_mantras.svg",
            ImageId::NatureMeditations => "fc_nature_meditations.svg",
            ImageId::StressAndAnxiety => "fc_stress_and_anxiety.svg",
            ImageId::SelfMassage => "fc_self_massage.svg",
            ImageId::Overwhelmed => "fc_overwhelmed.svg",
            ImageId::NightlyWindDown => "fc_nightly_wind_down.svg",
        }
    }
}

/// How an illustration is cropped when rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crop {
    Square,
    Circle,
}

/// Extra rasterization factor on top of the logical pixel size, so bitmaps
/// stay crisp on scaled displays.
const RASTER_SCALE: u32 = 2;

fn cache() -> &'static Mutex<HashMap<(ImageId, Crop, u32), Handle>> {
    static CACHE: OnceLock<Mutex<HashMap<(ImageId, Crop, u32), Handle>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Returns a drawable handle for `id`, rasterized for display at `size`
/// logical pixels. Handles are cached per (id, crop, size); a broken asset
/// degrades to a flat placeholder tile instead of failing the render.
pub fn handle(id: ImageId, crop: Crop, size: u32) -> Handle {
    let key = (id, crop, size);
    if let Ok(cache) = cache().lock() {
        if let Some(cached) = cache.get(&key) {
            return cached.clone();
        }
    }

    let px = size * RASTER_SCALE;
    let handle = rasterize(id, crop, px).unwrap_or_else(|_| placeholder(px));

    if let Ok(mut cache) = cache().lock() {
        cache.insert(key, handle.clone());
    }
    handle
}

fn rasterize(id: ImageId, crop: Crop, px: u32) -> Result<Handle> {
    let mut pixmap = rasterize_pixmap(id, px)?;
    if crop == Crop::Circle {
        apply_circle_mask(&mut pixmap);
    }
    Ok(Handle::from_rgba(px, px, pixmap.data().to_vec()))
}

/// Parses the embedded SVG and renders it into a `px` x `px` pixmap.
fn rasterize_pixmap(id: ImageId, px: u32) -> Result<tiny_skia::Pixmap> {
    let name = id.asset_name();
    let data =
        Asset::get(name).ok_or_else(|| Error::Svg(format!("missing embedded asset: {name}")))?;

    let tree = usvg::Tree::from_data(data.data.as_ref(), &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let orig_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        px as f32 / orig_size.width(),
        px as f32 / orig_size.height(),
    );

    let mut pixmap =
        tiny_skia::Pixmap::new(px, px).ok_or_else(|| Error::Svg("zero-sized pixmap".into()))?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Clears every pixel outside the inscribed circle, turning a square render
/// into the round avatar crop.
fn apply_circle_mask(pixmap: &mut tiny_skia::Pixmap) {
    let width = pixmap.width();
    let height = pixmap.height();
    let cx = (width as f32 - 1.0) / 2.0;
    let cy = (height as f32 - 1.0) / 2.0;
    let radius = width.min(height) as f32 / 2.0;
    let radius_sq = radius * radius;

    let data = pixmap.data_mut();
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy > radius_sq {
                // Premultiplied RGBA: clear all four channels.
                let i = ((y * width + x) * 4) as usize;
                data[i..i + 4].fill(0);
            }
        }
    }
}

/// Flat neutral tile used when an asset cannot be rendered.
fn placeholder(px: u32) -> Handle {
    let mut pixels = Vec::with_capacity((px * px * 4) as usize);
    for _ in 0..px * px {
        pixels.extend_from_slice(&[0xd8, 0xcf, 0xc5, 0xff]);
    }
    Handle::from_rgba(px, px, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_illustration_rasterizes() {
        for id in ImageId::ALL {
            let pixmap = rasterize_pixmap(id, 32).expect("asset should render");
            assert_eq!(pixmap.width(), 32);
            assert_eq!(pixmap.height(), 32);
        }
    }

    #[test]
    fn circle_mask_clears_corners_and_keeps_center() {
        let mut pixmap = rasterize_pixmap(ImageId::Inversions, 64).expect("asset should render");
        apply_circle_mask(&mut pixmap);

        let data = pixmap.data();
        let alpha_at = |x: u32, y: u32| data[((y * 64 + x) * 4 + 3) as usize];

        assert_eq!(alpha_at(0, 0), 0, "top-left corner outside the circle");
        assert_eq!(alpha_at(63, 0), 0, "top-right corner outside the circle");
        assert_eq!(alpha_at(0, 63), 0, "bottom-left corner outside the circle");
        assert_eq!(alpha_at(63, 63), 0, "bottom-right corner outside the circle");
        assert!(alpha_at(32, 32) > 0, "center stays opaque");
    }

    #[test]
    fn handles_are_cached_per_key() {
        let first = handle(ImageId::Tabata, Crop::Circle, 88);
        let second = handle(ImageId::Tabata, Crop::Circle, 88);
        assert_eq!(first.id(), second.id());

        let other_crop = handle(ImageId::Tabata, Crop::Square, 88);
        assert_ne!(first.id(), other_crop.id());
    }

    #[test]
    fn placeholder_matches_requested_dimensions() {
        // Indirect check via the pixel buffer length contract of from_rgba.
        let px = 16;
        let _handle = placeholder(px);
    }

    #[test]
    fn all_ids_map_to_distinct_assets() {
        let mut names: Vec<&str> = ImageId::ALL.iter().map(|id| id.asset_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ImageId::ALL.len());
    }
}
