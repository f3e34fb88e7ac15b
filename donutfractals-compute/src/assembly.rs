//! Packing scalar fields into display-ready RGB buffers.

use crate::colormap::colorize_with;
use donutfractals_core::{ColorScheme, IterationField, RayHitField, RgbImage};
use rayon::prelude::*;

/// Colour an iteration field. Counts are normalized by the field's
/// iteration budget; non-escaping points take the in-set colour.
pub fn assemble_iterations(field: &IterationField, scheme: ColorScheme) -> RgbImage {
    pack_rows(field.width, field.height, |row, out| {
        let start = row * field.width as usize;
        let counts = &field.data[start..start + field.width as usize];
        for (px, &n) in out.chunks_exact_mut(RgbImage::CHANNELS).zip(counts) {
            let rgb = colorize_with(scheme, field.normalized(n), field.is_inside(n));
            px.copy_from_slice(&rgb);
        }
    })
}

/// Colour a ray-march field: intensity is the palette value, misses take
/// the in-set colour.
pub fn assemble_ray_hits(field: &RayHitField, scheme: ColorScheme) -> RgbImage {
    pack_rows(field.width, field.height, |row, out| {
        let start = row * field.width as usize;
        let hits = &field.data[start..start + field.width as usize];
        for (px, hit) in out.chunks_exact_mut(RgbImage::CHANNELS).zip(hits) {
            px.copy_from_slice(&colorize_with(scheme, hit.intensity, !hit.hit));
        }
    })
}

/// Allocate a tightly packed buffer and let `fill_row` write each row,
/// rows in parallel.
fn pack_rows<F>(width: u32, height: u32, fill_row: F) -> RgbImage
where
    F: Fn(usize, &mut [u8]) + Sync,
{
    let mut pixels = vec![0u8; RgbImage::byte_len(width, height)];
    let stride = width as usize * RgbImage::CHANNELS;
    if stride > 0 {
        pixels
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(row, out)| fill_row(row, out));
    }
    RgbImage {
        width,
        height,
        pixels,
    }
}
