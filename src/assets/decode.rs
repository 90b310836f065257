use std::io::Cursor;
use std::sync::Arc;

use anyhow::Context;
use image::AnimationDecoder;
use rayon::prelude::*;

use crate::assets::cache::{CachedResource, FrameSet};
use crate::foundation::error::InklineResult;

/// Light-gray chroma key made transparent when materializing animation
/// frames, so composites over arbitrary backgrounds stay correct.
const CHROMA_KEY: [u8; 3] = [211, 211, 211];

/// Decoded raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode image bytes into a cacheable resource.
///
/// A GIF exposing more than one time-based frame materializes one bitmap per
/// frame, each run through the chroma-key pass before premultiplication.
/// Everything else (including single-frame GIFs) decodes to one static
/// bitmap.
pub(crate) fn decode_resource(bytes: &[u8]) -> InklineResult<CachedResource> {
    if matches!(image::guess_format(bytes), Ok(image::ImageFormat::Gif)) {
        let mut frames = decode_gif_frames(bytes)?;
        if frames.len() > 1 {
            return Ok(CachedResource::Animated(Arc::new(FrameSet::new(frames))));
        }
        if let Some(single) = frames.pop() {
            return Ok(CachedResource::Static(single));
        }
        // Zero decoded frames: fall through and let the static path report
        // whatever the decoder objects to.
    }
    Ok(CachedResource::Static(decode_static(bytes)?))
}

/// Decode encoded image bytes into one premultiplied bitmap.
pub(crate) fn decode_static(bytes: &[u8]) -> InklineResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(Bitmap {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn decode_gif_frames(bytes: &[u8]) -> InklineResult<Vec<Bitmap>> {
    let decoder =
        image::codecs::gif::GifDecoder::new(Cursor::new(bytes)).context("open gif decoder")?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .context("collect gif frames")?;

    Ok(frames
        .into_par_iter()
        .map(|frame| {
            let buffer = frame.into_buffer();
            let (width, height) = buffer.dimensions();
            let mut pixels = buffer.into_raw();
            key_out_backdrop(&mut pixels);
            premultiply_rgba8_in_place(&mut pixels);
            Bitmap {
                width,
                height,
                rgba8_premul: Arc::new(pixels),
            }
        })
        .collect())
}

/// Zero the alpha of every pixel matching the chroma key.
pub(crate) fn key_out_backdrop(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        if px[0] == CHROMA_KEY[0] && px[1] == CHROMA_KEY[1] && px[2] == CHROMA_KEY[2] {
            px[3] = 0;
        }
    }
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
