use std::io::Cursor;

use super::*;

fn png_bytes(pixel: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(1, 1, pixel.to_vec()).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn gif_bytes(frame_colors: &[[u8; 4]]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = image::codecs::gif::GifEncoder::new(&mut buf);
        for color in frame_colors {
            let img =
                image::RgbaImage::from_pixel(4, 4, image::Rgba(*color));
            encoder.encode_frame(image::Frame::new(img)).unwrap();
        }
    }
    buf
}

#[test]
fn static_decode_premultiplies() {
    let bytes = png_bytes([100, 200, 40, 128]);
    let bitmap = decode_static(&bytes).unwrap();

    assert_eq!((bitmap.width, bitmap.height), (1, 1));
    assert_eq!(bitmap.rgba8_premul.as_slice(), &[50, 100, 20, 128]);
}

#[test]
fn undecodable_bytes_are_an_error() {
    assert!(decode_static(b"definitely not an image").is_err());
    assert!(decode_resource(b"definitely not an image").is_err());
}

#[test]
fn multi_frame_gif_materializes_one_bitmap_per_frame() {
    let bytes = gif_bytes(&[[255, 0, 0, 255], [0, 0, 255, 255], [0, 255, 0, 255]]);
    let resource = decode_resource(&bytes).unwrap();

    let CachedResource::Animated(frames) = resource else {
        panic!("expected animated resource");
    };
    assert_eq!(frames.len(), 3);
    for frame in frames.frames() {
        assert_eq!((frame.width, frame.height), (4, 4));
        assert_eq!(frame.rgba8_premul.len(), 4 * 4 * 4);
    }
}

#[test]
fn single_frame_gif_decodes_static() {
    let bytes = gif_bytes(&[[255, 0, 0, 255]]);
    let resource = decode_resource(&bytes).unwrap();
    assert!(matches!(resource, CachedResource::Static(_)));
}

#[test]
fn non_gif_bytes_decode_static() {
    let bytes = png_bytes([1, 2, 3, 255]);
    let resource = decode_resource(&bytes).unwrap();
    assert!(matches!(resource, CachedResource::Static(_)));
}

#[test]
fn chroma_key_clears_backdrop_pixels() {
    let mut px = vec![
        211, 211, 211, 255, // keyed out
        10, 20, 30, 255, // kept
    ];
    key_out_backdrop(&mut px);
    assert_eq!(px[3], 0);
    assert_eq!(px[7], 255);

    premultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[0, 0, 0, 0]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
}

#[test]
fn premultiply_zero_alpha_clears_color() {
    let mut px = vec![200, 150, 100, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0]);
}
