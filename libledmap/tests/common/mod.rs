#![allow(dead_code)]

use std::path::Path;

pub const RED: [u8; 3] = [255, 0, 0];
pub const GREEN: [u8; 3] = [0, 255, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];
pub const WHITE: [u8; 3] = [255, 255, 255];
pub const BLACK: [u8; 3] = [0, 0, 0];

/// Writes an uncompressed 24-bit bottom-up bitmap. `pixels` holds red, green, blue triples,
/// top row first
pub fn bmp_bytes(width: u32, height: u32, pixels: &[[u8; 3]]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize);
    let row_len = width as usize * 3;
    let stride = (row_len + 3) & !3;
    let image_size = stride * height as usize;
    let file_size = 54 + image_size;

    let mut out = Vec::with_capacity(file_size);
    // file header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&54u32.to_le_bytes());
    // info header
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(image_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(out.len(), 54);

    for row in pixels.chunks(width as usize).rev() {
        for [r, g, b] in row {
            out.extend_from_slice(&[*b, *g, *r]);
        }
        out.resize(out.len() + stride - row_len, 0);
    }
    out
}

/// An 8x8 sprite filled with `color`, except for the top-left pixel which is `corner`
pub fn sprite_with_corner(color: [u8; 3], corner: [u8; 3]) -> Vec<[u8; 3]> {
    let mut pixels = vec![color; 64];
    pixels[0] = corner;
    pixels
}

/// An 8x8 sprite where every pixel has a different color
pub fn gradient_sprite() -> Vec<[u8; 3]> {
    (0..64u8)
        .map(|i| [i * 4, 255 - i * 4, (i % 8) * 32])
        .collect()
}

pub fn write_sprite(dir: &Path, file_name: &str, pixels: &[[u8; 3]]) -> std::io::Result<()> {
    std::fs::write(dir.join(file_name), bmp_bytes(8, 8, pixels))
}
