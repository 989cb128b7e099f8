mod common;

use common::{bmp_bytes, gradient_sprite, sprite_with_corner, BLACK, BLUE, GREEN, RED, WHITE};
use libledmap::{
    bitmap::{
        extract_rgb_stream, read_le_field, read_u16_le, read_u32_le, row_padding, row_stride,
        strip_padding, Geometry,
    },
    BitmapError, PixelOrder, SpriteBitmap,
};

#[test]
fn little_endian_fields_of_any_width() {
    let buf = [0x00, 0x78, 0x56, 0x34, 0x12, 0xff];
    assert_eq!(read_le_field(&buf, 1, 1).unwrap(), 0x78);
    assert_eq!(read_le_field(&buf, 1, 2).unwrap(), 0x5678);
    assert_eq!(read_le_field(&buf, 1, 3).unwrap(), 0x34_5678);
    assert_eq!(read_le_field(&buf, 1, 4).unwrap(), 0x1234_5678);
    assert_eq!(read_le_field(&buf, 0, 6).unwrap(), 0xff12_3456_7800);
    assert_eq!(read_u16_le(&buf, 3).unwrap(), 0x1234);
    assert_eq!(read_u32_le(&buf, 2).unwrap(), 0xff12_3456);
    assert!(matches!(
        read_u32_le(&buf, 3),
        Err(BitmapError::Truncated {
            len: 6,
            required: 7
        })
    ));
}

#[test]
fn parse_sprite_header() -> anyhow::Result<()> {
    let bitmap = SpriteBitmap::from_bytes(bmp_bytes(8, 8, &gradient_sprite()))?;
    let header = bitmap.header();
    assert_eq!(
        header.geometry,
        Geometry {
            width: 8,
            height: 8
        }
    );
    assert!(header.geometry.is_sprite());
    assert_eq!(header.data_offset, 54);
    assert_eq!(header.bits_per_pixel, 24);
    assert_eq!(header.compression, 0);
    assert_eq!(header.image_size, 192);
    header.validate()?;
    assert_eq!(bitmap.pixel_data().len(), 192);
    assert_eq!(bitmap.as_bytes().len(), 54 + 192);
    Ok(())
}

#[test]
fn reject_non_sprite_dimensions() -> anyhow::Result<()> {
    for (width, height) in [(16, 8), (8, 16), (7, 8), (1, 1)] {
        let pixels = vec![WHITE; (width * height) as usize];
        let bitmap = SpriteBitmap::from_bytes(bmp_bytes(width, height, &pixels))?;
        let err = bitmap.header().validate().unwrap_err();
        assert!(
            matches!(err, BitmapError::Dimensions { width: w, height: h } if (w, h) == (width, height)),
            "{width}x{height} accepted: {err:?}"
        );
        assert!(!err.is_read_error());
        assert!(err.to_string().contains("not 8x8 pixels"));
    }
    Ok(())
}

#[test]
fn reject_short_or_foreign_files() {
    let bytes = bmp_bytes(8, 8, &gradient_sprite());

    let err = SpriteBitmap::from_bytes(bytes[..20].to_vec()).unwrap_err();
    assert!(matches!(
        err,
        BitmapError::Truncated {
            len: 20,
            required: 54
        }
    ));
    assert!(err.is_read_error());

    let mut foreign = bytes.clone();
    foreign[0] = b'P';
    assert!(matches!(
        SpriteBitmap::from_bytes(foreign),
        Err(BitmapError::Signature)
    ));
}

#[test]
fn reject_unsupported_pixel_formats() -> anyhow::Result<()> {
    let bytes = bmp_bytes(8, 8, &gradient_sprite());

    let mut bits_32 = bytes.clone();
    bits_32[28..30].copy_from_slice(&32u16.to_le_bytes());
    let err = SpriteBitmap::from_bytes(bits_32)?.header().validate().unwrap_err();
    assert!(matches!(
        err,
        BitmapError::PixelFormat {
            bits_per_pixel: 32,
            compression: 0
        }
    ));

    let mut compressed = bytes.clone();
    compressed[30..34].copy_from_slice(&1u32.to_le_bytes());
    let err = SpriteBitmap::from_bytes(compressed)?.header().validate().unwrap_err();
    assert!(matches!(err, BitmapError::PixelFormat { compression: 1, .. }));

    let mut moved = bytes;
    moved[10..14].copy_from_slice(&122u32.to_le_bytes());
    let err = SpriteBitmap::from_bytes(moved)?.header().validate().unwrap_err();
    assert!(matches!(err, BitmapError::DataOffset { offset: 122 }));
    Ok(())
}

#[test]
fn padding_follows_row_byte_width() {
    assert_eq!(row_padding(8), 0);
    assert_eq!(row_stride(8), 24);
    assert_eq!(row_padding(1), 1);
    assert_eq!(row_padding(2), 2);
    assert_eq!(row_padding(3), 3);
    assert_eq!(row_padding(4), 0);
    assert_eq!(row_padding(5), 1);
    assert_eq!(row_stride(3), 12);
}

#[test]
fn sprite_rows_keep_every_byte() -> anyhow::Result<()> {
    let bitmap = SpriteBitmap::from_bytes(bmp_bytes(8, 8, &gradient_sprite()))?;
    let stripped = strip_padding(bitmap.pixel_data(), 8, 8)?;
    assert_eq!(stripped, bitmap.pixel_data());
    Ok(())
}

#[test]
fn strip_padding_from_narrow_rows() -> anyhow::Result<()> {
    // 3x2, 9 bytes per row plus 3 bytes of padding
    let bitmap = SpriteBitmap::from_bytes(bmp_bytes(3, 2, &[RED, GREEN, BLUE, WHITE, BLACK, RED]))?;
    assert_eq!(bitmap.pixel_data().len(), 24);
    let stripped = strip_padding(bitmap.pixel_data(), 3, 2)?;
    // bottom row first, blue green red
    assert_eq!(
        stripped,
        [255, 255, 255, 0, 0, 0, 0, 0, 255, 0, 0, 255, 0, 255, 0, 255, 0, 0]
    );

    // the final row's padding may be missing
    let trimmed = &bitmap.pixel_data()[..21];
    assert_eq!(strip_padding(trimmed, 3, 2)?, stripped);
    assert!(matches!(
        strip_padding(&bitmap.pixel_data()[..20], 3, 2),
        Err(BitmapError::Truncated {
            len: 20,
            required: 21
        })
    ));
    Ok(())
}

#[test]
fn raster_order_matches_reference_decoder() -> anyhow::Result<()> {
    for (width, height, pixels) in [
        (8, 8, gradient_sprite()),
        (3, 2, vec![RED, GREEN, BLUE, WHITE, BLACK, RED]),
        (5, 3, vec![[10, 200, 130]; 15]),
    ] {
        let bytes = bmp_bytes(width, height, &pixels);
        let reference = image::load_from_memory_with_format(&bytes, image::ImageFormat::Bmp)?
            .to_rgb8()
            .into_raw();
        let bitmap = SpriteBitmap::from_bytes(bytes)?;
        let stream = extract_rgb_stream(
            bitmap.pixel_data(),
            width as usize,
            height as usize,
            PixelOrder::Raster,
        )?;
        assert_eq!(stream, reference, "{width}x{height}");
    }
    Ok(())
}

#[test]
fn mirrored_order_flips_columns_only() -> anyhow::Result<()> {
    let pixels = gradient_sprite();
    let bitmap = SpriteBitmap::from_bytes(bmp_bytes(8, 8, &pixels))?;
    let stream = extract_rgb_stream(bitmap.pixel_data(), 8, 8, PixelOrder::Mirrored)?;
    assert_eq!(stream.len(), 192);
    for y in 0..8 {
        for x in 0..8 {
            let i = (y * 8 + x) * 3;
            assert_eq!(
                stream[i..i + 3],
                pixels[y * 8 + (7 - x)],
                "pixel ({x}, {y})"
            );
        }
    }
    Ok(())
}

#[test]
fn orders_agree_on_symmetric_rows() -> anyhow::Result<()> {
    let mut pixels = sprite_with_corner(BLUE, GREEN);
    pixels[7] = GREEN;
    let bitmap = SpriteBitmap::from_bytes(bmp_bytes(8, 8, &pixels))?;
    let mirrored = extract_rgb_stream(bitmap.pixel_data(), 8, 8, PixelOrder::Mirrored)?;
    let raster = extract_rgb_stream(bitmap.pixel_data(), 8, 8, PixelOrder::Raster)?;
    assert_eq!(mirrored, raster);
    assert_eq!(PixelOrder::default(), PixelOrder::Mirrored);
    assert_eq!("raster".parse::<PixelOrder>()?, PixelOrder::Raster);
    assert_eq!(PixelOrder::Mirrored.to_string(), "mirrored");
    Ok(())
}

#[test]
fn read_from_reader() -> anyhow::Result<()> {
    let bytes = bmp_bytes(8, 8, &gradient_sprite());
    let from_reader = SpriteBitmap::from_reader(std::io::Cursor::new(bytes.clone()))?;
    assert_eq!(from_reader, SpriteBitmap::from_bytes(bytes)?);
    Ok(())
}
