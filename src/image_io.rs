use std::{fs, path::Path};

use image::{DynamicImage, ImageBuffer, ImageReader, Rgba};
use itertools::Itertools;

use crate::{error::Result, planar::PixelCube};

pub fn read_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let image = ImageReader::open(path)?.decode()?;
    Ok(image)
}

/// Flattens a decoded image into packed ARGB words, row-major, one `u32`
/// per pixel. Returns the buffer plus the column and row counts.
pub fn image_to_packed(image: &DynamicImage) -> (Vec<u32>, usize, usize) {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    let packed = rgba
        .chunks(4)
        .map(|px| {
            ((px[3] as u32) << 24) | ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | (px[2] as u32)
        })
        .collect_vec();

    (packed, width as usize, height as usize)
}

/// Encodes a pixel cube to `path`, format picked from the file extension.
/// Alpha is emitted at full opacity since the cube does not carry it.
/// Missing parent directories are created first.
pub fn write_image<P: AsRef<Path>>(cube: &PixelCube, path: P) -> Result {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let raw_data = cube
        .pixels()
        .iter()
        .flat_map(|&[r, g, b]| [r, g, b, 0xFF])
        .collect_vec();

    let image = DynamicImage::ImageRgba8(
        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(
            cube.columns() as u32,
            cube.rows() as u32,
            raw_data,
        )
        .expect("Could construct an image"),
    );
    image.save(path)?;
    Ok(())
}
