/* Copyright 2020 @TwoCookingMice */

use crate::math::bitmap::Bitmap;

use exr::prelude::*;

// Write the bitmap as an RGB OpenEXR image
pub fn write_exr_to_file(image: &Bitmap, file_path: &str) -> std::result::Result<(), Error> {
    log::info!("Starting writing openexr images: {}.", file_path);

    let width = image.width();
    let pixels = image.raw_copy();
    write_rgb_file(file_path, width, image.height(), |x, y| {
        let p = pixels[y * width + x];
        (p.0, p.1, p.2)
    })?;

    log::info!("EXR written to: {}.", file_path);
    Ok(())
}
