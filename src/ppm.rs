// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writing finished images.  `.ppm` files carry a fixed binary P6
//! header, byte for byte what earlier versions of the renderer wrote.
//! `.png` files go through the `image` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::png::PNGEncoder;
use image::ColorType;
use log::info;

use crate::buffer::PixelBuffer;
use crate::error::RenderError;

/// The largest value of any channel.
pub const MAX_CHANNEL_VALUE: u8 = 255;

const MAGIC: &str = "P6";
const COMMENT: &str = "# ";

/// Write `buffer` to `writer` as a binary P6 pixmap: the header, then
/// every pixel's R, G and B bytes in row-major order from (0, 0).
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> Result<(), RenderError> {
    let size = buffer.resolution();
    write!(
        writer,
        "{}\n {}\n {}\n {}\n {}\n",
        MAGIC, COMMENT, size, size, MAX_CHANNEL_VALUE
    )?;
    for pixel in buffer.pixels() {
        writer.write_all(&pixel.to_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Save `buffer` to `path`, choosing the format from the extension.
pub fn save<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<(), RenderError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "ppm" => {
            let mut output = BufWriter::new(File::create(path)?);
            write_ppm(buffer, &mut output)?;
        }
        "png" => {
            let output = File::create(path)?;
            let size = buffer.resolution() as u32;
            PNGEncoder::new(output).encode(&buffer.to_bytes(), size, size, ColorType::RGB(8))?;
        }
        _ => return Err(RenderError::UnsupportedFormat(path.display().to_string())),
    }
    info!("Wrote {}", path.display());
    Ok(())
}
