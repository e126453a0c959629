//! Residue ring rendering.

use image::{Rgb, RgbImage};
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

/// Computes the residue `(x·y) mod p`.
///
/// The product is taken in 64 bits, so coordinates up to `u32::MAX` cannot
/// overflow before the modulus.
pub fn residue(x: u32, y: u32, p: u32) -> u32 {
    ((x as u64 * y as u64) % p as u64) as u32
}

/// Maps a residue to its pixel color.
///
/// The green channel carries `floor(255·rest / p)`; red and blue stay zero.
pub fn shade(rest: u32, p: u32) -> Rgb<u8> {
    Rgb([0, (255 * rest as u64 / p as u64) as u8, 0])
}

/// Renders the ring of order `p` into a `p`×`p` image using a single thread.
///
/// The canvas starts out black and every cell is overwritten exactly once.
pub fn render(p: u32) -> RgbImage {
    let mut img = RgbImage::new(p, p);
    for y in 0..p {
        for x in 0..p {
            img.put_pixel(x, y, shade(residue(x, y, p), p));
        }
    }
    img
}

/// Renders the ring of order `p` using Rayon, one row per task.
///
/// Cells depend only on their own coordinates, so rows are filled without
/// any coordination and the result is identical to [`render`].
pub fn par_render(p: u32) -> RgbImage {
    let row_len = p as usize * 3;
    let mut buf = vec![0u8; p as usize * row_len];
    buf.par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                let Rgb(rgb) = shade(residue(x as u32, y as u32, p), p);
                pixel.copy_from_slice(&rgb);
            }
        });
    RgbImage::from_raw(p, p, buf).expect("buffer matches dimensions")
}
