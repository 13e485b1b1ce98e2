use super::config::{CELL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

const BYTES_IN_PIXEL: usize = 4;

/// Maps a buffer pixel to `(row, col)` of the cell under it. Positions off
/// the buffer give `None`.
pub fn pixel_to_cell(x: isize, y: isize) -> Option<(usize, usize)> {
    if x < 0 || y < 0 || x >= SCREEN_WIDTH as isize || y >= SCREEN_HEIGHT as isize {
        return None;
    }
    let size = CELL_SIZE as usize;
    Some((y as usize / size, x as usize / size))
}

/// Fills the square of cell `(row, col)` with `color`.
pub fn fill_cell(screen: &mut [u8], row: usize, col: usize, color: [u8; 4]) {
    let size = CELL_SIZE as usize;
    let stride = SCREEN_WIDTH as usize * BYTES_IN_PIXEL;
    debug_assert_eq!(screen.len(), stride * SCREEN_HEIGHT as usize);
    for y in row * size..(row + 1) * size {
        let start = y * stride + col * size * BYTES_IN_PIXEL;
        let line = &mut screen[start..start + size * BYTES_IN_PIXEL];
        for pix in line.chunks_exact_mut(BYTES_IN_PIXEL) {
            pix.copy_from_slice(&color);
        }
    }
}
