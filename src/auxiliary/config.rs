//! Compile-time settings for the drivers.

/// Size of the pixel buffer. Both are multiples of [`CELL_SIZE`].
pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;

/// Side of one cell in buffer pixels.
pub const CELL_SIZE: u32 = 10;

pub const GRID_COLS: usize = (SCREEN_WIDTH / CELL_SIZE) as usize;
pub const GRID_ROWS: usize = (SCREEN_HEIGHT / CELL_SIZE) as usize;

pub const LIFE_TICKS_PER_SECOND: f64 = 15.;
pub const ELEMENTARY_TICKS_PER_SECOND: f64 = 30.;

/// Share of live cells after pressing R.
pub const INITIAL_FILL: f32 = 0.5;

pub const LIGHT: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
pub const DARK: [u8; 4] = [0x3c, 0x3c, 0x3c, 0xff];
pub const BACKGROUND: [u8; 4] = [0, 0, 0, 0xff];
