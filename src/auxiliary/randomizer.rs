/// Generate a pseudorandom seed for the PRNG.
pub fn generate_seed() -> (u64, u64) {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    getrandom(&mut seed).expect("failed to getrandom");

    (
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    )
}

/// Endless coin flips that come up `true` with probability `fill`.
pub fn coin_flips(fill: f32) -> impl Iterator<Item = bool> {
    let mut rng: randomize::PCG32 = generate_seed().into();
    std::iter::repeat_with(move || randomize::f32_half_open_right(rng.next_u32()) < fill)
}
