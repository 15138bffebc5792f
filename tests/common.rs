use jp4view::plane::Plane;

// Pixel (y, x) holds (y * width + x) modulo 256
#[allow(dead_code)]
pub fn ramp_frame(width: usize, height: usize) -> Plane {
    let v: Vec<u8> = (0..width * height).map(|i| (i % 256) as u8).collect();
    Plane::from_vec(v, width, height).unwrap()
}

// Deterministic pseudo-random frame (xorshift)
#[allow(dead_code)]
pub fn noise_frame(width: usize, height: usize, seed: u32) -> Plane {
    let mut state = seed.max(1);
    let v: Vec<u8> = (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    Plane::from_vec(v, width, height).unwrap()
}

// A JP4 frame whose patches each hold a single constant value
#[allow(dead_code)]
pub fn flat_patch_frame(width: usize, height: usize, gr: u8, r: u8, gb: u8, b: u8) -> Plane {
    let mut frame = Plane::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = match (y % 16 >= 8, x % 16 >= 8) {
                (false, false) => gr,
                (false, true) => r,
                (true, true) => gb,
                (true, false) => b,
            };
            frame.put(x, y, v);
        }
    }
    frame
}
