use rand::Rng;

use crate::planar::PixelCube;

pub fn gen_packed_buffer(columns: usize, rows: usize) -> Vec<u32> {
    let mut rng = rand::rng();
    (0..columns * rows).map(|_| rng.random::<u32>()).collect()
}

pub fn gen_random_cube(columns: usize, rows: usize) -> PixelCube {
    let packed = gen_packed_buffer(columns, rows);
    PixelCube::from_packed(&packed, columns, rows).unwrap()
}
