use crate::pattern::Pattern;
use crate::{Colour, Float, Point3f, Vec3f};
use once_cell::sync::Lazy;
use std::sync::Arc;

#[rustfmt::skip]
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// The permutation repeated twice so lattice lookups never need wrapping.
static PERM: Lazy<[usize; 512]> = Lazy::new(|| {
    let mut p = [0usize; 512];
    for (i, v) in p.iter_mut().enumerate() {
        *v = PERMUTATION[i % 256] as usize;
    }
    p
});

fn fade(t: Float) -> Float {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn grad(hash: usize, x: Float, y: Float, z: Float) -> Float {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

/// Improved Perlin noise in roughly [-1, 1]. Zero at every integer lattice point.
pub fn noise(p: Point3f) -> Float {
    let perm = &*PERM;

    let xi = (p.x.floor() as i64).rem_euclid(256) as usize;
    let yi = (p.y.floor() as i64).rem_euclid(256) as usize;
    let zi = (p.z.floor() as i64).rem_euclid(256) as usize;

    let x = p.x - p.x.floor();
    let y = p.y - p.y.floor();
    let z = p.z - p.z.floor();

    let u = fade(x);
    let v = fade(y);
    let w = fade(z);

    let a = perm[xi] + yi;
    let aa = perm[a] + zi;
    let ab = perm[a + 1] + zi;
    let b = perm[xi + 1] + yi;
    let ba = perm[b] + zi;
    let bb = perm[b + 1] + zi;

    let lerp = crate::math::lerp;
    lerp(w,
        lerp(v,
            lerp(u, grad(perm[aa], x, y, z), grad(perm[ba], x - 1.0, y, z)),
            lerp(u, grad(perm[ab], x, y - 1.0, z), grad(perm[bb], x - 1.0, y - 1.0, z))),
        lerp(v,
            lerp(u, grad(perm[aa + 1], x, y, z - 1.0), grad(perm[ba + 1], x - 1.0, y, z - 1.0)),
            lerp(u, grad(perm[ab + 1], x, y - 1.0, z - 1.0), grad(perm[bb + 1], x - 1.0, y - 1.0, z - 1.0))))
}

/// Jitters the lookup point of an inner pattern with three decorrelated noise samples.
#[derive(Clone, Debug)]
pub struct Perturbed {
    pub inner: Arc<dyn Pattern>,
    pub scale: Float,
}

impl Perturbed {
    pub fn new(inner: impl Pattern + 'static, scale: Float) -> Self {
        Self { inner: Arc::new(inner), scale }
    }
}

impl Pattern for Perturbed {
    fn colour_at(&self, p: Point3f) -> Colour {
        let jitter = Vec3f::new(
            noise(p),
            noise(Point3f::new(p.x, p.y, p.z + 1.0)),
            noise(Point3f::new(p.x, p.y, p.z + 2.0)),
        );
        self.inner.colour_at(p + jitter * self.scale)
    }
}
