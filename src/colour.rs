use crate::Float;

/// Linear RGB triple. Channels are unbounded while shading and only clamped when
/// written out.
#[derive(Clone, Copy, PartialEq)]
pub struct Colour(pub [Float; 3]);

impl Colour {
    pub const BLACK: Colour = Colour([0.0, 0.0, 0.0]);
    pub const WHITE: Colour = Colour([1.0, 1.0, 1.0]);

    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self([r, g, b])
    }

    #[inline]
    pub fn new_with<F: FnMut(usize) -> Float>(mut init: F) -> Self {
        Self([init(0), init(1), init(2)])
    }

    #[inline]
    pub fn zip<F: Fn(Float, Float) -> Float>(&self, other: &Self, f: F) -> Self {
        Self::new_with(|i| f(self[i], other[i]))
    }

    pub fn uniform(val: Float) -> Self {
        Self([val; 3])
    }

    pub fn map<F: Fn(Float) -> Float>(&self, f: F) -> Self {
        Self::new_with(|i| f(self[i]))
    }

    pub fn r(&self) -> Float { self.0[0] }
    pub fn g(&self) -> Float { self.0[1] }
    pub fn b(&self) -> Float { self.0[2] }

    pub fn is_black(&self) -> bool {
        self.0.iter().all(|&x| x == 0.0)
    }

    pub fn has_nans(&self) -> bool {
        self.0.iter().any(|&x| x.is_nan())
    }

    pub fn lerp(t: Float, c1: Self, c2: Self) -> Self {
        (1.0 - t) * c1 + t * c2
    }

    pub fn clamp(self, low: Float, high: Float) -> Self {
        self.map(|x| x.clamp(low, high))
    }

    pub fn into_rgb8(self) -> [u8; 3] {
        let c = self.clamp(0.0, 1.0);
        [
            Float::round(c[0] * 255.0) as u8,
            Float::round(c[1] * 255.0) as u8,
            Float::round(c[2] * 255.0) as u8,
        ]
    }
}

impl std::ops::Index<usize> for Colour {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::ops::IndexMut<usize> for Colour {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::fmt::Debug for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl From<[Float; 3]> for Colour {
    fn from(a: [Float; 3]) -> Self {
        Self(a)
    }
}

impl From<Float> for Colour {
    fn from(x: Float) -> Self {
        Self::uniform(x)
    }
}

impl std::iter::Sum for Colour {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::BLACK, std::ops::Add::add)
    }
}

impl approx::AbsDiffEq for Colour {
    type Epsilon = Float;

    fn default_epsilon() -> Float {
        crate::math::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Float) -> bool {
        (0..3).all(|i| Float::abs_diff_eq(&self[i], &other[i], epsilon))
    }
}

impl approx::RelativeEq for Colour {
    fn default_max_relative() -> Float {
        Float::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Float, max_relative: Float) -> bool {
        (0..3).all(|i| Float::relative_eq(&self[i], &other[i], epsilon, max_relative))
    }
}

macro_rules! impl_op {
    ($op:ident, $name:ident, $sym:tt) => {
        impl std::ops::$op for Colour {
            type Output = Self;

            fn $name(self, rhs: Self) -> Self::Output {
                Self::zip(&self, &rhs, |x, y| x $sym y)
            }
        }

        impl std::ops::$op<Float> for Colour {
            type Output = Self;

            fn $name(self, rhs: Float) -> Self::Output {
                Self::new_with(|i| self[i] $sym rhs)
            }
        }

        impl std::ops::$op<Colour> for Float {
            type Output = Colour;

            fn $name(self, rhs: Colour) -> Self::Output {
                Colour::new_with(|i| self $sym rhs[i])
            }
        }
    }
}

macro_rules! impl_assign_op {
    ($op:ident, $name:ident, $sym:tt) => {
        impl std::ops::$op for Colour {
            fn $name(&mut self, rhs: Self) {
                for i in 0..3 {
                    self[i] $sym rhs[i];
                }
            }
        }

        impl std::ops::$op<Float> for Colour {
            fn $name(&mut self, rhs: Float) {
                for i in 0..3 {
                    self[i] $sym rhs;
                }
            }
        }
    }
}

impl_op!(Add, add, +);
impl_op!(Sub, sub, -);
impl_op!(Mul, mul, *);
impl_op!(Div, div, /);
impl_assign_op!(AddAssign, add_assign, +=);
impl_assign_op!(SubAssign, sub_assign, -=);
impl_assign_op!(MulAssign, mul_assign, *=);
impl_assign_op!(DivAssign, div_assign, /=);


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_iter_sum() {
        let colours = vec![Colour::uniform(1.0), Colour::from([0.0, 1.0, 0.5])];
        let sum: Colour = colours.into_iter().sum();
        assert_eq!(sum, Colour::from([1.0, 2.0, 1.5]));
    }

    #[test]
    fn test_hadamard_product() {
        let c = Colour::new(1.0, 0.2, 0.4) * Colour::new(0.9, 1.0, 0.1);
        assert_abs_diff_eq!(c, Colour::new(0.9, 0.2, 0.04), epsilon = 1e-12);
    }

    #[test]
    fn test_scalar_ops() {
        let c = Colour::new(0.2, 0.3, 0.4);
        assert_abs_diff_eq!(c * 2.0, Colour::new(0.4, 0.6, 0.8), epsilon = 1e-12);
        assert_abs_diff_eq!(2.0 * c, Colour::new(0.4, 0.6, 0.8), epsilon = 1e-12);
        assert_abs_diff_eq!(c - c, Colour::BLACK, epsilon = 1e-12);
    }

    #[test]
    fn test_into_rgb8_clamps() {
        assert_eq!(Colour::new(1.5, 0.5, -0.5).into_rgb8(), [255, 128, 0]);
    }
}
