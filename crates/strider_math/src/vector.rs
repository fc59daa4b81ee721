use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::number_traits::{Float, Zero};

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, ($($dim:ident : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<T = f32> {
            $(pub $dim: T,)*
        }

        impl<T> $name<T> {
            pub fn new($($dim: T),*) -> Self {
                Self {
                    $($dim),*
                }
            }
        }

        impl<T> $name<T>
        where T: Float {
            pub fn dot(&self, other: &Self) -> T {
                let mut dot = T::zero();
                $(dot += self.$dim * other.$dim;)*
                dot
            }

            pub fn norm_squared(&self) -> T {
                self.dot(self)
            }

            pub fn norm(&self) -> T {
                self.norm_squared().sqrt()
            }

            /// Scales the vector to unit length. The zero vector is left
            /// unchanged.
            pub fn normalize(&mut self) {
                let norm = self.norm();
                if norm > T::zero() {
                    $(self.$dim /= norm;)*
                }
            }

            pub fn normalized(&self) -> Self {
                let mut normalized = *self;
                normalized.normalize();
                normalized
            }

            /// Component-wise equality within `1e-6`.
            pub fn approx_eq(&self, other: &Self) -> bool {
                self.approx_eq_within(other, T::epsilon())
            }

            pub fn approx_eq_within(&self, other: &Self, epsilon: T) -> bool {
                $(if (self.$dim - other.$dim).abs() >= epsilon {
                    return false;
                })*
                true
            }

            pub fn distance(&self, other: &Self) -> T {
                (*self - *other).norm()
            }

            pub fn lerp(a: &Self, b: &Self, t: T) -> Self {
                *a + (*b - *a) * t
            }

            /// Angle between two vectors in degrees, in `[0, 180]`. Returns 0
            /// if either vector has zero length.
            pub fn angle(&self, other: &Self) -> T {
                let magnitude_product = self.norm() * other.norm();
                if magnitude_product <= T::zero() {
                    return T::zero();
                }

                let cos_theta = (self.dot(other) / magnitude_product).clamp(-T::one(), T::one());
                cos_theta.acos().to_degrees()
            }

            /// Component-wise product.
            pub fn scale(&self, other: &Self) -> Self {
                Self {
                    $($dim: self.$dim * other.$dim,)*
                }
            }

            pub fn min(a: &Self, b: &Self) -> Self {
                Self {
                    $($dim: a.$dim.min(b.$dim),)*
                }
            }

            pub fn max(a: &Self, b: &Self) -> Self {
                Self {
                    $($dim: a.$dim.max(b.$dim),)*
                }
            }

            /// Steps from `self` towards `target` by at most `max_delta`,
            /// snapping to `target` once within range.
            pub fn move_towards(&self, target: &Self, max_delta: T) -> Self {
                let delta = *target - *self;
                let distance = delta.norm();
                if distance <= max_delta || distance <= T::zero() {
                    return *target;
                }

                *self + delta / distance * max_delta
            }
        }

        impl<T> Default for $name<T>
        where T: Zero {
            fn default() -> Self {
                Self {
                    $($dim: T::zero(),)*
                }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> AddAssign for $name<T>
        where
            T: Copy + Add<Output = T>, {
            fn add_assign(&mut self, rhs: Self) {
                *self = Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> SubAssign for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            fn sub_assign(&mut self, rhs: Self) {
                *self = Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> MulAssign<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            fn mul_assign(&mut self, rhs: T) {
                *self = Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> DivAssign<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            fn div_assign(&mut self, rhs: T) {
                *self = Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl<T> From<($($TY),*)> for $name<T>
        where
            T: Copy {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($($TY),*)
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                ($(vector.$dim),*)
            }
        }
    };
}

struct_vec!(Vector2: "({}, {})", (x: T => 0, y: T => 1,));
struct_vec!(Vector3: "({}, {}, {})", (x: T => 0, y: T => 1, z: T => 2,));

impl<T> Vector2<T>
where
    T: Float,
{
    /// Rotates the vector 90 degrees counter-clockwise.
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl<T> Vector3<T>
where
    T: Float,
{
    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// An arbitrary vector orthogonal to `self`, useful for building an
    /// orthogonal basis.
    pub fn perpendicular(&self) -> Self {
        if self.x.abs() > self.z.abs() {
            Self::new(-self.y, self.x, T::zero())
        } else {
            Self::new(T::zero(), -self.z, self.y)
        }
    }

    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (T::two() * self.dot(normal))
    }
}

impl<T> From<[T; 3]> for Vector3<T>
where
    T: Copy,
{
    fn from(value: [T; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    fn from(value: Vector3<T>) -> Self {
        [value.x, value.y, value.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn vector3_new() {
        let v = Vector3::new(1, 2, 3);

        assert_eq!(v.x, 1);
        assert_eq!(v.y, 2);
        assert_eq!(v.z, 3);
    }

    #[test]
    fn add() {
        let a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 5, 6);

        let result = a + b;

        assert_eq!(result.x, 5);
        assert_eq!(result.y, 7);
        assert_eq!(result.z, 9);
    }

    #[test]
    fn add_assign() {
        let mut a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 5, 6);

        a += b;

        assert_eq!(a.x, 5);
        assert_eq!(a.y, 7);
        assert_eq!(a.z, 9);
    }

    #[test]
    fn sub() {
        let a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 3, 2);

        let result = a - b;

        assert_eq!(result.x, -3);
        assert_eq!(result.y, -1);
        assert_eq!(result.z, 1);
    }

    #[test]
    fn mul_scalar() {
        let a = Vector3::new(1, 2, 3);
        let b = 5;

        let result = a * b;

        assert_eq!(result.x, 5);
        assert_eq!(result.y, 10);
        assert_eq!(result.z, 15);
    }

    #[test]
    fn div_scalar() {
        let a = Vector3::new(5, 10, 15);
        let b = 5;

        let result = a / b;

        assert_eq!(result.x, 1);
        assert_eq!(result.y, 2);
        assert_eq!(result.z, 3);
    }

    #[test]
    fn neg() {
        let a = Vector3::new(1, 2, 3);

        let result = -a;

        assert_eq!(result.x, -1);
        assert_eq!(result.y, -2);
        assert_eq!(result.z, -3);
    }

    #[test]
    fn display() {
        let result = format!("{}", Vector3::new(1, 2, 3));
        assert_eq!("(1, 2, 3)", &result);
    }

    #[test]
    fn dot() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_float_absolute_eq!(a.dot(&b), 32.0, 0.001);
    }

    #[test]
    fn dot_vector2() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);

        assert_float_absolute_eq!(a.dot(&b), 11.0, 0.001);
    }

    #[test]
    fn norm() {
        let vector = Vector3::new(1.0, 2.0, 3.0);
        assert_float_absolute_eq!(vector.norm(), 3.74, 0.01);
    }

    #[test]
    fn norm_squared() {
        let vector = Vector3::new(1.0, 2.0, 3.0);
        assert_float_absolute_eq!(vector.norm_squared(), 14.0, 0.001);
    }

    #[test]
    fn normalize() {
        let mut vector = Vector3::new(1.0, 2.0, 3.0);

        vector.normalize();

        assert_float_absolute_eq!(vector.x, 0.26, 0.01);
        assert_float_absolute_eq!(vector.y, 0.53, 0.01);
        assert_float_absolute_eq!(vector.z, 0.80, 0.01);
    }

    #[test]
    fn normalized_has_unit_norm() {
        let normalized = Vector3::new(-4.0, 2.5, 11.0).normalized();

        assert_float_absolute_eq!(normalized.norm(), 1.0, 1e-6);
    }

    #[test]
    fn normalize_zero_vector() {
        let mut vector = Vector3::new(0.0, 0.0, 0.0);

        vector.normalize();

        assert_eq!(vector, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(vector.normalized(), Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn approx_eq() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.0 + 1e-8, 2.0 - 1e-8, 3.0);
        let c = Vector3::new(1.1, 2.0, 3.0);

        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&c));
        assert!(a.approx_eq_within(&c, 0.2));
    }

    #[test]
    fn distance() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(1.0, 3.0, 4.0);

        assert_float_absolute_eq!(a.distance(&b), 5.0, 1e-6);
    }

    #[test]
    fn lerp() {
        let a = Vector3::new(0.0, 0.0, 2.0);
        let b = Vector3::new(10.0, -4.0, 2.0);

        let halfway = Vector3::lerp(&a, &b, 0.5);

        assert_float_absolute_eq!(halfway.x, 5.0, 1e-6);
        assert_float_absolute_eq!(halfway.y, -2.0, 1e-6);
        assert_float_absolute_eq!(halfway.z, 2.0, 1e-6);
    }

    #[test]
    fn lerp_is_unclamped() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 2.0);

        let extrapolated = Vector2::lerp(&a, &b, 2.0);

        assert_float_absolute_eq!(extrapolated.x, 2.0, 1e-6);
        assert_float_absolute_eq!(extrapolated.y, 4.0, 1e-6);
    }

    #[test]
    fn angle() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 4.0, 0.0);

        assert_float_absolute_eq!(a.angle(&b), 90.0, 1e-4);
        assert_float_absolute_eq!(a.angle(&a), 0.0, 1e-3);
        assert_float_absolute_eq!(a.angle(&-a), 180.0, 1e-3);
    }

    #[test]
    fn angle_with_zero_vector_is_zero() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let zero = Vector3::new(0.0, 0.0, 0.0);

        assert_float_absolute_eq!(a.angle(&zero), 0.0, 1e-6);
    }

    #[test]
    fn scale() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(2.0, 3.0, 4.0);

        let result = a.scale(&b);

        assert_float_absolute_eq!(result.x, 2.0, 1e-6);
        assert_float_absolute_eq!(result.y, 6.0, 1e-6);
        assert_float_absolute_eq!(result.z, 12.0, 1e-6);
    }

    #[test]
    fn min_max() {
        let a = Vector3::new(1.0, 5.0, -3.0);
        let b = Vector3::new(2.0, 4.0, -6.0);

        assert_eq!(Vector3::min(&a, &b), Vector3::new(1.0, 4.0, -6.0));
        assert_eq!(Vector3::max(&a, &b), Vector3::new(2.0, 5.0, -3.0));
    }

    #[test]
    fn move_towards_steps_by_max_delta() {
        let current = Vector3::new(0.0, 0.0, 0.0);
        let target = Vector3::new(10.0, 0.0, 0.0);

        let stepped = current.move_towards(&target, 1.5);

        assert_float_absolute_eq!(stepped.x, 1.5, 1e-6);
        assert_float_absolute_eq!(stepped.y, 0.0, 1e-6);
        assert_float_absolute_eq!(stepped.z, 0.0, 1e-6);
    }

    #[test]
    fn move_towards_snaps_to_target() {
        let current = Vector3::new(9.5, 0.0, 0.0);
        let target = Vector3::new(10.0, 0.0, 0.0);

        assert_eq!(current.move_towards(&target, 1.5), target);
        assert_eq!(target.move_towards(&target, 1.5), target);
    }

    #[test]
    fn perpendicular_vector2() {
        let v = Vector2::new(3.0, 2.0);

        let perpendicular = v.perpendicular();

        assert_float_absolute_eq!(perpendicular.x, -2.0, 1e-6);
        assert_float_absolute_eq!(perpendicular.y, 3.0, 1e-6);
        assert_float_absolute_eq!(v.dot(&perpendicular), 0.0, 1e-6);
    }

    #[test]
    fn perpendicular_vector3_is_orthogonal() {
        for v in [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(3.0, -2.0, 1.0),
            Vector3::new(0.5, 4.0, -8.0),
        ] {
            assert_float_absolute_eq!(v.dot(&v.perpendicular()), 0.0, 1e-6);
        }
    }

    #[test]
    fn reflect() {
        let direction = Vector3::new(1.0, -1.0, 0.0);
        let normal = Vector3::new(0.0, 1.0, 0.0);

        let reflected = direction.reflect(&normal);

        assert_float_absolute_eq!(reflected.x, 1.0, 1e-6);
        assert_float_absolute_eq!(reflected.y, 1.0, 1e-6);
        assert_float_absolute_eq!(reflected.z, 0.0, 1e-6);
    }

    #[test]
    fn cross_vec3() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        let result = a.cross(&b);

        assert_float_absolute_eq!(result.x, -3.0, 0.01);
        assert_float_absolute_eq!(result.y, 6.0, 0.01);
        assert_float_absolute_eq!(result.z, -3.0, 0.01);
    }

    #[test]
    fn default() {
        let vector = Vector3::<f32>::default();

        assert_float_absolute_eq!(vector.x, 0.0, 0.0);
        assert_float_absolute_eq!(vector.y, 0.0, 0.0);
        assert_float_absolute_eq!(vector.z, 0.0, 0.0);
    }

    #[test]
    fn from_tuple() {
        let tuple = (0, 1, 2);
        let v = Vector3::from(tuple);

        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        assert_eq!(v.z, 2);
    }

    #[test]
    fn into_tuple() {
        let v = Vector2::new(4, 7);
        let tuple: (i32, i32) = v.into();

        assert_eq!(tuple.0, 4);
        assert_eq!(tuple.1, 7);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let v = Vector3::new(1.5, -2.5, 3.5);

        let serialized = bincode::serialize(&v).unwrap();
        let deserialized: Vector3<f64> = bincode::deserialize(&serialized).unwrap();

        assert_eq!(v, deserialized);
    }
}
