use std::fmt::{Display, Formatter};
use std::ops::{Mul, MulAssign};

use crate::matrix::Matrix4;
use crate::number_traits::Float;
use crate::vector::Vector3;

/// A rotation stored as a single-precision unit quaternion.
///
/// Construction and the Hamilton product do not normalize; `normalize`,
/// `slerp` and `lerp` do.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    scalar_part: f32,
    vector_part: Vector3<f32>,
}

impl Quaternion {
    pub fn new(scalar_part: f32, vector_part: Vector3<f32>) -> Self {
        Self {
            scalar_part,
            vector_part,
        }
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::new(1.0, Vector3::new(0.0, 0.0, 0.0))
    }

    #[must_use]
    pub fn scalar_part(&self) -> f32 {
        self.scalar_part
    }

    pub fn vector_part(&self) -> Vector3<f32> {
        self.vector_part
    }

    /// Builds a rotation of `angle` radians around `axis`. The axis does not
    /// need to be normalized.
    pub fn from_axis_angle(axis: &Vector3<f32>, angle: f32) -> Self {
        let axis = axis.normalized();
        let half_angle = angle * 0.5;
        let half_angle_sin = half_angle.sin();

        Self::new(half_angle.cos(), axis * half_angle_sin)
    }

    /// Builds a rotation from Euler angles in radians, `x` pitch, `y` yaw,
    /// `z` roll. Exact inverse of `to_euler` away from gimbal lock; the
    /// composition order is fixed and must not be reordered.
    pub fn from_euler(euler: &Vector3<f32>) -> Self {
        let (sx, cx) = (euler.x * 0.5).sin_cos();
        let (sy, cy) = (euler.y * 0.5).sin_cos();
        let (sz, cz) = (euler.z * 0.5).sin_cos();

        Self::new(
            cx * cy * cz + sx * sy * sz,
            Vector3::new(
                sx * cy * cz - cx * sy * sz,
                cx * sy * cz + sx * cy * sz,
                cx * cy * sz - sx * sy * cz,
            ),
        )
    }

    /// Builds the rotation mapping the direction of `from` onto the direction
    /// of `to`.
    pub fn from_to_rotation(from: &Vector3<f32>, to: &Vector3<f32>) -> Self {
        let from = from.normalized();
        let to = to.normalized();
        let dot = from.dot(&to).clamp(-1.0, 1.0);

        if dot > 0.9999 {
            return Self::identity();
        }
        if dot < -0.9999 {
            // Antiparallel directions, rotate half a turn around any
            // orthogonal axis.
            let axis = if from.x.abs() > from.z.abs() {
                Vector3::new(-from.y, from.x, 0.0)
            } else {
                Vector3::new(0.0, -from.z, from.y)
            };
            return Self::from_axis_angle(&axis, std::f32::consts::PI);
        }

        let cross = from.cross(&to);
        let s = ((1.0 + dot) * 2.0).sqrt();
        let inv_s = 1.0 / s;

        Self::new(s * 0.5, cross * inv_s)
    }

    /// Builds the orientation looking along `forward` with `up` as the
    /// approximate up direction.
    #[allow(clippy::similar_names)]
    pub fn look_rotation(forward: &Vector3<f32>, up: &Vector3<f32>) -> Self {
        let forward = forward.normalized();
        let right = up.normalized().cross(&forward).normalized();
        let up = forward.cross(&right);

        let m00 = right.x;
        let m01 = up.x;
        let m02 = forward.x;
        let m10 = right.y;
        let m11 = up.y;
        let m12 = forward.y;
        let m20 = right.z;
        let m21 = up.z;
        let m22 = forward.z;

        let trace = m00 + m11 + m22;
        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                Vector3::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s),
            )
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self::new(
                (m21 - m12) / s,
                Vector3::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s),
            )
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self::new(
                (m02 - m20) / s,
                Vector3::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s),
            )
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self::new(
                (m10 - m01) / s,
                Vector3::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s),
            )
        };

        q.normalized()
    }

    /// Scales the quaternion to unit magnitude. A zero quaternion becomes the
    /// identity.
    pub fn normalize(&mut self) {
        let norm_squared = self.norm_squared();
        if norm_squared <= 0.0 {
            *self = Self::identity();
            return;
        }

        let inv = 1.0 / norm_squared.sqrt();
        self.scalar_part *= inv;
        self.vector_part *= inv;
    }

    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut normalized_quaternion = *self;
        normalized_quaternion.normalize();
        normalized_quaternion
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.scalar_part, -self.vector_part)
    }

    /// The inverse rotation. A zero quaternion yields the identity.
    pub fn inverse(&self) -> Self {
        let norm_squared = self.norm_squared();
        if norm_squared <= 0.0 {
            return Self::identity();
        }

        let conjugate = self.conjugate();
        let inv = 1.0 / norm_squared;

        Self::new(conjugate.scalar_part * inv, conjugate.vector_part * inv)
    }

    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.scalar_part * other.scalar_part + self.vector_part.dot(&other.vector_part)
    }

    #[must_use]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Angle between two rotations in radians.
    #[must_use]
    pub fn angle(&self, other: &Self) -> f32 {
        let dot = self.normalized().dot(&other.normalized()).clamp(-1.0, 1.0);
        2.0 * dot.acos()
    }

    /// Component-wise equality within `1e-6`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_within(other, 1e-6)
    }

    #[must_use]
    pub fn approx_eq_within(&self, other: &Self, epsilon: f32) -> bool {
        (self.scalar_part - other.scalar_part).abs() < epsilon
            && self.vector_part.approx_eq_within(&other.vector_part, epsilon)
    }

    /// Rotates `v` by this quaternion through the sandwich product
    /// `q * (0, v) * q̄`.
    pub fn rotate_vector(&self, v: &Vector3<f32>) -> Vector3<f32> {
        let pure = Self::new(0.0, *v);
        let rotated = *self * pure * self.conjugate();
        rotated.vector_part
    }

    pub fn slerp(a: &Self, b: &Self, t: f32) -> Self {
        Self::slerp_unclamped(a, b, t.clamp(0.0, 1.0))
    }

    /// Spherical interpolation along the shortest arc; `t` is not clamped.
    /// The result is normalized.
    pub fn slerp_unclamped(a: &Self, b: &Self, t: f32) -> Self {
        let mut dot = a.dot(b);
        let mut b = *b;
        if dot < 0.0 {
            b = Self::new(-b.scalar_part, -b.vector_part);
            dot = -dot;
        }

        // Nearly identical rotations, sin(theta) is too small to divide by.
        const NLERP_THRESHOLD: f32 = 0.9995;
        if dot > NLERP_THRESHOLD {
            let mut result = Self::new(
                a.scalar_part + t * (b.scalar_part - a.scalar_part),
                Vector3::lerp(&a.vector_part, &b.vector_part, t),
            );
            result.normalize();
            return result;
        }

        let theta_0 = dot.acos();
        let theta = theta_0 * t;
        let sin_theta = theta.sin();
        let sin_theta_0 = theta_0.sin();
        let s0 = theta.cos() - dot * sin_theta / sin_theta_0;
        let s1 = sin_theta / sin_theta_0;

        let mut result = Self::new(
            a.scalar_part * s0 + b.scalar_part * s1,
            a.vector_part * s0 + b.vector_part * s1,
        );
        result.normalize();
        result
    }

    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Self::lerp_unclamped(a, b, t.clamp(0.0, 1.0))
    }

    /// Component-wise interpolation, renormalized. Cheaper than `slerp` but
    /// not a geodesic.
    pub fn lerp_unclamped(a: &Self, b: &Self, t: f32) -> Self {
        let mut result = Self::new(
            a.scalar_part + t * (b.scalar_part - a.scalar_part),
            Vector3::lerp(&a.vector_part, &b.vector_part, t),
        );
        result.normalize();
        result
    }

    /// Rotates `from` towards `to` by at most `max_radians_delta`.
    pub fn rotate_towards(from: &Self, to: &Self, max_radians_delta: f32) -> Self {
        let angle = from.angle(to);
        if angle <= 0.0 {
            return *to;
        }

        let t = (max_radians_delta / angle).min(1.0);
        Self::slerp_unclamped(from, to, t)
    }

    /// The rotation axis and angle in radians. Near-zero rotations report the
    /// X axis.
    pub fn to_axis_angle(&self) -> (Vector3<f32>, f32) {
        let q = self.normalized();
        let angle = 2.0 * q.scalar_part.acos();

        let s = (1.0 - q.scalar_part * q.scalar_part).sqrt();
        if s < 1e-6 {
            (Vector3::new(1.0, 0.0, 0.0), angle)
        } else {
            (q.vector_part / s, angle)
        }
    }

    /// Euler angles in radians, `x` pitch, `y` yaw, `z` roll. Yaw saturates
    /// at ±π/2 at gimbal lock.
    pub fn to_euler(&self) -> Vector3<f32> {
        let w = self.scalar_part;
        let Vector3 { x, y, z } = self.vector_part;

        let sin_pitch = 2.0 * (w * x + y * z);
        let cos_pitch = 1.0 - 2.0 * (x * x + y * y);
        let pitch = sin_pitch.atan2(cos_pitch);

        let sin_yaw = 2.0 * (w * y - z * x);
        let yaw = if sin_yaw.abs() >= 1.0 {
            std::f32::consts::FRAC_PI_2.copysign(sin_yaw)
        } else {
            sin_yaw.asin()
        };

        let sin_roll = 2.0 * (w * z + x * y);
        let cos_roll = 1.0 - 2.0 * (y * y + z * z);
        let roll = sin_roll.atan2(cos_roll);

        Vector3::new(pitch, yaw, roll)
    }

    /// Expands the rotation into a 4x4 transform matrix. Matrix scalars are
    /// converted from the quaternion's single-precision components.
    #[rustfmt::skip]
    #[allow(clippy::similar_names)]
    pub fn rotation_matrix<T>(&self) -> Matrix4<T>
    where
        T: Float,
    {
        let w = T::from_f32(self.scalar_part);
        let x = T::from_f32(self.vector_part.x);
        let y = T::from_f32(self.vector_part.y);
        let z = T::from_f32(self.vector_part.z);
        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Matrix4::with_values([
            T::one() - T::two() * (yy + zz), T::two() * (xy + wz), T::two() * (xz - wy), T::zero(),
            T::two() * (xy - wz), T::one() - T::two() * (xx + zz), T::two() * (yz + wx), T::zero(),
            T::two() * (xz + wy), T::two() * (yz - wx), T::one() - T::two() * (xx + yy), T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ])
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Display for Quaternion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "({} + {} i + {} j + {} k)",
            self.scalar_part, self.vector_part.x, self.vector_part.y, self.vector_part.z
        )
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let w1 = self.scalar_part;
        let x1 = self.vector_part.x;
        let y1 = self.vector_part.y;
        let z1 = self.vector_part.z;

        let w2 = rhs.scalar_part;
        let x2 = rhs.vector_part.x;
        let y2 = rhs.vector_part.y;
        let z2 = rhs.vector_part.z;

        let scalar_part = w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2;
        let vector_part = Vector3::new(
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        );

        Quaternion::new(scalar_part, vector_part)
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
