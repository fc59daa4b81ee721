use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, Index, IndexMut, Mul, MulAssign};

use crate::number_traits::{Float, IsZero, NumericOps, One, Zero};
use crate::quaternion::Quaternion;
use crate::vector::Vector3;

pub type Matrix3f = Matrix3<f32>;
pub type Matrix4f = Matrix4<f32>;

pub trait Identity {
    fn identity() -> Self;
}

/// Row-major 3x3 matrix.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3<T = f32> {
    values: [T; 9],
}

impl<T> Debug for Matrix3<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[")?;
        for i in 0..Self::ROWS {
            write!(f, "\t")?;
            for j in 0..Self::COLS {
                write!(f, "{}, ", self.values[i * Self::COLS + j])?;
            }
            writeln!(f)?;
        }
        writeln!(f, "]")
    }
}

impl<T> Matrix3<T> {
    const COLS: usize = 3;
    const ROWS: usize = 3;

    pub const fn with_values(values: [T; 9]) -> Self {
        Self { values }
    }
}

impl<T> Matrix3<T>
where
    T: Float,
{
    #[rustfmt::skip]
    pub fn new_rotation_x(angle: T) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self::with_values([
            T::one(), T::zero(), T::zero(),
            T::zero(), c, -s,
            T::zero(), s, c,
        ])
    }

    #[rustfmt::skip]
    pub fn new_rotation_y(angle: T) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self::with_values([
            c, T::zero(), s,
            T::zero(), T::one(), T::zero(),
            -s, T::zero(), c,
        ])
    }

    #[rustfmt::skip]
    pub fn new_rotation_z(angle: T) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self::with_values([
            c, -s, T::zero(),
            s, c, T::zero(),
            T::zero(), T::zero(), T::one(),
        ])
    }

    /// Component-wise equality within `1e-6`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_within(other, T::epsilon())
    }

    pub fn approx_eq_within(&self, other: &Self, epsilon: T) -> bool {
        for i in 0..Self::ROWS * Self::COLS {
            if (self.values[i] - other.values[i]).abs() > epsilon {
                return false;
            }
        }
        true
    }
}

impl<T> Matrix3<T>
where
    T: Copy + Zero + One,
{
    #[rustfmt::skip]
    pub fn new_scale(x: T, y: T, z: T) -> Self {
        Self::with_values([
            x, T::zero(), T::zero(),
            T::zero(), y, T::zero(),
            T::zero(), T::zero(), z,
        ])
    }
}

impl<T> Matrix3<T>
where
    T: Copy + NumericOps + Zero + One + IsZero,
{
    #[rustfmt::skip]
    pub fn transposed(&self) -> Self {
        Self::with_values([
            self[0][0], self[1][0], self[2][0],
            self[0][1], self[1][1], self[2][1],
            self[0][2], self[1][2], self[2][2],
        ])
    }

    pub fn determinant(&self) -> T {
        self[0][0] * (self[1][1] * self[2][2] - self[1][2] * self[2][1])
            - self[0][1] * (self[1][0] * self[2][2] - self[1][2] * self[2][0])
            + self[0][2] * (self[1][0] * self[2][1] - self[1][1] * self[2][0])
    }

    /// Inverse by cofactor expansion, `None` for a singular matrix.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.is_zero() {
            return None;
        }

        let inv_det = T::one() / det;

        Some(Self::with_values([
            (self[1][1] * self[2][2] - self[1][2] * self[2][1]) * inv_det,
            (self[0][2] * self[2][1] - self[0][1] * self[2][2]) * inv_det,
            (self[0][1] * self[1][2] - self[0][2] * self[1][1]) * inv_det,
            (self[1][2] * self[2][0] - self[1][0] * self[2][2]) * inv_det,
            (self[0][0] * self[2][2] - self[0][2] * self[2][0]) * inv_det,
            (self[0][2] * self[1][0] - self[0][0] * self[1][2]) * inv_det,
            (self[1][0] * self[2][1] - self[1][1] * self[2][0]) * inv_det,
            (self[0][1] * self[2][0] - self[0][0] * self[2][1]) * inv_det,
            (self[0][0] * self[1][1] - self[0][1] * self[1][0]) * inv_det,
        ]))
    }
}

impl<T> Matrix3<T>
where
    T: Copy,
{
    pub fn row(&self, index: usize) -> Vector3<T> {
        Vector3::new(self[index][0], self[index][1], self[index][2])
    }

    pub fn set_row(&mut self, index: usize, row: &Vector3<T>) {
        self[index][0] = row.x;
        self[index][1] = row.y;
        self[index][2] = row.z;
    }

    pub fn column(&self, index: usize) -> Vector3<T> {
        Vector3::new(self[0][index], self[1][index], self[2][index])
    }

    pub fn set_column(&mut self, index: usize, column: &Vector3<T>) {
        self[0][index] = column.x;
        self[1][index] = column.y;
        self[2][index] = column.z;
    }
}

impl<T> Mul<Self> for Matrix3<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut values = [T::zero(); 9];

        for row in 0..Self::ROWS {
            for col in 0..Self::COLS {
                values[row * Self::COLS + col] = self[row][0] * rhs[0][col]
                    + self[row][1] * rhs[1][col]
                    + self[row][2] * rhs[2][col];
            }
        }

        Self { values }
    }
}

impl<T> Mul<Vector3<T>> for Matrix3<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        Vector3::new(
            self[0][0] * rhs.x + self[0][1] * rhs.y + self[0][2] * rhs.z,
            self[1][0] * rhs.x + self[1][1] * rhs.y + self[1][2] * rhs.z,
            self[2][0] * rhs.x + self[2][1] * rhs.y + self[2][2] * rhs.z,
        )
    }
}

impl<T> Index<usize> for Matrix3<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index * Self::COLS..index * Self::COLS + Self::COLS]
    }
}

impl<T> IndexMut<usize> for Matrix3<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index * Self::COLS..index * Self::COLS + Self::COLS]
    }
}

#[rustfmt::skip]
impl<T> Identity for Matrix3<T>
    where T: Zero + One {
    fn identity() -> Self {
        Self {
            values: [
                T::one(), T::zero(), T::zero(),
                T::zero(), T::one(), T::zero(),
                T::zero(), T::zero(), T::one(),
            ]
        }
    }
}

/// Row-major 4x4 transform matrix. Translation lives in row 3; points
/// transform as row vectors multiplied on the left.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4<T = f32> {
    values: [T; 16],
}

impl<T> Debug for Matrix4<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[")?;
        for i in 0..Self::ROWS {
            write!(f, "\t")?;
            for j in 0..Self::COLS {
                write!(f, "{}, ", self.values[i * Self::COLS + j])?;
            }
            writeln!(f)?;
        }
        writeln!(f, "]")
    }
}

impl<T> Matrix4<T> {
    const COLS: usize = 4;
    const ROWS: usize = 4;

    pub const fn with_values(values: [T; 16]) -> Self {
        Self { values }
    }
}

impl<T> Matrix4<T>
where
    T: Copy + Zero,
{
    pub fn zero() -> Self {
        Self::with_values([T::zero(); 16])
    }
}

impl<T> Matrix4<T>
where
    T: Copy + Zero + One,
{
    #[rustfmt::skip]
    pub fn new_translation(translation: &Vector3<T>) -> Self {
        Self::with_values([
            T::one(), T::zero(), T::zero(), T::zero(),
            T::zero(), T::one(), T::zero(), T::zero(),
            T::zero(), T::zero(), T::one(), T::zero(),
            translation.x, translation.y, translation.z, T::one(),
        ])
    }

    #[rustfmt::skip]
    pub fn new_scale(scale: &Vector3<T>) -> Self {
        Self::with_values([
            scale.x, T::zero(), T::zero(), T::zero(),
            T::zero(), scale.y, T::zero(), T::zero(),
            T::zero(), T::zero(), scale.z, T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ])
    }
}

impl<T> Matrix4<T>
where
    T: Float,
{
    /// Composes rotation and scale (rotation applied first), then overwrites
    /// row 3 with the translation. The order is load-bearing for
    /// `extract_rotation`/`extract_scale` and must not be changed.
    pub fn new_trs(position: &Vector3<T>, rotation: &Quaternion, scale: &Vector3<T>) -> Self {
        let mut trs = rotation.rotation_matrix::<T>() * Self::new_scale(scale);
        trs[3][0] = position.x;
        trs[3][1] = position.y;
        trs[3][2] = position.z;
        trs[3][3] = T::one();
        trs
    }

    /// Perspective projection; `fov_y` is the vertical field of view in
    /// radians.
    pub fn new_perspective(fov_y: T, aspect: T, near: T, far: T) -> Self {
        let f = T::one() / fov_y.half().tan();

        let mut result = Self::zero();
        result[0][0] = f / aspect;
        result[1][1] = f;
        result[2][2] = (far + near) / (near - far);
        result[2][3] = T::two() * far * near / (near - far);
        result[3][2] = -T::one();
        result
    }

    pub fn new_orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let mut result = Self::identity();
        result[0][0] = T::two() / (right - left);
        result[1][1] = T::two() / (top - bottom);
        result[2][2] = -T::two() / (far - near);
        result[3][0] = -((right + left) / (right - left));
        result[3][1] = -((top + bottom) / (top - bottom));
        result[3][2] = -((far + near) / (far - near));
        result
    }

    pub fn new_look_at(eye: &Vector3<T>, target: &Vector3<T>, up: &Vector3<T>) -> Self {
        let z_axis = (*eye - *target).normalized();
        let x_axis = up.cross(&z_axis).normalized();
        let y_axis = z_axis.cross(&x_axis);

        let mut result = Self::identity();
        result[0][0] = x_axis.x;
        result[0][1] = y_axis.x;
        result[0][2] = z_axis.x;
        result[1][0] = x_axis.y;
        result[1][1] = y_axis.y;
        result[1][2] = z_axis.y;
        result[2][0] = x_axis.z;
        result[2][1] = y_axis.z;
        result[2][2] = z_axis.z;
        result[3][0] = -x_axis.dot(eye);
        result[3][1] = -y_axis.dot(eye);
        result[3][2] = -z_axis.dot(eye);
        result
    }

    /// Norm of each of the first three rows of the upper-left 3x3 block.
    pub fn extract_scale(&self) -> Vector3<T> {
        Vector3::new(
            Vector3::new(self[0][0], self[0][1], self[0][2]).norm(),
            Vector3::new(self[1][0], self[1][1], self[1][2]).norm(),
            Vector3::new(self[2][0], self[2][1], self[2][2]).norm(),
        )
    }

    /// Removes the scale from the upper-left 3x3 block, then converts it to a
    /// quaternion with the trace-based branch selection. Zero scale
    /// components are left as-is.
    #[allow(clippy::similar_names, clippy::many_single_char_names)]
    pub fn extract_rotation(&self) -> Quaternion {
        let scale = self.extract_scale();
        let inv_sx = if scale.x > T::zero() {
            T::one() / scale.x
        } else {
            T::one()
        };
        let inv_sy = if scale.y > T::zero() {
            T::one() / scale.y
        } else {
            T::one()
        };
        let inv_sz = if scale.z > T::zero() {
            T::one() / scale.z
        } else {
            T::one()
        };

        let r00 = self[0][0] * inv_sx;
        let r01 = self[0][1] * inv_sy;
        let r02 = self[0][2] * inv_sz;
        let r10 = self[1][0] * inv_sx;
        let r11 = self[1][1] * inv_sy;
        let r12 = self[1][2] * inv_sz;
        let r20 = self[2][0] * inv_sx;
        let r21 = self[2][1] * inv_sy;
        let r22 = self[2][2] * inv_sz;

        let trace = r00 + r11 + r22;
        let (w, x, y, z) = if trace > T::zero() {
            let s = (trace + T::one()).sqrt() * T::two();
            (
                T::one_quarter() * s,
                (r21 - r12) / s,
                (r02 - r20) / s,
                (r10 - r01) / s,
            )
        } else if r00 > r11 && r00 > r22 {
            let s = (T::one() + r00 - r11 - r22).sqrt() * T::two();
            (
                (r21 - r12) / s,
                T::one_quarter() * s,
                (r01 + r10) / s,
                (r02 + r20) / s,
            )
        } else if r11 > r22 {
            let s = (T::one() + r11 - r00 - r22).sqrt() * T::two();
            (
                (r02 - r20) / s,
                (r01 + r10) / s,
                T::one_quarter() * s,
                (r12 + r21) / s,
            )
        } else {
            let s = (T::one() + r22 - r00 - r11).sqrt() * T::two();
            (
                (r10 - r01) / s,
                (r02 + r20) / s,
                (r12 + r21) / s,
                T::one_quarter() * s,
            )
        };

        Quaternion::new(
            w.to_f32(),
            Vector3::new(x.to_f32(), y.to_f32(), z.to_f32()),
        )
    }

    /// Whether the matrix is a well-formed translation-rotation-scale
    /// transform: column 3 is `(0, 0, 0, 1)`, no scale component is zero, and
    /// the scale-normalized columns are mutually orthogonal.
    pub fn valid_trs(&self) -> bool {
        let epsilon = T::from_f32(1e-5);
        if self[0][3].abs() > epsilon
            || self[1][3].abs() > epsilon
            || self[2][3].abs() > epsilon
            || (self[3][3] - T::one()).abs() > epsilon
        {
            return false;
        }

        let scale = self.extract_scale();
        if scale.x <= T::zero() || scale.y <= T::zero() || scale.z <= T::zero() {
            return false;
        }

        let n0 = (self.column(0) / scale.x).normalized();
        let n1 = (self.column(1) / scale.y).normalized();
        let n2 = (self.column(2) / scale.z).normalized();

        n0.dot(&n1).abs() <= epsilon
            && n0.dot(&n2).abs() <= epsilon
            && n1.dot(&n2).abs() <= epsilon
    }

    /// Component-wise equality within `1e-6`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_within(other, T::epsilon())
    }

    pub fn approx_eq_within(&self, other: &Self, epsilon: T) -> bool {
        for i in 0..Self::ROWS * Self::COLS {
            if (self.values[i] - other.values[i]).abs() > epsilon {
                return false;
            }
        }
        true
    }
}

impl<T> Matrix4<T>
where
    T: Copy,
{
    pub fn transpose(&self) -> Self {
        let mut result = *self;
        for i in 0..Self::ROWS {
            for j in 0..Self::COLS {
                result.values[i * Self::COLS + j] = self.values[j * Self::COLS + i];
            }
        }
        result
    }

    /// The translation row.
    pub fn extract_position(&self) -> Vector3<T> {
        Vector3::new(self[3][0], self[3][1], self[3][2])
    }

    pub fn row(&self, index: usize) -> Vector3<T> {
        Vector3::new(self[index][0], self[index][1], self[index][2])
    }

    pub fn column(&self, index: usize) -> Vector3<T> {
        Vector3::new(self[0][index], self[1][index], self[2][index])
    }
}

impl<T> Matrix4<T>
where
    T: Copy + NumericOps + Zero + One,
{
    pub fn determinant(&self) -> T {
        self[0][0]
            * det3(
                self[1][1], self[1][2], self[1][3], self[2][1], self[2][2], self[2][3], self[3][1],
                self[3][2], self[3][3],
            )
            - self[0][1]
                * det3(
                    self[1][0], self[1][2], self[1][3], self[2][0], self[2][2], self[2][3],
                    self[3][0], self[3][2], self[3][3],
                )
            + self[0][2]
                * det3(
                    self[1][0], self[1][1], self[1][3], self[2][0], self[2][1], self[2][3],
                    self[3][0], self[3][1], self[3][3],
                )
            - self[0][3]
                * det3(
                    self[1][0], self[1][1], self[1][2], self[2][0], self[2][1], self[2][2],
                    self[3][0], self[3][1], self[3][2],
                )
    }

    /// Transforms a point as a row vector with w implicitly 1, dividing by
    /// the resulting w only when it is neither exactly 0 nor exactly 1.
    pub fn transform_point(&self, point: &Vector3<T>) -> Vector3<T> {
        let mut x = point.x * self[0][0] + point.y * self[1][0] + point.z * self[2][0] + self[3][0];
        let mut y = point.x * self[0][1] + point.y * self[1][1] + point.z * self[2][1] + self[3][1];
        let mut z = point.x * self[0][2] + point.y * self[1][2] + point.z * self[2][2] + self[3][2];
        let w = point.x * self[0][3] + point.y * self[1][3] + point.z * self[2][3] + self[3][3];

        if w != T::zero() && w != T::one() {
            x /= w;
            y /= w;
            z /= w;
        }

        Vector3::new(x, y, z)
    }

    /// Transforms a direction with the upper-left 3x3 block, ignoring the
    /// translation.
    pub fn transform_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            vector.x * self[0][0] + vector.y * self[0][1] + vector.z * self[0][2],
            vector.x * self[1][0] + vector.y * self[1][1] + vector.z * self[1][2],
            vector.x * self[2][0] + vector.y * self[2][1] + vector.z * self[2][2],
        )
    }
}

impl<T> Matrix4<T>
where
    T: Copy + NumericOps + Zero + One + IsZero,
{
    /// Full cofactor/adjugate inverse, `None` for a singular matrix.
    #[rustfmt::skip]
    pub fn try_inverse(&self) -> Option<Matrix4<T>> {
        let a2323 = self[2][2] * self[3][3] - self[2][3] * self[3][2];
        let a1323 = self[2][1] * self[3][3] - self[2][3] * self[3][1];
        let a1223 = self[2][1] * self[3][2] - self[2][2] * self[3][1];
        let a0323 = self[2][0] * self[3][3] - self[2][3] * self[3][0];
        let a0223 = self[2][0] * self[3][2] - self[2][2] * self[3][0];
        let a0123 = self[2][0] * self[3][1] - self[2][1] * self[3][0];
        let a2313 = self[1][2] * self[3][3] - self[1][3] * self[3][2];
        let a1313 = self[1][1] * self[3][3] - self[1][3] * self[3][1];
        let a1213 = self[1][1] * self[3][2] - self[1][2] * self[3][1];
        let a2312 = self[1][2] * self[2][3] - self[1][3] * self[2][2];
        let a1312 = self[1][1] * self[2][3] - self[1][3] * self[2][1];
        let a1212 = self[1][1] * self[2][2] - self[1][2] * self[2][1];
        let a0313 = self[1][0] * self[3][3] - self[1][3] * self[3][0];
        let a0213 = self[1][0] * self[3][2] - self[1][2] * self[3][0];
        let a0312 = self[1][0] * self[2][3] - self[1][3] * self[2][0];
        let a0212 = self[1][0] * self[2][2] - self[1][2] * self[2][0];
        let a0113 = self[1][0] * self[3][1] - self[1][1] * self[3][0];
        let a0112 = self[1][0] * self[2][1] - self[1][1] * self[2][0];

        let det = self[0][0] * (self[1][1] * a2323 - self[1][2] * a1323 + self[1][3] * a1223)
            - self[0][1] * (self[1][0] * a2323 - self[1][2] * a0323 + self[1][3] * a0223)
            + self[0][2] * (self[1][0] * a1323 - self[1][1] * a0323 + self[1][3] * a0123)
            - self[0][3] * (self[1][0] * a1223 - self[1][1] * a0223 + self[1][2] * a0123);

        if det.is_zero() {
            return None;
        }

        let inv_det = T::one() / det;

        Some(Matrix4 {
            values: [
                inv_det * (self[1][1] * a2323 - self[1][2] * a1323 + self[1][3] * a1223),
                inv_det * -(self[0][1] * a2323 - self[0][2] * a1323 + self[0][3] * a1223),
                inv_det * (self[0][1] * a2313 - self[0][2] * a1313 + self[0][3] * a1213),
                inv_det * -(self[0][1] * a2312 - self[0][2] * a1312 + self[0][3] * a1212),
                inv_det * -(self[1][0] * a2323 - self[1][2] * a0323 + self[1][3] * a0223),
                inv_det * (self[0][0] * a2323 - self[0][2] * a0323 + self[0][3] * a0223),
                inv_det * -(self[0][0] * a2313 - self[0][2] * a0313 + self[0][3] * a0213),
                inv_det * (self[0][0] * a2312 - self[0][2] * a0312 + self[0][3] * a0212),
                inv_det * (self[1][0] * a1323 - self[1][1] * a0323 + self[1][3] * a0123),
                inv_det * -(self[0][0] * a1323 - self[0][1] * a0323 + self[0][3] * a0123),
                inv_det * (self[0][0] * a1313 - self[0][1] * a0313 + self[0][3] * a0113),
                inv_det * -(self[0][0] * a1312 - self[0][1] * a0312 + self[0][3] * a0112),
                inv_det * -(self[1][0] * a1223 - self[1][1] * a0223 + self[1][2] * a0123),
                inv_det * (self[0][0] * a1223 - self[0][1] * a0223 + self[0][2] * a0123),
                inv_det * -(self[0][0] * a1213 - self[0][1] * a0213 + self[0][2] * a0113),
                inv_det * (self[0][0] * a1212 - self[0][1] * a0212 + self[0][2] * a0112),
            ]
        })
    }
}

impl<T> Mul<Self> for Matrix4<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut values = [T::zero(); 16];

        for row in 0..Self::ROWS {
            for col in 0..Self::COLS {
                values[row * Self::COLS + col] = self[row][0] * rhs[0][col]
                    + self[row][1] * rhs[1][col]
                    + self[row][2] * rhs[2][col]
                    + self[row][3] * rhs[3][col];
            }
        }

        Self { values }
    }
}

impl<T> MulAssign<Self> for Matrix4<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T> Index<usize> for Matrix4<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index * Self::COLS..index * Self::COLS + Self::COLS]
    }
}

impl<T> IndexMut<usize> for Matrix4<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index * Self::COLS..index * Self::COLS + Self::COLS]
    }
}

#[rustfmt::skip]
impl<T> Identity for Matrix4<T>
    where T: Zero + One {
    fn identity() -> Self {
        Self {
            values: [
                T::one(), T::zero(), T::zero(), T::zero(),
                T::zero(), T::one(), T::zero(), T::zero(),
                T::zero(), T::zero(), T::one(), T::zero(),
                T::zero(), T::zero(), T::zero(), T::one()
            ]
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn det3<T>(a1: T, a2: T, a3: T, b1: T, b2: T, b3: T, c1: T, c2: T, c3: T) -> T
where
    T: Copy + NumericOps,
{
    a1 * (b2 * c3 - b3 * c2) - a2 * (b1 * c3 - b3 * c1) + a3 * (b1 * c2 - b2 * c1)
}
