//! 数学类型
//!
//! 基于 `nalgebra` 的类型别名和少量工具函数，供场景变换使用。

pub use nalgebra::{Matrix4 as Mat4, UnitQuaternion, Vector3 as Vec3};

pub type Vector3 = Vec3<f32>;
pub type Matrix4 = Mat4<f32>;
pub type Quaternion = UnitQuaternion<f32>;

/// 角度转弧度的系数
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// 角度转弧度
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// 浮点数近似相等
#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// 绕世界坐标轴旋转给定角度（度）的四元数
pub fn axis_rotation(axis: &Vector3, degrees: f32) -> Quaternion {
    match nalgebra::Unit::try_new(*axis, f32::EPSILON) {
        Some(axis) => Quaternion::from_axis_angle(&axis, deg_to_rad(degrees)),
        None => Quaternion::identity(),
    }
}
