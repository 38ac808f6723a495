//! 可查看的模型
//!
//! 一个 `Model` 持有加载好的网格、显示状态和世界变换，
//! 并根据当前按键执行旋转或平移。

use super::input::{InputState, KeyCode};
use crate::core::config::ModelConfig;
use crate::core::math::{axis_rotation, Matrix4, Quaternion, Vector3};
use crate::geometry::Mesh;

/// 世界变换（位置 + 旋转）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3,
    pub rotation: Quaternion,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: Quaternion::identity(),
        }
    }
}

impl Transform {
    /// 模型矩阵：T * R
    pub fn to_matrix(&self) -> Matrix4 {
        Matrix4::new_translation(&self.position) * self.rotation.to_homogeneous()
    }

    /// 绕经过自身位置的世界坐标轴旋转（度）
    pub fn rotate_around_self(&mut self, axis: &Vector3, degrees: f32) {
        self.rotation = axis_rotation(axis, degrees) * self.rotation;
    }

    /// 在世界空间中平移
    pub fn translate(&mut self, offset: &Vector3) {
        self.position += offset;
    }

    /// 回到原点并清除旋转
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn reset_rotation(&mut self) {
        self.rotation = Quaternion::identity();
    }
}

/// 旋转模式下的按键与旋转轴
const ROTATION_KEYS: [(KeyCode, [f32; 3]); 4] = [
    (KeyCode::W, [1.0, 0.0, 0.0]),
    (KeyCode::A, [0.0, 1.0, 0.0]),
    (KeyCode::S, [-1.0, 0.0, 0.0]),
    (KeyCode::D, [0.0, -1.0, 0.0]),
];

/// 平移模式下的按键与移动方向
const TRANSLATION_KEYS: [(KeyCode, [f32; 3]); 6] = [
    (KeyCode::W, [0.0, 1.0, 0.0]),
    (KeyCode::A, [-1.0, 0.0, 0.0]),
    (KeyCode::S, [0.0, -1.0, 0.0]),
    (KeyCode::D, [1.0, 0.0, 0.0]),
    (KeyCode::E, [0.0, 0.0, 1.0]),
    (KeyCode::C, [0.0, 0.0, -1.0]),
];

/// 场景中的一个模型
#[derive(Debug, Clone)]
pub struct Model {
    pub name: String,
    pub file: String,
    pub mesh: Mesh,
    pub transform: Transform,
    enabled: bool,
    transformation_speed: f32,
    transformation_speed_boost: f32,
}

impl Model {
    /// 由配置和已加载的网格创建模型，激活状态取自配置
    pub fn from_config(config: &ModelConfig, mesh: Mesh) -> Self {
        Self {
            name: config.name.clone(),
            file: config.file.clone(),
            mesh,
            transform: Transform::default(),
            enabled: config.enabled,
            transformation_speed: config.transformation_speed,
            transformation_speed_boost: config.transformation_speed_boost,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.enabled
    }

    pub fn set_active(&mut self, active: bool) {
        self.enabled = active;
    }

    /// 当前变换速度，按住 Shift 时使用加速值
    pub fn speed(&self, input: &InputState) -> f32 {
        if input.is_held(KeyCode::LeftShift) {
            self.transformation_speed_boost
        } else {
            self.transformation_speed
        }
    }

    /// 按住的方向键每帧旋转 `speed` 度
    pub fn rotate(&mut self, input: &InputState) {
        let speed = self.speed(input);
        for (key, axis) in ROTATION_KEYS {
            if input.is_held(key) {
                self.transform
                    .rotate_around_self(&Vector3::from(axis), speed);
            }
        }
    }

    /// 按住的方向键以 `speed` 单位/秒平移
    pub fn translate(&mut self, input: &InputState, delta_time: f32) {
        let distance = self.speed(input) * delta_time;
        for (key, direction) in TRANSLATION_KEYS {
            if input.is_held(key) {
                self.transform
                    .translate(&(Vector3::from(direction) * distance));
            }
        }
    }

    pub fn reset_to_original_position(&mut self) {
        self.transform.reset();
    }

    pub fn reset_rotation(&mut self) {
        self.transform.reset_rotation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::approx_eq;

    fn model() -> Model {
        let config = ModelConfig {
            name: "Cube".to_string(),
            file: "cube.obj".to_string(),
            enabled: false,
            transformation_speed: 1.0,
            transformation_speed_boost: 5.0,
        };
        Model::from_config(&config, Mesh::new())
    }

    #[test]
    fn test_speed_boost() {
        let model = model();
        let mut input = InputState::new();
        assert_eq!(model.speed(&input), 1.0);

        input.press(KeyCode::LeftShift);
        assert_eq!(model.speed(&input), 5.0);
    }

    #[test]
    fn test_translate_directions() {
        let mut model = model();
        let mut input = InputState::new();
        input.press(KeyCode::W);
        input.press(KeyCode::D);
        input.press(KeyCode::E);

        model.translate(&input, 0.5);

        let position = model.transform.position;
        assert!(approx_eq(position.x, 0.5, 1e-6));
        assert!(approx_eq(position.y, 0.5, 1e-6));
        assert!(approx_eq(position.z, 0.5, 1e-6));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut model = model();
        let mut input = InputState::new();
        input.press(KeyCode::A);
        input.press(KeyCode::D);

        model.translate(&input, 1.0);
        assert!(approx_eq(model.transform.position.x, 0.0, 1e-6));
    }

    #[test]
    fn test_rotate_about_y() {
        let mut model = model();
        let mut input = InputState::new();
        input.press(KeyCode::A);
        input.press(KeyCode::LeftShift);

        for _ in 0..18 {
            model.rotate(&input);
        }

        // 18 帧 * 5 度 = 90 度
        assert!(approx_eq(model.transform.rotation.angle(), std::f32::consts::FRAC_PI_2, 1e-4));
        let rotated = model.transform.rotation * Vector3::x();
        assert!(approx_eq(rotated.z, -1.0, 1e-4));
    }

    #[test]
    fn test_resets() {
        let mut model = model();
        let mut input = InputState::new();
        input.press(KeyCode::W);
        model.translate(&input, 1.0);
        model.rotate(&input);

        model.reset_rotation();
        assert_eq!(model.transform.rotation, Quaternion::identity());
        assert!(approx_eq(model.transform.position.y, 1.0, 1e-6));

        model.reset_to_original_position();
        assert_eq!(model.transform, Transform::default());
    }

    #[test]
    fn test_transform_matrix() {
        let mut transform = Transform::default();
        transform.translate(&Vector3::new(1.0, 2.0, 3.0));
        let matrix = transform.to_matrix();

        assert!(approx_eq(matrix[(0, 3)], 1.0, 1e-6));
        assert!(approx_eq(matrix[(1, 3)], 2.0, 1e-6));
        assert!(approx_eq(matrix[(2, 3)], 3.0, 1e-6));
    }
}
