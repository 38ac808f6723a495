//! 查看器状态
//!
//! `ViewerState` 是显式构造、显式传递的上下文对象：持有全部已加载的模型、
//! 当前交互模式、当前模型索引和帮助面板（暂停）状态。

use tracing::{debug, info};

use super::input::{InputState, KeyCode};
use super::model::Model;
use crate::core::config::{Config, SceneConfig, StartMode};
use crate::core::error::{Result, ViewerError};
use crate::geometry::loaders::load_mesh;

/// 交互模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Rotation,
    Translation,
}

impl From<StartMode> for Mode {
    fn from(mode: StartMode) -> Self {
        match mode {
            StartMode::Rotation => Mode::Rotation,
            StartMode::Translation => Mode::Translation,
        }
    }
}

/// 查看器上下文
#[derive(Debug)]
pub struct ViewerState {
    models: Vec<Model>,
    current: usize,
    mode: Mode,
    help_visible: bool,
}

impl ViewerState {
    /// 加载场景中的全部模型并创建查看器
    ///
    /// 任一模型加载失败都会中止创建。
    pub fn load(config: &Config, scene: &SceneConfig) -> Result<Self> {
        let mut models = Vec::with_capacity(scene.models.len());

        for model_config in scene.selected_models(&config.assets) {
            let path = config.assets.resolve_model_path(&model_config.file);
            debug!(model = %model_config.name, path = %path.display(), "Loading model");

            let mesh = load_mesh(&path)?;
            models.push(Model::from_config(model_config, mesh));
        }

        Self::new(models, config.viewer.start_model, config.viewer.start_mode.into())
    }

    /// 由已创建的模型构建查看器
    ///
    /// 若有模型已被标记为激活，取其中第一个作为起始模型；否则使用 `start_model`，
    /// 超出范围时取最后一个。之后只有起始模型保持激活。
    /// 查看器以显示帮助面板（暂停）的状态启动。
    pub fn new(mut models: Vec<Model>, start_model: usize, mode: Mode) -> Result<Self> {
        if models.is_empty() {
            return Err(ViewerError::Initialization(
                "no models to display".to_string(),
            ));
        }

        let current = models
            .iter()
            .position(Model::is_active)
            .unwrap_or_else(|| start_model.min(models.len() - 1));
        for (index, model) in models.iter_mut().enumerate() {
            model.set_active(index == current);
        }

        info!(
            models = models.len(),
            current = %models[current].name,
            "Viewer initialized"
        );

        Ok(Self {
            models,
            current,
            mode,
            help_visible: true,
        })
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.help_visible
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_model(&self) -> &Model {
        &self.models[self.current]
    }

    pub fn current_model_mut(&mut self) -> &mut Model {
        &mut self.models[self.current]
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// 显示或隐藏帮助面板；显示时暂停交互
    pub fn set_help_visible(&mut self, visible: bool) {
        self.help_visible = visible;
        debug!(visible, "Help panel toggled");
    }

    /// 在旋转和平移模式之间切换
    pub fn change_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Translation => Mode::Rotation,
            Mode::Rotation => Mode::Translation,
        };
    }

    /// 切换到下一个模型（循环）
    pub fn next_model(&mut self) {
        let next = (self.current + 1) % self.models.len();
        self.switch_to(next);
    }

    /// 切换到上一个模型（循环）
    pub fn previous_model(&mut self) {
        let previous = self
            .current
            .checked_sub(1)
            .unwrap_or(self.models.len() - 1);
        self.switch_to(previous);
    }

    fn switch_to(&mut self, index: usize) {
        let old = &mut self.models[self.current];
        old.set_active(false);
        old.reset_to_original_position();

        self.current = index;
        self.models[index].set_active(true);
        info!(model = %self.models[index].name, index, "Switched model");
    }

    /// 处理一次按键
    ///
    /// 暂停时只响应 Escape（关闭帮助面板）。
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.help_visible {
            if key == KeyCode::Escape {
                self.set_help_visible(false);
            }
            return;
        }

        match key {
            KeyCode::R => self.mode = Mode::Rotation,
            KeyCode::T => self.mode = Mode::Translation,
            KeyCode::N => self.next_model(),
            KeyCode::P => self.previous_model(),
            KeyCode::H => self.set_help_visible(true),
            KeyCode::U => self.current_model_mut().reset_rotation(),
            _ => {}
        }
    }

    /// 每帧更新：先处理本帧按下的命令键，再按住键变换当前模型
    pub fn update(&mut self, input: &InputState, delta_time: f32) {
        for &key in input.pressed() {
            self.handle_key(key);
        }

        if self.help_visible {
            return;
        }

        let mode = self.mode;
        let model = self.current_model_mut();
        match mode {
            Mode::Rotation => model.rotate(input),
            Mode::Translation => model.translate(input, delta_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ModelConfig;
    use crate::geometry::Mesh;
    use std::path::PathBuf;

    fn model(name: &str) -> Model {
        let config = ModelConfig {
            name: name.to_string(),
            file: format!("{}.obj", name),
            enabled: false,
            transformation_speed: 1.0,
            transformation_speed_boost: 5.0,
        };
        Model::from_config(&config, Mesh::new())
    }

    fn viewer() -> ViewerState {
        let mut viewer = ViewerState::new(
            vec![model("a"), model("b"), model("c")],
            0,
            Mode::Translation,
        )
        .unwrap();
        viewer.handle_key(KeyCode::Escape);
        viewer
    }

    fn active_names(viewer: &ViewerState) -> Vec<&str> {
        viewer
            .models()
            .iter()
            .filter(|m| m.is_active())
            .map(|m| m.name.as_str())
            .collect()
    }

    #[test]
    fn test_empty_scene_rejected() {
        assert!(matches!(
            ViewerState::new(Vec::new(), 0, Mode::Rotation),
            Err(ViewerError::Initialization(_))
        ));
    }

    #[test]
    fn test_start_index_clamped() {
        let viewer = ViewerState::new(vec![model("a"), model("b")], 9, Mode::Rotation).unwrap();
        assert_eq!(viewer.current_index(), 1);
        assert_eq!(active_names(&viewer), ["b"]);
    }

    #[test]
    fn test_enabled_model_overrides_start_index() {
        let mut b = model("b");
        let mut c = model("c");
        b.set_active(true);
        c.set_active(true);

        let viewer = ViewerState::new(vec![model("a"), b, c], 0, Mode::Rotation).unwrap();
        assert_eq!(viewer.current_index(), 1);
        assert_eq!(active_names(&viewer), ["b"]);
    }

    #[test]
    fn test_starts_paused_until_escape() {
        let mut viewer = ViewerState::new(vec![model("a"), model("b")], 0, Mode::Translation).unwrap();
        assert!(viewer.is_paused());

        viewer.handle_key(KeyCode::N);
        assert_eq!(viewer.current_index(), 0);

        viewer.handle_key(KeyCode::Escape);
        assert!(!viewer.is_paused());
        viewer.handle_key(KeyCode::N);
        assert_eq!(viewer.current_index(), 1);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut viewer = viewer();
        viewer.handle_key(KeyCode::N);
        viewer.handle_key(KeyCode::N);
        assert_eq!(viewer.current_index(), 2);

        viewer.handle_key(KeyCode::N);
        assert_eq!(viewer.current_index(), 0);
        assert_eq!(active_names(&viewer), ["a"]);
    }

    #[test]
    fn test_previous_wraps_around() {
        let mut viewer = viewer();
        viewer.handle_key(KeyCode::P);
        assert_eq!(viewer.current_index(), 2);
        assert_eq!(active_names(&viewer), ["c"]);
    }

    #[test]
    fn test_switching_resets_previous_model() {
        let mut viewer = viewer();
        let mut input = InputState::new();
        input.press(KeyCode::W);
        viewer.update(&input, 1.0);
        assert!(viewer.current_model().transform.position.y > 0.0);

        viewer.next_model();
        assert_eq!(viewer.models()[0].transform.position.y, 0.0);
    }

    #[test]
    fn test_mode_keys() {
        let mut viewer = viewer();
        viewer.handle_key(KeyCode::R);
        assert_eq!(viewer.mode(), Mode::Rotation);
        viewer.handle_key(KeyCode::T);
        assert_eq!(viewer.mode(), Mode::Translation);

        viewer.change_mode();
        assert_eq!(viewer.mode(), Mode::Rotation);
    }

    #[test]
    fn test_help_pauses_updates() {
        let mut viewer = viewer();
        viewer.handle_key(KeyCode::H);
        assert!(viewer.is_paused());

        let mut input = InputState::new();
        input.press(KeyCode::W);
        viewer.update(&input, 1.0);
        assert_eq!(viewer.current_model().transform.position.y, 0.0);
    }

    #[test]
    fn test_update_rotates_in_rotation_mode() {
        let mut viewer = viewer();
        let mut input = InputState::new();
        input.press(KeyCode::R);
        input.press(KeyCode::A);
        viewer.update(&input, 1.0);

        assert_eq!(viewer.mode(), Mode::Rotation);
        assert!(viewer.current_model().transform.rotation.angle() > 0.0);
        assert_eq!(viewer.current_model().transform.position.x, 0.0);

        input.end_frame();
        input.press(KeyCode::U);
        viewer.update(&input, 1.0);
        // U 先重置旋转，随后按住的 A 又转了一帧
        assert!(viewer.current_model().transform.rotation.angle() < 0.02);
    }

    #[test]
    fn test_load_from_scene() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tri.obj"), "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        std::fs::write(dir.path().join("quad.obj"), "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n").unwrap();

        let mut config = Config::default();
        config.assets.input_dir = PathBuf::from(dir.path());
        config.viewer.start_model = 1;

        let scene: SceneConfig = toml::from_str(
            r#"
            [[models]]
            name = "Triangle"
            file = "tri.obj"

            [[models]]
            name = "Quad"
            file = "quad.obj"
            "#,
        )
        .unwrap();

        let viewer = ViewerState::load(&config, &scene).unwrap();
        assert_eq!(viewer.models().len(), 2);
        assert_eq!(viewer.current_model().name, "Quad");
        assert_eq!(viewer.current_model().mesh.triangle_count(), 2);
        assert_eq!(viewer.mode(), Mode::Translation);
    }

    #[test]
    fn test_load_honours_enabled_flag() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tri.obj"), "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        let mut config = Config::default();
        config.assets.input_dir = PathBuf::from(dir.path());

        let scene: SceneConfig = toml::from_str(
            r#"
            [[models]]
            name = "First"
            file = "tri.obj"

            [[models]]
            name = "Second"
            file = "tri.obj"
            enabled = true
            "#,
        )
        .unwrap();

        let viewer = ViewerState::load(&config, &scene).unwrap();
        assert_eq!(viewer.current_model().name, "Second");
        assert_eq!(active_names(&viewer), ["Second"]);
    }

    #[test]
    fn test_load_aborts_on_missing_model() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.assets.input_dir = PathBuf::from(dir.path());

        let scene: SceneConfig = toml::from_str(
            r#"
            [[models]]
            name = "Missing"
            file = "missing.obj"
            "#,
        )
        .unwrap();

        assert!(matches!(
            ViewerState::load(&config, &scene),
            Err(ViewerError::MeshLoading(_))
        ));
    }
}
