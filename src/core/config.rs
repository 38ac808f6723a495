//! 配置管理模块
//!
//! 提供查看器配置的加载、解析和管理功能。
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (config.toml)
//!
//! ```toml
//! [assets]
//! input_dir = "assets/input"
//!
//! [viewer]
//! start_model = 0
//! start_mode = "translation"  # 或 "rotation"
//! frame_time = 0.016
//!
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = false
//! ```
//!
//! # 场景文件格式 (scene.toml)
//!
//! ```toml
//! [[models]]
//! name = "Cube"
//! file = "cube.obj"
//! enabled = true      # 可选，启动时显示此模型
//! transformation_speed = 1.0
//! transformation_speed_boost = 5.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::{ConfigError, Result};

/// 查看器配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 资源路径配置
    #[serde(default)]
    pub assets: AssetsConfig,

    /// 查看器行为配置
    #[serde(default)]
    pub viewer: ViewerConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 资源路径配置
///
/// 负责把场景里的模型文件名解析为可读取的路径，
/// 网格加载器本身只接受已经解析好的路径。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// 模型输入目录
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// 仅加载指定文件（命令行 `--model` 设置）
    #[serde(default)]
    pub only_model: Option<String>,
}

/// 查看器行为配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// 启动时显示的模型索引（超出范围时取最后一个）
    #[serde(default)]
    pub start_model: usize,

    /// 启动时的交互模式
    #[serde(default = "default_start_mode")]
    pub start_mode: StartMode,

    /// 交互模式下每一帧的时长（秒）
    #[serde(default = "default_frame_time")]
    pub frame_time: f32,

    /// 是否从标准输入读取按键脚本
    #[serde(default)]
    pub interactive: bool,
}

/// 启动交互模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartMode {
    Rotation,
    Translation,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

// 默认值函数
fn default_input_dir() -> PathBuf { PathBuf::from("assets/input") }
fn default_start_mode() -> StartMode { StartMode::Translation }
fn default_frame_time() -> f32 { 1.0 / 60.0 }
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "obj_viewer.log".to_string() }
fn default_transformation_speed() -> f32 { 1.0 }
fn default_transformation_speed_boost() -> f32 { 5.0 }

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            only_model: None,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            start_model: 0,
            start_mode: default_start_mode(),
            frame_time: default_frame_time(),
            interactive: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl AssetsConfig {
    /// 将模型文件名解析为输入目录下的路径
    ///
    /// 绝对路径原样返回。
    pub fn resolve_model_path(&self, file: &str) -> PathBuf {
        let file = Path::new(file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.input_dir.join(file)
        }
    }
}

impl LogLevel {
    /// 从命令行字符串解析日志级别
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

/// 读取并解析一个 TOML 文件
fn read_toml<T, P>(path: P) -> Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()).into())
}

/// 将值序列化后写入 TOML 文件
fn write_toml<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let contents =
        toml::to_string_pretty(value).map_err(|e| ConfigError::Parse(e.to_string()))?;

    std::fs::write(path, contents)?;
    Ok(())
}

impl Config {
    /// 从配置文件加载
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use obj_viewer::core::Config;
    ///
    /// let config = Config::from_file("config.toml")?;
    /// # Ok::<(), obj_viewer::core::ViewerError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_toml(path)
    }

    /// 从配置文件加载，如果文件不存在或无法解析则使用默认配置
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_toml(self, path)
    }

    /// 从命令行参数覆盖配置
    ///
    /// 支持的参数：
    /// - `--input-dir <dir>`: 设置模型输入目录
    /// - `--model <file>`: 只加载指定的模型文件
    /// - `--log-level <level>`: 设置日志级别
    /// - `--interactive`: 从标准输入读取按键脚本
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        if args.iter().any(|a| a == "--interactive") {
            self.viewer.interactive = true;
        }

        if let Some(dir) = value_after(&args, "--input-dir") {
            self.assets.input_dir = PathBuf::from(dir);
        }

        if let Some(file) = value_after(&args, "--model") {
            self.assets.only_model = Some(file.to_string());
        }

        if let Some(level) = value_after(&args, "--log-level").and_then(LogLevel::parse) {
            self.logging.level = level;
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if !(self.viewer.frame_time > 0.0 && self.viewer.frame_time.is_finite()) {
            return Err(ConfigError::InvalidValue {
                field: "viewer.frame_time".to_string(),
                reason: "Frame time must be a positive number of seconds".to_string(),
            }
            .into());
        }

        if self.assets.input_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "assets.input_dir".to_string(),
                reason: "Input directory must not be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

fn value_after<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|idx| args.get(idx + 1))
        .map(String::as_str)
}

/// 模型配置
///
/// 定义一个可供查看的模型：显示名称、文件名和变换速度。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// 显示名称
    pub name: String,

    /// 模型文件名（相对于输入目录）
    pub file: String,

    /// 是否作为启动时显示的模型（优先于 `viewer.start_model`）
    #[serde(default)]
    pub enabled: bool,

    /// 每帧的变换速度（旋转：度；平移：单位/秒）
    #[serde(default = "default_transformation_speed")]
    pub transformation_speed: f32,

    /// 按住 Shift 时的变换速度
    #[serde(default = "default_transformation_speed_boost")]
    pub transformation_speed_boost: f32,
}

/// 场景配置
///
/// 包含查看器可以循环切换的全部模型。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub models: Vec<ModelConfig>,
}

impl SceneConfig {
    /// 从文件加载场景配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_toml(path)
    }

    /// 从文件加载，如果文件不存在则返回默认（空）场景
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.exists() {
            match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!("Loaded scene config from: {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to load scene config: {}, using defaults", e);
                    Self::default()
                }
            }
        } else {
            tracing::info!("Scene config not found, using defaults");
            Self::default()
        }
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_toml(self, path)
    }

    /// 按 `only_model` 过滤后实际需要加载的模型
    pub fn selected_models<'a>(
        &'a self,
        assets: &'a AssetsConfig,
    ) -> impl Iterator<Item = &'a ModelConfig> + 'a {
        self.models.iter().filter(move |model| {
            assets
                .only_model
                .as_deref()
                .map_or(true, |only| only == model.file)
        })
    }
}
