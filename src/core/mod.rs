//! 核心功能模块
//!
//! 提供与网格格式无关的基础功能：配置管理、日志系统、错误处理和数学类型。
//!
//! # 模块组织
//!
//! - `config`：配置管理，支持从 TOML 文件加载查看器设置和场景模型列表
//! - `log`：日志系统，提供结构化的日志记录功能
//! - `error`：错误处理，定义统一的错误类型
//! - `math`：数学类型，基于 nalgebra

pub mod config;
pub mod error;
pub mod log;
pub mod math;

// 重新导出常用类型，方便使用
pub use config::{Config, SceneConfig};
pub use error::{ConfigError, FormatError, MeshLoadError, Result, ViewerError};
pub use math::{Matrix4, Quaternion, Vector3};
