//! obj_viewer - OBJ 网格加载与模型查看器核心
//!
//! 把 Wavefront OBJ 文本转换为按角点展开的三角网格（位置/UV/法线平行数组 +
//! 三角形索引），并提供一个无窗口的查看器上下文用于在多个模型之间切换和变换。
//!
//! # 模块结构
//!
//! - `core`: 核心功能模块（配置、日志、错误处理、数学类型）
//! - `geometry`: 几何体加载模块（网格、顶点、OBJ 加载器）
//! - `scene`: 查看器模块（按键输入、模型变换、模型切换）
//!
//! # 使用示例
//!
//! ```no_run
//! use obj_viewer::geometry::loaders::load_mesh;
//! use std::path::Path;
//!
//! let mesh = load_mesh(Path::new("assets/input/cube.obj"))?;
//! println!("角点: {}, 三角形: {}", mesh.corner_count(), mesh.triangle_count());
//! # Ok::<(), obj_viewer::core::ViewerError>(())
//! ```

pub mod core;
pub mod geometry;
pub mod scene;
