//! 场景模块
//!
//! 无窗口的模型查看器：按键输入、模型变换以及在多个模型之间循环切换。
//!
//! - `input`：按键状态
//! - `model`：模型及其世界变换
//! - `viewer`：查看器上下文（交互模式、当前模型、帮助面板）

pub mod input;
pub mod model;
pub mod viewer;

pub use input::{InputState, KeyCode};
pub use model::{Model, Transform};
pub use viewer::{Mode, ViewerState};
