//! 错误处理模块
//!
//! 定义了整个 crate 使用的统一错误类型，使用 `thiserror` 提供友好的错误消息。
//!
//! # 错误分类
//!
//! 网格加载遵循"全有或全无"原则：任何阶段出错都会中止整个加载，
//! 不会返回部分网格。
//!
//! - **IO 错误**：文件不存在或不可读（`MeshLoadError::Io`）
//! - **格式错误**：数值非法、面少于 3 个顶点、索引越界（`MeshLoadError::Format`）
//! - **内部一致性错误**：填充阶段写入的数据量与计数阶段预留的不一致，
//!   表示程序缺陷而非输入问题（`MeshLoadError::InternalConsistency`）

use std::path::PathBuf;
use thiserror::Error;

/// crate 统一的 Result 类型
pub type Result<T> = std::result::Result<T, ViewerError>;

/// 顶层错误类型
#[derive(Debug, Error)]
pub enum ViewerError {
    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// 网格加载错误
    #[error("Mesh loading error: {0}")]
    MeshLoading(#[from] MeshLoadError),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 初始化错误
    #[error("Initialization error: {0}")]
    Initialization(String),
}

/// 配置相关的错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件无法读取
    #[error("Config file not readable: {}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件解析或序列化失败
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// 配置值无效
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 网格加载相关的错误
#[derive(Debug, Error)]
pub enum MeshLoadError {
    /// 文件不存在或读取失败
    #[error("Failed to read mesh file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 不支持的文件格式
    #[error("Unsupported mesh format: {0}")]
    UnsupportedFormat(String),

    /// 输入内容格式错误
    #[error("Malformed mesh data: {0}")]
    Format(#[from] FormatError),

    /// 计数阶段与填充阶段不一致（程序缺陷）
    #[error("Internal consistency violation: {0}")]
    InternalConsistency(String),
}

/// OBJ 文本格式错误
///
/// `line` 均为 1 起始的源文件行号。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// 期望数字的位置出现了非数字内容
    #[error("line {line}: '{token}' is not a valid number")]
    InvalidNumber { line: usize, token: String },

    /// 数据行的分量不足
    #[error("line {line}: '{keyword}' expects {expected} components, found {found}")]
    MissingComponent {
        line: usize,
        keyword: &'static str,
        expected: usize,
        found: usize,
    },

    /// 面的顶点引用少于 3 个
    #[error("line {line}: face has {corners} vertex references, at least 3 are required")]
    DegenerateFace { line: usize, corners: usize },

    /// OBJ 索引从 1 开始，0 不是合法引用
    #[error("line {line}: index 0 is not a valid OBJ reference")]
    ZeroIndex { line: usize },

    /// 负数（相对）索引指向了第一个元素之前
    #[error("line {line}: relative index {index} reaches before the first element")]
    RelativeIndexOutOfRange { line: usize, index: i64 },

    /// 面引用的属性索引超出已声明的范围
    #[error("{attribute} index {index} is out of range (declared: {count})")]
    IndexOutOfRange {
        attribute: &'static str,
        index: u64,
        count: usize,
    },

    /// 文件内容不是合法的 UTF-8 文本
    #[error("mesh file is not valid UTF-8 text")]
    InvalidUtf8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_converts_to_top_level() {
        let err: ViewerError = MeshLoadError::from(FormatError::ZeroIndex { line: 4 }).into();
        assert!(matches!(
            err,
            ViewerError::MeshLoading(MeshLoadError::Format(FormatError::ZeroIndex { line: 4 }))
        ));
    }

    #[test]
    fn test_error_messages_carry_context() {
        let err = FormatError::InvalidNumber {
            line: 7,
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "line 7: 'abc' is not a valid number");

        let err = MeshLoadError::Io {
            path: PathBuf::from("missing.obj"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.obj"));
    }
}
