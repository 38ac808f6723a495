/// 模型加载器模块
///
/// 提供统一的模型加载接口和具体格式的实现。
///
/// # 支持的格式
///
/// - **OBJ**: Wavefront OBJ 格式（自带解析器，见 `obj` 子模块）
///
/// # 使用示例
///
/// ```rust,no_run
/// use obj_viewer::geometry::loaders::load_mesh;
/// use std::path::Path;
///
/// let mesh = load_mesh(Path::new("model.obj"))?;
/// # Ok::<(), obj_viewer::core::ViewerError>(())
/// ```
use crate::core::error::{MeshLoadError, Result};
use crate::geometry::mesh::Mesh;
use std::path::Path;

pub mod obj;

pub use obj::ObjLoader;

/// 网格加载器 trait
///
/// 定义统一的加载接口，所有格式的加载器都实现此 trait。
///
/// # 实现要求
///
/// - 加载器应该是无状态的（使用静态方法）
/// - 返回 CPU 侧的 `Mesh`，不涉及 GPU 资源
/// - 失败时返回错误，不返回部分结果
pub trait MeshLoader {
    /// 从已解析好的文件路径加载网格
    ///
    /// # 错误
    ///
    /// - 文件不存在或无法读取
    /// - 文件格式错误
    fn load_from_file(path: &Path) -> Result<Mesh>;

    /// 从内存数据加载网格
    fn load_from_memory(data: &[u8]) -> Result<Mesh>;

    /// 支持的文件扩展名列表（小写，不含点号）
    fn supported_extensions() -> &'static [&'static str];
}

/// 根据文件扩展名选择合适的加载器
pub fn load_mesh(path: &Path) -> Result<Mesh> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| {
            MeshLoadError::UnsupportedFormat(format!(
                "无法确定文件扩展名: {}",
                path.display()
            ))
        })?;

    if ObjLoader::supported_extensions().contains(&extension.as_str()) {
        ObjLoader::load_from_file(path)
    } else {
        Err(MeshLoadError::UnsupportedFormat(format!("不支持的文件格式: .{}", extension)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ViewerError;

    #[test]
    fn test_supported_extensions() {
        assert!(ObjLoader::supported_extensions().contains(&"obj"));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = load_mesh(Path::new("model.fbx"));
        assert!(matches!(
            result,
            Err(ViewerError::MeshLoading(MeshLoadError::UnsupportedFormat(_)))
        ));

        assert!(load_mesh(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_bundled_assets() {
        let input = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/input");

        let cube = load_mesh(&input.join("cube.obj")).unwrap();
        assert_eq!(cube.corner_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.normals[0], [0.0, 0.0, -1.0]);
        assert_eq!(cube.uvs[1], [0.0, 1.0]);

        let pyramid = load_mesh(&input.join("pyramid.obj")).unwrap();
        assert_eq!(pyramid.corner_count(), 16);
        assert_eq!(pyramid.triangle_count(), 6);
        assert!(pyramid.normals.iter().all(|n| *n == [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_dispatch_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("TRI.OBJ");
        std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        let mesh = load_mesh(&path).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }
}
