/// OBJ 文件加载器
///
/// 自带的 Wavefront OBJ 解析流水线，把文本转换为按角点展开的三角网格：
///
/// ```text
/// 原始文本
///     ↓ lines::normalize       行规范化 + 关键字分类
///     ↓ ObjCounts::scan        第一遍：精确计数
///     ↓ ObjBuffers::allocate   按计数分配定长缓冲区
///     ↓ fill::fill             第二遍：解析数值、记录面引用（交错调用 triangulate）
///     ↓ assemble::assemble     解析引用，生成平行数组
/// Mesh
/// ```
///
/// 解析器不持有任何全局状态，不同文件可以在不同线程上并发加载。
use super::MeshLoader;
use crate::core::error::{FormatError, MeshLoadError, Result};
use crate::geometry::mesh::Mesh;
use std::path::Path;

pub mod assemble;
pub mod buffers;
pub mod counts;
pub mod fill;
pub mod lines;
pub mod triangulate;

pub use counts::ObjCounts;
pub use fill::FaceVertexRef;

/// OBJ 格式加载器
///
/// 支持 `v`、`vt`、`vn`、`f` 四种数据行，其余指令（`g`、`usemtl`、`mtllib` 等）被忽略。
/// 不重建法线、不合并重复顶点、不解析材质。
///
/// # 使用示例
///
/// ```rust,no_run
/// use obj_viewer::geometry::loaders::{MeshLoader, ObjLoader};
/// use std::path::Path;
///
/// let mesh = ObjLoader::load_from_file(Path::new("model.obj"))?;
/// println!("{} 个角点, {} 个三角形", mesh.corner_count(), mesh.triangle_count());
/// # Ok::<(), obj_viewer::core::ViewerError>(())
/// ```
pub struct ObjLoader;

impl MeshLoader for ObjLoader {
    fn load_from_file(path: &Path) -> Result<Mesh> {
        let bytes = std::fs::read(path).map_err(|source| MeshLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut mesh = parse_obj_bytes(&bytes)?;
        mesh.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string);

        tracing::info!(
            "成功加载 OBJ 文件 {}: {} 个角点, {} 个三角形",
            path.display(),
            mesh.corner_count(),
            mesh.triangle_count()
        );

        Ok(mesh)
    }

    fn load_from_memory(data: &[u8]) -> Result<Mesh> {
        Ok(parse_obj_bytes(data)?)
    }

    fn supported_extensions() -> &'static [&'static str] {
        &["obj"]
    }
}

/// 解析 OBJ 字节内容
pub fn parse_obj_bytes(data: &[u8]) -> std::result::Result<Mesh, MeshLoadError> {
    let text = std::str::from_utf8(data).map_err(|_| FormatError::InvalidUtf8)?;
    parse_obj(text)
}

/// 解析 OBJ 文本
///
/// 全有或全无：任何阶段失败都直接返回错误，不会产生部分网格。
pub fn parse_obj(text: &str) -> std::result::Result<Mesh, MeshLoadError> {
    let lines = lines::normalize(text);

    let counts = ObjCounts::scan(&lines)?;
    tracing::debug!(
        positions = counts.positions,
        uvs = counts.uvs,
        normals = counts.normals,
        corners = counts.corners,
        triangles = counts.triangles(),
        "OBJ 计数完成"
    );

    let mut buffers = buffers::ObjBuffers::allocate(&counts)?;
    fill::fill(&lines, &mut buffers)?;

    let mesh = assemble::assemble(buffers)?;
    tracing::debug!(
        corners = mesh.corner_count(),
        triangles = mesh.triangle_count(),
        "OBJ 网格组装完成"
    );

    Ok(mesh)
}
