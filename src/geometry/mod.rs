/// 几何体加载和处理模块
///
/// 提供3D模型加载功能，把模型文件转换为可以直接交给渲染器的三角网格。
///
/// # 模块结构
///
/// - `vertex`: 交错顶点结构定义
/// - `mesh`: 按角点展开的网格数据
/// - `loaders`: 各种格式的模型加载器
///
/// # 架构设计
///
/// ```text
/// 文件 (OBJ)
///     ↓
/// Loader (ObjLoader)
///     ↓
/// Mesh (CPU侧数据)
///     ↓
/// 渲染器（包围盒、顶点焊接、上传GPU）
/// ```

pub mod loaders;
pub mod mesh;
pub mod vertex;

// 重新导出常用类型
pub use mesh::Mesh;
pub use vertex::Vertex;
