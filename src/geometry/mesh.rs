/// 网格数据结构模块
///
/// 定义加载器输出的三角网格：按角点展开的平行属性数组加三角形索引表。

use super::vertex::Vertex;

/// 按角点展开的三角网格
///
/// `positions`、`uvs`、`normals` 三个数组长度相同，第 i 项描述第 i 个角点
/// （某个面中某一次顶点引用）。`triangles` 中每 3 个索引组成一个三角形，
/// 索引直接指向角点数组，没有额外的间接层。
///
/// 几何上相同的角点不会被合并，包围盒与顶点焊接由渲染器负责。
///
/// # 示例
///
/// ```rust
/// use obj_viewer::geometry::Mesh;
///
/// let mesh = Mesh {
///     positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
///     uvs: vec![[0.0, 0.0]; 3],
///     normals: vec![[0.0, 0.0, 1.0]; 3],
///     triangles: vec![0, 1, 2],
///     name: Some("Triangle".to_string()),
/// };
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// 每个角点的位置
    pub positions: Vec<[f32; 3]>,

    /// 每个角点的纹理坐标
    pub uvs: Vec<[f32; 2]>,

    /// 每个角点的法线
    pub normals: Vec<[f32; 3]>,

    /// 三角形索引，长度始终是 3 的倍数
    pub triangles: Vec<u32>,

    /// 网格名称（通常取自文件名）
    pub name: Option<String>,
}

impl Mesh {
    /// 创建一个空网格
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置网格名称
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// 角点数量
    #[inline]
    pub fn corner_count(&self) -> usize {
        self.positions.len()
    }

    /// 索引数量
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangles.len()
    }

    /// 三角形数量
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// 第 `index` 个三角形的三个角点索引
    pub fn triangle(&self, index: usize) -> Option<[u32; 3]> {
        let start = index.checked_mul(3)?;
        match self.triangles.get(start..start.checked_add(3)?)? {
            &[a, b, c] => Some([a, b, c]),
            _ => None,
        }
    }

    /// 迭代所有三角形
    pub fn iter_triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.triangles
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// 生成交错顶点数组，顺序与角点一致
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((&position, &normal), &texcoord)| Vertex::new(position, normal, texcoord))
            .collect()
    }

    /// 交错顶点数组的原始字节，用于上传到 GPU 缓冲区
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }

    /// 三角形索引的原始字节
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// 验证网格数据的有效性
    ///
    /// 检查：
    /// - 三个角点属性数组长度一致
    /// - 索引数量是3的倍数
    /// - 所有索引都在角点范围内
    pub fn validate(&self) -> Result<(), String> {
        let corners = self.corner_count();
        if self.uvs.len() != corners || self.normals.len() != corners {
            return Err(format!(
                "角点属性数组长度不一致: positions={}, uvs={}, normals={}",
                corners,
                self.uvs.len(),
                self.normals.len()
            ));
        }

        if self.triangles.len() % 3 != 0 {
            return Err(format!(
                "索引数量必须是3的倍数，当前为: {}",
                self.triangles.len()
            ));
        }

        if let Some(i) = self
            .triangles
            .iter()
            .position(|&index| index as usize >= corners)
        {
            return Err(format!(
                "索引 {} 处的值 {} 超出角点范围 (共 {} 个)",
                i, self.triangles[i], corners
            ));
        }

        Ok(())
    }
}
