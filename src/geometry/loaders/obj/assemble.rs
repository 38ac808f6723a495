/// 网格组装
///
/// 按全局角点顺序把每个面顶点引用解析为具体的位置、纹理坐标和法线，
/// 得到按角点展开的平行数组。缺省的纹理坐标为 (0, 0)，缺省的法线为零向量。

use super::buffers::ObjBuffers;
use crate::core::error::{FormatError, MeshLoadError};
use crate::geometry::mesh::Mesh;

/// 组装最终网格
///
/// 先确认每个缓冲区都恰好写满，再解析引用；任何越界引用都会中止组装。
pub fn assemble(buffers: ObjBuffers) -> Result<Mesh, MeshLoadError> {
    let positions = buffers.positions.finish()?;
    let uvs = buffers.uvs.finish()?;
    let normals = buffers.normals.finish()?;
    let corners = buffers.corners.finish()?;
    let triangles = buffers.triangles.finish()?;

    let mut mesh = Mesh {
        positions: Vec::with_capacity(corners.len()),
        uvs: Vec::with_capacity(corners.len()),
        normals: Vec::with_capacity(corners.len()),
        triangles,
        name: None,
    };

    for corner in &corners {
        mesh.positions
            .push(*lookup(&positions, corner.position, "position")?);

        mesh.uvs.push(match corner.texcoord {
            Some(index) => *lookup(&uvs, index, "texture coordinate")?,
            None => [0.0, 0.0],
        });

        mesh.normals.push(match corner.normal {
            Some(index) => *lookup(&normals, index, "normal")?,
            None => [0.0, 0.0, 0.0],
        });
    }

    Ok(mesh)
}

fn lookup<'a, T>(items: &'a [T], index: u32, attribute: &'static str) -> Result<&'a T, FormatError> {
    items
        .get(index as usize)
        .ok_or(FormatError::IndexOutOfRange {
            attribute,
            // 报告 OBJ 文件中的 1 起始索引
            index: u64::from(index) + 1,
            count: items.len(),
        })
}
