/// 面三角化
///
/// 以第一个角点为锚点做扇形三角化：k 个角点的面产生 k−2 个三角形
/// `(c0, cj, cj+1)`，保持文件声明的绕序。
///
/// 只对凸的平面多边形正确；凹多边形不做检测，会得到自相交或翻转的三角形。

use super::buffers::FixedBuffer;
use crate::core::error::MeshLoadError;

/// 扇形三角化迭代器
///
/// 少于 3 个角点时不产生任何三角形。
pub fn fan(corners: &[u32]) -> impl Iterator<Item = [u32; 3]> + '_ {
    let anchor = corners.first().copied();
    corners
        .windows(2)
        .skip(1)
        .filter_map(move |edge| anchor.map(|c0| [c0, edge[0], edge[1]]))
}

/// 三角化一个面并写入索引缓冲区，返回产生的三角形数量
pub fn triangulate_face(
    corners: &[u32],
    triangles: &mut FixedBuffer<u32>,
) -> Result<usize, MeshLoadError> {
    let mut emitted = 0;
    for triangle in fan(corners) {
        for index in triangle {
            triangles.push(index)?;
        }
        emitted += 1;
    }
    Ok(emitted)
}
