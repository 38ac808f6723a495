/// 计数阶段
///
/// 第一遍扫描：只统计各类元素的精确数量，不解析任何数值，
/// 结果用于一次性分配大小恰好的缓冲区。

use super::lines::{Keyword, ObjLine};
use crate::core::error::FormatError;

/// 各类元素的数量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjCounts {
    /// `v` 行数
    pub positions: usize,
    /// `vt` 行数
    pub uvs: usize,
    /// `vn` 行数
    pub normals: usize,
    /// 所有面的顶点引用总数（角点数）
    pub corners: usize,
    /// 三角形索引总数，即 Σ 3·(k−2)
    pub triangle_indices: usize,
}

impl ObjCounts {
    /// 统计规范化后的行
    ///
    /// 少于 3 个顶点引用的面是格式错误。
    pub fn scan(lines: &[ObjLine<'_>]) -> Result<Self, FormatError> {
        let mut counts = Self::default();

        for line in lines {
            match line.keyword {
                Keyword::Position => counts.positions += 1,
                Keyword::TexCoord => counts.uvs += 1,
                Keyword::Normal => counts.normals += 1,
                Keyword::Face => {
                    let k = line.args.len();
                    if k < 3 {
                        return Err(FormatError::DegenerateFace {
                            line: line.number,
                            corners: k,
                        });
                    }
                    counts.corners += k;
                    counts.triangle_indices += 3 * (k - 2);
                }
                Keyword::Ignored => {}
            }
        }

        Ok(counts)
    }

    /// 三角形数量
    #[inline]
    pub fn triangles(&self) -> usize {
        self.triangle_indices / 3
    }
}
