/// 缓冲区分配
///
/// 按计数阶段的结果一次性分配定长缓冲区。填充阶段只能在预留范围内追加，
/// 任何越界写入或最终数量不符都视为内部一致性错误，而不是扩容或截断。

use super::counts::ObjCounts;
use super::fill::FaceVertexRef;
use crate::core::error::MeshLoadError;

/// 定长缓冲区
///
/// 容量在创建时确定，`push` 超出容量返回错误，
/// `finish` 要求写满预留的数量。
#[derive(Debug)]
pub struct FixedBuffer<T> {
    label: &'static str,
    reserved: usize,
    items: Vec<T>,
}

impl<T> FixedBuffer<T> {
    pub fn with_reserved(label: &'static str, reserved: usize) -> Self {
        Self {
            label,
            reserved,
            items: Vec::with_capacity(reserved),
        }
    }

    /// 追加一个元素，返回它的索引
    pub fn push(&mut self, item: T) -> Result<usize, MeshLoadError> {
        let index = self.items.len();
        if index >= self.reserved {
            return Err(MeshLoadError::InternalConsistency(format!(
                "{} buffer overflow: {} reserved by the counting pass",
                self.label, self.reserved
            )));
        }
        self.items.push(item);
        Ok(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn reserved(&self) -> usize {
        self.reserved
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// 取出数据，要求写入数量与预留数量完全一致
    pub fn finish(self) -> Result<Vec<T>, MeshLoadError> {
        if self.items.len() != self.reserved {
            return Err(MeshLoadError::InternalConsistency(format!(
                "{} buffer holds {} elements, counting pass reserved {}",
                self.label,
                self.items.len(),
                self.reserved
            )));
        }
        Ok(self.items)
    }
}

/// 解析过程中使用的全部缓冲区
#[derive(Debug)]
pub struct ObjBuffers {
    pub positions: FixedBuffer<[f32; 3]>,
    pub uvs: FixedBuffer<[f32; 2]>,
    pub normals: FixedBuffer<[f32; 3]>,
    /// 按全局角点顺序排列的面顶点引用
    pub corners: FixedBuffer<FaceVertexRef>,
    pub triangles: FixedBuffer<u32>,
}

impl ObjBuffers {
    /// 按计数结果分配
    ///
    /// 角点用 `u32` 索引，超过 `u32` 范围的网格无法表示。
    pub fn allocate(counts: &ObjCounts) -> Result<Self, MeshLoadError> {
        if u32::try_from(counts.corners).is_err() {
            return Err(MeshLoadError::UnsupportedFormat(format!(
                "{} face corners exceed the 32-bit index range",
                counts.corners
            )));
        }

        Ok(Self {
            positions: FixedBuffer::with_reserved("position", counts.positions),
            uvs: FixedBuffer::with_reserved("texture coordinate", counts.uvs),
            normals: FixedBuffer::with_reserved("normal", counts.normals),
            corners: FixedBuffer::with_reserved("corner", counts.corners),
            triangles: FixedBuffer::with_reserved("triangle index", counts.triangle_indices),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_exact_sizes() {
        let counts = ObjCounts {
            positions: 8,
            uvs: 4,
            normals: 6,
            corners: 24,
            triangle_indices: 36,
        };
        let buffers = ObjBuffers::allocate(&counts).unwrap();

        assert_eq!(buffers.positions.reserved(), 8);
        assert_eq!(buffers.uvs.reserved(), 4);
        assert_eq!(buffers.normals.reserved(), 6);
        assert_eq!(buffers.corners.reserved(), 24);
        assert_eq!(buffers.triangles.reserved(), 36);
        assert!(buffers.positions.is_empty());
    }

    #[test]
    fn test_push_past_reserved_is_internal_error() {
        let mut buffer = FixedBuffer::with_reserved("position", 1);
        assert_eq!(buffer.push([0.0f32; 3]).unwrap(), 0);

        let err = buffer.push([1.0; 3]).unwrap_err();
        assert!(matches!(err, MeshLoadError::InternalConsistency(_)));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_finish_requires_exact_fill() {
        let mut buffer = FixedBuffer::with_reserved("triangle index", 3);
        buffer.push(0u32).unwrap();
        assert!(matches!(
            buffer.finish(),
            Err(MeshLoadError::InternalConsistency(_))
        ));

        let mut buffer = FixedBuffer::with_reserved("triangle index", 2);
        buffer.push(4u32).unwrap();
        buffer.push(5u32).unwrap();
        assert_eq!(buffer.as_slice(), &[4, 5]);
        assert_eq!(buffer.finish().unwrap(), vec![4, 5]);
    }
}
