/// 填充阶段
///
/// 第二遍扫描同一组规范化行，解析数值并按出现顺序写入预分配的缓冲区；
/// 每遇到一个面，就把它的角点交给三角化器。

use super::buffers::ObjBuffers;
use super::lines::{Keyword, ObjLine};
use super::triangulate::triangulate_face;
use crate::core::error::{FormatError, MeshLoadError};

/// 面中的一个顶点引用
///
/// 所有索引都已转换为 0 起始；纹理坐标和法线可以缺省。
/// 是否越界由组装阶段检查。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVertexRef {
    pub position: u32,
    pub texcoord: Option<u32>,
    pub normal: Option<u32>,
}

/// 解析面引用时已读入的各类元素数量，用于解析负数（相对）索引
#[derive(Debug, Clone, Copy)]
struct Declared {
    positions: usize,
    uvs: usize,
    normals: usize,
}

/// 执行填充阶段
pub fn fill(lines: &[ObjLine<'_>], buffers: &mut ObjBuffers) -> Result<(), MeshLoadError> {
    let mut face_corners: Vec<u32> = Vec::new();

    for line in lines {
        match line.keyword {
            Keyword::Position => {
                buffers.positions.push(parse_floats(line)?)?;
            }
            Keyword::TexCoord => {
                buffers.uvs.push(parse_floats(line)?)?;
            }
            Keyword::Normal => {
                buffers.normals.push(parse_floats(line)?)?;
            }
            Keyword::Face => {
                let declared = Declared {
                    positions: buffers.positions.len(),
                    uvs: buffers.uvs.len(),
                    normals: buffers.normals.len(),
                };

                face_corners.clear();
                for token in &line.args {
                    let reference = parse_face_vertex(token, line.number, declared)?;
                    let corner = buffers.corners.push(reference)?;
                    let corner = u32::try_from(corner).map_err(|_| {
                        MeshLoadError::InternalConsistency(format!(
                            "corner {} exceeds the 32-bit index range",
                            corner
                        ))
                    })?;
                    face_corners.push(corner);
                }

                triangulate_face(&face_corners, &mut buffers.triangles)?;
            }
            Keyword::Ignored => {}
        }
    }

    Ok(())
}

/// 解析数据行的前 N 个浮点分量，多余的分量被忽略
fn parse_floats<const N: usize>(line: &ObjLine<'_>) -> Result<[f32; N], FormatError> {
    if line.args.len() < N {
        return Err(FormatError::MissingComponent {
            line: line.number,
            keyword: line.keyword.as_str(),
            expected: N,
            found: line.args.len(),
        });
    }

    let mut values = [0.0f32; N];
    for (value, token) in values.iter_mut().zip(&line.args) {
        *value = token.parse().map_err(|_| FormatError::InvalidNumber {
            line: line.number,
            token: token.to_string(),
        })?;
    }
    Ok(values)
}

/// 解析 `pos[/uv][/normal]` 形式的面顶点引用
fn parse_face_vertex(
    token: &str,
    line: usize,
    declared: Declared,
) -> Result<FaceVertexRef, FormatError> {
    let mut parts = token.splitn(3, '/');

    let position = parse_index(parts.next().unwrap_or_default(), line, declared.positions)?;
    let texcoord = parts
        .next()
        .filter(|part| !part.is_empty())
        .map(|part| parse_index(part, line, declared.uvs))
        .transpose()?;
    let normal = parts
        .next()
        .filter(|part| !part.is_empty())
        .map(|part| parse_index(part, line, declared.normals))
        .transpose()?;

    Ok(FaceVertexRef {
        position,
        texcoord,
        normal,
    })
}

/// 把一个 OBJ 索引转换为 0 起始索引
///
/// 正数从 1 开始计数；负数相对于当前已声明的元素数量，`-1` 表示最近的一个。
fn parse_index(token: &str, line: usize, declared: usize) -> Result<u32, FormatError> {
    let invalid = || FormatError::InvalidNumber {
        line,
        token: token.to_string(),
    };
    let value: i64 = token.parse().map_err(|_| invalid())?;

    match value {
        0 => Err(FormatError::ZeroIndex { line }),
        v if v > 0 => u32::try_from(v - 1).map_err(|_| invalid()),
        v => usize::try_from(v.unsigned_abs())
            .ok()
            .filter(|&back| back <= declared)
            .and_then(|back| u32::try_from(declared - back).ok())
            .ok_or(FormatError::RelativeIndexOutOfRange { line, index: v }),
    }
}
