/// 行规范化
///
/// 把原始文本切成行，折叠行内连续空白、去掉首尾空白和 `#` 注释，
/// 并按首个关键字分类。计数阶段和填充阶段都只消费这里的结果，
/// 因此两遍扫描对每一行的分类必然一致。

/// OBJ 行关键字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `v x y z`
    Position,
    /// `vt u v`
    TexCoord,
    /// `vn x y z`
    Normal,
    /// `f r1 r2 ... rk`
    Face,
    /// `g`、`usemtl`、`usemap`、`mtllib`、`vt1`、`vt2` 以及其他未识别的关键字
    Ignored,
}

impl Keyword {
    /// 按行首 token 分类
    pub fn classify(token: &str) -> Self {
        match token {
            "v" => Keyword::Position,
            "vt" => Keyword::TexCoord,
            "vn" => Keyword::Normal,
            "f" => Keyword::Face,
            _ => Keyword::Ignored,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Position => "v",
            Keyword::TexCoord => "vt",
            Keyword::Normal => "vn",
            Keyword::Face => "f",
            Keyword::Ignored => "ignored",
        }
    }
}

/// 一条规范化后的非空行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjLine<'a> {
    /// 源文件中的行号（从 1 开始）
    pub number: usize,
    /// 行首 token 原文
    pub head: &'a str,
    /// 分类结果
    pub keyword: Keyword,
    /// 关键字之后的 token
    pub args: Vec<&'a str>,
}

impl ObjLine<'_> {
    /// 重新拼接成单空格分隔的文本
    pub fn to_normalized_string(&self) -> String {
        let mut text = String::from(self.head);
        for arg in &self.args {
            text.push(' ');
            text.push_str(arg);
        }
        text
    }
}

/// 规范化整个文件文本
///
/// 空行与纯注释行被丢弃；其余行（包括被忽略的指令）按出现顺序保留。
/// 文件开头的 UTF-8 BOM 会被去掉，否则第一行的关键字无法识别。
pub fn normalize(text: &str) -> Vec<ObjLine<'_>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    text.lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let content = raw.split('#').next().unwrap_or_default();
            let mut tokens = content.split_whitespace();
            let head = tokens.next()?;

            Some(ObjLine {
                number: index + 1,
                head,
                keyword: Keyword::classify(head),
                args: tokens.collect(),
            })
        })
        .collect()
}
