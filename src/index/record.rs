use serde::Deserialize;

/// One entry of the generator's `index.json` payload. Records are produced
/// at documentation-build time and are read-only here.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRecord {
    pub sid: String,
    pub name: String,
    pub decl: String,
    #[serde(rename = "type")]
    pub kind: i64,
}

/// Symbol kind encoded as an integer in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Method,
    Function,
    Struct,
    Class,
    Union,
    Enum,
    EnumValue,
    Unknown,
}

impl EntityKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => EntityKind::Method,
            1 => EntityKind::Function,
            2 => EntityKind::Struct,
            3 => EntityKind::Class,
            4 => EntityKind::Union,
            5 => EntityKind::Enum,
            6 => EntityKind::EnumValue,
            _ => EntityKind::Unknown,
        }
    }

    /// Tag text shown next to a result. Unknown codes render with an empty
    /// tag rather than failing.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Method => "method",
            EntityKind::Function => "function",
            EntityKind::Struct => "struct",
            EntityKind::Class => "class",
            EntityKind::Union => "union",
            EntityKind::Enum => "enum",
            EntityKind::EnumValue => "enum val",
            EntityKind::Unknown => "",
        }
    }

    /// Relative page path for a symbol, following the generator's naming
    /// convention. Method sids already embed `"<parent>.html#<id>"`, so no
    /// `.html` suffix is appended for them.
    pub fn page(self, sid: &str) -> Option<String> {
        match self {
            EntityKind::Method => Some(format!("r{sid}")),
            EntityKind::Function => Some(format!("f{sid}.html")),
            EntityKind::Struct | EntityKind::Class | EntityKind::Union => {
                Some(format!("r{sid}.html"))
            }
            EntityKind::Enum | EntityKind::EnumValue => Some(format!("e{sid}.html")),
            EntityKind::Unknown => None,
        }
    }
}
