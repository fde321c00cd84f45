//! User-facing message catalog (en/zh).
//!
//! Flow messages only; error details from the server are shown
//! verbatim and never translated.

use serde::{Deserialize, Serialize};

/// Display language, persisted in the user preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    /// Parse a language code; unknown codes yield `None`.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "zh" => Some(Lang::Zh),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }
}

/// Keys of the message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    NeedMode,
    Generating,
    GenerateSuccess,
    RequestFailed,
    Parsing,
    ParseEmpty,
    ComposeRequired,
    Applying,
    ApplyFailed,
    ServicesHeading,
    EnvVarsHeading,
    ColName,
    ColParsed,
    ColEditable,
    TokenIssued,
    ResumeHint,
    ArtifactsWritten,
    PreviewHeading,
}

/// Look up a message in the catalog.
pub fn text(lang: Lang, msg: Msg) -> &'static str {
    match lang {
        Lang::En => match msg {
            Msg::NeedMode => "select at least one deployment mode",
            Msg::Generating => "generating",
            Msg::GenerateSuccess => "configuration generated",
            Msg::RequestFailed => "request failed",
            Msg::Parsing => "parsing",
            Msg::ParseEmpty => "parsed, no services or environment variables recognised",
            Msg::ComposeRequired => "paste or pass a compose file first",
            Msg::Applying => "applying",
            Msg::ApplyFailed => "apply failed",
            Msg::ServicesHeading => "Services",
            Msg::EnvVarsHeading => "Environment variables",
            Msg::ColName => "name",
            Msg::ColParsed => "parsed default",
            Msg::ColEditable => "value",
            Msg::TokenIssued => "values accepted, one-time token issued",
            Msg::ResumeHint => "resume with: stackform generate --applied",
            Msg::ArtifactsWritten => "artifacts written",
            Msg::PreviewHeading => "Preview",
        },
        Lang::Zh => match msg {
            Msg::NeedMode => "请至少选择一种部署模式",
            Msg::Generating => "生成中",
            Msg::GenerateSuccess => "配置已生成",
            Msg::RequestFailed => "请求失败",
            Msg::Parsing => "解析中",
            Msg::ParseEmpty => "解析成功，未识别到服务或环境变量",
            Msg::ComposeRequired => "请先提供 compose 文件内容",
            Msg::Applying => "加载中",
            Msg::ApplyFailed => "加载失败",
            Msg::ServicesHeading => "服务",
            Msg::EnvVarsHeading => "环境变量",
            Msg::ColName => "名称",
            Msg::ColParsed => "解析的默认值",
            Msg::ColEditable => "数值",
            Msg::TokenIssued => "数值已接受，已生成一次性令牌",
            Msg::ResumeHint => "继续执行: stackform generate --applied",
            Msg::ArtifactsWritten => "配置文件已写入",
            Msg::PreviewHeading => "预览",
        },
    }
}
