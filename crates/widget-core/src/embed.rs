//! Embed snippets for placing the widget on a host page.

pub const DEFAULT_WIDGET_ID: &str = "chat-widget-123";
pub const DEFAULT_DOMAIN: &str = "https://example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedKind {
    Script,
    Iframe,
    Package,
}

impl EmbedKind {
    pub fn all() -> &'static [EmbedKind] {
        &[EmbedKind::Script, EmbedKind::Iframe, EmbedKind::Package]
    }

    pub fn label(&self) -> &str {
        match self {
            EmbedKind::Script => "Script Tag",
            EmbedKind::Iframe => "iFrame",
            EmbedKind::Package => "NPM Package",
        }
    }

    /// Tab name lookup; anything unknown shows the script tag
    pub fn from_tab(tab: &str) -> Self {
        match tab {
            "iframe" => EmbedKind::Iframe,
            "npm" => EmbedKind::Package,
            _ => EmbedKind::Script,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedCode {
    pub widget_id: String,
    pub domain: String,
}

impl Default for EmbedCode {
    fn default() -> Self {
        Self::new(DEFAULT_WIDGET_ID, DEFAULT_DOMAIN)
    }
}

impl EmbedCode {
    pub fn new(widget_id: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            widget_id: widget_id.into(),
            domain: domain.into(),
        }
    }

    pub fn script_tag(&self) -> String {
        format!(
            r#"<script src="{}/widget/{}.js" async></script>"#,
            self.domain, self.widget_id
        )
    }

    pub fn iframe_tag(&self) -> String {
        format!(
            r#"<iframe src="{}/widget/{}" width="350" height="500" frameborder="0"></iframe>"#,
            self.domain, self.widget_id
        )
    }

    pub fn package_snippet(&self) -> String {
        format!(
            "npm install @example/chat-widget\n\n\
             import {{ ChatWidget }} from '@example/chat-widget';\n\n\
             function App() {{\n  return <ChatWidget widgetId=\"{}\" />;\n}}",
            self.widget_id
        )
    }

    pub fn code_for(&self, kind: EmbedKind) -> String {
        match kind {
            EmbedKind::Script => self.script_tag(),
            EmbedKind::Iframe => self.iframe_tag(),
            EmbedKind::Package => self.package_snippet(),
        }
    }
}
