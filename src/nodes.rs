use serde::{Deserialize, Serialize};

/// One node of a rich document.
///
/// Deserializes from the editor's JSON schema, discriminated by the `type`
/// field. The set is closed: the renderer matches exhaustively, so adding a
/// kind forces the projection code to handle it. Node kinds the editor may
/// emit but that this model does not understand collapse into [`Node::Unknown`]
/// and render as nothing, so one exotic node never takes down a whole
/// document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "root")]
    Root(RootNode),
    #[serde(rename = "paragraph")]
    Paragraph(ParagraphNode),
    #[serde(rename = "heading")]
    Heading(HeadingNode),
    #[serde(rename = "quote")]
    Quote(QuoteNode),
    #[serde(rename = "list")]
    List(ListNode),
    #[serde(rename = "listitem", alias = "list-item")]
    ListItem(ListItemNode),
    #[serde(rename = "link", alias = "autolink")]
    Link(LinkNode),
    #[serde(rename = "text")]
    Text(TextNode),
    #[serde(rename = "linebreak")]
    Linebreak,

    // --- Custom embed kinds (leaf nodes, no children) ---
    #[serde(rename = "image")]
    Image(ImageNode),
    #[serde(rename = "card")]
    Card(CardNode),
    #[serde(rename = "video")]
    Video(VideoNode),
    #[serde(rename = "thumbnail")]
    Thumbnail(ThumbnailNode),
    #[serde(rename = "callout")]
    Callout(CalloutNode),

    #[serde(other, rename = "unknown")]
    Unknown,
}

impl Node {
    /// The `type` discriminant as stored, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Paragraph(_) => "paragraph",
            Node::Heading(_) => "heading",
            Node::Quote(_) => "quote",
            Node::List(_) => "list",
            Node::ListItem(_) => "listitem",
            Node::Link(_) => "link",
            Node::Text(_) => "text",
            Node::Linebreak => "linebreak",
            Node::Image(_) => "image",
            Node::Card(_) => "card",
            Node::Video(_) => "video",
            Node::Thumbnail(_) => "thumbnail",
            Node::Callout(_) => "callout",
            Node::Unknown => "unknown",
        }
    }

    /// Child nodes, empty for leaves (text, linebreak, embeds).
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(n) => &n.children,
            Node::Paragraph(n) => &n.children,
            Node::Heading(n) => &n.children,
            Node::Quote(n) => &n.children,
            Node::List(n) => &n.children,
            Node::ListItem(n) => &n.children,
            Node::Link(n) => &n.children,
            _ => &[],
        }
    }
}

/// Root container of a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootNode {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Paragraph block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphNode {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Heading block, levels h1-h3
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingNode {
    #[serde(default)]
    pub tag: HeadingTag,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    H1,
    H2,
    H3,
}

impl Default for HeadingTag {
    fn default() -> Self {
        HeadingTag::H2
    }
}

impl HeadingTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
        }
    }
}

/// Block quote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteNode {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Ordered or unordered list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListNode {
    #[serde(rename = "listType", default)]
    pub list_type: ListType,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[serde(alias = "unordered")]
    Bullet,
    #[serde(alias = "ordered")]
    Number,
}

impl Default for ListType {
    fn default() -> Self {
        ListType::Bullet
    }
}

impl ListType {
    pub fn is_ordered(&self) -> bool {
        matches!(self, ListType::Number)
    }
}

/// List item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItemNode {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Inline link. The target URL is emitted as-is: content is authored by
/// trusted, authenticated users, so no protocol allow-listing is applied here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkNode {
    #[serde(default, alias = "href")]
    pub url: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Text run with a format bitmask
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub format: TextFormat,
}

/// Inline format flags, stored as the editor's bitmask integer.
/// Flags are orthogonal and combine freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextFormat(pub u32);

impl TextFormat {
    pub const BOLD: u32 = 1;
    pub const ITALIC: u32 = 2;
    pub const STRIKETHROUGH: u32 = 4;
    pub const UNDERLINE: u32 = 8;
    pub const CODE: u32 = 16;

    pub fn has(&self, flag: u32) -> bool {
        self.0 & flag != 0
    }

    pub fn is_bold(&self) -> bool {
        self.has(Self::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.has(Self::ITALIC)
    }

    pub fn is_strikethrough(&self) -> bool {
        self.has(Self::STRIKETHROUGH)
    }

    pub fn is_underline(&self) -> bool {
        self.has(Self::UNDERLINE)
    }

    pub fn is_code(&self) -> bool {
        self.has(Self::CODE)
    }
}

// ─── Embed attribute records ─────────────────────────────────────────────────

/// Standalone image with optional caption
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageNode {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Content card: title + body, optional image and call-to-action link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardNode {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<CardImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<CardLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardImage {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardLink {
    pub href: String,
    #[serde(default)]
    pub label: String,
}

/// Video player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoNode {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default)]
    pub autoplay: bool,
    #[serde(default = "default_true")]
    pub controls: bool,
    #[serde(rename = "loop", default)]
    pub loop_: bool,
    #[serde(default)]
    pub muted: bool,
}

fn default_true() -> bool {
    true
}

/// Small aligned image, optionally linked and sized
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailNode {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default)]
    pub align: ThumbnailAlign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailAlign {
    Left,
    Center,
    Right,
}

impl Default for ThumbnailAlign {
    fn default() -> Self {
        ThumbnailAlign::Left
    }
}

impl ThumbnailAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbnailAlign::Left => "left",
            ThumbnailAlign::Center => "center",
            ThumbnailAlign::Right => "right",
        }
    }
}

/// Callout box (info/warning/tip). Title falls back to "Note" at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalloutNode {
    #[serde(default)]
    pub variant: CalloutVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutVariant {
    Info,
    Warning,
    Tip,
}

impl Default for CalloutVariant {
    fn default() -> Self {
        CalloutVariant::Info
    }
}

impl CalloutVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalloutVariant::Info => "info",
            CalloutVariant::Warning => "warning",
            CalloutVariant::Tip => "tip",
        }
    }
}
