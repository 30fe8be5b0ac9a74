use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, LabelError>;

/// What the label grid shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LabelMode {
    /// Manufacture date only
    #[default]
    MfdOnly,
    /// Manufacture and expiry dates
    MfdExp,
    /// Manufacture date, expiry date and lot code
    MfdExpLot,
    /// Up to three free-text lines
    Custom,
}

impl LabelMode {
    pub const ALL: [LabelMode; 4] = [
        LabelMode::MfdOnly,
        LabelMode::MfdExp,
        LabelMode::MfdExpLot,
        LabelMode::Custom,
    ];

    pub fn includes_exp(self) -> bool {
        matches!(self, LabelMode::MfdExp | LabelMode::MfdExpLot)
    }

    pub fn includes_lot(self) -> bool {
        matches!(self, LabelMode::MfdExpLot)
    }

    pub fn is_custom(self) -> bool {
        matches!(self, LabelMode::Custom)
    }

    pub fn name(self) -> &'static str {
        match self {
            LabelMode::MfdOnly => "MFD",
            LabelMode::MfdExp => "MFD + EXP",
            LabelMode::MfdExpLot => "MFD + EXP + LOT",
            LabelMode::Custom => "Custom text",
        }
    }
}

/// Key of a structured label row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldKey {
    Mfd,
    Exp,
    Lot,
}

impl FieldKey {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Mfd => "MFD",
            FieldKey::Exp => "EXP",
            FieldKey::Lot => "LOT",
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub key: FieldKey,
    pub value: String,
}

impl FieldRow {
    pub fn new(key: FieldKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for FieldRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Content printed in every cell of the sheet.
///
/// Both variants may be empty; an empty sequence renders as a blank grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelContent {
    CustomLines(Vec<String>),
    FieldRows(Vec<FieldRow>),
}

impl Default for LabelContent {
    fn default() -> Self {
        LabelContent::FieldRows(Vec::new())
    }
}

impl LabelContent {
    pub fn is_custom(&self) -> bool {
        matches!(self, LabelContent::CustomLines(_))
    }

    /// Number of visible lines
    pub fn len(&self) -> usize {
        match self {
            LabelContent::CustomLines(lines) => lines.len(),
            LabelContent::FieldRows(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visible lines, one per row. Field rows read `KEY VALUE`.
    pub fn lines(&self) -> Vec<String> {
        match self {
            LabelContent::CustomLines(lines) => lines.clone(),
            LabelContent::FieldRows(rows) => rows
                .iter()
                .map(|row| format!("{} {}", row.key, row.value))
                .collect(),
        }
    }

    /// Full visible text of one label, lines separated by `\n`
    pub fn visible_text(&self) -> String {
        self.lines().join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FontFamily {
    #[default]
    Helvetica,
    Arial,
    Inter,
    Roboto,
    Sf,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Helvetica,
        FontFamily::Arial,
        FontFamily::Inter,
        FontFamily::Roboto,
        FontFamily::Sf,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontFamily::Helvetica => "helvetica",
            FontFamily::Arial => "arial",
            FontFamily::Inter => "inter",
            FontFamily::Roboto => "roboto",
            FontFamily::Sf => "sf",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Arial => "Arial",
            FontFamily::Inter => "Inter",
            FontFamily::Roboto => "Roboto",
            FontFamily::Sf => "SF Pro",
        }
    }

    pub fn css_class(self) -> String {
        format!("font-{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FontWeight {
    Regular,
    #[default]
    Semibold,
    Bold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 3] = [FontWeight::Regular, FontWeight::Semibold, FontWeight::Bold];

    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Regular => "regular",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FontWeight::Regular => "Regular",
            FontWeight::Semibold => "Semibold",
            FontWeight::Bold => "Bold",
        }
    }

    pub fn css_class(self) -> String {
        format!("fw-{}", self.as_str())
    }

    /// Numeric CSS weight
    pub fn css_weight(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// Typeface selection shared by the screen and PDF renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    pub font: FontFamily,
    pub weight: FontWeight,
}

impl RenderConfig {
    pub fn new(font: FontFamily, weight: FontWeight) -> Self {
        Self { font, weight }
    }
}
