use crate::constants::MAX_EXPIRY_YEARS;
use crate::content::LabelInputs;
use crate::context::SheetContext;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the form holds: label inputs plus typeface selection
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetOptions {
    pub label: LabelInputs,
    pub render: RenderConfig,
}

impl SheetOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LabelError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LabelError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Check the input-boundary rules the content builder relies on
    pub fn validate(&self, context: &SheetContext) -> Result<()> {
        for (i, line) in self.label.custom_lines.iter().enumerate() {
            // A line break would split one line into several in the PDF
            if line.chars().any(char::is_control) {
                return Err(LabelError::Config(format!(
                    "Custom line {} contains control characters",
                    i + 1
                )));
            }
            let len = line.chars().count();
            if len > context.max_chars {
                return Err(LabelError::Config(format!(
                    "Custom line {} is {} characters long (max {})",
                    i + 1,
                    len,
                    context.max_chars
                )));
            }
        }

        if self.label.expiry_years > MAX_EXPIRY_YEARS {
            return Err(LabelError::Config(format!(
                "Expiry offset of {} years exceeds {}",
                self.label.expiry_years, MAX_EXPIRY_YEARS
            )));
        }

        Ok(())
    }
}
