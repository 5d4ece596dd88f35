//! Default text extraction: reads a source file as UTF-8 text.

use async_trait::async_trait;
use tracing::{debug, error};

use crate::contract::{ExtractError, Extractor, SourceFile};

/// Extractor for plain-text documents. Fails on IO errors and on files that
/// are not valid UTF-8 (binary documents need a different extractor).
pub struct PlainTextExtractor;

#[async_trait]
impl Extractor for PlainTextExtractor {
    async fn extract(&self, file: &SourceFile) -> Result<String, ExtractError> {
        match std::fs::read_to_string(&file.absolute_path) {
            Ok(text) => {
                debug!(
                    file = %file.relative_path.display(),
                    chars = text.chars().count(),
                    "Extracted text content"
                );
                Ok(text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                error!(file = %file.relative_path.display(), "File is not valid UTF-8");
                Err(format!(
                    "file '{}' is not valid UTF-8 text",
                    file.relative_path.display()
                )
                .into())
            }
            Err(e) => {
                error!(error = ?e, file = %file.relative_path.display(), "Failed to read file");
                Err(Box::new(e))
            }
        }
    }
}
