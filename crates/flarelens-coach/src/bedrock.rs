//! Bedrock-backed collaborators via the Converse API.
//!
//! [`BedrockGenerator`] is the production implementation of both
//! [`TextGeneration`] and [`VisionAnalysis`]. Every SDK failure maps to
//! [`CollaboratorError::Unavailable`] — the pipeline treats the collaborator
//! as a black box that is either up or down.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, ImageBlock, ImageFormat, ImageSource, Message,
    SystemContentBlock,
};
use tracing::info;

use crate::error::CollaboratorError;
use crate::{TextGeneration, VisionAnalysis};

#[derive(Debug, Clone)]
pub struct BedrockGenerator {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockGenerator {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: aws_sdk_bedrockruntime::Client::new(config),
            model_id: model_id.into(),
        }
    }

    async fn converse(
        &self,
        system_prompt: &str,
        message: Message,
    ) -> Result<String, CollaboratorError> {
        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system_prompt.to_string()))
            .messages(message)
            .send()
            .await
            .map_err(|e| {
                CollaboratorError::Unavailable(e.into_service_error().to_string())
            })?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| {
                CollaboratorError::ResponseParse("no message in response".to_string())
            })?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(t) = block {
                    Some(t.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}

impl TextGeneration for BedrockGenerator {
    async fn generate(
        &self,
        system_prompt: &str,
        prompt: &str,
    ) -> Result<String, CollaboratorError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| CollaboratorError::Unavailable(e.to_string()))?;

        info!(model_id = %self.model_id, "invoking text generation");
        self.converse(system_prompt, message).await
    }
}

impl VisionAnalysis for BedrockGenerator {
    async fn analyze(&self, image: &[u8]) -> Result<String, CollaboratorError> {
        let format = sniff_image_format(image).ok_or_else(|| {
            CollaboratorError::ResponseParse("unrecognized image format".to_string())
        })?;

        let image_block = ImageBlock::builder()
            .format(format)
            .source(ImageSource::Bytes(aws_smithy_types::Blob::new(image)))
            .build()
            .map_err(|e| CollaboratorError::Unavailable(e.to_string()))?;

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Image(image_block))
            .content(ContentBlock::Text(
                "Screen this rehab session frame.".to_string(),
            ))
            .build()
            .map_err(|e| CollaboratorError::Unavailable(e.to_string()))?;

        info!(model_id = %self.model_id, bytes = image.len(), "invoking vision screening");
        let label = self
            .converse(crate::prompts::VISION_SYSTEM_PROMPT, message)
            .await?;
        Ok(label.trim().to_lowercase())
    }
}

/// Detect the image format from its magic bytes.
fn sniff_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        Some(ImageFormat::Png)
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some(ImageFormat::Jpeg)
    } else if bytes.starts_with(b"RIFF") && bytes.get(8..12) == Some(&b"WEBP"[..]) {
        Some(ImageFormat::Webp)
    } else if bytes.starts_with(b"GIF8") {
        Some(ImageFormat::Gif)
    } else {
        None
    }
}
