/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// MIME type of the stats package attachment
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Body of a `models/{model}:generateContent` call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateContentRequest {
    /// Conversation turns, a single user turn here
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// One user turn carrying the PDF inline followed by the prompt
    pub fn pdf_with_prompt(pdf: &[u8], prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: PDF_MIME_TYPE.to_string(),
                            data: STANDARD.encode(pdf),
                        }),
                    },
                    Part::text(prompt),
                ],
            }],
        }
    }
}

/// A conversation turn, shared by requests and responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Content {
    /// `user` or `model`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Turn payload
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Either text or inline binary data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Binary payload, base64 encoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// Text only part
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }
}

/// Base64 encoded attachment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of `data`
    pub mime_type: String,
    /// Base64 payload
    pub data: String,
}
