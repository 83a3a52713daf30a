//! Decoding of the base64 media embedded in posts

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use tracing::warn;

/// Standard alphabet, with or without `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Kind declared by the server. Anything other than `"video"` renders as
    /// an image.
    pub fn from_declared(media_type: Option<&str>) -> Self {
        match media_type.map(|t| t.trim().to_ascii_lowercase()) {
            Some(t) if t == "video" => MediaKind::Video,
            Some(t) if t.is_empty() || t == "image" => MediaKind::Image,
            Some(other) => {
                warn!("Unknown media type {:?}, rendering as image", other);
                MediaKind::Image
            }
            None => MediaKind::Image,
        }
    }

    /// Kind implied by an upload's file extension.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" => Some(MediaKind::Image),
            "mp4" | "mov" => Some(MediaKind::Video),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// A decoded media payload ready to be used as an `img`/`video` source.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaPreview {
    pub kind: MediaKind,
    pub mime: &'static str,
    pub src: String,
}

impl MediaPreview {
    /// Returns `None` for an empty payload or one that is not valid base64.
    /// Line breaks and missing padding are tolerated.
    pub fn decode(media_data: &str, media_type: Option<&str>) -> Option<Self> {
        let payload: String = media_data
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        if payload.is_empty() {
            return None;
        }
        let bytes = match PAYLOAD_ENGINE.decode(&payload) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Dropping undecodable media payload: {}", e);
                return None;
            }
        };
        let kind = MediaKind::from_declared(media_type);
        let mime = sniff_mime(kind, &bytes);
        Some(Self {
            kind,
            mime,
            src: format!("data:{mime};base64,{payload}"),
        })
    }
}

/// MIME type for the decoded bytes, refined from magic numbers.
pub fn sniff_mime(kind: MediaKind, bytes: &[u8]) -> &'static str {
    match kind {
        MediaKind::Image => {
            if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
                "image/png"
            } else if bytes.starts_with(b"GIF8") {
                "image/gif"
            } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
                "image/webp"
            } else {
                "image/jpeg"
            }
        }
        MediaKind::Video => {
            if bytes.len() >= 12 && &bytes[4..8] == b"ftyp" && &bytes[8..12] == b"qt  " {
                "video/quicktime"
            } else {
                "video/mp4"
            }
        }
    }
}

/// MIME type to send for an upload with the given file name.
pub fn upload_mime(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        _ => "application/octet-stream",
    }
}
