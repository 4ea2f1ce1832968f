//! Discord webhook payload types
//!
//! These structs serialize to the JSON document a Discord webhook accepts:
//! `{username, avatar_url, embeds: [...]}` with one embed per notification.

use serde::{Deserialize, Serialize};

/// The Classroom product icon, used as both avatar and embed author icon
pub const CLASSROOM_ICON_URL: &str =
    "https://ssl.gstatic.com/classroom/ic_product_classroom_144.png";

/// Top-level webhook document, one POST per notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Display name the webhook posts under
    pub username: String,
    /// Avatar shown next to the post
    pub avatar_url: String,
    /// Embeds carried by the post; the bridge always sends exactly one
    pub embeds: Vec<Embed>,
}

/// A Discord rich embed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    pub author: EmbedAuthor,
    pub title: String,
    pub description: String,
    /// Link back to the item in the Classroom UI
    pub url: String,
    /// Source update time, RFC 3339
    pub timestamp: String,
    /// Accent color as a 24-bit RGB integer
    pub color: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

/// Author line of an embed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    pub name: String,
    pub icon_url: String,
}

impl EmbedAuthor {
    /// Author line with the Classroom icon
    pub fn classroom(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_url: CLASSROOM_ICON_URL.to_string(),
        }
    }
}

/// A name/value field row in an embed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    /// A field rendered side by side with its neighbors
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }

    /// A field rendered on its own row
    pub fn block(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serializes_expected_shape() {
        let payload = WebhookPayload {
            username: "Classroom Announcements".to_string(),
            avatar_url: CLASSROOM_ICON_URL.to_string(),
            embeds: vec![Embed {
                author: EmbedAuthor::classroom("📢 New announcement in Algebra"),
                title: "Posted by: Ada Lovelace".to_string(),
                description: "Welcome back".to_string(),
                url: "https://classroom.google.com/c/1/p/a1".to_string(),
                timestamp: "2024-03-05T10:00:00Z".to_string(),
                color: 0x20975A,
                fields: vec![],
            }],
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["username"], "Classroom Announcements");
        assert_eq!(value["embeds"][0]["color"], 0x20975A);
        assert_eq!(value["embeds"][0]["author"]["icon_url"], CLASSROOM_ICON_URL);
        // empty fields are omitted entirely
        assert!(value["embeds"][0].get("fields").is_none());
    }

    #[test]
    fn test_fields_serialize_when_present() {
        let embed = Embed {
            author: EmbedAuthor::classroom("✏️ New assignment in Algebra"),
            title: "Essay".to_string(),
            description: "Write things".to_string(),
            url: "https://example.com".to_string(),
            timestamp: "2024-03-05T10:00:00Z".to_string(),
            color: 0xFFA500,
            fields: vec![EmbedField::inline("Due", "2024/03/05")],
        };
        let value = serde_json::to_value(&embed).unwrap();
        assert_eq!(value["fields"][0]["name"], "Due");
        assert_eq!(value["fields"][0]["inline"], true);
    }
}
