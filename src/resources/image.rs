//! Product image entities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidParameterError;

/// The sizes an image entity carries a URL for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageSize {
    /// `thumbnailImage`
    Thumbnail,
    /// `mediumImage`
    Medium,
    /// `largeImage`
    Large,
}

impl ImageSize {
    /// Returns the size name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Returns the payload key holding the URL of this size.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnailImage",
            Self::Medium => "mediumImage",
            Self::Large => "largeImage",
        }
    }
}

impl FromStr for ImageSize {
    type Err = InvalidParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thumbnail" => Ok(Self::Thumbnail),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(InvalidParameterError::InvalidImageSize {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a product's `imageEntities` list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntity {
    /// Discriminator; `PRIMARY` marks the main product image.
    pub entity_type: Option<String>,

    /// URL of the thumbnail rendition.
    pub thumbnail_image: Option<String>,

    /// URL of the medium rendition.
    pub medium_image: Option<String>,

    /// URL of the large rendition.
    pub large_image: Option<String>,
}

impl ImageEntity {
    /// The `entityType` value of the primary image.
    pub const PRIMARY: &'static str = "PRIMARY";

    /// Returns `true` if this is the primary product image.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.entity_type.as_deref() == Some(Self::PRIMARY)
    }

    /// Returns the URL for the given size, if the entity has one.
    #[must_use]
    pub fn url(&self, size: ImageSize) -> Option<&str> {
        match size {
            ImageSize::Thumbnail => self.thumbnail_image.as_deref(),
            ImageSize::Medium => self.medium_image.as_deref(),
            ImageSize::Large => self.large_image.as_deref(),
        }
    }
}

/// Orders image URLs of one size: non-primary entities in source order,
/// with the primary entity's URL moved to the front.
///
/// If several entities are marked primary, the last one wins and the
/// others are dropped. Entities without a URL of the requested size, or
/// whose URL is empty, are skipped.
pub(crate) fn ordered_urls<'a, I>(entities: I, size: ImageSize) -> Vec<String>
where
    I: IntoIterator<Item = &'a ImageEntity>,
{
    let mut images = Vec::new();
    let mut primary = None;

    for entity in entities {
        let Some(url) = entity.url(size).filter(|url| !url.is_empty()) else {
            tracing::trace!(size = %size, "Skipping image entity without a URL of this size");
            continue;
        };
        if entity.is_primary() {
            primary = Some(url.to_string());
        } else {
            images.push(url.to_string());
        }
    }

    if let Some(primary) = primary {
        images.insert(0, primary);
    }
    images
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(entity_type: &str, url: &str) -> ImageEntity {
        ImageEntity {
            entity_type: Some(entity_type.to_string()),
            thumbnail_image: Some(format!("{url}-t")),
            medium_image: Some(format!("{url}-m")),
            large_image: Some(url.to_string()),
        }
    }

    #[test]
    fn test_image_size_parses_known_names() {
        assert_eq!(
            "thumbnail".parse::<ImageSize>().unwrap(),
            ImageSize::Thumbnail
        );
        assert_eq!("medium".parse::<ImageSize>().unwrap(), ImageSize::Medium);
        assert_eq!("large".parse::<ImageSize>().unwrap(), ImageSize::Large);
    }

    #[test]
    fn test_image_size_rejects_unknown_names() {
        for name in ["huge", "Large", "", "largeImage"] {
            assert!(matches!(
                name.parse::<ImageSize>(),
                Err(InvalidParameterError::InvalidImageSize { .. })
            ));
        }
    }

    #[test]
    fn test_primary_moves_to_front() {
        let entities = [
            entity("SECONDARY", "b"),
            entity("PRIMARY", "a"),
            entity("SECONDARY", "c"),
        ];
        let urls = ordered_urls(&entities, ImageSize::Large);
        assert_eq!(urls, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_order_kept_without_primary() {
        let entities = [entity("SECONDARY", "x"), entity("SECONDARY", "y")];
        assert_eq!(ordered_urls(&entities, ImageSize::Large), vec!["x", "y"]);
        assert_eq!(
            ordered_urls(&entities, ImageSize::Thumbnail),
            vec!["x-t", "y-t"]
        );
    }

    #[test]
    fn test_last_primary_wins() {
        let entities = [
            entity("PRIMARY", "p1"),
            entity("SECONDARY", "s"),
            entity("PRIMARY", "p2"),
        ];
        assert_eq!(ordered_urls(&entities, ImageSize::Large), vec!["p2", "s"]);
    }

    #[test]
    fn test_entities_without_size_are_skipped() {
        let mut partial = entity("SECONDARY", "b");
        partial.medium_image = None;
        let entities = [entity("SECONDARY", "a"), partial];
        assert_eq!(ordered_urls(&entities, ImageSize::Medium), vec!["a-m"]);
    }

    #[test]
    fn test_empty_urls_are_skipped() {
        let entities = [
            entity("SECONDARY", "a"),
            entity("PRIMARY", ""),
            entity("SECONDARY", ""),
            entity("SECONDARY", "b"),
        ];
        assert_eq!(ordered_urls(&entities, ImageSize::Large), vec!["a", "b"]);
    }

    #[test]
    fn test_entity_deserializes_from_camel_case() {
        let entity: ImageEntity = serde_json::from_value(serde_json::json!({
            "entityType": "PRIMARY",
            "thumbnailImage": "t.jpg",
            "mediumImage": "m.jpg",
            "largeImage": "l.jpg"
        }))
        .unwrap();
        assert!(entity.is_primary());
        assert_eq!(entity.url(ImageSize::Medium), Some("m.jpg"));
    }
}
