// SPDX-License-Identifier: MPL-2.0
//! Static catalog of home screen content.
//!
//! Two compile-time tables mirror the MySoothe sample data: six "align your
//! body" activities and six favorite collections. Each entry pairs an
//! illustration asset with the Fluent key of its localized caption; neither
//! table is ever mutated.

use crate::illustration::ImageId;

/// One catalog row: an illustration and the Fluent key of its caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub image: ImageId,
    pub caption: &'static str,
}

const fn entry(image: ImageId, caption: &'static str) -> CatalogEntry {
    CatalogEntry { image, caption }
}

/// Activities shown as circular avatars in the "align your body" row.
pub const BODY_ACTIVITIES: [CatalogEntry; 6] = [
    entry(ImageId::Inversions, "activity-inversions"),
    entry(ImageId::QuickYoga, "activity-quick-yoga"),
    entry(ImageId::Stretching, "activity-stretching"),
    entry(ImageId::Tabata, "activity-tabata"),
    entry(ImageId::Hiit, "activity-hiit"),
    entry(ImageId::PreNatalYoga, "activity-pre-natal-yoga"),
];

/// Collections shown as cards in the "favorite collections" grid.
pub const FAVORITE_COLLECTIONS: [CatalogEntry; 6] = [
    entry(ImageId::ShortMantras, "collection-short-mantras"),
    entry(ImageId::NatureMeditations, "collection-nature-meditations"),
    entry(ImageId::StressAndAnxiety, "collection-stress-and-anxiety"),
    entry(ImageId::SelfMassage, "collection-self-massage"),
    entry(ImageId::Overwhelmed, "collection-overwhelmed"),
    entry(ImageId::NightlyWindDown, "collection-nightly-wind-down"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn both_tables_hold_six_entries() {
        assert_eq!(BODY_ACTIVITIES.len(), 6);
        assert_eq!(FAVORITE_COLLECTIONS.len(), 6);
    }

    #[test]
    fn entries_are_unique_across_tables() {
        let images: HashSet<ImageId> = BODY_ACTIVITIES
            .iter()
            .chain(FAVORITE_COLLECTIONS.iter())
            .map(|e| e.image)
            .collect();
        let captions: HashSet<&str> = BODY_ACTIVITIES
            .iter()
            .chain(FAVORITE_COLLECTIONS.iter())
            .map(|e| e.caption)
            .collect();

        assert_eq!(images.len(), 12, "every entry has its own illustration");
        assert_eq!(captions.len(), 12, "every entry has its own caption key");
    }

    #[test]
    fn nth_image_pairs_with_nth_caption() {
        // The pairing is positional in the source table; spot-check that the
        // first and last activity keep their original image/caption coupling.
        assert_eq!(BODY_ACTIVITIES[0].image, ImageId::Inversions);
        assert_eq!(BODY_ACTIVITIES[0].caption, "activity-inversions");
        assert_eq!(BODY_ACTIVITIES[5].image, ImageId::PreNatalYoga);
        assert_eq!(BODY_ACTIVITIES[5].caption, "activity-pre-natal-yoga");
    }

    #[test]
    fn caption_keys_follow_table_prefixes() {
        for entry in &BODY_ACTIVITIES {
            assert!(entry.caption.starts_with("activity-"), "{}", entry.caption);
        }
        for entry in &FAVORITE_COLLECTIONS {
            assert!(
                entry.caption.starts_with("collection-"),
                "{}",
                entry.caption
            );
        }
    }
}
