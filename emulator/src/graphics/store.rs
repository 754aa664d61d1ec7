// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! The image store: sealed transmissions keyed by image id, each with its
//! placements.

use rustc_hash::FxHashMap;

use super::control::KittyFormat;

/// Per-image payload cap. A transmission growing past this is dropped with
/// an error response.
pub const MAX_IMAGE_BYTES: usize = 32 * 1024 * 1024;

/// Where (and how) one image instance renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub placement_id: u32,
    /// Cell position of the top-left corner.
    pub row: u16,
    pub col: u16,
    /// Pixel offset within that cell.
    pub cell_x_offset: u32,
    pub cell_y_offset: u32,
    /// Negative z draws under text.
    pub z_index: i32,
}

/// A sealed, validated transmission.
#[derive(Debug, Clone)]
pub struct KittyImage {
    pub id: u32,
    pub format: KittyFormat,
    pub width: u32,
    pub height: u32,
    /// Decoded (and decompressed) pixel or PNG bytes.
    pub data: Vec<u8>,
    pub placements: Vec<Placement>,
}

/// All live images for one emulator.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: FxHashMap<u32, KittyImage>,
}

impl ImageStore {
    /// Insert (replacing any previous image with the same id).
    pub fn insert(&mut self, image: KittyImage) { self.images.insert(image.id, image); }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&KittyImage> { self.images.get(&id) }

    #[must_use]
    pub fn len(&self) -> usize { self.images.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.images.is_empty() }

    /// Attach a placement to an existing image. Returns `false` when the
    /// image id is unknown.
    pub fn add_placement(&mut self, id: u32, placement: Placement) -> bool {
        match self.images.get_mut(&id) {
            Some(image) => {
                // A re-used placement id moves the placement.
                image
                    .placements
                    .retain(|p| p.placement_id != placement.placement_id);
                image.placements.push(placement);
                true
            }
            None => false,
        }
    }

    /// `a=d`: with a placement id, drop that placement; with an image id,
    /// drop the image; with neither, drop everything.
    pub fn delete(&mut self, image_id: u32, placement_id: u32) {
        match (image_id, placement_id) {
            (0, _) => self.images.clear(),
            (id, 0) => {
                self.images.remove(&id);
            }
            (id, pid) => {
                if let Some(image) = self.images.get_mut(&id) {
                    image.placements.retain(|p| p.placement_id != pid);
                }
            }
        }
    }

    pub fn clear(&mut self) { self.images.clear(); }
}
