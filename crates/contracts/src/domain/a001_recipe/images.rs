use super::aggregate::MAX_RECIPE_IMAGES;

/// One of the recipe image slots; `F` is the browser file handle
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSlot<F> {
    /// Already uploaded, referenced by stored file name
    Stored(String),
    /// Picked locally, not uploaded yet
    Local(F),
}

/// Ordered image slots, slot 0 is the main image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSlots<F> {
    slots: Vec<ImageSlot<F>>,
}

impl<F> Default for ImageSlots<F> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<F> ImageSlots<F> {
    pub fn from_stored(names: Vec<String>) -> Self {
        Self {
            slots: names
                .into_iter()
                .take(MAX_RECIPE_IMAGES)
                .map(ImageSlot::Stored)
                .collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&ImageSlot<F>> {
        self.slots.get(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= MAX_RECIPE_IMAGES
    }

    /// Replaces slot `index`, or appends when `index` is the first free slot.
    /// Returns `false` when the slot is out of range.
    pub fn set(&mut self, index: usize, file: F) -> bool {
        if index < self.slots.len() {
            self.slots[index] = ImageSlot::Local(file);
            true
        } else if index == self.slots.len() && !self.is_full() {
            self.slots.push(ImageSlot::Local(file));
            true
        } else {
            false
        }
    }

    /// Removes a slot, later images shift forward
    pub fn remove(&mut self, index: usize) {
        if index < self.slots.len() {
            self.slots.remove(index);
        }
    }

    /// Main image file, only if it is a new local pick
    pub fn new_main(&self) -> Option<&F> {
        match self.slots.first() {
            Some(ImageSlot::Local(file)) => Some(file),
            _ => None,
        }
    }

    /// New local picks among the extra slots
    pub fn new_extras(&self) -> Vec<&F> {
        self.slots
            .iter()
            .skip(1)
            .filter_map(|slot| match slot {
                ImageSlot::Local(file) => Some(file),
                ImageSlot::Stored(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_new_files_are_uploaded() {
        let mut slots: ImageSlots<&str> =
            ImageSlots::from_stored(vec!["main.jpg".into(), "extra.jpg".into()]);
        assert!(slots.new_main().is_none());

        assert!(slots.set(2, "new-extra"));
        assert_eq!(slots.new_extras(), vec![&"new-extra"]);

        assert!(slots.set(0, "new-main"));
        assert_eq!(slots.new_main(), Some(&"new-main"));
    }

    #[test]
    fn test_slots_are_capped() {
        let mut slots: ImageSlots<u8> = ImageSlots::default();
        for i in 0..MAX_RECIPE_IMAGES {
            assert!(slots.set(i, i as u8));
        }
        assert!(slots.is_full());
        assert!(!slots.set(MAX_RECIPE_IMAGES, 9));
        assert!(!slots.set(7, 9));
        assert_eq!(slots.len(), MAX_RECIPE_IMAGES);
    }

    #[test]
    fn test_remove_shifts_following_images() {
        let mut slots: ImageSlots<u8> =
            ImageSlots::from_stored(vec!["a".into(), "b".into(), "c".into()]);
        slots.remove(0);
        assert_eq!(slots.get(0), Some(&ImageSlot::Stored("b".into())));
        assert_eq!(slots.len(), 2);
        slots.remove(10);
        assert_eq!(slots.len(), 2);
    }
}
