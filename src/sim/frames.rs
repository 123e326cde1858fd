/// Physical memory: a fixed number of slots, each holding a resident page
/// or nothing. Slots are addressed by frame index and never grow.
#[derive(Debug, Clone)]
pub struct FrameTable {
    slots: Box<[Option<u32>]>,
}

impl FrameTable {
    pub fn new(num_frames: usize) -> Self {
        return Self {
            slots: vec![None; num_frames].into_boxed_slice(),
        };
    }

    pub fn len(&self) -> usize {
        return self.slots.len();
    }

    // returns the frame holding `page`, if it is resident
    pub fn lookup(&self, page: u32) -> Option<usize> {
        return self.slots.iter().position(|slot| *slot == Some(page));
    }

    // returns Some(index) for the first empty slot, or None if memory is full
    pub fn first_empty_slot(&self) -> Option<usize> {
        return self.slots.iter().position(|slot| slot.is_none());
    }

    pub fn get(&self, frame: usize) -> Option<u32> {
        return self.slots[frame];
    }

    /// Puts `page` into `frame`, returning whatever was resident there.
    pub fn load(&mut self, frame: usize, page: u32) -> Option<u32> {
        return self.slots[frame].replace(page);
    }

    /// Occupied frames with their resident page, lowest frame index first.
    pub fn resident(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        return self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(frame, slot)| slot.map(|page| (frame, page)));
    }
}
