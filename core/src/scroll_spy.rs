use crate::section::{SectionId, SECTION_ORDER};

pub const SPY_THRESHOLDS: [f64; 3] = [0.15, 0.3, 0.5];

// A section coming in from below only counts once it reaches the upper band.
pub const SPY_ROOT_MARGIN: &str = "-20% 0px -70% 0px";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub section: SectionId,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn new(section: SectionId, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            section,
            is_intersecting,
            ratio,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrollSpy {
    sections: Vec<SectionId>,
    active: SectionId,
}

impl ScrollSpy {
    pub fn new(sections: &[SectionId]) -> Self {
        let sections = if sections.is_empty() {
            SECTION_ORDER.to_vec()
        } else {
            sections.to_vec()
        };
        let active = sections[0];
        Self { sections, active }
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn observe(&mut self, batch: &[IntersectionSample]) -> bool {
        let mut visible: Vec<(usize, f64)> = batch
            .iter()
            .filter(|sample| sample.is_intersecting)
            .filter_map(|sample| {
                let rank = self.rank(sample.section)?;
                Some((rank, sample.ratio))
            })
            .collect();
        // stable: ties keep section order
        visible.sort_by_key(|(rank, _)| *rank);
        visible.sort_by(|a, b| b.1.total_cmp(&a.1));
        let Some((rank, _)) = visible.first().copied() else {
            return false;
        };
        let next = self.sections[rank];
        if next == self.active {
            return false;
        }
        self.active = next;
        true
    }

    fn rank(&self, section: SectionId) -> Option<usize> {
        self.sections.iter().position(|entry| *entry == section)
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(SECTION_ORDER)
    }
}
