use glam::Vec3;
use smallvec::SmallVec;

/// One addressable surface-appearance binding on a renderable node.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: Option<String>,
    /// Linear RGB, each channel in `0.0..=1.0`.
    pub color: Vec3,
    pub opacity: f32,
    /// Owned by the renderer; the color applicator never touches it.
    pub transparent: bool,
}

impl Material {
    #[must_use]
    pub fn new(color: Vec3) -> Self {
        Self {
            name: None,
            color,
            opacity: 1.0,
            transparent: false,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Marks the material as blended with the given opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self.transparent = self.opacity < 1.0;
        self
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Vec3 {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Vec3::ONE)
    }
}

/// How a renderable node binds its materials.
///
/// Most meshes carry one material. Composite meshes authored as a single
/// object with several surfaces carry an ordered list, where the position in
/// the list is the slot index.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialBinding {
    Single(Material),
    Multi(SmallVec<[Material; 4]>),
}

impl MaterialBinding {
    /// Builds a binding from an ordered slot list. One slot yields `Single`.
    #[must_use]
    pub fn from_slots(mut slots: Vec<Material>) -> Self {
        if slots.len() == 1 {
            Self::Single(slots.remove(0))
        } else {
            Self::Multi(SmallVec::from_vec(slots))
        }
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multi(slots) => slots.len(),
        }
    }

    /// Returns the only slot when the binding has exactly one.
    #[must_use]
    pub fn sole_slot_mut(&mut self) -> Option<&mut Material> {
        match self {
            Self::Single(material) => Some(material),
            Self::Multi(slots) if slots.len() == 1 => slots.first_mut(),
            Self::Multi(_) => None,
        }
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Material> {
        match self {
            Self::Single(material) => (index == 0).then_some(material),
            Self::Multi(slots) => slots.get(index),
        }
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Material> {
        match self {
            Self::Single(material) => (index == 0).then_some(material),
            Self::Multi(slots) => slots.get_mut(index),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        let slots: &[Material] = match self {
            Self::Single(material) => std::slice::from_ref(material),
            Self::Multi(slots) => slots,
        };
        slots.iter()
    }
}

impl From<Material> for MaterialBinding {
    fn from(material: Material) -> Self {
        Self::Single(material)
    }
}
