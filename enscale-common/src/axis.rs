#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit used for overlays added without an explicit unit
pub const DEFAULT_OVERLAY_UNIT: &str = "eV";

/// One overlay axis requested by the user. The id is the stable key,
/// position in the owning [`AxisList`] controls stacking order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisSpec {
    pub id: u32,
    pub unit: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub prefix: String,
}

impl AxisSpec {
    pub fn new(id: u32, unit: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            id,
            unit: unit.into(),
            prefix: prefix.into(),
        }
    }
}

/// Ordered list of overlay axes
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisList {
    axes: Vec<AxisSpec>,
}

impl Default for AxisList {
    fn default() -> Self {
        Self {
            axes: vec![AxisSpec::new(1, DEFAULT_OVERLAY_UNIT, "")],
        }
    }
}

impl AxisList {
    pub fn empty() -> Self {
        Self { axes: Vec::new() }
    }

    pub fn from_specs(axes: Vec<AxisSpec>) -> Self {
        Self { axes }
    }

    fn next_id(&self) -> u32 {
        self.axes.iter().map(|a| a.id).max().unwrap_or(0) + 1
    }

    /// Append an overlay and return its id
    pub fn add(&mut self, unit: impl Into<String>, prefix: impl Into<String>) -> u32 {
        let id = self.next_id();
        self.axes.push(AxisSpec::new(id, unit, prefix));
        id
    }

    pub fn add_default(&mut self) -> u32 {
        self.add(DEFAULT_OVERLAY_UNIT, "")
    }

    /// Remove the overlay with the given id, returns whether it existed
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.axes.len();
        self.axes.retain(|a| a.id != id);
        self.axes.len() != before
    }

    pub fn set_unit(&mut self, id: u32, unit: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(axis) => {
                axis.unit = unit.into();
                true
            }
            None => false,
        }
    }

    pub fn set_prefix(&mut self, id: u32, prefix: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(axis) => {
                axis.prefix = prefix.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u32) -> Option<&AxisSpec> {
        self.axes.iter().find(|a| a.id == id)
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut AxisSpec> {
        self.axes.iter_mut().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AxisSpec> {
        self.axes.iter()
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}

impl<'a> IntoIterator for &'a AxisList {
    type Item = &'a AxisSpec;
    type IntoIter = std::slice::Iter<'a, AxisSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.axes.iter()
    }
}
