//! Room model.

use serde::{Deserialize, Serialize};

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    /// General-purpose teaching room.
    Classroom,
    /// Equipped laboratory.
    Lab,
    /// Mid-size presentation hall.
    SeminarHall,
    /// Large-capacity hall.
    Auditorium,
}

/// A teaching space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Room classification.
    pub kind: RoomKind,
    /// Seating capacity.
    pub capacity: u32,
    /// Equipment tags (e.g. "projector", "fume-hood").
    pub equipment: Vec<String>,
    /// Location label (building, wing).
    pub location: String,
}

impl Room {
    /// Creates a room.
    pub fn new(id: impl Into<String>, kind: RoomKind, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            kind,
            capacity,
            equipment: Vec::new(),
            location: String::new(),
        }
    }

    /// Creates a classroom.
    pub fn classroom(id: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, RoomKind::Classroom, capacity)
    }

    /// Creates a lab room.
    pub fn lab(id: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, RoomKind::Lab, capacity)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an equipment tag.
    pub fn with_equipment(mut self, tag: impl Into<String>) -> Self {
        self.equipment.push(tag.into());
        self
    }

    /// Sets the location label.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Whether this room carries every tag in `required`.
    pub fn has_equipment(&self, required: &[String]) -> bool {
        required.iter().all(|tag| self.equipment.contains(tag))
    }

    /// Whether this room seats a group of the given size.
    #[inline]
    pub fn fits(&self, group_size: u32) -> bool {
        self.capacity >= group_size
    }
}
