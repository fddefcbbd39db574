//! Cohort (student group) model.

use serde::{Deserialize, Serialize};

/// A fixed group of students taking a common curriculum together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cohort {
    /// Unique identifier.
    pub id: String,
    /// Display name (e.g. "CSE 2nd Year A").
    pub name: String,
    /// Department label.
    pub department: String,
    /// Year of study.
    pub year: u8,
    /// Section label within the year.
    pub section: String,
    /// Number of students.
    pub size: u32,
    /// Subject ids this cohort must take, in curriculum order.
    ///
    /// Empty means the whole subject catalog applies.
    pub mandatory_subject_ids: Vec<String>,
    /// Periods per day this cohort should not exceed.
    pub max_daily_periods: u8,
    /// Special-requirement tags (e.g. "wheelchair-access").
    pub special_requirements: Vec<String>,
}

impl Cohort {
    /// Creates a cohort with a default daily cap of 8 periods.
    pub fn new(id: impl Into<String>, size: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            department: String::new(),
            year: 1,
            section: String::new(),
            size,
            mandatory_subject_ids: Vec::new(),
            max_daily_periods: 8,
            special_requirements: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets department, year, and section.
    pub fn with_placement(
        mut self,
        department: impl Into<String>,
        year: u8,
        section: impl Into<String>,
    ) -> Self {
        self.department = department.into();
        self.year = year;
        self.section = section.into();
        self
    }

    /// Adds a mandatory subject id.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.mandatory_subject_ids.push(subject_id.into());
        self
    }

    /// Sets the daily period cap.
    pub fn with_max_daily_periods(mut self, max: u8) -> Self {
        self.max_daily_periods = max;
        self
    }

    /// Adds a special-requirement tag.
    pub fn with_requirement(mut self, tag: impl Into<String>) -> Self {
        self.special_requirements.push(tag.into());
        self
    }
}
