//! In-memory list of recorded activities.
//!
//! Indexes are 1-based, matching the numbers shown in listings.

use chrono::NaiveDate;

use crate::activity::types::Activity;
use crate::parser::error::{ParseError, ParseResult};

/// Ordered collection of activities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityList {
    activities: Vec<Activity>,
}

impl ActivityList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_activities(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn add(&mut self, activity: Activity) {
        self.activities.push(activity);
    }

    /// Get the activity at a 1-based index.
    pub fn record_at(&self, index: usize) -> ParseResult<&Activity> {
        let position = self.position(index)?;
        Ok(&self.activities[position])
    }

    /// Replace the activity at a 1-based index, returning the previous one.
    pub fn replace(&mut self, index: usize, activity: Activity) -> ParseResult<Activity> {
        let position = self.position(index)?;
        Ok(std::mem::replace(&mut self.activities[position], activity))
    }

    /// Remove the activity at a 1-based index.
    pub fn remove(&mut self, index: usize) -> ParseResult<Activity> {
        let position = self.position(index)?;
        Ok(self.activities.remove(position))
    }

    /// Activities that started on `date`.
    pub fn find(&self, date: NaiveDate) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|activity| activity.start.date() == date)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    fn position(&self, index: usize) -> ParseResult<usize> {
        if index == 0 || index > self.activities.len() {
            return Err(ParseError::IndexOutOfRange(index));
        }
        Ok(index - 1)
    }
}
