//! Scheduling Availability
//!
//! Free inspection start times for one day. Times are minutes since
//! midnight.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};

/// Half-open interval `[start, end)` in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: u32,
    pub end: u32,
}

impl TimeWindow {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    /// Working hours for the day
    pub working_hours: TimeWindow,
    pub duration_minutes: i64,
    pub step_minutes: i64,
    #[serde(default)]
    pub bookings: Vec<TimeWindow>,
}

/// Start times whose `[start, start + duration)` fits the working hours and
/// overlaps no booking
pub fn available_slots(request: &AvailabilityRequest) -> DomainResult<Vec<u32>> {
    if request.duration_minutes <= 0 {
        return Err(DomainError::InvalidInput("duration must be positive".to_string()));
    }
    if request.step_minutes <= 0 {
        return Err(DomainError::InvalidInput("step must be positive".to_string()));
    }
    let hours = request.working_hours;
    if hours.end <= hours.start {
        return Ok(Vec::new());
    }

    let duration = u32::try_from(request.duration_minutes)
        .map_err(|_| DomainError::InvalidInput("duration out of range".to_string()))?;
    let step = u32::try_from(request.step_minutes)
        .map_err(|_| DomainError::InvalidInput("step out of range".to_string()))?;

    let mut slots = Vec::new();
    let mut start = hours.start;
    while let Some(end) = start.checked_add(duration) {
        if end > hours.end {
            break;
        }
        let slot = TimeWindow::new(start, end);
        if !request.bookings.iter().any(|b| b.overlaps(&slot)) {
            slots.push(start);
        }
        match start.checked_add(step) {
            Some(next) => start = next,
            None => break,
        }
    }
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(duration: i64, step: i64, bookings: Vec<TimeWindow>) -> AvailabilityRequest {
        AvailabilityRequest {
            working_hours: TimeWindow::new(8 * 60, 12 * 60),
            duration_minutes: duration,
            step_minutes: step,
            bookings,
        }
    }

    #[test]
    fn test_open_day() {
        let slots = available_slots(&request(120, 60, vec![])).unwrap();
        assert_eq!(slots, vec![480, 540, 600]);
    }

    #[test]
    fn test_bookings_block_overlapping_slots() {
        let slots = available_slots(&request(60, 30, vec![TimeWindow::new(540, 600)])).unwrap();
        // 09:00-10:00 booked; a slot ending exactly at 09:00 is free
        assert_eq!(slots, vec![480, 600, 630, 660]);
    }

    #[test]
    fn test_non_positive_duration_or_step_rejected() {
        assert!(matches!(available_slots(&request(0, 30, vec![])), Err(DomainError::InvalidInput(_))));
        assert!(matches!(available_slots(&request(60, -5, vec![])), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_duration_longer_than_day() {
        assert!(available_slots(&request(300, 30, vec![])).unwrap().is_empty());
    }
}
