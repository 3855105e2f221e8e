//! Scheduling Commands

use crate::domain::{available_slots, AvailabilityRequest, DomainResult};

/// Free start times (minutes since midnight) for one inspector day
pub fn availability(request: &AvailabilityRequest) -> DomainResult<Vec<u32>> {
    let slots = available_slots(request)?;
    log::debug!(
        "availability: {} slots of {} min in {}..{}",
        slots.len(),
        request.duration_minutes,
        request.working_hours.start,
        request.working_hours.end
    );
    Ok(slots)
}
