pub mod dto {
    pub mod booking;
    pub mod common;
    pub mod court;
    pub mod feedback;
    pub mod package;
    pub mod playmate;
    pub mod slot;
    pub mod wallet;
}

pub mod error;
pub mod schedule;

// Re-export commonly used items
pub use error::{Result, SharedError};

pub use dto::{
    booking::{BookingDto, BookingFilter, BookingStatus, UpdateBookingStatusRequest},
    common::{ErrorResponse, Paged},
    court::{CourtDto, CourtFilter},
    feedback::{FeedbackDto, FeedbackFilter},
    package::{PackageDto, PackageFilter, SavePackageRequest},
    playmate::{CreatePlaymatePostRequest, PlaymateFilter, PlaymatePostDto, SkillLevel},
    slot::{CreateSlotRequest, SetSlotAvailabilityRequest, TimeSlotDto},
    wallet::{WithdrawalDto, WithdrawalFilter, WithdrawalStatus},
};

pub use schedule::{
    build_slot_blocks, cell_blocks, grid_hour_labels, hour_labels, SlotBlock, WeekRange,
    GRID_HOUR_COUNT, GRID_OPEN_HOUR,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_time_slot_creation() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let slot = TimeSlotDto {
            id: 42,
            court_id: 7,
            slot_number: 3,
            start_time: day.and_hms_opt(10, 0, 0).unwrap(),
            end_time: day.and_hms_opt(12, 0, 0).unwrap(),
            is_available: true,
            price: 30.0,
        };

        assert_eq!(slot.date(), day);
        assert_eq!(slot.slot_number, 3);
    }

    #[test]
    fn test_booking_creation() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let booking = BookingDto {
            id: 1,
            court_id: 7,
            court_name: "Centre Court".to_string(),
            customer_name: "Dana Ayers".to_string(),
            booking_date: day,
            start_time: day.and_hms_opt(10, 0, 0).unwrap(),
            end_time: day.and_hms_opt(11, 0, 0).unwrap(),
            amount: 30.0,
            status: BookingStatus::Confirmed,
        };

        assert_eq!(booking.status.label(), "Confirmed");
        assert_eq!(booking.court_name, "Centre Court");
    }

    #[test]
    fn test_slot_json_feeds_schedule() {
        // A slot decoded from the API wire shape must place onto the grid.
        let json = r#"{
            "id": 9,
            "courtId": 2,
            "slotNumber": 4,
            "startTime": "2024-02-27T14:00:00",
            "endTime": "2024-02-27T16:00:00",
            "isAvailable": false,
            "price": 18.5
        }"#;
        let slot: TimeSlotDto = serde_json::from_str(json).unwrap();
        let week = WeekRange::containing(NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        let blocks = build_slot_blocks(std::slice::from_ref(&slot), &week);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].day_index, 1);
        assert_eq!(blocks[0].start_hour, 14);
        assert_eq!(blocks[0].duration_hours, 2);
        assert!(!blocks[0].is_available);
    }
}
