use crate::clock::ClockReading;
use crate::profile_image::ProfileImage;
use crate::store::StoredFields;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TicketIntent {
    /// Clock fired; replaces time and date.
    Tick(ClockReading),
    /// Values read back from storage. Absent fields keep their current value.
    Restore(StoredFields),
    SetProfileImage(Option<ProfileImage>),
    SetUserName(String),
    SetOrigin(String),
    SetDestination(String),
    /// Exchange origin and destination in one step.
    SwapJourney,
}

impl Intent for TicketIntent {}
