use crate::profile_image::ProfileImage;
use crate::ui::mvi::UiState;

/// Everything shown on the ticket screen.
///
/// `current_time` and `current_date` are only ever written by a clock
/// tick; the rest are user fields mirrored to storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayState {
    pub current_time: String,
    pub current_date: String,
    pub profile_image: Option<ProfileImage>,
    pub user_name: String,
    pub origin: String,
    pub destination: String,
}

impl UiState for DisplayState {}

impl DisplayState {
    pub fn field(&self, field: TicketField) -> &str {
        match field {
            TicketField::UserName => &self.user_name,
            TicketField::Origin => &self.origin,
            TicketField::Destination => &self.destination,
        }
    }
}

/// Editable text fields, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketField {
    UserName,
    Origin,
    Destination,
}

impl TicketField {
    pub const ALL: [TicketField; 3] = [Self::UserName, Self::Origin, Self::Destination];

    pub fn next(self) -> Self {
        match self {
            Self::UserName => Self::Origin,
            Self::Origin => Self::Destination,
            Self::Destination => Self::UserName,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::UserName => Self::Destination,
            Self::Origin => Self::UserName,
            Self::Destination => Self::Origin,
        }
    }

    /// Hint shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::UserName => "Enter your name",
            Self::Origin => "Enter location",
            Self::Destination => "Enter destination",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let state = DisplayState::default();
        assert!(state.profile_image.is_none());
        for field in TicketField::ALL {
            assert_eq!(state.field(field), "");
        }
    }

    #[test]
    fn field_cycle_wraps_both_ways() {
        for field in TicketField::ALL {
            assert_eq!(field.next().previous(), field);
        }
        assert_eq!(TicketField::Destination.next(), TicketField::UserName);
        assert_eq!(TicketField::UserName.previous(), TicketField::Destination);
    }
}
