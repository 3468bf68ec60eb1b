use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PickerDialogState {
    #[default]
    Hidden,
    Visible {
        /// Path typed so far.
        path: String,
        /// Why the last attempt failed, shown under the input.
        error: Option<String>,
    },
}

impl UiState for PickerDialogState {}

impl PickerDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Visible { path, .. } => Some(path),
            Self::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(PickerDialogState::default(), PickerDialogState::Hidden);
    }

    #[test]
    fn is_visible_check() {
        assert!(!PickerDialogState::Hidden.is_visible());
        assert!(PickerDialogState::Visible {
            path: String::new(),
            error: None,
        }
        .is_visible());
    }
}
