use crate::ui::mvi::Reducer;
use crate::ui::picker::intent::PickerIntent;
use crate::ui::picker::state::PickerDialogState;

pub struct PickerReducer;

impl Reducer for PickerReducer {
    type State = PickerDialogState;
    type Intent = PickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PickerIntent::Open => PickerDialogState::Visible {
                path: String::new(),
                error: None,
            },
            PickerIntent::Close => PickerDialogState::Hidden,
            PickerIntent::Input(ch) => match state {
                PickerDialogState::Visible { mut path, .. } => {
                    path.push(ch);
                    PickerDialogState::Visible { path, error: None }
                }
                other => other,
            },
            PickerIntent::Paste(text) => match state {
                PickerDialogState::Visible { mut path, .. } => {
                    path.extend(text.chars().filter(|c| !c.is_control()));
                    PickerDialogState::Visible { path, error: None }
                }
                other => other,
            },
            PickerIntent::Backspace => match state {
                PickerDialogState::Visible { mut path, .. } => {
                    path.pop();
                    PickerDialogState::Visible { path, error: None }
                }
                other => other,
            },
            PickerIntent::Failed(message) => match state {
                PickerDialogState::Visible { path, .. } => PickerDialogState::Visible {
                    path,
                    error: Some(message),
                },
                other => other,
            },
        }
    }
}
