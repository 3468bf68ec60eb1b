use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PickerIntent {
    Open,
    /// Selection finished or was cancelled.
    Close,
    Input(char),
    Paste(String),
    Backspace,
    /// Loading the chosen image failed; dialog stays open.
    Failed(String),
}

impl Intent for PickerIntent {}
