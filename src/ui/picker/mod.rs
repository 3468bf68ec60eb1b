mod dialog;
mod intent;
mod reducer;
mod source;
mod state;

pub use dialog::render_picker_dialog;
pub use intent::PickerIntent;
pub use reducer::PickerReducer;
pub use source::{expand_path, pick_from_clipboard, pick_from_path, PickError};
pub use state::PickerDialogState;
