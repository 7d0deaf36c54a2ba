// Show/Hide Code toggle logic.
//
// The button label is the only state: `"Show Code"` means the code blocks are
// currently hidden, anything else means they are shown. Each call re-reads the
// label and re-queries the code blocks through a [`CodeView`], so nothing is
// cached between clicks.

use crate::constants::{
    CODE_BLOCK_CLASS, DISPLAY_BLOCK, DISPLAY_NONE, LABEL_HIDE_CODE, LABEL_SHOW_CODE,
    TOGGLE_CONTROL_ID,
};
use crate::error::ToggleError;

/// The two labels the toggle button can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    ShowCode,
    HideCode,
}

impl Label {
    /// Only the exact `"Show Code"` literal maps to `ShowCode`; every other
    /// string (including `"Hide Code"`) falls through to `HideCode`.
    #[inline]
    pub fn parse(text: &str) -> Label {
        if text == LABEL_SHOW_CODE {
            Label::ShowCode
        } else {
            Label::HideCode
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Label::ShowCode => LABEL_SHOW_CODE,
            Label::HideCode => LABEL_HIDE_CODE,
        }
    }

    #[inline]
    pub fn next(self) -> Label {
        match self {
            Label::ShowCode => Label::HideCode,
            Label::HideCode => Label::ShowCode,
        }
    }

    /// Display value for code blocks while this label is on the button.
    #[inline]
    pub fn display(self) -> Display {
        match self {
            // button offers to hide, so code is visible
            Label::HideCode => Display::Block,
            Label::ShowCode => Display::None,
        }
    }
}

/// CSS `display` value applied to each code block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Display::Block => DISPLAY_BLOCK,
            Display::None => DISPLAY_NONE,
        }
    }
}

/// Where the toggle looks for its button and code blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleConfig {
    pub control_id: String,
    pub code_class: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            control_id: TOGGLE_CONTROL_ID.to_string(),
            code_class: CODE_BLOCK_CLASS.to_string(),
        }
    }
}

impl ToggleConfig {
    pub fn new(control_id: impl Into<String>, code_class: impl Into<String>) -> Self {
        Self {
            control_id: control_id.into(),
            code_class: code_class.into(),
        }
    }
}

/// Outcome of a single toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub label: Label,
    pub display: Display,
    pub updated: usize,
}

/// Read/write access to the button label and the code-block collection.
///
/// Implementations must resolve the collection by marker on every call.
pub trait CodeView {
    fn label(&self, control_id: &str) -> Result<String, ToggleError>;
    fn set_label(&mut self, control_id: &str, label: &str) -> Result<(), ToggleError>;
    /// Apply `display` to every element carrying `marker`; returns how many
    /// elements were updated.
    fn set_display_all(&mut self, marker: &str, display: Display) -> Result<usize, ToggleError>;
}

/// Flip the button label and show or hide the code blocks to match.
///
/// A missing control is an error and leaves the code blocks untouched. An
/// empty collection is not: the label still flips.
pub fn toggle<V: CodeView + ?Sized>(
    view: &mut V,
    config: &ToggleConfig,
) -> Result<Transition, ToggleError> {
    let current = Label::parse(&view.label(&config.control_id)?);
    let label = current.next();
    let display = label.display();
    view.set_label(&config.control_id, label.as_str())?;
    let updated = view.set_display_all(&config.code_class, display)?;
    log::debug!(
        "[toggle] #{} -> {:?}, .{} display={} ({} elements)",
        config.control_id,
        label.as_str(),
        config.code_class,
        display.as_str(),
        updated
    );
    Ok(Transition {
        label,
        display,
        updated,
    })
}
