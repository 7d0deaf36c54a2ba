/// Identifiers and literal values shared with the page markup.
///
/// These must match the HTML exactly; pages written for the plain script
/// version keep working unchanged.
// Element id of the Show/Hide button
pub const TOGGLE_CONTROL_ID: &str = "toggleCodeButton";

// Class shared by every code block driven by the button
pub const CODE_BLOCK_CLASS: &str = "language-python";

// Button labels (the label is the toggle state)
pub const LABEL_SHOW_CODE: &str = "Show Code";
pub const LABEL_HIDE_CODE: &str = "Hide Code";

// CSS `display` values applied to code blocks
pub const DISPLAY_PROPERTY: &str = "display";
pub const DISPLAY_BLOCK: &str = "block";
pub const DISPLAY_NONE: &str = "none";
