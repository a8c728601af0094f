//! Input events delivered to the completion popup.
//!
//! The host translates its native input into these types and hands them to
//! [`Completer::handle_event`](crate::Completer::handle_event). Each event
//! names the node it was dispatched to; the popup classifies that target by
//! walking its ancestor chain.

use horizon_completer_core::{CaptureKind, NodeId};

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held.
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Keys the popup distinguishes. Everything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Tab,
    Enter,
    Escape,
    ArrowUp,
    ArrowDown,
    /// A printable character.
    Character(char),
    /// Any other key, by host key code.
    Other(u16),
}

/// Common data for all popup events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    default_prevented: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the host's default handling has been suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Suppress the host's default handling (focus change, caret move, ...).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Key press event.
#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// Node the event was dispatched to.
    pub target: NodeId,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(target: NodeId, key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            target,
            key,
            modifiers,
        }
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// Node the event was dispatched to.
    pub target: NodeId,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(target: NodeId, button: MouseButton, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            target,
            button,
            modifiers,
        }
    }

    /// Whether this is anything other than a plain primary-button press.
    pub fn is_nonstandard(&self) -> bool {
        self.button != MouseButton::Left || self.modifiers.any()
    }
}

/// Scroll event, dispatched to the node that scrolled.
#[derive(Debug, Clone, Copy)]
pub struct ScrollEvent {
    /// Base event data.
    pub base: EventBase,
    /// Node that scrolled.
    pub target: NodeId,
}

impl ScrollEvent {
    /// Create a new scroll event.
    pub fn new(target: NodeId) -> Self {
        Self {
            base: EventBase::new(),
            target,
        }
    }
}

/// Any event the popup intercepts.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    KeyPress(KeyPressEvent),
    MousePress(MousePressEvent),
    Scroll(ScrollEvent),
}

impl InputEvent {
    /// The capture kind that routes this event.
    pub fn kind(&self) -> CaptureKind {
        match self {
            Self::KeyPress(_) => CaptureKind::KeyDown,
            Self::MousePress(_) => CaptureKind::MouseDown,
            Self::Scroll(_) => CaptureKind::Scroll,
        }
    }

    /// Node the event was dispatched to.
    pub fn target(&self) -> NodeId {
        match self {
            Self::KeyPress(e) => e.target,
            Self::MousePress(e) => e.target,
            Self::Scroll(e) => e.target,
        }
    }

    /// Base event data.
    pub fn base(&self) -> &EventBase {
        match self {
            Self::KeyPress(e) => &e.base,
            Self::MousePress(e) => &e.base,
            Self::Scroll(e) => &e.base,
        }
    }
}

impl From<KeyPressEvent> for InputEvent {
    fn from(event: KeyPressEvent) -> Self {
        Self::KeyPress(event)
    }
}

impl From<MousePressEvent> for InputEvent {
    fn from(event: MousePressEvent) -> Self {
        Self::MousePress(event)
    }
}

impl From<ScrollEvent> for InputEvent {
    fn from(event: ScrollEvent) -> Self {
        Self::Scroll(event)
    }
}
