//! Zuordnung von Pointer-/Wheel-Eingaben zu Canvas-Gesten.
//!
//! Pan und Sektions-Drag haben disjunkte Auslöser:
//! - Mittelklick oder Primärklick + Shift → Pan
//! - Primärklick ohne Shift über einer Sektion → Sektions-Drag
//!
//! Wheel-Zoom nur mit gehaltener Ctrl-/Command-Taste.

/// Gedrückte Pointer-Taste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressButton {
    Primary,
    Middle,
    Secondary,
    Other,
}

/// Modifier-Tasten zum Zeitpunkt des Events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureModifiers {
    pub shift: bool,
    pub ctrl: bool,
    /// Cmd auf macOS, Ctrl sonst
    pub command: bool,
}

impl GestureModifiers {
    /// Zoom-Modifier gehalten?
    pub fn zoom_held(&self) -> bool {
        self.ctrl || self.command
    }
}

/// Ergebnis der Klassifizierung eines Button-Press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureStart {
    /// Kein Gesten-Start
    None,
    /// Viewport-Pan
    Pan,
    /// Drag der getroffenen Sektion
    SectionDrag(String),
}

/// Klassifiziert einen Button-Press.
///
/// `hit_section` ist die Sektion unter dem Zeiger (vom Renderer ermittelt).
pub fn classify_press(
    button: PressButton,
    modifiers: GestureModifiers,
    hit_section: Option<&str>,
) -> GestureStart {
    match button {
        PressButton::Middle => GestureStart::Pan,
        PressButton::Primary if modifiers.shift => GestureStart::Pan,
        PressButton::Primary => hit_section
            .map(|id| GestureStart::SectionDrag(id.to_string()))
            .unwrap_or(GestureStart::None),
        PressButton::Secondary | PressButton::Other => GestureStart::None,
    }
}
