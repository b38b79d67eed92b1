//! Canvas-Input-Handling: egui-Events → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `buttons` — Button-Press/-Release (Pan-Start, Sektions-Drag, Gesten-Ende)
//! - `wheel` — Wheel-Zoom mit Ctrl/Cmd
//!
//! Positionen werden relativ zur linken oberen Canvas-Ecke in Screen-Pixeln
//! weitergereicht.

mod buttons;
mod wheel;

use crate::app::AppIntent;
use crate::core::{GestureModifiers, PressButton};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Hit-Test des Renderers: Canvas-Position → getroffene Sektion.
pub trait SectionHitTest {
    /// ID der obersten Sektion unter `canvas_pos`.
    fn section_at(&self, canvas_pos: Vec2) -> Option<String>;
}

impl<F> SectionHitTest for F
where
    F: Fn(Vec2) -> Option<String>,
{
    fn section_at(&self, canvas_pos: Vec2) -> Option<String> {
        self(canvas_pos)
    }
}

/// Verwaltet den Input-Zustand des Canvas.
#[derive(Debug, Default)]
pub struct InputState {
    /// Zuletzt gesehene Zeigerposition (Canvas-Pixel)
    last_pointer: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { last_pointer: None }
    }

    /// Zuletzt gesehene Zeigerposition.
    pub fn last_pointer(&self) -> Option<Vec2> {
        self.last_pointer
    }

    /// Sammelt die Events des aktuellen Frames aus egui und gibt AppIntents zurück.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        options: &EditorOptions,
        hit_test: &dyn SectionHitTest,
    ) -> Vec<AppIntent> {
        let events = ui.input(|i| i.events.clone());
        self.translate_events(&events, response.rect, options, hit_test)
    }

    /// Übersetzt rohe egui-Events in AppIntents.
    ///
    /// Button-Presses außerhalb von `canvas_rect` werden ignoriert; Bewegungen
    /// und Releases immer weitergereicht, damit laufende Gesten sauber enden.
    pub fn translate_events(
        &mut self,
        events: &[egui::Event],
        canvas_rect: egui::Rect,
        options: &EditorOptions,
        hit_test: &dyn SectionHitTest,
    ) -> Vec<AppIntent> {
        let mut intents = Vec::new();
        for event in events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    modifiers,
                    ..
                } => {
                    let pointer = to_canvas(*pos, canvas_rect);
                    self.last_pointer = Some(pointer);
                    if *pressed {
                        if canvas_rect.contains(*pos) {
                            self.handle_press(
                                pointer,
                                map_button(*button),
                                map_modifiers(modifiers),
                                hit_test,
                                &mut intents,
                            );
                        }
                    } else {
                        self.handle_release(&mut intents);
                    }
                }
                egui::Event::PointerMoved(pos) => {
                    let pointer = to_canvas(*pos, canvas_rect);
                    self.last_pointer = Some(pointer);
                    intents.push(AppIntent::PointerMoved { pointer });
                }
                egui::Event::MouseWheel {
                    unit,
                    delta,
                    modifiers,
                    ..
                } => self.handle_wheel(*unit, *delta, map_modifiers(modifiers), options, &mut intents),
                _ => {}
            }
        }
        intents
    }
}

/// Screen-Position → Canvas-lokale Pixel.
fn to_canvas(pos: egui::Pos2, canvas_rect: egui::Rect) -> Vec2 {
    let local = pos - canvas_rect.min;
    Vec2::new(local.x, local.y)
}

fn map_button(button: egui::PointerButton) -> PressButton {
    match button {
        egui::PointerButton::Primary => PressButton::Primary,
        egui::PointerButton::Middle => PressButton::Middle,
        egui::PointerButton::Secondary => PressButton::Secondary,
        _ => PressButton::Other,
    }
}

fn map_modifiers(modifiers: &egui::Modifiers) -> GestureModifiers {
    GestureModifiers {
        shift: modifiers.shift,
        ctrl: modifiers.ctrl,
        command: modifiers.command || modifiers.mac_cmd,
    }
}
