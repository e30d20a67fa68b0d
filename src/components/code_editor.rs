//! Editing affordances for `data-textarea-code` textareas.
//!
//! ARCHITECTURE
//! ============
//! Setup discovers each code textarea once and builds a [`CodeEditor`]
//! holding typed handles to it and, when both exist on the page, the
//! language select and detected-language display. Key handling always
//! attaches; auto-detection only when the detection controls are present.
//!
//! Text changes come from `util::editing`; language mapping from
//! `state::language`. This file only moves values between them and the DOM.

#[cfg(test)]
#[path = "code_editor_test.rs"]
mod code_editor_test;

use crate::state::language::{Detection, Language};

/// Text shown in the detected-language display.
pub fn detection_label(detection: &Detection) -> String {
    format!("Detected: {}", detection.language.label())
}

/// Value to force into the language select on submit.
///
/// Falls back to plain text when the select has no option for `language`;
/// `None` when it has neither.
pub fn submit_value(language: Language, has_option: impl Fn(&str) -> bool) -> Option<&'static str> {
    [language, Language::Plaintext]
        .into_iter()
        .map(Language::id)
        .find(|id| has_option(id))
}

#[cfg(feature = "hydrate")]
pub use browser::{CodeEditor, setup};

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Event, HtmlElement, HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent};

    use super::super::dom;
    use super::{detection_label, submit_value};
    use crate::consts::{
        ATTR_LANGUAGE, ATTR_TEXTAREA_CODE, ID_DETECTED_LANGUAGE, ID_LANGUAGE_SELECT, ID_SNIPPET_SAVE_FORM,
        LANGUAGE_AUTO,
    };
    use crate::state::language::{LanguageDetector, detect_language, language_for_submit};
    use crate::util::editing::{self, TextEdit};

    /// Language select plus the element showing what was detected.
    #[derive(Clone)]
    struct DetectionControls {
        select: HtmlSelectElement,
        display: HtmlElement,
    }

    impl DetectionControls {
        fn discover() -> Option<Self> {
            Some(Self {
                select: dom::by_id(ID_LANGUAGE_SELECT)?,
                display: dom::by_id(ID_DETECTED_LANGUAGE)?,
            })
        }

        fn is_auto(&self) -> bool {
            self.select.value() == LANGUAGE_AUTO
        }

        fn has_option(&self, value: &str) -> bool {
            self.select
                .query_selector(&format!("option[value=\"{value}\"]"))
                .ok()
                .flatten()
                .is_some()
        }
    }

    /// One code textarea and its handler state.
    #[derive(Clone)]
    pub struct CodeEditor {
        textarea: HtmlTextAreaElement,
        detection: Option<DetectionControls>,
    }

    impl CodeEditor {
        fn selection(&self) -> (u32, u32) {
            let fallback = u32::try_from(self.textarea.value().encode_utf16().count()).unwrap_or(u32::MAX);
            let start = self.textarea.selection_start().ok().flatten().unwrap_or(fallback);
            let end = self.textarea.selection_end().ok().flatten().unwrap_or(start);
            (start, end)
        }

        fn apply(&self, edit: &TextEdit) {
            self.textarea.set_value(&edit.value);
            let placed = self
                .textarea
                .set_selection_start(Some(edit.cursor))
                .and_then(|()| self.textarea.set_selection_end(Some(edit.cursor)));
            if let Err(e) = placed {
                log::warn!("cursor placement failed: {e:?}");
            }
            dom::dispatch_input(&self.textarea);
        }

        fn on_tab(&self, ev: &KeyboardEvent) {
            ev.prevent_default();
            ev.stop_propagation();
            let (start, end) = self.selection();
            self.apply(&editing::insert_tab(&self.textarea.value(), start, end));
        }

        fn on_enter(&self, ev: &KeyboardEvent) {
            ev.prevent_default();
            let (start, end) = self.selection();
            self.apply(&editing::insert_newline(&self.textarea.value(), start, end));
        }

        fn on_input<D: LanguageDetector>(&self, controls: &DetectionControls, detector: &D) {
            controls.display.set_text_content(Some(""));
            if !controls.is_auto() {
                return;
            }
            if let Err(e) = self.textarea.remove_attribute(ATTR_LANGUAGE) {
                log::warn!("language attribute not cleared: {e:?}");
            }
            let Some(found) = detect_language(detector, &self.textarea.value()) else {
                return;
            };
            controls.display.set_text_content(Some(&detection_label(&found)));
            if let Err(e) = self.textarea.set_attribute(ATTR_LANGUAGE, &found.detector_name) {
                log::warn!("language attribute not set: {e:?}");
            }
        }

        fn on_submit<D: LanguageDetector>(&self, controls: &DetectionControls, detector: &D) {
            if !controls.is_auto() {
                return;
            }
            let language = language_for_submit(detector, &self.textarea.value());
            match submit_value(language, |id| controls.has_option(id)) {
                Some(id) => {
                    log::debug!("submitting detected language {id}");
                    controls.select.set_value(id);
                }
                None => log::warn!("language select has no option for {}", language.id()),
            }
        }

        fn bind<D>(self, detector: D)
        where
            D: LanguageDetector + Clone + 'static,
        {
            let editor = Rc::new(self);

            let tab_editor = Rc::clone(&editor);
            dom::log_listen_error(
                "code editor tab",
                dom::listen_capture(&editor.textarea, "keydown", move |ev: Event| {
                    if let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() {
                        if key_ev.key() == "Tab" {
                            tab_editor.on_tab(key_ev);
                        }
                    }
                }),
            );

            let enter_editor = Rc::clone(&editor);
            dom::log_listen_error(
                "code editor enter",
                dom::listen(&editor.textarea, "keydown", move |ev: Event| {
                    if let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() {
                        if key_ev.key() == "Enter" {
                            enter_editor.on_enter(key_ev);
                        }
                    }
                }),
            );

            let Some(controls) = editor.detection.clone() else {
                return;
            };

            let input_editor = Rc::clone(&editor);
            let input_controls = controls.clone();
            let input_detector = detector.clone();
            dom::log_listen_error(
                "code editor detection",
                dom::listen(&editor.textarea, "input", move |_| {
                    input_editor.on_input(&input_controls, &input_detector);
                }),
            );

            if let Some(form) = dom::by_id::<web_sys::EventTarget>(ID_SNIPPET_SAVE_FORM) {
                let submit_editor = Rc::clone(&editor);
                dom::log_listen_error(
                    "code editor submit",
                    dom::listen(&form, "submit", move |_| {
                        submit_editor.on_submit(&controls, &detector);
                    }),
                );
            }
        }
    }

    /// Attach editing behavior to every code textarea on the page.
    pub fn setup<D>(detector: D)
    where
        D: LanguageDetector + Clone + 'static,
    {
        let textareas: Vec<HtmlTextAreaElement> = dom::query_all(&format!("[{ATTR_TEXTAREA_CODE}]"))
            .into_iter()
            .filter_map(|el| el.dyn_into().ok())
            .collect();
        if textareas.is_empty() {
            return;
        }
        let detection = DetectionControls::discover();
        if detection.is_none() {
            log::debug!("language controls missing; auto-detection disabled");
        }
        for textarea in textareas {
            CodeEditor {
                textarea,
                detection: detection.clone(),
            }
            .bind(detector.clone());
        }
    }
}
