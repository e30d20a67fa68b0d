//! Page startup: resolve the theme, schedule the scroll to a selected
//! snippet, then set up every component in a fixed order.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    Theme,
    ScrollToSelection,
    DateFormatter,
    CodeHighlighter,
    CodeEditor,
    MarkdownEditor,
    TagInput,
    SelectDropdown,
    CopyToClipboard,
    FavoriteToggle,
    KeyboardShortcuts,
}

/// Setup order. Theme comes first so the `dark` class is in place before any
/// widget reads it; the editors follow the highlighter they detect with.
pub const SETUP_ORDER: [Component; 11] = [
    Component::Theme,
    Component::ScrollToSelection,
    Component::DateFormatter,
    Component::CodeHighlighter,
    Component::CodeEditor,
    Component::MarkdownEditor,
    Component::TagInput,
    Component::SelectDropdown,
    Component::CopyToClipboard,
    Component::FavoriteToggle,
    Component::KeyboardShortcuts,
];

/// When [`run`] may start, given whether the document is still parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartTiming {
    Immediately,
    OnDomContentLoaded,
}

impl StartTiming {
    pub fn for_document(still_loading: bool) -> Self {
        if still_loading { Self::OnDomContentLoaded } else { Self::Immediately }
    }
}

/// Scroll `#snippet-{selected_id}` into view one event-loop turn after load.
#[cfg(feature = "hydrate")]
fn schedule_scroll_to_selection() {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    use crate::components::dom;
    use crate::util::query::scroll_target;

    let Some(location) = dom::window().map(|w| w.location()) else {
        return;
    };
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    let Some(target_id) = scroll_target(&search, &hash) else {
        return;
    };

    gloo_timers::callback::Timeout::new(0, move || {
        let Some(el) = dom::by_id::<web_sys::Element>(&target_id) else {
            log::debug!("selected snippet {target_id} not on page");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Instant);
        options.set_block(ScrollLogicalPosition::Center);
        options.set_inline(ScrollLogicalPosition::Center);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    })
    .forget();
}

/// Run every component setup in [`SETUP_ORDER`].
#[cfg(feature = "hydrate")]
pub fn run(config: crate::config::ClientConfig) {
    use crate::components::{
        code_editor, code_highlighter, copy_to_clipboard, date_formatter, favorite_button, keyboard_shortcuts,
        markdown_editor, select_dropdown, tags_input, theme_toggle,
    };

    use crate::state::theme::Theme;

    let mut theme = Theme::Light;
    for component in SETUP_ORDER {
        match component {
            Component::Theme => theme = theme_toggle::setup(),
            Component::ScrollToSelection => schedule_scroll_to_selection(),
            Component::DateFormatter => date_formatter::format(),
            Component::CodeHighlighter => code_highlighter::highlight_all(),
            Component::CodeEditor => code_editor::setup(code_highlighter::HljsDetector),
            Component::MarkdownEditor => markdown_editor::setup(&config, theme),
            Component::TagInput => tags_input::setup(),
            Component::SelectDropdown => select_dropdown::setup(&config),
            Component::CopyToClipboard => copy_to_clipboard::setup(&config),
            Component::FavoriteToggle => favorite_button::setup(&config),
            Component::KeyboardShortcuts => keyboard_shortcuts::setup(),
        }
    }
    log::debug!("client components ready");
}

/// Run [`run`] once the DOM is parsed: now, or on `DOMContentLoaded`.
#[cfg(feature = "hydrate")]
pub fn run_when_ready(config: crate::config::ClientConfig) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::components::dom;

    let Some(document) = dom::document() else {
        return;
    };
    match StartTiming::for_document(document.ready_state() == "loading") {
        StartTiming::Immediately => run(config),
        StartTiming::OnDomContentLoaded => {
            let on_ready = Closure::<dyn FnMut()>::once(move || run(config));
            let options = web_sys::AddEventListenerOptions::new();
            options.set_once(true);
            let added = document.add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                on_ready.as_ref().unchecked_ref(),
                &options,
            );
            if let Err(e) = added {
                log::warn!("DOMContentLoaded listener not registered: {e:?}");
            }
            on_ready.forget();
        }
    }
}
