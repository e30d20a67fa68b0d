//! Token editing for `data-tags-input` fields.
//!
//! Tagify renders the tokens; [`TagList`] decides the serialized field value.
//! The field is normalized through [`TagList::parse`] before Tagify reads it.
//! DragSort reorders the token nodes; the drop is replayed on the field value
//! as a [`TagList::move_tag`] and Tagify then re-reads its own list from DOM
//! order.

#[cfg(test)]
#[path = "tags_input_test.rs"]
mod tags_input_test;

use crate::state::tags::{Tag, TagList};

/// Field value Tagify writes back into the original input.
pub fn original_input_value(tags: Vec<Tag>) -> String {
    TagList::from_tags(tags).serialize()
}

/// Field value after dragging the tag at `from` to `to`. `None` when either
/// index is outside the field's tags.
pub fn reorder_field_value(raw: &str, from: usize, to: usize) -> Option<String> {
    let mut list = TagList::parse(raw);
    list.move_tag(from, to).then(|| list.serialize())
}

#[cfg(feature = "hydrate")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Tagify;

        #[wasm_bindgen(catch, constructor)]
        pub fn new(input: &web_sys::Element, options: &JsValue) -> Result<Tagify, JsValue>;

        #[wasm_bindgen(method, js_name = updateValueByDOMTags)]
        pub fn update_value_by_dom_tags(this: &Tagify);

        pub type DragSort;

        #[wasm_bindgen(catch, constructor)]
        pub fn new(scope: &JsValue, options: &JsValue) -> Result<DragSort, JsValue>;
    }
}

/// Position of `tag` among the tag nodes under `scope`.
#[cfg(feature = "hydrate")]
fn tag_index(scope: &web_sys::Element, selector: &str, tag: &wasm_bindgen::JsValue) -> Option<usize> {
    let Ok(nodes) = scope.query_selector_all(selector) else {
        return None;
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .position(|node| wasm_bindgen::JsValue::from(node) == *tag)
}

/// Read a nested property path like `DOM.scope` off a JS object.
#[cfg(feature = "hydrate")]
fn get_path(root: &wasm_bindgen::JsValue, path: &[&str]) -> Result<wasm_bindgen::JsValue, crate::error::ClientError> {
    path.iter().try_fold(root.clone(), |value, key| {
        js_sys::Reflect::get(&value, &(*key).into()).map_err(Into::into)
    })
}

#[cfg(feature = "hydrate")]
fn mount(input: &web_sys::HtmlInputElement) -> Result<(), crate::error::ClientError> {
    use std::cell::Cell;
    use std::rc::Rc;

    use js_sys::{Array, Object, Reflect, RegExp};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen::closure::Closure;

    use crate::error::ClientError;
    use crate::state::tags::TAG_PATTERN;

    let initial = TagList::parse(&input.value());
    let invalid = initial.invalid().count();
    if invalid > 0 {
        log::debug!("tag input starts with {invalid} of {} tags invalid", initial.len());
    }
    input.set_value(&initial.serialize());

    let options = Object::new();
    Reflect::set(&options, &"pattern".into(), &RegExp::new(TAG_PATTERN, "i"))?;
    Reflect::set(&options, &"keepInvalidTags".into(), &JsValue::TRUE)?;
    let format = Closure::<dyn Fn(Array) -> String>::new(|values: Array| {
        match serde_wasm_bindgen::from_value::<Vec<Tag>>(values.into()) {
            Ok(tags) => original_input_value(tags),
            Err(e) => {
                log::warn!("unreadable tag values: {e}");
                String::new()
            }
        }
    });
    Reflect::set(&options, &"originalInputValueFormat".into(), format.as_ref())?;
    format.forget();

    let tagify = Rc::new(bindings::Tagify::new(input, &options)?);

    let scope = get_path(&tagify, &["DOM", "scope"])?;
    let scope_el = scope
        .dyn_ref::<web_sys::Element>()
        .cloned()
        .ok_or_else(|| ClientError::Js("tagify scope missing".to_owned()))?;
    let tag_class = get_path(&tagify, &["settings", "classNames", "tag"])?
        .as_string()
        .ok_or_else(|| ClientError::Js("tagify tag class missing".to_owned()))?;
    let selector = format!(".{tag_class}");

    let drag_from: Rc<Cell<Option<usize>>> = Rc::new(Cell::new(None));

    let start_scope = scope_el.clone();
    let start_selector = selector.clone();
    let start_from = Rc::clone(&drag_from);
    let drag_start = Closure::<dyn FnMut(JsValue)>::new(move |tag: JsValue| {
        start_from.set(tag_index(&start_scope, &start_selector, &tag));
    });

    let end_selector = selector.clone();
    let field = input.clone();
    let tagify_for_drop = Rc::clone(&tagify);
    let drag_end = Closure::<dyn FnMut(JsValue)>::new(move |tag: JsValue| {
        let to = tag_index(&scope_el, &end_selector, &tag);
        if let (Some(from), Some(to)) = (drag_from.take(), to) {
            match reorder_field_value(&field.value(), from, to) {
                Some(value) => field.set_value(&value),
                None => log::debug!("tag drag {from} -> {to} outside field value"),
            }
        }
        tagify_for_drop.update_value_by_dom_tags();
    });

    let sort_options = Object::new();
    Reflect::set(&sort_options, &"selector".into(), &selector.into())?;
    let callbacks = Object::new();
    Reflect::set(&callbacks, &"dragStart".into(), drag_start.as_ref())?;
    Reflect::set(&callbacks, &"dragEnd".into(), drag_end.as_ref())?;
    Reflect::set(&sort_options, &"callbacks".into(), &callbacks)?;
    drag_start.forget();
    drag_end.forget();

    bindings::DragSort::new(&scope, &sort_options)?;
    Ok(())
}

/// Turn every tag input on the page into a token editor.
#[cfg(feature = "hydrate")]
pub fn setup() {
    use wasm_bindgen::JsCast;

    use crate::consts::ATTR_TAGS_INPUT;

    for el in super::dom::query_all(&format!("[{ATTR_TAGS_INPUT}]")) {
        let Ok(input) = el.dyn_into::<web_sys::HtmlInputElement>() else {
            continue;
        };
        if let Err(e) = mount(&input) {
            log::warn!("tag input not mounted: {e}");
        }
    }
}
