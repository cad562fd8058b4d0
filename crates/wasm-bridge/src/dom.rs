//! DOM wrappers around the navigation and class toggle decisions

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::navigation::{matching_tabs, next_color_class, NavConfig};

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window object"))?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object"))
}

fn element_by_id(id: &str) -> Result<Element, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element not found: {id}")))
}

/// Mark the nav tab for the current page as active.
///
/// Returns the index of the first activated tab. Nothing is touched on the
/// dashboard root.
pub fn init_tabs(config: &NavConfig) -> Result<Option<usize>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
    let pathname = window.location().pathname()?;
    highlight_tabs(&pathname, config)
}

/// Mark the nav tabs matching `pathname` as active
pub fn highlight_tabs(pathname: &str, config: &NavConfig) -> Result<Option<usize>, JsValue> {
    if pathname == config.root_path {
        return Ok(None);
    }

    let anchors = document()?.query_selector_all(&config.nav_selector)?;
    let mut elements = Vec::with_capacity(anchors.length() as usize);
    for i in 0..anchors.length() {
        if let Some(node) = anchors.item(i) {
            elements.push(node.dyn_into::<Element>().map_err(JsValue::from)?);
        }
    }

    let hrefs: Vec<String> = elements
        .iter()
        .map(|el| el.get_attribute("href").unwrap_or_default())
        .collect();

    for element in &elements {
        element.class_list().remove_1(&config.active_class)?;
    }

    let matches = matching_tabs(pathname, &hrefs, config);
    for &i in &matches {
        elements[i].class_list().add_1(&config.active_class)?;
    }

    log::debug!("Highlighted {} nav tab(s) for {pathname}", matches.len());
    Ok(matches.first().copied())
}

/// Move an element one step through a cycle of classes
pub fn toggle_color_class<S: AsRef<str>>(element: &Element, classes: &[S]) -> Result<(), JsValue> {
    let list = element.class_list();
    let Some(toggle) = next_color_class(|c| list.contains(c), classes) else {
        return Ok(());
    };

    if let Some(remove) = &toggle.remove {
        list.remove_1(remove)?;
    }
    list.add_1(&toggle.add)
}

/// Toggle the element with id `target_id` by id
pub fn toggle_color_class_by_id<S: AsRef<str>>(
    target_id: &str,
    classes: &[S],
) -> Result<(), JsValue> {
    toggle_color_class(&element_by_id(target_id)?, classes)
}

/// Cycle `target_id` through `classes` on every click of `button_id`
pub fn bind_toggle_button(
    button_id: &str,
    target_id: &str,
    classes: Vec<String>,
) -> Result<(), JsValue> {
    let button = element_by_id(button_id)?;
    let target_id = target_id.to_string();

    let on_click = Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = toggle_color_class_by_id(&target_id, &classes) {
            log::error!("Class toggle failed: {e:?}");
        }
    });

    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // The listener lives as long as the page
    on_click.forget();
    Ok(())
}
