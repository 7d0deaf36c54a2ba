use crate::error::ToggleError;
use crate::toggle::{CodeView, Display};
use crate::constants::DISPLAY_PROPERTY;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        true
    } else {
        false
    }
}

/// [`CodeView`] over the live document.
pub struct DomView {
    document: web::Document,
}

impl DomView {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    pub fn current() -> Result<Self, ToggleError> {
        window_document()
            .map(Self::new)
            .ok_or(ToggleError::NoDocument)
    }

    fn control(&self, control_id: &str) -> Result<web::Element, ToggleError> {
        self.document.get_element_by_id(control_id).ok_or_else(|| {
            log::warn!("[toggle] no element with id '{}'", control_id);
            ToggleError::ControlNotFound(control_id.to_string())
        })
    }
}

impl CodeView for DomView {
    fn label(&self, control_id: &str) -> Result<String, ToggleError> {
        let el = self.control(control_id)?;
        // <input type="button"> and <button> carry the label in `value`
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            return Ok(input.value());
        }
        if let Some(button) = el.dyn_ref::<web::HtmlButtonElement>() {
            return Ok(button.value());
        }
        Ok(el.text_content().unwrap_or_default())
    }

    fn set_label(&mut self, control_id: &str, label: &str) -> Result<(), ToggleError> {
        let el = self.control(control_id)?;
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_value(label);
        } else if let Some(button) = el.dyn_ref::<web::HtmlButtonElement>() {
            button.set_value(label);
        } else {
            el.set_text_content(Some(label));
        }
        Ok(())
    }

    fn set_display_all(&mut self, marker: &str, display: Display) -> Result<usize, ToggleError> {
        let blocks = self.document.get_elements_by_class_name(marker);
        let mut updated = 0;
        for i in 0..blocks.length() {
            let Some(el) = blocks.item(i) else { continue };
            match el.dyn_ref::<web::HtmlElement>() {
                Some(html) => {
                    html.style()
                        .set_property(DISPLAY_PROPERTY, display.as_str())
                        .map_err(|e| ToggleError::Dom(format!("{:?}", e)))?;
                    updated += 1;
                }
                None => log::debug!("[toggle] skipping non-html .{} <{}>", marker, el.tag_name()),
            }
        }
        Ok(updated)
    }
}
