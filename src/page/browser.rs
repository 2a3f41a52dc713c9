// src/page/browser.rs
// DOCUMENTATION: Browser page
// PURPOSE: `Page` over the live DOM through web-sys

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlDocument, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, Window,
};

use super::Page;
use crate::views::Fragment;

/// The current window and document
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn new() -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "document is unavailable".to_string())?;
        Ok(BrowserPage { window, document })
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn class_member(&self, class: &str, index: usize) -> Option<Element> {
        self.document
            .get_elements_by_class_name(class)
            .item(index as u32)
    }

    fn create(&self, fragment: &Fragment) -> Result<Element, String> {
        let element = self
            .document
            .create_element(fragment.tag)
            .map_err(|_| format!("failed to create <{}>", fragment.tag))?;
        if let Some(class) = fragment.class {
            element.set_class_name(class);
        }
        for (name, value) in &fragment.attributes {
            element
                .set_attribute(name, value)
                .map_err(|_| format!("failed to set {} on <{}>", name, fragment.tag))?;
        }
        element.set_inner_html(&fragment.inner_html);
        Ok(element)
    }
}

fn set_display(element: &Element, visible: bool) -> bool {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return false;
    };
    element
        .style()
        .set_property("display", if visible { "block" } else { "none" })
        .is_ok()
}

impl Page for BrowserPage {
    fn path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn query(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    fn cookies(&self) -> String {
        self.document
            .dyn_ref::<HtmlDocument>()
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }

    fn set_cookie(&self, cookie: &str) {
        if let Some(document) = self.document.dyn_ref::<HtmlDocument>() {
            if document.set_cookie(cookie).is_err() {
                log::error!("Failed to write cookie");
            }
        }
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn navigate(&self, href: &str) {
        if let Err(e) = self.window.location().set_href(href) {
            log::error!("Failed to navigate to {}: {:?}", href, e);
        }
    }

    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn value(&self, id: &str) -> Option<String> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            return Some(textarea.value());
        }
        element
            .dyn_ref::<HtmlSelectElement>()
            .map(HtmlSelectElement::value)
    }

    fn replace_children(&self, id: &str, fragments: &[Fragment]) -> bool {
        let Some(container) = self.element(id) else {
            return false;
        };

        container.set_inner_html("");
        for fragment in fragments {
            match self.create(fragment) {
                Ok(child) => {
                    let _ = container.append_child(&child);
                }
                Err(e) => log::error!("{}", e),
            }
        }
        true
    }

    fn set_visible(&self, id: &str, visible: bool) -> bool {
        self.element(id)
            .map_or(false, |element| set_display(&element, visible))
    }

    fn reset_form(&self, id: &str) -> bool {
        match self
            .element(id)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
        {
            Some(form) => {
                form.reset();
                true
            }
            None => false,
        }
    }

    fn attribute_values(&self, class: &str, attribute: &str) -> Vec<Option<String>> {
        let members = self.document.get_elements_by_class_name(class);
        (0..members.length())
            .map(|index| {
                members
                    .item(index)
                    .and_then(|element| element.get_attribute(attribute))
            })
            .collect()
    }

    fn set_class_member_visible(&self, class: &str, index: usize, visible: bool) {
        if let Some(element) = self.class_member(class, index) {
            set_display(&element, visible);
        }
    }
}
