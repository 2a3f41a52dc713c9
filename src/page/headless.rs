// src/page/headless.rs
// DOCUMENTATION: In-memory page
// PURPOSE: Run page flows without a browser (preview binary, tests)

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{ids, Page};
use crate::controller::Route;
use crate::views::Fragment;

#[derive(Debug, Clone, Default)]
struct HeadlessElement {
    /// Current value (inputs, textareas, selects)
    value: Option<String>,
    /// Value restored by a form reset
    default_value: Option<String>,
    /// Form this field belongs to
    form: Option<String>,
    /// `None` until a flow sets `display`
    visible: Option<bool>,
    children: Vec<HeadlessChild>,
}

#[derive(Debug, Clone)]
struct HeadlessChild {
    fragment: Fragment,
    visible: bool,
}

/// In-memory document and window
/// DOCUMENTATION: Elements exist only when registered; alerts, navigations
/// and cookie writes are recorded for inspection
#[derive(Debug, Default)]
pub struct HeadlessPage {
    path: String,
    query: String,
    cookies: RefCell<Vec<(String, String)>>,
    elements: RefCell<BTreeMap<String, HeadlessElement>>,
    alerts: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
    form_resets: RefCell<Vec<String>>,
}

impl HeadlessPage {
    /// Page at `location`, e.g. "/place.html?id=42"
    pub fn new(location: &str) -> Self {
        let (path, query) = match location.find('?') {
            Some(index) => (&location[..index], &location[index..]),
            None => (location, ""),
        };

        HeadlessPage {
            path: path.to_string(),
            query: query.to_string(),
            ..Default::default()
        }
    }

    /// Page with the elements the HBnB markup provides for its route
    pub fn with_page_elements(location: &str) -> Self {
        let page = HeadlessPage::new(location);
        match Route::resolve(&page.path) {
            Route::Login => page
                .with_form(ids::LOGIN_FORM, &[(ids::EMAIL, ""), (ids::PASSWORD, "")]),
            Route::Listing => page
                .with_element(ids::LOGIN_LINK)
                .with_element(ids::PLACES_LIST)
                .with_input(ids::PRICE_FILTER, "All"),
            Route::Detail => page
                .with_element(ids::PLACE_DETAILS)
                .with_element(ids::REVIEWS)
                .with_element(ids::ADD_REVIEW),
            Route::AddReview => page
                .with_form(ids::REVIEW_FORM, &[(ids::REVIEW, ""), (ids::RATING, "5")]),
            Route::Other => page,
        }
    }

    pub fn with_element(self, id: &str) -> Self {
        self.elements
            .borrow_mut()
            .insert(id.to_string(), HeadlessElement::default());
        self
    }

    pub fn with_input(self, id: &str, value: &str) -> Self {
        self.elements.borrow_mut().insert(
            id.to_string(),
            HeadlessElement {
                value: Some(value.to_string()),
                default_value: Some(value.to_string()),
                ..Default::default()
            },
        );
        self
    }

    /// Form plus its fields as (id, default value)
    pub fn with_form(self, form_id: &str, fields: &[(&str, &str)]) -> Self {
        let page = self.with_element(form_id);
        {
            let mut elements = page.elements.borrow_mut();
            for (id, default) in fields {
                elements.insert(
                    id.to_string(),
                    HeadlessElement {
                        value: Some(default.to_string()),
                        default_value: Some(default.to_string()),
                        form: Some(form_id.to_string()),
                        ..Default::default()
                    },
                );
            }
        }
        page
    }

    pub fn with_cookie(self, cookie: &str) -> Self {
        self.set_cookie(cookie);
        self
    }

    /// Type into a field; false when the element is missing
    pub fn set_value(&self, id: &str, value: &str) -> bool {
        match self.elements.borrow_mut().get_mut(id) {
            Some(element) => {
                element.value = Some(value.to_string());
                true
            }
            None => false,
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn form_resets(&self) -> Vec<String> {
        self.form_resets.borrow().clone()
    }

    pub fn cookie(&self, name: &str) -> Option<String> {
        self.cookies
            .borrow()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    /// `display` state of an element: `None` when never toggled or missing
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.elements.borrow().get(id).and_then(|e| e.visible)
    }

    pub fn children(&self, id: &str) -> Vec<Fragment> {
        self.elements
            .borrow()
            .get(id)
            .map(|e| e.children.iter().map(|c| c.fragment.clone()).collect())
            .unwrap_or_default()
    }

    pub fn visible_children(&self, id: &str) -> Vec<Fragment> {
        self.elements
            .borrow()
            .get(id)
            .map(|e| {
                e.children
                    .iter()
                    .filter(|c| c.visible)
                    .map(|c| c.fragment.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Serialized children of every element that has any, keyed by id
    pub fn rendered(&self) -> BTreeMap<String, String> {
        self.elements
            .borrow()
            .iter()
            .filter(|(_, e)| !e.children.is_empty())
            .map(|(id, e)| {
                let html = e
                    .children
                    .iter()
                    .filter(|c| c.visible)
                    .map(|c| c.fragment.to_html())
                    .collect::<Vec<_>>()
                    .join("\n");
                (id.clone(), html)
            })
            .collect()
    }
}

impl Page for HeadlessPage {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn query(&self) -> String {
        self.query.clone()
    }

    fn cookies(&self) -> String {
        self.cookies
            .borrow()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Only the leading `name=value` pair is stored; attributes such as
    /// `path=/` are accepted and dropped
    fn set_cookie(&self, cookie: &str) {
        let pair = cookie.split(';').next().unwrap_or_default().trim();
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };

        let mut cookies = self.cookies.borrow_mut();
        match cookies.iter_mut().find(|(key, _)| key == name) {
            Some(existing) => existing.1 = value.to_string(),
            None => cookies.push((name.to_string(), value.to_string())),
        }
    }

    fn alert(&self, message: &str) {
        log::info!("alert: {}", message);
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn navigate(&self, href: &str) {
        log::info!("navigate: {}", href);
        self.navigations.borrow_mut().push(href.to_string());
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn value(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).and_then(|e| e.value.clone())
    }

    fn replace_children(&self, id: &str, fragments: &[Fragment]) -> bool {
        match self.elements.borrow_mut().get_mut(id) {
            Some(element) => {
                element.children = fragments
                    .iter()
                    .map(|fragment| HeadlessChild {
                        fragment: fragment.clone(),
                        visible: true,
                    })
                    .collect();
                true
            }
            None => false,
        }
    }

    fn set_visible(&self, id: &str, visible: bool) -> bool {
        match self.elements.borrow_mut().get_mut(id) {
            Some(element) => {
                element.visible = Some(visible);
                true
            }
            None => false,
        }
    }

    fn reset_form(&self, id: &str) -> bool {
        let mut elements = self.elements.borrow_mut();
        if !elements.contains_key(id) {
            return false;
        }

        for element in elements.values_mut() {
            if element.form.as_deref() == Some(id) {
                element.value = element.default_value.clone();
            }
        }
        self.form_resets.borrow_mut().push(id.to_string());
        true
    }

    fn attribute_values(&self, class: &str, attribute: &str) -> Vec<Option<String>> {
        self.elements
            .borrow()
            .values()
            .flat_map(|e| e.children.iter())
            .filter(|c| c.fragment.class == Some(class))
            .map(|c| c.fragment.attribute(attribute).map(str::to_string))
            .collect()
    }

    fn set_class_member_visible(&self, class: &str, index: usize, visible: bool) {
        let mut elements = self.elements.borrow_mut();
        let member = elements
            .values_mut()
            .flat_map(|e| e.children.iter_mut())
            .filter(|c| c.fragment.class == Some(class))
            .nth(index);

        if let Some(child) = member {
            child.visible = visible;
        }
    }
}
