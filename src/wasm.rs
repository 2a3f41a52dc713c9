// src/wasm.rs
// DOCUMENTATION: Browser entry point
// PURPOSE: Initialize logging, boot the page controller on DOMContentLoaded, attach listeners

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::config::ClientConfig;
use crate::controller::{DomEvent, EventBinding, PageController};
use crate::page::BrowserPage;
use crate::services::HbnbApiClient;

type BrowserController = Rc<PageController<BrowserPage>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let config = ClientConfig::default();
    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
    }
    log::info!("HBnB client starting (API: {})", config.api_base_url);

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;

    if document.ready_state() == "loading" {
        let callback =
            Closure::<dyn FnMut(web_sys::Event)>::once(move |_event: web_sys::Event| {
                boot(&config)
            });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            callback.as_ref().unchecked_ref(),
        )?;
        callback.forget();
    } else {
        boot(&config);
    }

    Ok(())
}

fn boot(config: &ClientConfig) {
    let page = match BrowserPage::new() {
        Ok(page) => page,
        Err(e) => {
            log::error!("Cannot boot page controller: {}", e);
            return;
        }
    };

    let controller: BrowserController =
        Rc::new(PageController::new(page, HbnbApiClient::new(config)));

    spawn_local(async move {
        for binding in controller.boot().await {
            attach(&controller, binding);
        }
    });
}

fn attach(controller: &BrowserController, binding: EventBinding) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(binding.element_id))
    else {
        return;
    };

    let controller = controller.clone();
    let event = binding.event;
    let action = binding.action;
    let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
        move |dom_event: web_sys::Event| {
            if event == DomEvent::Submit {
                dom_event.prevent_default();
            }
            let controller = controller.clone();
            let action = action.clone();
            spawn_local(async move { controller.handle(action).await });
        },
    ));

    if element
        .add_event_listener_with_callback(event.name(), callback.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("Failed to attach {} listener to #{}", event.name(), binding.element_id);
    }
    callback.forget();
}
