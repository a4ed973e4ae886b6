//! Browser entry point: configuration, logging, listener wiring, and JS exports.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use tracing::error;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::controller::UiController;
use crate::error::{Result, UiError};
use crate::page::web::WebPage;
use crate::telemetry::init_logging;

type SharedController = Rc<RefCell<UiController<WebPage>>>;

struct Session {
    controller: SharedController,
    _listeners: Vec<EventListener>,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Bind the controller to the current page and attach its listeners.
///
/// A failure leaves the page without any handler and is reported on the console.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Err(err) = start() {
        console::error!("barber-ui failed to start:", err.to_string());
    }
}

fn start() -> Result<()> {
    let page = WebPage::from_window()?;
    let config = load_config(&page)?;
    if let Err(err) = init_logging(&config.logging) {
        console::warn!("barber-ui logging unavailable:", err.to_string());
    }
    let controller = Rc::new(RefCell::new(UiController::bind(page, config)?));
    let listeners = wire(&controller);
    SESSION.with(|session| {
        session.replace(Some(Session {
            controller,
            _listeners: listeners,
        }))
    });
    Ok(())
}

fn load_config(page: &WebPage) -> Result<PageConfig> {
    match page.text_of(CONFIG_ELEMENT_ID) {
        Some(document) if !document.trim().is_empty() => PageConfig::from_json(&document),
        _ => Ok(PageConfig::default()),
    }
}

fn wire(controller: &SharedController) -> Vec<EventListener> {
    let (widgets, dropdown_id) = {
        let bound = controller.borrow();
        (
            bound.widgets().clone(),
            bound.config().elements.dropdown_menu.clone(),
        )
    };
    let mut listeners = vec![listen(
        controller,
        &widgets.menu_toggle,
        "click",
        "toggleMobileMenu",
        |c| c.toggle_mobile_menu().map(drop),
    )];
    for button in &widgets.theme_buttons {
        listeners.push(listen(controller, button, "click", "toggleTheme", |c| {
            c.toggle_theme().map(drop)
        }));
    }
    if let Some(form) = &widgets.service_form {
        listeners.push(listen(
            controller,
            &form.select,
            "change",
            "updateCustomServiceField",
            |c| c.update_custom_service_field().map(drop),
        ));
    }
    for (button, category) in widgets.service_filters {
        listeners.push(listen(
            controller,
            &button,
            "click",
            "filterServices",
            move |c| c.filter_services(&category).map(drop),
        ));
    }
    if let Some(dropdown) = &widgets.dropdown {
        listeners.push(listen(
            controller,
            &dropdown.button,
            "click",
            "toggleDropdown",
            move |c| c.toggle_dropdown(&dropdown_id).map(drop),
        ));
        if let Some(close) = &dropdown.close {
            listeners.push(listen(
                controller,
                close,
                "click",
                "closeDropdown",
                UiController::close_dropdown,
            ));
        }
    }
    listeners
}

fn listen<F>(
    controller: &SharedController,
    target: &Element,
    event: &'static str,
    handler: &'static str,
    op: F,
) -> EventListener
where
    F: Fn(&mut UiController<WebPage>) -> Result<()> + 'static,
{
    let controller = Rc::clone(controller);
    EventListener::new(target, event, move |_event| {
        report(handler, run(&controller, &op));
    })
}

fn run<T>(
    controller: &SharedController,
    op: impl FnOnce(&mut UiController<WebPage>) -> Result<T>,
) -> Result<T> {
    let mut bound = controller
        .try_borrow_mut()
        .map_err(|_| UiError::ControllerBusy)?;
    op(&mut *bound)
}

fn report<T>(handler: &'static str, outcome: Result<T>) {
    if let Err(err) = outcome {
        error!(handler, error = %err, "handler failed");
    }
}

fn invoke<T>(handler: &'static str, op: impl FnOnce(&mut UiController<WebPage>) -> Result<T>) {
    let shared = SESSION.with(|session| {
        session
            .borrow()
            .as_ref()
            .map(|session| Rc::clone(&session.controller))
            .ok_or(UiError::NotStarted)
    });
    report(handler, shared.and_then(|controller| run(&controller, op)));
}

/// Flip the mobile menu.
#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() {
    invoke("toggleMobileMenu", UiController::toggle_mobile_menu);
}

/// Flip the theme.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    invoke("toggleTheme", UiController::toggle_theme);
}

/// Sync the custom-service field with the service select.
#[wasm_bindgen(js_name = updateCustomServiceField)]
pub fn update_custom_service_field() {
    invoke(
        "updateCustomServiceField",
        UiController::update_custom_service_field,
    );
}

/// Show only service cards of `service_type`; all when empty.
#[wasm_bindgen(js_name = filterServices)]
pub fn filter_services(service_type: &str) {
    invoke("filterServices", |c| c.filter_services(service_type));
}

/// Flip the dropdown panel with `dropdown_id`.
#[wasm_bindgen(js_name = toggleDropdown)]
pub fn toggle_dropdown(dropdown_id: &str) {
    invoke("toggleDropdown", |c| c.toggle_dropdown(dropdown_id));
}

/// Hide the dropdown panel.
#[wasm_bindgen(js_name = closeDropdown)]
pub fn close_dropdown() {
    invoke("closeDropdown", UiController::close_dropdown);
}

/// Reveal the delete-confirmation modal.
#[wasm_bindgen(js_name = showDeleteModal)]
pub fn show_delete_modal() {
    invoke("showDeleteModal", UiController::show_delete_modal);
}

/// Hide the delete-confirmation modal.
#[wasm_bindgen(js_name = hideDeleteModal)]
pub fn hide_delete_modal() {
    invoke("hideDeleteModal", UiController::hide_delete_modal);
}
