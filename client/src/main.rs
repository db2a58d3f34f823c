mod api;
mod app;
mod chemical_filter;
mod config;
mod controller;
mod controls;
mod legend;
mod map_dom;
mod status;
mod tooltip;
mod zoom;

use leptos::mount::mount_to;
use leptos::prelude::*;
use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::config::ClientConfig;

thread_local! {
    static APP_MOUNT_HANDLE: RefCell<Option<Box<dyn Any>>> = RefCell::new(None);
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let mount_target = document
        .get_element_by_id("app")
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok());
    let config = ClientConfig::from_mount(mount_target.as_deref());
    let Some(target) = mount_target.or_else(|| document.body()) else {
        return;
    };

    APP_MOUNT_HANDLE.with(move |slot| {
        // A second mount would bind a second set of county hover listeners and
        // repaint effects; release the old one first.
        let _old = slot.borrow_mut().take();
        let handle = mount_to(target, move || view! { <App config=config /> });
        *slot.borrow_mut() = Some(Box::new(handle));
    });
}
