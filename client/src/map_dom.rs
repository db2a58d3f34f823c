//! Direct access to the static SVG map shipped with the page.

use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, MouseEvent, SvgElement};

use triexplore_shared::Choropleth;

use crate::tooltip::CountyHover;
use crate::zoom::ZoomScale;

const COUNTY_SELECTOR: &str = "#map .county";
const TOOLTIP_ATTR: &str = "data-tooltip";
/// Inkscape stores the county name here when the map is authored.
const NAME_ATTRS: &[&str] = &["inkscape:label", "data-name"];

struct HoverBinding {
    map: Element,
    on_move: Closure<dyn Fn(MouseEvent)>,
    on_leave: Closure<dyn Fn(MouseEvent)>,
}

impl HoverBinding {
    fn unbind(self) {
        let _ = self
            .map
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        let _ = self.map.remove_event_listener_with_callback(
            "mouseleave",
            self.on_leave.as_ref().unchecked_ref(),
        );
    }
}

thread_local! {
    static HOVER_BINDING: RefCell<Option<HoverBinding>> = const { RefCell::new(None) };
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Every county element on the map.
pub fn county_elements() -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all(COUNTY_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Display name of a county, falling back to its id.
pub fn county_name(county: &Element) -> String {
    NAME_ATTRS
        .iter()
        .find_map(|attr| county.get_attribute(attr))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| county.id())
}

/// Label each county with its bare name until the first data arrives.
pub fn seed_tooltips() {
    for county in county_elements() {
        let _ = county.set_attribute(TOOLTIP_ATTR, &county_name(&county));
    }
}

/// Restyle every county from `map`. Safe to call repeatedly with the same data.
pub fn paint(map: &Choropleth) {
    for county in county_elements() {
        let id = county.id();
        let _ = county.set_attribute("class", &map.county_class(&id));
        let _ = county.set_attribute(TOOLTIP_ATTR, &map.tooltip(&county_name(&county), &id));
    }
}

fn inline_style(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    el.dyn_ref::<SvgElement>().map(SvgElement::style)
}

fn set_size(doc: &Document, id: &str, width: f64, height: Option<f64>) {
    let Some(style) = doc.get_element_by_id(id).as_ref().and_then(inline_style) else {
        return;
    };
    let _ = style.set_property("width", &format!("{width}px"));
    if let Some(height) = height {
        let _ = style.set_property("height", &format!("{height}px"));
    }
}

/// Resize the page around the map and scale its drawing group.
pub fn apply_zoom(zoom: ZoomScale) {
    let Some(doc) = document() else {
        return;
    };
    let layout = zoom.layout();
    set_size(&doc, "content", layout.content_width, None);
    set_size(&doc, "hoverHelp", layout.map_width, None);
    set_size(&doc, "map", layout.map_width, Some(layout.map_height));
    if let Some(group) = doc.get_element_by_id("scalingGroup") {
        let _ = group.set_attribute("transform", &layout.transform);
    }
}

/// Track the county under the pointer so the tooltip can follow it.
pub fn bind_hover(hovered: RwSignal<Option<CountyHover>>) {
    HOVER_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            old.unbind();
        }
    });

    let Some(map) = document().and_then(|doc| doc.get_element_by_id("map")) else {
        web_sys::console::warn_1(&"map element not found; tooltips disabled".into());
        return;
    };

    let on_move = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
        let county = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(".county").ok().flatten());
        let next = county.and_then(|county| {
            county.get_attribute(TOOLTIP_ATTR).map(|text| CountyHover {
                text,
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            })
        });
        hovered.set(next);
    });
    let on_leave = Closure::<dyn Fn(MouseEvent)>::new(move |_: MouseEvent| {
        hovered.set(None);
    });

    let bound = map
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .is_ok()
        && map
            .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())
            .is_ok();
    if !bound {
        web_sys::console::warn_1(&"failed to bind map hover listeners".into());
    }

    HOVER_BINDING.with(|slot| {
        *slot.borrow_mut() = Some(HoverBinding {
            map,
            on_move,
            on_leave,
        });
    });
}
