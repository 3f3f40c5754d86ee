use board_core::Point;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent};

use crate::error::HostError;

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

pub fn warn(s: &str) {
    web_sys::console::warn_1(&JsValue::from_str(s));
}

pub fn error(s: &str) {
    web_sys::console::error_1(&JsValue::from_str(s));
}

/// Look up `#id` and cast it to the expected element type.
pub fn find_element<T: JsCast>(
    document: &Document,
    id: &'static str,
    expected: &'static str,
) -> Result<T, HostError> {
    document
        .get_element_by_id(id)
        .ok_or(HostError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| HostError::WrongElement { id, expected })
}

/// Convert client coordinates into canvas pixel coordinates so hit testing
/// stays correct when CSS scales the canvas element.
pub fn event_canvas_coords(e: &MouseEvent, cv: &HtmlCanvasElement) -> Point {
    let rect = cv.get_bounding_client_rect();
    let x = (f64::from(e.client_x()) - rect.left()) * f64::from(cv.width()) / rect.width().max(1.0);
    let y =
        (f64::from(e.client_y()) - rect.top()) * f64::from(cv.height()) / rect.height().max(1.0);
    Point { x, y }
}

/// Whether a client-space point falls inside the element's box.
pub fn contains_client_point(el: &Element, x: f64, y: f64) -> bool {
    let rect = el.get_bounding_client_rect();
    x >= rect.left() && x < rect.right() && y >= rect.top() && y < rect.bottom()
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let plus_as_space = s.replace('+', " ");
    match percent_encoding::percent_decode_str(&plus_as_space).decode_utf8() {
        Ok(v) => v.into_owned(),
        Err(_) => s.to_string(),
    }
}
