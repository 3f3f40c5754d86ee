use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{DragEvent, HtmlElement};

use crate::error::HostError;
use crate::report;
use crate::state::State;
use crate::utils::warn;

const SWATCH_BORDER: &str = "1px solid #333";

/// Builds one draggable swatch per catalog entry inside the sidebar and
/// turns the sidebar itself into a drop target that deletes board pieces.
pub fn attach_palette(state: &Rc<RefCell<State>>) -> Result<(), HostError> {
    let (document, sidebar, catalog, unit) = {
        let s = state.borrow();
        (
            s.document.clone(),
            s.sidebar.clone(),
            s.board.catalog().to_vec(),
            s.board.unit(),
        )
    };

    for (index, archetype) in catalog.iter().enumerate() {
        let swatch: HtmlElement = document
            .create_element("div")?
            .dyn_into()
            .map_err(|_| HostError::WrongElement {
                id: "swatch",
                expected: "HtmlElement",
            })?;
        let side = format!("{}px", archetype.side(unit));
        let style = swatch.style();
        style.set_property("width", &side)?;
        style.set_property("height", &side)?;
        style.set_property("background", archetype.color)?;
        style.set_property("border", SWATCH_BORDER)?;
        style.set_property("cursor", "grab")?;
        swatch.set_draggable(true);
        swatch.set_title(archetype.name);

        let st = state.clone();
        let dragstart = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
            let (stale, picked) = st.borrow_mut().board.start_palette_drag(index);
            report(&stale);
            // Firefox will not start a drag without a payload.
            if let Some(a) = picked
                && let Some(dt) = e.data_transfer()
            {
                if let Err(err) = dt.set_data("text/plain", a.name) {
                    warn(&format!(
                        "could not set drag payload for {}: {}",
                        a.name,
                        HostError::from(err)
                    ));
                }
                dt.set_effect_allowed("copyMove");
            }
        }));
        swatch.add_event_listener_with_callback("dragstart", dragstart.as_ref().unchecked_ref())?;
        dragstart.forget();

        // Fires after any drop handler, so a session still live here never
        // reached the board.
        let st = state.clone();
        let dragend = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |_e: DragEvent| {
            let settled = st.borrow_mut().board.release_elsewhere();
            report(&settled);
        }));
        swatch.add_event_listener_with_callback("dragend", dragend.as_ref().unchecked_ref())?;
        dragend.forget();

        sidebar.append_child(&swatch)?;
    }

    let dragover = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
        e.prevent_default();
    }));
    sidebar.add_event_listener_with_callback("dragover", dragover.as_ref().unchecked_ref())?;
    dragover.forget();

    let st = state.clone();
    let ondrop = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
        e.prevent_default();
        let settled = st.borrow_mut().board.drop_on_palette();
        report(&settled);
    }));
    sidebar.add_event_listener_with_callback("drop", ondrop.as_ref().unchecked_ref())?;
    ondrop.forget();

    Ok(())
}
