use std::cell::RefCell;
use std::rc::Rc;

use board_core::DragSession;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{DragEvent, MouseEvent};

use crate::error::HostError;
use crate::report;
use crate::state::State;
use crate::utils::{contains_client_point, event_canvas_coords};

/// Wires pointer and drag-and-drop events on the board canvas.
pub fn attach_board_input(state: &Rc<RefCell<State>>) -> Result<(), HostError> {
    let (window, canvas) = {
        let s = state.borrow();
        (s.window.clone(), s.canvas.clone())
    };

    // Mouse events
    {
        let st = state.clone();
        let mousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            let pt = event_canvas_coords(&e, &s.canvas);
            let (stale, picked) = s.board.pointer_down(pt);
            report(&stale);
            if picked.is_some() {
                // keep the browser from starting a text selection
                e.prevent_default();
            }
        }));
        canvas.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        mousedown.forget();
    }
    {
        let st = state.clone();
        let mousemove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            let pt = event_canvas_coords(&e, &s.canvas);
            s.board.pointer_move(pt);
        }));
        canvas.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
        mousemove.forget();
    }
    {
        // Listen on the window so releases outside the canvas are seen too.
        let st = state.clone();
        let mouseup = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            if !s.board.session().is_some_and(DragSession::is_from_board) {
                return;
            }
            let (x, y) = (f64::from(e.client_x()), f64::from(e.client_y()));
            let settled = if contains_client_point(&s.canvas, x, y) {
                s.board.pointer_up()
            } else if contains_client_point(&s.sidebar, x, y) {
                s.board.drop_on_palette()
            } else {
                s.board.release_elsewhere()
            };
            report(&settled);
        }));
        window.add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())?;
        mouseup.forget();
    }

    // Drag and drop from the palette
    {
        let dragover = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
            e.prevent_default();
        }));
        canvas.add_event_listener_with_callback("dragover", dragover.as_ref().unchecked_ref())?;
        dragover.forget();
    }
    {
        let st = state.clone();
        let ondrop = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
            e.prevent_default();
            let mut s = st.borrow_mut();
            let pt = event_canvas_coords(&e, &s.canvas);
            let settled = s.board.drop_on_board(pt);
            report(&settled);
        }));
        canvas.add_event_listener_with_callback("drop", ondrop.as_ref().unchecked_ref())?;
        ondrop.forget();
    }

    Ok(())
}
