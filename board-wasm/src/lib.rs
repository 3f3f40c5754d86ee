use std::cell::RefCell;
use std::rc::Rc;

use board_core::{BoardController, Settled};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

mod canvas;
mod config;
mod error;
mod input;
mod palette;
mod state;
mod utils;

use crate::canvas::CanvasSurface;
use crate::error::HostError;
use crate::state::{STATE, State};
use crate::utils::{error, find_element, log, warn};

const CANVAS_ID: &str = "board";
const SIDEBAR_ID: &str = "sidebar";
const STATUS_ID: &str = "status";

fn draw(state: &mut State) {
    let width = f64::from(state.canvas.width());
    let height = f64::from(state.canvas.height());
    state
        .board
        .render(&mut CanvasSurface::new(&state.ctx), width, height);
    update_status_dom(state);
}

fn update_status_dom(state: &mut State) {
    let revision = state.board.revision();
    if state.shown_revision == Some(revision) {
        return;
    }
    state.shown_revision = Some(revision);
    if let Some(el) = &state.status {
        let n = state.board.pieces().len();
        let noun = if n == 1 { "piece" } else { "pieces" };
        el.set_text_content(Some(&format!("{n} {noun} on board")));
    }
}

/// Console trail for drags that changed the board.
fn report(settled: &Settled) {
    match settled {
        Settled::Placed(p) => log(&format!("placed {} at ({}, {})", p.color, p.x, p.y)),
        Settled::Deleted(p) => log(&format!("deleted {} piece", p.color)),
        Settled::Restored(p) => log(&format!(
            "released off the board; restored {} at ({}, {})",
            p.color, p.x, p.y
        )),
        Settled::Lost(p) => warn(&format!("released off the board; discarded {} piece", p.color)),
        Settled::Cancelled | Settled::Idle => {}
    }
}

fn init_canvas(
    document: &Document,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), HostError> {
    let cv: HtmlCanvasElement = find_element(document, CANVAS_ID, "canvas")?;
    let ctx = cv
        .get_context("2d")?
        .ok_or(HostError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| HostError::NoContext)?;
    Ok((cv, ctx))
}

/// Redraw every frame, whether or not anything changed.
fn start_animation(state: Rc<RefCell<State>>) -> Result<(), HostError> {
    type RafClosure = Closure<dyn FnMut(f64)>;
    let window = state.borrow().window.clone();
    let f: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        draw(&mut state.borrow_mut());
        if let Some(cb) = f.borrow().as_ref()
            && let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref())
        {
            error(&format!("render loop stopped: {}", HostError::from(e)));
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = g.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;
    let (canvas, ctx) = init_canvas(&document)?;
    let sidebar: HtmlElement = find_element(&document, SIDEBAR_ID, "HtmlElement")?;
    let status = document.get_element_by_id(STATUS_ID);

    let search = window.location().search().unwrap_or_default();
    let (config, problems) = config::config_from_query(&search);
    for problem in &problems {
        warn(&problem.to_string());
    }

    let state = Rc::new(RefCell::new(State {
        window,
        document,
        canvas,
        ctx,
        sidebar,
        status,
        board: BoardController::new(config),
        shown_revision: None,
    }));

    STATE.with(|st| st.replace(Some(state.clone())));
    palette::attach_palette(&state)?;
    input::attach_board_input(&state)?;
    start_animation(state.clone())?;
    draw(&mut state.borrow_mut());
    Ok(())
}

/// Current pieces and drag session as JSON, for debugging from the console.
#[wasm_bindgen]
pub fn board_state() -> Result<String, JsValue> {
    STATE.with(|st| -> Result<String, JsValue> {
        let slot = st.borrow();
        let state = slot.as_ref().ok_or(HostError::NotStarted)?;
        let json = state
            .borrow()
            .board
            .snapshot_json()
            .map_err(HostError::from)?;
        Ok(json)
    })
}
