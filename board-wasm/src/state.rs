use std::cell::RefCell;
use std::rc::Rc;

use board_core::BoardController;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, Window};

/// Everything the browser callbacks share, behind an `Rc<RefCell<_>>`.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub sidebar: HtmlElement,
    pub status: Option<Element>,
    pub board: BoardController,
    // revision last written to the status line
    pub shown_revision: Option<u64>,
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}
