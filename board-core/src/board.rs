use serde::Serialize;

use crate::catalog::{DEFAULT_CATALOG, PieceArchetype};
use crate::config::BoardConfig;
use crate::geometry::{Point, snap};
use crate::piece::PlacedPiece;
use crate::session::{DragSession, ReleasePolicy};

/// How a drag ended. Every operation that can close a session reports one of
/// these instead of failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settled {
    /// Appended to the board.
    Placed(PlacedPiece),
    /// A board piece dropped on the palette.
    Deleted(PlacedPiece),
    /// A board piece released off-board and put back under [`ReleasePolicy::Restore`].
    Restored(PlacedPiece),
    /// A board piece released off-board under [`ReleasePolicy::Discard`].
    Lost(PlacedPiece),
    /// A palette drag that never reached the board.
    Cancelled,
    /// Nothing was in flight.
    Idle,
}

/// Read-only view used for diagnostics.
#[derive(Debug, Serialize)]
pub struct BoardSnapshot<'a> {
    pub pieces: &'a [PlacedPiece],
    pub session: Option<&'a DragSession>,
    pub revision: u64,
}

/// Owns the palette catalog, the placed pieces and the drag slot.
///
/// Pieces are kept in insertion order, which is also paint order: later
/// entries draw over earlier ones and win hit tests.
#[derive(Clone, Debug)]
pub struct BoardController {
    catalog: Vec<PieceArchetype>,
    pieces: Vec<PlacedPiece>,
    session: Option<DragSession>,
    config: BoardConfig,
    revision: u64,
}

impl Default for BoardController {
    fn default() -> Self {
        BoardController::new(BoardConfig::default())
    }
}

impl BoardController {
    pub fn new(config: BoardConfig) -> Self {
        BoardController::with_catalog(DEFAULT_CATALOG.to_vec(), config)
    }

    pub fn with_catalog(catalog: Vec<PieceArchetype>, config: BoardConfig) -> Self {
        BoardController {
            catalog,
            pieces: Vec::new(),
            session: None,
            config,
            revision: 0,
        }
    }

    pub fn catalog(&self) -> &[PieceArchetype] {
        &self.catalog
    }

    pub fn pieces(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn unit(&self) -> i32 {
        self.config.unit
    }

    /// Bumped on every change to the piece list or the drag slot.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The board piece currently following the pointer, if any.
    pub fn floating_piece(&self) -> Option<&PlacedPiece> {
        match &self.session {
            Some(DragSession::FromBoard { piece, .. }) => Some(piece),
            _ => None,
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Open a palette drag for the swatch at `index`. Out-of-range indices
    /// leave everything untouched.
    ///
    /// The first element is how a drag left over from a lost release was
    /// settled, [`Settled::Idle`] if there was none.
    pub fn start_palette_drag(&mut self, index: usize) -> (Settled, Option<PieceArchetype>) {
        let Some(archetype) = self.catalog.get(index).copied() else {
            return (Settled::Idle, None);
        };
        let stale = self.release_elsewhere();
        self.session = Some(DragSession::FromPalette {
            color: archetype.color.to_string(),
            size: archetype.size,
        });
        self.touch();
        (stale, Some(archetype))
    }

    /// Lift the topmost piece under `p` off the board. Returns how any
    /// leftover drag was settled, and the index the lifted piece occupied.
    pub fn pointer_down(&mut self, p: Point) -> (Settled, Option<usize>) {
        // A live session here means its release was never delivered.
        let stale = self.release_elsewhere();
        let unit = self.unit();
        let Some(index) = self.pieces.iter().rposition(|piece| piece.contains(p, unit)) else {
            return (stale, None);
        };
        let piece = self.pieces.remove(index);
        let grab_offset = p.offset_by(piece.origin());
        self.session = Some(DragSession::FromBoard {
            piece,
            source_index: index,
            grab_offset,
        });
        self.touch();
        (stale, Some(index))
    }

    /// Track the pointer with the lifted piece. Returns true when the piece
    /// moved to a different grid cell.
    pub fn pointer_move(&mut self, p: Point) -> bool {
        let unit = self.unit();
        let Some(DragSession::FromBoard {
            piece, grab_offset, ..
        }) = self.session.as_mut()
        else {
            return false;
        };
        let target = p.offset_by(*grab_offset);
        let (x, y) = (snap(target.x, unit), snap(target.y, unit));
        if (piece.x, piece.y) == (x, y) {
            return false;
        }
        piece.x = x;
        piece.y = y;
        self.touch();
        true
    }

    /// Pointer released over the board. Only board drags land here; a
    /// palette drag finishes through [`Self::drop_on_board`].
    pub fn pointer_up(&mut self) -> Settled {
        match self.session.take() {
            Some(DragSession::FromBoard { piece, .. }) => {
                self.pieces.push(piece.clone());
                self.touch();
                Settled::Placed(piece)
            }
            other => {
                self.session = other;
                Settled::Idle
            }
        }
    }

    /// A drag-and-drop gesture ended over the board at `p`.
    pub fn drop_on_board(&mut self, p: Point) -> Settled {
        let unit = self.unit();
        let placed = match self.session.take() {
            None => return Settled::Idle,
            Some(DragSession::FromPalette { color, size }) => PlacedPiece {
                x: snap(p.x, unit),
                y: snap(p.y, unit),
                size,
                color,
            },
            Some(DragSession::FromBoard {
                mut piece,
                grab_offset,
                ..
            }) => {
                let target = p.offset_by(grab_offset);
                piece.x = snap(target.x, unit);
                piece.y = snap(target.y, unit);
                piece
            }
        };
        self.pieces.push(placed.clone());
        self.touch();
        Settled::Placed(placed)
    }

    /// A drag ended over the palette, which doubles as the trash.
    pub fn drop_on_palette(&mut self) -> Settled {
        let settled = match self.session.take() {
            None => return Settled::Idle,
            Some(DragSession::FromPalette { .. }) => Settled::Cancelled,
            Some(DragSession::FromBoard { piece, .. }) => Settled::Deleted(piece),
        };
        self.touch();
        settled
    }

    /// A drag ended somewhere that is neither the board nor the palette.
    pub fn release_elsewhere(&mut self) -> Settled {
        let settled = match self.session.take() {
            None => return Settled::Idle,
            Some(DragSession::FromPalette { .. }) => Settled::Cancelled,
            Some(DragSession::FromBoard { piece, .. }) => match self.config.release_policy {
                ReleasePolicy::Restore => {
                    self.pieces.push(piece.clone());
                    Settled::Restored(piece)
                }
                ReleasePolicy::Discard => Settled::Lost(piece),
            },
        };
        self.touch();
        settled
    }

    pub fn snapshot(&self) -> BoardSnapshot<'_> {
        BoardSnapshot {
            pieces: &self.pieces,
            session: self.session.as_ref(),
            revision: self.revision,
        }
    }

    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }
}
