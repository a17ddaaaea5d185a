use crate::error::MoveError;
use crate::topology::Topology;
use crate::types::*;

/// Occupancy of every lattice point plus the off-board bookkeeping for both
/// sides.
///
/// For each kind, pieces on the board + pieces in supply + pieces captured
/// always equals the starting supply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    topology: Topology,
    cells: Vec<Option<PieceKind>>,
    starting_supply: [u32; 2],
    supply: [u32; 2],
    captured: [u32; 2],
}

impl Board {
    /// `predators` and `prey` are the total number of pieces each side brings
    /// to a level.
    pub fn new(topology: Topology, predators: u32, prey: u32) -> Self {
        let mut starting_supply = [0; 2];
        starting_supply[PieceKind::Predator.idx()] = predators;
        starting_supply[PieceKind::Prey.idx()] = prey;
        Board {
            topology,
            cells: vec![None; topology.cell_count()],
            starting_supply,
            supply: starting_supply,
            captured: [0; 2],
        }
    }

    /// Builds a board from a diagram in the `to_diagram` format (`T`, `G`,
    /// `.`; rows separated by newlines or `/`). Pieces are drawn from the
    /// given supplies.
    pub fn from_diagram(
        topology: Topology,
        predators: u32,
        prey: u32,
        diagram: &str,
    ) -> Result<Self, String> {
        let mut board = Board::new(topology, predators, prey);
        let rows: Vec<&str> = diagram
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != topology.height() as usize {
            return Err(format!(
                "expected {} rows, found {}",
                topology.height(),
                rows.len()
            ));
        }
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != topology.width() as usize {
                return Err(format!("row {} must have {} cells", y, topology.width()));
            }
            for (x, ch) in row.chars().enumerate() {
                let kind = match ch {
                    'T' | 't' => PieceKind::Predator,
                    'G' | 'g' => PieceKind::Prey,
                    '.' => continue,
                    _ => return Err(format!("invalid cell '{}' in row {}", ch, y)),
                };
                board
                    .place(Position::new(x as i32, y as i32), kind)
                    .map_err(|e| e.to_string())?;
            }
        }
        Ok(board)
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.supply = self.starting_supply;
        self.captured = [0; 2];
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn get(&self, p: Position) -> Result<Option<PieceKind>, MoveError> {
        if !self.topology.contains(p) {
            return Err(MoveError::OutOfBounds(p));
        }
        Ok(self.cells[self.topology.index(p)])
    }

    /// Like `get`, collapsing out-of-range to empty.
    pub fn piece_at(&self, p: Position) -> Option<PieceKind> {
        self.get(p).ok().flatten()
    }

    pub fn is_empty(&self, p: Position) -> bool {
        matches!(self.get(p), Ok(None))
    }

    /// Takes a piece from `kind`'s supply and puts it on `p`. Never
    /// overwrites.
    pub fn place(&mut self, p: Position, kind: PieceKind) -> Result<(), MoveError> {
        if self.get(p)?.is_some() {
            return Err(MoveError::CellOccupied(p));
        }
        if self.supply[kind.idx()] == 0 {
            return Err(MoveError::NoSupplyRemaining(kind));
        }
        let i = self.topology.index(p);
        self.cells[i] = Some(kind);
        self.supply[kind.idx()] -= 1;
        self.debug_check();
        Ok(())
    }

    /// Empties `p`, returning its piece to the owner's supply. Clearing an
    /// empty cell does nothing.
    pub fn clear(&mut self, p: Position) -> Result<Option<PieceKind>, MoveError> {
        let removed = self.take(p)?;
        if let Some(kind) = removed {
            self.supply[kind.idx()] += 1;
        }
        self.debug_check();
        Ok(removed)
    }

    /// Slides the piece on `from` to the empty cell `to`. Both cells were
    /// validated by the caller.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) {
        let kind = self.cells[self.topology.index(from)].take();
        debug_assert!(kind.is_some(), "relocating from empty {}", from);
        let slot = &mut self.cells[self.topology.index(to)];
        debug_assert!(slot.is_none(), "relocating onto occupied {}", to);
        *slot = kind;
    }

    /// Removes the piece on `p` from play.
    pub(crate) fn capture(&mut self, p: Position) -> Option<PieceKind> {
        let kind = self.take(p).ok().flatten()?;
        self.captured[kind.idx()] += 1;
        self.debug_check();
        Some(kind)
    }

    fn take(&mut self, p: Position) -> Result<Option<PieceKind>, MoveError> {
        self.get(p)?;
        let i = self.topology.index(p);
        Ok(self.cells[i].take())
    }

    pub fn normalize(&self, x: f64, y: f64) -> Position {
        self.topology.normalize(x, y)
    }

    /// Every position in row-major order. Cheap to clone and restart.
    pub fn positions(&self) -> impl Iterator<Item = Position> + Clone + use<> {
        self.topology.positions()
    }

    pub fn occupied(&self, kind: PieceKind) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&p| self.piece_at(p) == Some(kind))
    }

    pub fn count(&self, kind: PieceKind) -> u32 {
        self.cells.iter().filter(|&&c| c == Some(kind)).count() as u32
    }

    pub fn supply(&self, kind: PieceKind) -> u32 {
        self.supply[kind.idx()]
    }

    pub fn starting_supply(&self, kind: PieceKind) -> u32 {
        self.starting_supply[kind.idx()]
    }

    pub fn captured(&self, kind: PieceKind) -> u32 {
        self.captured[kind.idx()]
    }

    pub(crate) fn debug_check(&self) {
        for kind in PieceKind::ALL {
            debug_assert_eq!(
                self.count(kind) + self.supply(kind) + self.captured(kind),
                self.starting_supply(kind),
                "{} pieces unaccounted for",
                kind
            );
        }
    }

    /// Text diagram, one row per line: `T` predator, `G` prey, `.` empty.
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.topology.height() as usize);
        for p in self.positions() {
            out.push(match self.piece_at(p) {
                Some(PieceKind::Predator) => 'T',
                Some(PieceKind::Prey) => 'G',
                None => '.',
            });
            if p.x as u32 == self.topology.width() - 1 {
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
