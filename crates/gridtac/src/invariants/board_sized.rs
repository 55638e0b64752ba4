//! Board sizing invariant: the board always matches the topology.

use super::Invariant;
use crate::game::GameState;

/// Invariant: Board and line set are consistent with the topology.
///
/// The board length equals rows × columns, and every winning line is
/// exactly run-length long with all indices in bounds.
pub struct BoardSizedInvariant;

impl Invariant<GameState> for BoardSizedInvariant {
    fn holds(game: &GameState) -> bool {
        let topology = game.topology();
        let cells = topology.cells();

        game.board().squares().len() == cells
            && topology.lines().iter().all(|line| {
                line.cells().len() == topology.run_length()
                    && line.cells().iter().all(|&pos| pos < cells)
            })
    }

    fn description() -> &'static str {
        "Board length equals rows x columns and all line indices are in bounds"
    }
}
