//! Move validation and application.
//!
//! Each operation checks everything first and only then mutates, so a
//! returned `Err` always means the board and selection are unchanged.
//! Successful moves that touch the tableau finish with
//! [`Selection::normalize`].

use smallvec::SmallVec;

use super::error::MoveError;
use crate::core::card::{Card, Rank};
use crate::core::selection::{Selection, Source};
use crate::zones::{Board, DECK_SIZE, TABLEAU_COLUMNS};

/// Rules for Klondike moves. Stateless; all state lives in `Board` and
/// `Selection`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveEngine;

/// Check whether a run led by `lead` may be placed on a column whose
/// bottom card is `target` (`None` for an empty column).
pub fn check_tableau_placement(lead: &Card, target: Option<&Card>) -> Result<(), MoveError> {
    if lead.rank == Rank::Ace {
        return Err(MoveError::AceToTableau);
    }

    match (lead.rank, target) {
        (Rank::King, None) => Ok(()),
        (Rank::King, Some(_)) => Err(MoveError::KingNeedsEmptyColumn),
        (_, None) => Err(MoveError::NeedsParentCard),
        (_, Some(parent)) if parent.color() == lead.color() => Err(MoveError::SameColor),
        (_, Some(parent)) if !parent.rank.is_one_above(lead.rank) => Err(MoveError::RankMismatch),
        (_, Some(_)) => Ok(()),
    }
}

/// Check whether `card` continues a foundation whose top card is `top`.
///
/// The caller picks the foundation by the card's suit.
pub fn check_foundation_placement(card: &Card, top: Option<&Card>) -> Result<(), MoveError> {
    let fits = match top {
        None => card.rank == Rank::Ace,
        Some(top) => card.rank.is_one_above(top.rank),
    };
    if fits {
        Ok(())
    } else {
        Err(MoveError::FoundationMismatch)
    }
}

impl MoveEngine {
    /// Draw up to `draw_count` cards from stock to waste and select the
    /// waste. With an empty stock, the waste becomes the stock in the same
    /// order and the selection is left alone.
    pub fn flip_stock(
        board: &mut Board,
        selection: &mut Selection,
        draw_count: usize,
    ) -> Result<(), MoveError> {
        if board.stock.is_empty() {
            if board.waste.is_empty() {
                return Err(MoveError::EmptySource);
            }
            board.stock = std::mem::take(&mut board.waste);
            return Ok(());
        }

        for _ in 0..draw_count {
            match board.stock.pop() {
                Some(card) => board.waste.push(card),
                None => break,
            }
        }
        selection.waste_selected = true;
        Ok(())
    }

    /// Deselect the waste if selected, otherwise select it if it has cards.
    pub fn toggle_waste(board: &Board, selection: &mut Selection) -> Result<(), MoveError> {
        if selection.waste_selected {
            selection.waste_selected = false;
            return Ok(());
        }
        if board.waste.is_empty() {
            return Err(MoveError::EmptySource);
        }
        selection.waste_selected = true;
        Ok(())
    }

    /// Move the selected card or run onto tableau pile `pile` (1-indexed).
    pub fn move_to_pile(
        board: &mut Board,
        selection: &mut Selection,
        pile: u8,
    ) -> Result<(), MoveError> {
        let target = usize::from(pile)
            .checked_sub(1)
            .filter(|&t| t < TABLEAU_COLUMNS)
            .ok_or(MoveError::InvalidPile(pile))?;

        let source = selection.source();
        let lead = match source {
            Source::Waste => *board.waste.last().ok_or(MoveError::EmptySource)?,
            Source::Tableau { column, row } => {
                if column == target {
                    return Err(MoveError::SameColumn);
                }
                let lead = *board.tableau[column].get(row).ok_or(MoveError::EmptySource)?;
                if !lead.face_up {
                    return Err(MoveError::FaceDownSource);
                }
                lead
            }
        };

        check_tableau_placement(&lead, board.tableau[target].last())?;

        match source {
            Source::Waste => {
                if let Some(card) = board.waste.pop() {
                    board.tableau[target].push(card);
                }
            }
            Source::Tableau { column, row } => {
                let run: SmallVec<[Card; 13]> = board.tableau[column].drain(row..).collect();
                board.tableau[target].extend(run);
                board.reveal_bottom(column);
            }
        }

        selection.normalize(board);
        Ok(())
    }

    /// Move the selected card to its suit's foundation.
    ///
    /// From the tableau, only the bottom card of the column qualifies.
    pub fn move_to_foundation(board: &mut Board, selection: &mut Selection) -> Result<(), MoveError> {
        let source = selection.source();
        let card = match source {
            Source::Waste => *board.waste.last().ok_or(MoveError::EmptySource)?,
            Source::Tableau { column, row } => {
                let pile = &board.tableau[column];
                let bottom = *pile.last().ok_or(MoveError::EmptySource)?;
                if row != pile.len() - 1 {
                    return Err(MoveError::NotBottomCard);
                }
                bottom
            }
        };

        check_foundation_placement(&card, board.foundations[card.suit].last())?;

        let moved = match source {
            Source::Waste => board.waste.pop(),
            Source::Tableau { column, .. } => {
                let moved = board.tableau[column].pop();
                board.reveal_bottom(column);
                moved
            }
        };
        if let Some(card) = moved {
            board.foundations[card.suit].push(card);
        }

        selection.normalize(board);
        Ok(())
    }

    /// All 52 cards are on the foundations.
    #[must_use]
    pub fn is_won(board: &Board) -> bool {
        board.foundation_count() == DECK_SIZE
    }
}
