use crate::color::Color;
use crate::error::FailureCause;

use serde::Serialize;

/// How many train cards are openly displayed at a time.
pub const NUM_FACE_UP_CARDS: usize = 5;

/// Public information about the train card piles, returned by [`CardDealer::get_state`].
#[derive(Debug, PartialEq, Serialize)]
pub struct CardDealerState<'a> {
    pub face_up_cards: &'a [Option<Color>],
    pub deck_size: usize,
    pub discard_pile_size: usize,
}

/// Entity in charge of the train cards that are not in a player's hand:
/// the deck, the face-up display, and the cards spent on claimed routes.
///
/// Every card lives in exactly one of these piles (or in a hand), and cards never
/// come back from the discard pile.
#[derive(Clone, Debug, PartialEq)]
pub struct CardDealer {
    /// A slot is `None` only once the deck ran out and could not refill it.
    face_up_cards: [Option<Color>; NUM_FACE_UP_CARDS],
    /// The top of the deck is the end of the vector.
    deck: Vec<Color>,
    discard_pile: Vec<Color>,
}

impl CardDealer {
    /// Creates a dealer holding the given deck, whose last card is the top card.
    ///
    /// The face-up display starts empty, so that hands can be dealt first;
    /// see [`CardDealer::fill_face_up_cards`].
    pub fn new(deck: Vec<Color>) -> Self {
        Self {
            face_up_cards: [None; NUM_FACE_UP_CARDS],
            deck,
            discard_pile: Vec::new(),
        }
    }

    /// Pops up to `num_cards` cards from the top of the deck, in draw order.
    pub fn deal(&mut self, num_cards: usize) -> Vec<Color> {
        let mut cards = Vec::with_capacity(num_cards);
        for _ in 0..num_cards {
            match self.deck.pop() {
                Some(card) => cards.push(card),
                None => break,
            }
        }

        cards
    }

    /// Refills every empty slot of the face-up display, in slot order, for as
    /// long as the deck has cards.
    pub fn fill_face_up_cards(&mut self) {
        for slot in self.face_up_cards.iter_mut().filter(|slot| slot.is_none()) {
            match self.deck.pop() {
                Some(card) => *slot = Some(card),
                None => break,
            }
        }
    }

    /// Draws from the top of the deck, and returns the card.
    ///
    /// If there are no more cards left in the deck, returns [`FailureCause::DeckEmpty`].
    ///
    /// # Example
    /// ```
    /// use ttr_rules::card::CardDealer;
    /// use ttr_rules::color::Color;
    /// use ttr_rules::error::FailureCause;
    ///
    /// let mut card_dealer = CardDealer::new(vec![Color::Red, Color::Green]);
    ///
    /// assert_eq!(card_dealer.draw_from_deck(), Ok(Color::Green));
    /// assert_eq!(card_dealer.draw_from_deck(), Ok(Color::Red));
    /// assert_eq!(card_dealer.draw_from_deck(), Err(FailureCause::DeckEmpty));
    /// ```
    pub fn draw_from_deck(&mut self) -> Result<Color, FailureCause> {
        self.deck.pop().ok_or(FailureCause::DeckEmpty)
    }

    /// Looks at the face-up card at `card_index`, without taking it.
    ///
    /// Returns [`FailureCause::InvalidCardIndex`] if the index is out of bounds,
    /// or if that slot is empty.
    pub fn peek_at_face_up_card(&self, card_index: usize) -> Result<Color, FailureCause> {
        self.face_up_cards
            .get(card_index)
            .copied()
            .flatten()
            .ok_or(FailureCause::InvalidCardIndex)
    }

    /// Takes the face-up card at `card_index`, and replaces it with the top card of the deck.
    ///
    /// If the deck is empty, the slot is left empty.
    pub fn take_face_up_card(&mut self, card_index: usize) -> Result<Color, FailureCause> {
        let card = self.peek_at_face_up_card(card_index)?;
        self.face_up_cards[card_index] = self.deck.pop();

        Ok(card)
    }

    /// Adds the given cards, spent on a route, to the discard pile.
    pub fn discard(&mut self, cards: impl IntoIterator<Item = Color>) {
        self.discard_pile.extend(cards);
    }

    #[inline]
    pub fn face_up_cards(&self) -> &[Option<Color>; NUM_FACE_UP_CARDS] {
        &self.face_up_cards
    }

    /// The deck, whose top card is the last one.
    #[inline]
    pub fn deck(&self) -> &[Color] {
        &self.deck
    }

    #[inline]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    #[inline]
    pub fn discard_pile(&self) -> &[Color] {
        &self.discard_pile
    }

    #[inline]
    pub fn discard_pile_size(&self) -> usize {
        self.discard_pile.len()
    }

    /// How many cards the dealer holds across all piles.
    pub fn num_cards(&self) -> usize {
        self.deck.len()
            + self.discard_pile.len()
            + self.face_up_cards.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn get_state(&self) -> CardDealerState {
        CardDealerState {
            face_up_cards: &self.face_up_cards,
            deck_size: self.deck.len(),
            discard_pile_size: self.discard_pile.len(),
        }
    }
}
