use crate::color::Color;

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumCount;

/// The train cards held by one player, as a multiset.
///
/// Cards are kept in the order they were received.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Color>,
}

impl Hand {
    pub fn new(cards: Vec<Color>) -> Self {
        Self { cards }
    }

    #[inline]
    pub fn add(&mut self, card: Color) {
        self.cards.push(card);
    }

    /// Removes one card of the given color.
    ///
    /// Removing a card that is not in the hand does nothing: callers are expected
    /// to have checked with [`Hand::contains_all`] first.
    pub fn remove(&mut self, card: Color) {
        if let Some(position) = self.cards.iter().position(|held| *held == card) {
            self.cards.remove(position);
        }
    }

    /// Whether every requested card can be matched to a distinct card in the hand.
    ///
    /// # Example
    /// ```
    /// use ttr_rules::color::Color;
    /// use ttr_rules::hand::Hand;
    ///
    /// let hand = Hand::new(vec![Color::Red, Color::Wild, Color::Red]);
    ///
    /// assert!(hand.contains_all(&[Color::Red, Color::Red]));
    /// assert!(!hand.contains_all(&[Color::Wild, Color::Wild]));
    /// ```
    pub fn contains_all(&self, cards: &[Color]) -> bool {
        let mut available = [0usize; Color::COUNT];
        for card in &self.cards {
            available[card.ordinal()] += 1;
        }

        for card in cards {
            let count = &mut available[card.ordinal()];
            if *count == 0 {
                return false;
            }
            *count -= 1;
        }

        true
    }

    /// How many cards of the given color are held.
    pub fn count(&self, color: Color) -> usize {
        self.cards.iter().filter(|card| **card == color).count()
    }

    #[inline]
    pub fn cards(&self) -> &[Color] {
        &self.cards
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<_> = self.cards.iter().map(Color::card_label).collect();
        write!(f, "({})", labels.join(", "))
    }
}
