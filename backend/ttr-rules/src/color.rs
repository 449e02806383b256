use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

/// Represents the colors found on train cards and on routes.
///
/// The declaration order is meaningful: when a route accepts any color,
/// the color that the offered cards must match is the *smallest* one present.
/// [`Color::Wild`] is declared last so that it is only ever the smallest color
/// when every offered card is wild.
///
/// # JSON
/// Colors are serialized in lowercase.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Red,
    Orange,
    Blue,
    Yellow,
    Green,
    Pink,
    Black,
    White,
    /// On a card, this is the *Locomotive*, which matches with any color.
    /// On a route, it means that any single color may be used to claim it.
    Wild,
}

impl Color {
    /// Whether the current color is wild, i.e. matches with any color.
    ///
    /// # Examples:
    /// ```
    /// use ttr_rules::color::Color;
    ///
    /// assert!(!Color::Black.is_wild());
    /// assert!(Color::Wild.is_wild());
    /// ```
    #[inline]
    pub fn is_wild(&self) -> bool {
        *self == Color::Wild
    }

    /// The opposite of `is_wild`.
    #[inline]
    pub fn is_not_wild(&self) -> bool {
        !self.is_wild()
    }

    /// All the colors a route can strictly require, i.e. every color but [`Color::Wild`].
    pub fn palette() -> impl Iterator<Item = Color> {
        Color::iter().filter(Color::is_not_wild)
    }

    /// Position of the color in the declaration order.
    #[inline]
    pub(crate) fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Human label of the color, as printed on the board.
    ///
    /// A wild route has no color of its own, hence it is labelled `None`.
    ///
    /// # Examples:
    /// ```
    /// use ttr_rules::color::Color;
    ///
    /// assert_eq!(Color::Orange.label(), "Orange");
    /// assert_eq!(Color::Wild.label(), "None");
    /// ```
    pub fn label(&self) -> &'static str {
        self.named_label().unwrap_or("None")
    }

    /// Human label of the color, as printed on a train card.
    ///
    /// # Examples:
    /// ```
    /// use ttr_rules::color::Color;
    ///
    /// assert_eq!(Color::Pink.card_label(), "Pink");
    /// assert_eq!(Color::Wild.card_label(), "Wild");
    /// ```
    pub fn card_label(&self) -> &'static str {
        self.named_label().unwrap_or("Wild")
    }

    fn named_label(&self) -> Option<&'static str> {
        match self {
            Color::Red => Some("Red"),
            Color::Orange => Some("Orange"),
            Color::Blue => Some("Blue"),
            Color::Yellow => Some("Yellow"),
            Color::Green => Some("Green"),
            Color::Pink => Some("Pink"),
            Color::Black => Some("Black"),
            Color::White => Some("White"),
            Color::Wild => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn color_count() {
        assert_eq!(Color::COUNT, 9);
        assert_eq!(Color::palette().count(), 8);
        assert!(Color::palette().all(|color| color.is_not_wild()));
    }

    #[test]
    fn color_to_string() {
        assert_eq!(Color::Orange.to_string(), "orange");
        assert_eq!(Color::Wild.to_string(), "wild");
    }

    #[test]
    fn color_to_json() -> serde_json::Result<()> {
        assert_eq!(serde_json::to_string(&Color::Blue)?, r#""blue""#);
        assert_eq!(serde_json::to_string(&Color::Wild)?, r#""wild""#);
        Ok(())
    }

    #[test]
    fn json_to_color() -> serde_json::Result<()> {
        assert_eq!(serde_json::from_str::<Color>(r#""green""#)?, Color::Green);
        assert_eq!(serde_json::from_str::<Color>(r#""wild""#)?, Color::Wild);
        Ok(())
    }

    #[test]
    fn invalid_json_to_color() {
        assert!(serde_json::from_str::<Color>(r#""turquoise""#).is_err());
    }

    #[test]
    fn wild_is_the_largest_color() {
        for color in Color::palette() {
            assert!(color < Color::Wild, "{color} should sort before wild");
        }

        assert_eq!(
            [Color::Wild, Color::Orange, Color::Black].iter().min(),
            Some(&Color::Orange)
        );
        assert_eq!(Color::Red.ordinal(), 0);
        assert_eq!(Color::Wild.ordinal(), 8);
    }

    #[test]
    fn labels_differ_only_for_wild() {
        for color in Color::palette() {
            assert_eq!(color.label(), color.card_label());
        }
        assert_ne!(Color::Wild.label(), Color::Wild.card_label());
    }
}
