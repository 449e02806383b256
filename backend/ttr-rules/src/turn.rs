use serde::Serialize;

/// Every turn is worth this many action points.
pub const ACTIONS_PER_TURN: u8 = 2;

/// Keeps track of whose turn it is, and how many action points they have left.
///
/// Player `0` starts. Once the current player has no action points left, the
/// turn passes to the next seat, wrapping around.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TurnTracker {
    num_players: usize,
    current_player: usize,
    actions_remaining: u8,
    /// Number of turns completed so far, across all players.
    turn: usize,
}

impl TurnTracker {
    pub fn new(num_players: usize) -> Self {
        Self {
            num_players,
            current_player: 0,
            actions_remaining: ACTIONS_PER_TURN,
            turn: 0,
        }
    }

    /// Seat of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    #[inline]
    pub fn actions_remaining(&self) -> u8 {
        self.actions_remaining
    }

    #[inline]
    pub fn turn(&self) -> usize {
        self.turn
    }

    #[inline]
    pub fn is_turn(&self, player: usize) -> bool {
        self.current_player == player
    }

    /// Whether no action was taken yet this turn.
    #[inline]
    pub fn is_fresh_turn(&self) -> bool {
        self.actions_remaining == ACTIONS_PER_TURN
    }

    /// Spends `num_actions` action points of the current player.
    ///
    /// Returns whether this ended the turn, in which case the next player is up
    /// with a full set of action points.
    ///
    /// # Example
    /// ```
    /// use ttr_rules::turn::TurnTracker;
    ///
    /// let mut turn_tracker = TurnTracker::new(2);
    ///
    /// assert!(!turn_tracker.consume(1));
    /// assert_eq!(turn_tracker.actions_remaining(), 1);
    ///
    /// assert!(turn_tracker.consume(1));
    /// assert_eq!(turn_tracker.current_player(), 1);
    /// assert_eq!(turn_tracker.actions_remaining(), 2);
    /// ```
    pub fn consume(&mut self, num_actions: u8) -> bool {
        self.actions_remaining = self.actions_remaining.saturating_sub(num_actions);
        if self.actions_remaining > 0 {
            return false;
        }

        self.actions_remaining = ACTIONS_PER_TURN;
        self.current_player = (self.current_player + 1) % self.num_players;
        self.turn += 1;
        true
    }
}
