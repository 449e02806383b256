//! Rules engine for a turn-based train game, in which players draw colored train cards
//! and spend them to claim routes between cities.
//!
//! The [`game::Game`] holds the whole state of a game and validates every action against the
//! rules. Refused actions report a [`error::FailureCause`] and change nothing.

pub mod board;
pub mod card;
pub mod city;
pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod player;
pub mod route;
pub mod strategy;
pub mod turn;
