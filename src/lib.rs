//! Morse code beacon: sends one of two messages on two indicator outputs,
//! driven by a periodic tick and switched by a button at message boundaries.
//!
//! The state machine ([`MorseEncoder`]) is hardware-free and tested on the host.
//! With the `pico1` or `pico2` feature, [`MorseBeacon`] runs it on a Raspberry Pi Pico.
#![cfg_attr(not(test), no_std)]

mod encoder;
mod error;
mod message;
mod outputs;
mod timing;
mod toggle;

#[cfg(any(feature = "pico1", feature = "pico2"))]
mod beacon;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod hardware;

// Re-export commonly used items
pub use encoder::{MorseEncoder, Phase};
pub use error::{Error, Never, Result};
pub use message::{
    MAX_SYMBOLS, Message, MessagePair, MessageSlot, Symbol, Symbols, morse_pattern, parse_pattern,
};
pub use outputs::{OutputChannel, PinOutputs, SignalOutputs};
pub use timing::{
    DASH_TICKS, DOT_TICKS, INTER_CHAR_TICKS, INTER_WORD_TICKS, ONE_DAY, TICK_MILLIS, TICK_PERIOD,
    parse_millis, ticks_to_duration,
};
pub use toggle::ToggleRequest;

#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use beacon::{BUTTON_COUNT, MorseBeacon, MorseBeaconNotifier};
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use hardware::Hardware;
