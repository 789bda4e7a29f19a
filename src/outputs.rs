//! The level-triggered output side of the beacon.
//!
//! The encoder only ever writes levels through [`SignalOutputs`]; it never
//! reads them back. [`PinOutputs`] adapts two `embedded-hal` output pins (one
//! LED per symbol type) so the same encoder runs on hardware and in host tests.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

/// One indicator per symbol type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputChannel {
    /// Channel A, lit for dots.
    Dot,
    /// Channel B, lit for dashes.
    Dash,
}

/// A sink for output levels.
///
/// Implementations must not fail: the tick handler has no error path.
pub trait SignalOutputs {
    fn set_output(&mut self, channel: OutputChannel, level: PinState);
}

impl<T: SignalOutputs + ?Sized> SignalOutputs for &mut T {
    #[inline]
    fn set_output(&mut self, channel: OutputChannel, level: PinState) {
        (**self).set_output(channel, level);
    }
}

/// Two infallible output pins, driven low on construction.
pub struct PinOutputs<A, B> {
    dot: A,
    dash: B,
}

impl<A, B> PinOutputs<A, B>
where
    A: OutputPin<Error = Infallible>,
    B: OutputPin<Error = Infallible>,
{
    pub fn new(mut dot: A, mut dash: B) -> Self {
        let Ok(()) = dot.set_low();
        let Ok(()) = dash.set_low();
        Self { dot, dash }
    }

    /// Gives the pins back.
    pub fn into_inner(self) -> (A, B) {
        (self.dot, self.dash)
    }
}

impl<A, B> SignalOutputs for PinOutputs<A, B>
where
    A: OutputPin<Error = Infallible>,
    B: OutputPin<Error = Infallible>,
{
    #[inline]
    fn set_output(&mut self, channel: OutputChannel, level: PinState) {
        let Ok(()) = match channel {
            OutputChannel::Dot => self.dot.set_state(level),
            OutputChannel::Dash => self.dash.set_state(level),
        };
    }
}
