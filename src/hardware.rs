use embassy_rp::gpio::{self, Level, Pull};

use crate::beacon::BUTTON_COUNT;

/// The beacon's pin map.
///
/// | Signal    | GPIO | Notes                      |
/// |-----------|------|----------------------------|
/// | dot LED   | 2    | red, active high           |
/// | dash LED  | 3    | green, active high         |
/// | button 0  | 14   | to ground, internal pull-up |
/// | button 1  | 15   | to ground, internal pull-up |
pub struct Hardware {
    pub dot_led: gpio::Output<'static>,
    pub dash_led: gpio::Output<'static>,
    pub buttons: [gpio::Input<'static>; BUTTON_COUNT],
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        let dot_led = gpio::Output::new(peripherals.PIN_2, Level::Low);
        let dash_led = gpio::Output::new(peripherals.PIN_3, Level::Low);

        let buttons = [
            gpio::Input::new(peripherals.PIN_14, Pull::Up),
            gpio::Input::new(peripherals.PIN_15, Pull::Up),
        ];

        Self {
            dot_led,
            dash_led,
            buttons,
        }
    }
}
