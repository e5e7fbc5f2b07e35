use crate::app::Application;
use crate::events::{Command, Control, InputEvent, Key};
use crate::flashlight::Flashlight;
use crate::frame::Indicator;
use crate::outputs::Channel;
use crate::time::Tick;

use super::sim_outputs;

#[test]
fn cursor_moves_without_touching_levels() {
    let (mut outputs, a, b) = sim_outputs();
    let mut app = Flashlight::new();
    app.on_start(&mut outputs, Tick::ZERO);
    let writes = a.write_count() + b.write_count();

    app.on_command(Command::Next, &mut outputs, Tick::ZERO);
    assert_eq!(app.selected(), Channel::B);
    app.on_command(Command::Next, &mut outputs, Tick::ZERO);
    assert_eq!(app.selected(), Channel::A);
    app.on_command(Command::Previous, &mut outputs, Tick::ZERO);
    assert_eq!(app.selected(), Channel::B);

    assert_eq!(a.write_count() + b.write_count(), writes);
}

#[test]
fn confirm_toggles_only_the_selected_channel() {
    let (mut outputs, a, b) = sim_outputs();
    let mut app = Flashlight::new();
    app.on_start(&mut outputs, Tick::ZERO);

    app.on_command(Command::Confirm, &mut outputs, Tick::ZERO);
    assert!(app.is_on(Channel::A));
    assert!(a.is_high());
    assert!(!b.is_high());

    app.on_command(Command::Next, &mut outputs, Tick::ZERO);
    app.on_command(Command::Confirm, &mut outputs, Tick::ZERO);
    assert!(a.is_high() && b.is_high());

    app.on_command(Command::Confirm, &mut outputs, Tick::ZERO);
    assert!(!app.is_on(Channel::B));
    assert!(!b.is_high());
    assert!(a.is_high());
}

#[test]
fn confirm_twice_restores_level() {
    let (mut outputs, a, b) = sim_outputs();
    let mut app = Flashlight::new();
    app.on_start(&mut outputs, Tick::ZERO);
    app.on_command(Command::Next, &mut outputs, Tick::ZERO);
    app.on_command(Command::Confirm, &mut outputs, Tick::ZERO);
    app.on_command(Command::Previous, &mut outputs, Tick::ZERO);

    let other = b.is_high();
    let before = a.is_high();
    app.on_command(Command::Confirm, &mut outputs, Tick::ZERO);
    app.on_command(Command::Confirm, &mut outputs, Tick::ZERO);

    assert_eq!(a.is_high(), before);
    assert_eq!(b.is_high(), other);
}

#[test]
fn confirm_reinitialises_pin() {
    let (mut outputs, a, _) = sim_outputs();
    let mut app = Flashlight::new();
    app.on_start(&mut outputs, Tick::ZERO);
    let configures = a.configure_count();

    app.on_command(Command::Confirm, &mut outputs, Tick::ZERO);
    assert_eq!(a.configure_count(), configures + 1);
}

#[test]
fn back_leaves_levels_as_set() {
    let (mut outputs, a, b) = sim_outputs();
    let mut app = Flashlight::new();
    app.on_start(&mut outputs, Tick::ZERO);
    app.on_command(Command::Confirm, &mut outputs, Tick::ZERO);

    let control = app.on_input(InputEvent::press(Key::Back), &mut outputs, Tick::ZERO);
    assert_eq!(control, Control::Exit);

    app.on_exit(&mut outputs);
    assert!(a.is_high());
    assert!(!b.is_high());
}

#[test]
fn frame_marks_cursor_and_levels() {
    let (mut outputs, _, _) = sim_outputs();
    let mut app = Flashlight::new();
    app.on_start(&mut outputs, Tick::ZERO);
    app.on_command(Command::Next, &mut outputs, Tick::ZERO);
    app.on_command(Command::Confirm, &mut outputs, Tick::ZERO);

    let frame = app.frame(Tick::ZERO);
    assert_eq!(frame.title(), "Flashlight");
    assert_eq!(frame.indicator(), Indicator::Hidden);
    let lines: Vec<&str> = frame.lines().collect();
    assert_eq!(lines, ["  B2: OFF", "> C3: ON"]);
}
