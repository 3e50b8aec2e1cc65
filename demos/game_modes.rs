//! Game Mode Machine
//!
//! This demo drives the top-level modes of a small game.
//!
//! Key concepts:
//! - Deferred startup, fired once assets are loaded
//! - Wildcard `quit` that works from any mode
//! - A leave hook that suspends a transition until a fade-out finishes
//! - Terminal states and transition history
//!
//! Run with: RUST_LOG=modeswitch=debug cargo run --example game_modes

use modeswitch::builder::{EventDescriptor, Initial, MachineBuilder};
use modeswitch::hooks::{Hook, HookOutcome};
use modeswitch::machine::Outcome;
use modeswitch::{event_enum, state_enum};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Mode {
        Menu,
        Playing,
        Paused,
        Won,
        Lost,
    }
}

event_enum! {
    enum Input {
        AssetsLoaded,
        Play,
        Pause,
        Resume,
        Win,
        Quit,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Game Mode Machine ===\n");

    let mut machine = MachineBuilder::<Mode, Input>::new()
        .initial_with(Initial::new(Mode::Menu).event(Input::AssetsLoaded).deferred())
        .terminals([Mode::Won, Mode::Lost])
        .event(EventDescriptor::new(Input::Play).from(Mode::Menu).to(Mode::Playing))
        .event(EventDescriptor::new(Input::Pause).from(Mode::Playing).to(Mode::Paused))
        .event(EventDescriptor::new(Input::Resume).from(Mode::Paused).to(Mode::Playing))
        .event(EventDescriptor::new(Input::Win).from(Mode::Playing).to(Mode::Won))
        .event(EventDescriptor::new(Input::Quit).to(Mode::Lost))
        .observe(Hook::EnterState(Mode::Playing), |ctx| {
            println!("  [audio] start music ({} from {})", ctx.event_name(), ctx.from);
        })
        .hook(Hook::LeaveState(Mode::Menu), |_| {
            println!("  [animation] fading out menu...");
            Ok(HookOutcome::Defer)
        })
        .observe(Hook::ChangeState, |ctx| {
            println!("  {} -> {}", ctx.from, ctx.to);
        })
        .build()?;

    println!("Before loading: {}", machine.current());
    println!("Can play? {}\n", machine.can(&Input::Play));

    println!("Assets loaded:");
    if let Some(result) = machine.start() {
        println!("  startup: {:?}", result?);
    }

    println!("\nPlayer presses play:");
    if let Outcome::Pending(fade) = machine.fire(Input::Play)? {
        println!("  suspended: {fade}");
        println!("  pause blocked while fading? {}", machine.cannot(&Input::Pause));
        println!("  fade done: {:?}", fade.commit(&mut machine)?);
    }

    println!("\nPause and resume:");
    for input in [Input::Pause, Input::Resume, Input::Resume] {
        match machine.fire(input) {
            Ok(outcome) => println!("  {input:?}: {outcome:?}"),
            Err(err) => println!("  {input:?} refused: {err}"),
        }
    }

    println!("\nPlayer rage-quits:");
    println!("  quit: {:?}", machine.fire(Input::Quit)?);
    println!("Finished? {}", machine.is_finished());

    println!("\nPath: {}", machine.history().path_names().join(" -> "));

    println!("\n=== Demo Complete ===");
    Ok(())
}
