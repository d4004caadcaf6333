//! Vending Machine
//!
//! This demo drives a vending machine through a guarded transition table.
//!
//! Key concepts:
//! - Events rejected in the wrong state are ordinary results
//! - Guards read the machine's context (credit) and the event payload (coin)
//! - A failing action (sold out) leaves the machine untouched
//! - Listeners hear about every committed transition
//!
//! Run with: RUST_LOG=debug cargo run --example vending_machine

use tracing_subscriber::EnvFilter;
use turnstile::builder::{StateMachineBuilder, TransitionBuilder};
use turnstile::core::{Guard, State};
use turnstile::machine::{ActionError, StateMachine, TransitionError};
use turnstile::{event_enum, state_enum};

state_enum! {
    enum Vending {
        WaitingForMoney,
        ProductSelected,
        Dispensing,
    }
}

event_enum! {
    enum Button {
        InsertMoney,
        SelectProduct,
        Dispense,
    }
}

const PRICE: u32 = 150;

#[derive(Clone, Debug, Default)]
struct Till {
    credit: u32,
    stock: u32,
}

fn build(stock: u32) -> Result<StateMachine<Vending, Button, Till, u32>, turnstile::BuildError> {
    StateMachineBuilder::with_context(Till { credit: 0, stock })
        .initial(Vending::WaitingForMoney)
        .transition(
            TransitionBuilder::new()
                .from(Vending::WaitingForMoney)
                .on(Button::InsertMoney)
                .to(Vending::ProductSelected)
                .guard(Guard::new(|_: &Till, coin: &u32| *coin > 0))
                .action(|till: &mut Till, coin: &u32| {
                    till.credit += coin;
                    Ok(())
                }),
        )?
        .transition(
            TransitionBuilder::new()
                .from(Vending::ProductSelected)
                .on(Button::SelectProduct)
                .to(Vending::Dispensing)
                .when(|till: &Till| till.credit >= PRICE),
        )?
        .transition(
            TransitionBuilder::new()
                .from(Vending::Dispensing)
                .on(Button::Dispense)
                .to(Vending::WaitingForMoney)
                .action(|till: &mut Till, _: &u32| {
                    if till.stock == 0 {
                        return Err(ActionError::new("sold out"));
                    }
                    till.stock -= 1;
                    till.credit -= PRICE;
                    Ok(())
                }),
        )?
        .build()
}

fn press(machine: &mut StateMachine<Vending, Button, Till, u32>, button: Button, coin: u32) {
    match machine.fire_with(button, &coin) {
        Ok(state) => println!("  {:?} -> now {}", button, state.name()),
        Err(error @ TransitionError::ActionFailed { .. }) => println!("  {:?} failed: {}", button, error),
        Err(error) => println!("  {:?} rejected: {}", button, error),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Vending Machine ===\n");

    let mut machine = build(1)?;
    machine.subscribe(|record| {
        println!("  [display] {} -> {}", record.from.name(), record.to.name());
    });

    println!("Selecting before paying:");
    press(&mut machine, Button::SelectProduct, 0);

    println!("\nPaying too little:");
    press(&mut machine, Button::InsertMoney, 100);
    press(&mut machine, Button::SelectProduct, 0);

    println!("\nStarting over with enough money:");
    let mut machine = build(1)?;
    press(&mut machine, Button::InsertMoney, 200);
    press(&mut machine, Button::SelectProduct, 0);
    press(&mut machine, Button::Dispense, 0);
    println!("  credit left: {}", machine.context().credit);

    println!("\nSecond purchase with an empty machine:");
    press(&mut machine, Button::InsertMoney, 200);
    press(&mut machine, Button::SelectProduct, 0);
    press(&mut machine, Button::Dispense, 0);
    println!("  still in: {}", machine.current_state().name());

    println!("\nJournal:");
    for record in machine.journal().records() {
        println!("  {} --{}--> {}", record.from.name(), record.event, record.to.name());
    }

    Ok(())
}
