//! Floating Card Walkthrough
//!
//! This demo drives a sort-options card through its whole lifecycle without a
//! UI toolkit: the shell below stands in for the presenting screen and the
//! frame loop is a fixed 60 Hz tick.
//!
//! Key concepts:
//! - Presenting with drags locked out until the card is open
//! - A short drag that snaps back
//! - A long drag that commits and closes the card
//! - Dismissal from a background tap
//!
//! Run with: cargo run --example card_demo

use floating_card::{
    CardCloseObserver, CardConfig, DragOutcome, DragPhase, FloatingCard, FloatingCardBuilder,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

/// The screen that presents the card.
struct Shell {
    name: &'static str,
    closes: Cell<u32>,
}

impl CardCloseObserver for Shell {
    fn card_did_close(&self) {
        self.closes.set(self.closes.get() + 1);
        println!("  [{}] card closed, tearing down", self.name);
    }
}

fn run_until_idle(card: &mut FloatingCard<Vec<&'static str>>) {
    let mut frames = 0;
    while !card.engine().is_idle() {
        card.tick(FRAME);
        frames += 1;
    }
    println!(
        "  settled {:?} after {} frames (offset {:.1}, backdrop {:.2})",
        card.state(),
        frames,
        card.properties().card_offset.get(),
        card.properties().backdrop_opacity.get()
    );
}

fn drag(card: &mut FloatingCard<Vec<&'static str>>, translation_y: f32) -> DragOutcome {
    card.handle_drag(DragPhase::Began { velocity_y: 60.0 });
    card.handle_drag(DragPhase::Changed { translation_y });
    card.handle_drag(DragPhase::Ended)
}

fn main() {
    env_logger::init();
    println!("=== Floating Card ===\n");

    let shell = Rc::new(Shell {
        name: "SortScreen",
        closes: Cell::new(0),
    });
    let observer: Rc<dyn CardCloseObserver> = shell.clone();

    let mut card = FloatingCardBuilder::new()
        .content(vec!["Newest first", "Oldest first", "Lowest price"])
        .config(CardConfig {
            card_height: 320.0,
            show_drag_handle: true,
            ..CardConfig::default()
        })
        .close_observer(Rc::downgrade(&observer))
        .build()
        .unwrap();

    println!("Card content: {:?}\n", card.content());

    println!("1. Present");
    card.present();
    println!("  drag while presenting: {:?}", drag(&mut card, 200.0));
    run_until_idle(&mut card);

    println!("\n2. Short drag (40pt of 320)");
    println!("  released: {:?}", drag(&mut card, 40.0));
    run_until_idle(&mut card);

    println!("\n3. Long drag (160pt of 320)");
    println!("  released: {:?}", drag(&mut card, 160.0));
    run_until_idle(&mut card);

    println!("\n4. Present again, then tap the background");
    card.present();
    run_until_idle(&mut card);
    card.dismiss();
    run_until_idle(&mut card);

    println!("\nClose notifications: {}", shell.closes.get());
    println!("Transition path: {:?}", card.engine().history().get_path());

    println!("\n=== Demo Complete ===");
}
