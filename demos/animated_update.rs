//! Animated programmatic updates, timing then spring
//!
//! Run with: cargo run --example animated_update

use std::thread;
use std::time::Duration;
use trackbar::prelude::*;
use web_time::Instant;

#[derive(Debug, Clone)]
enum Message {
    Changed(f32),
}

fn main() {
    env_logger::init();

    let config = SliderConfig::new().range(0.0, 100.0);
    let mut slider: Slider<Message> = trackbar::slider(config).on_value_change(Message::Changed);
    slider.measure(Region::Container, Size::new(200.0, 40.0));
    slider.measure(Region::Track, Size::new(190.0, 4.0));
    slider.measure(Region::Thumb, Size::new(20.0, 20.0));

    println!("timing, 150 ms ease-in-out:");
    let token = slider.animate_to(80.0, Instant::now());
    run_until_complete(&mut slider);
    println!("transition {token:?} done at value {}", slider.value());

    let mut sprung = slider.config().clone();
    sprung.animation.animation_type = AnimationType::Spring;
    slider.set_config(sprung, Instant::now());

    println!("spring, friction 7 tension 100:");
    slider.animate_to(30.0, Instant::now());
    run_until_complete(&mut slider);
    println!("settled at value {}", slider.value());
}

/// Pump the host clock at roughly 60 fps until the transition finishes.
fn run_until_complete(slider: &mut Slider<Message>) {
    while slider.active_transition().is_some() {
        thread::sleep(Duration::from_millis(16));
        if let Some(message) = slider.tick(Instant::now()) {
            println!("-> {message:?}");
        } else {
            println!("   value {:.2}", slider.value());
        }
    }
}
