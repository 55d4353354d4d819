//! Scripted drag session against a headless slider
//!
//! Run with: cargo run --example drag_session

use trackbar::prelude::*;
use trackbar::{DEFAULT_THUMB_SIZE, DEFAULT_TRACK_THICKNESS};

#[derive(Debug, Clone)]
enum Message {
    Started(f32),
    Changed(f32),
    Completed(f32),
}

fn main() {
    env_logger::init();

    // Partial documents merge over defaults, so hosts can ship sparse
    // configuration files.
    let config: SliderConfig = serde_json::from_str(
        r#"{
            "minimum_value": 1.0,
            "maximum_value": 10.0,
            "step": 1.0,
            "value": 2.0,
            "tick_marks": true
        }"#,
    )
    .unwrap();

    let mut slider: Slider<Message> = trackbar::slider(config)
        .on_sliding_start(Message::Started)
        .on_value_change(Message::Changed)
        .on_sliding_complete(Message::Completed);

    // Events before layout are ignored.
    report(slider.on_pointer_event(&PointerEvent::Start {
        location: Point::new(95.0, 20.0),
    }));

    slider.measure(Region::Container, Size::new(200.0, 40.0));
    slider.measure(Region::Track, Size::new(190.0, DEFAULT_TRACK_THICKNESS));
    slider.measure(
        Region::Thumb,
        Size::new(DEFAULT_THUMB_SIZE, DEFAULT_THUMB_SIZE),
    );
    println!("measured; thumb at {:?} px", slider.thumb_offset());
    println!(
        "tick offsets: {:?}",
        slider.tick_marks().collect::<Vec<_>>()
    );

    // Tap halfway down the track, then pull a few value units further.
    report(slider.on_pointer_event(&PointerEvent::Start {
        location: Point::new(95.0, 20.0),
    }));
    let unit = 170.0 / 9.0;
    for step in 1..=3 {
        report(slider.on_pointer_event(&PointerEvent::Move {
            translation: (unit * step as f32, 0.0),
        }));
    }
    report(slider.on_pointer_event(&PointerEvent::End {
        translation: (unit * 3.0, 0.0),
    }));

    println!(
        "final value {}, thumb at {:?} px, fill {:?} px",
        slider.value(),
        slider.thumb_offset(),
        slider.track_fill_extent()
    );
}

fn report(messages: Vec<Message>) {
    if messages.is_empty() {
        println!("(no messages)");
    }
    for message in messages {
        println!("-> {message:?}");
    }
}
