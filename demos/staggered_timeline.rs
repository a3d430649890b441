//! Plays a staggered group and a follow-up tween through a fixed-step loop, printing the
//! animated values every few frames.
//!
//! Run with `RUST_LOG`-style filtering through `tracing_subscriber`:
//! `cargo run --example staggered_timeline`

use choreo::{Ease, Group, Leaf, Timeline, shared};
use kurbo::Point;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let bars: Vec<_> = (0..5).map(|_| shared(0.0_f64)).collect();
    let dot = shared(Point::new(0.0, 0.0));

    let stagger = Group::lagged_start_map(
        bars.iter().cloned(),
        |bar| Ok(Leaf::tween(0.6, bar, 1.0)?.with_rate(Ease::Smooth)),
        0.25,
    )?;

    let mut tl = Timeline::new();
    tl.add(stagger)
        .add_at(
            Leaf::tween(1.0, dot.clone(), Point::new(100.0, 40.0))?.with_rate(Ease::OutBack),
            "-=0.3",
        )
        .add_at(Leaf::wait(0.5)?, "sometime");

    println!("duration: {:.3}s, entries: {}", tl.duration(), tl.len());

    tl.play();
    let mut frame = 0u32;
    while tl.is_playing() {
        tl.update(1.0 / 30.0);
        if frame % 6 == 0 {
            let heights: Vec<String> = bars.iter().map(|b| format!("{:.2}", *b.borrow())).collect();
            let p = *dot.borrow();
            println!(
                "t={:.3} bars=[{}] dot=({:.1}, {:.1})",
                tl.current_time(),
                heights.join(", "),
                p.x,
                p.y
            );
        }
        frame += 1;
    }

    tl.finish();
    println!("finished at t={:.3}", tl.current_time());
    Ok(())
}
