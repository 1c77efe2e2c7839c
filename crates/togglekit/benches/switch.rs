//! Benchmarks for the per-frame switch paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use togglekit::{Boundaries, MotionEngine, SwitchButton, SwitchConfig, ToggleState};
use togglekit_core::{deceleration_curve, Insets, RecordingRenderer, Size};

fn laid_out_switch() -> SwitchButton {
    let config = SwitchConfig {
        track_width: Some(100.0),
        initial_state: ToggleState::Off,
        ..SwitchConfig::default()
    };
    let mut switch = SwitchButton::new(config)
        .with_cursor_drawable(Size::new(40.0, 40.0))
        .with_shadow();
    switch
        .layout(Insets::uniform(4.0))
        .expect("cursor drawable set");
    switch
}

fn bench_deceleration_curve(c: &mut Criterion) {
    c.bench_function("deceleration_curve", |b| {
        b.iter(|| deceleration_curve(black_box(0.37)))
    });
}

fn bench_motion_tick(c: &mut Criterion) {
    let mut engine = MotionEngine::default();
    engine.set_boundaries(Boundaries::new(0.0, 100.0));

    c.bench_function("motion_tick_full_run", |b| {
        b.iter(|| {
            engine.start_animation(0.0, 100.0, 200, 0);
            for now in (0..=208).step_by(16) {
                black_box(engine.tick(black_box(now)));
            }
        })
    });
}

fn bench_drag_gesture(c: &mut Criterion) {
    let mut switch = laid_out_switch();

    c.bench_function("switch_drag_gesture", |b| {
        b.iter(|| {
            switch.on_pointer_down(black_box(20.0), 20.0, 0);
            for x in (30..120).step_by(5) {
                switch.on_pointer_move(black_box(x as f32), 0);
            }
            switch.on_pointer_up(100);
            switch.tick(400);
        })
    });
}

fn bench_paint(c: &mut Criterion) {
    let switch = laid_out_switch();
    let mut renderer = RecordingRenderer::new();

    c.bench_function("switch_paint", |b| {
        b.iter(|| {
            renderer.clear();
            let _ = switch.paint(black_box(&mut renderer));
        })
    });
}

criterion_group!(
    benches,
    bench_deceleration_curve,
    bench_motion_tick,
    bench_drag_gesture,
    bench_paint
);
criterion_main!(benches);
