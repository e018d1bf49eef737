use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scene_timeline_core::{
    create_timeline, sample_all, Easing, Engine, Inputs, KeyframeDraft, Property, Timeline, Vec2,
};

/// `objects` rects, each with position and opacity tracks of `keys` keyframes.
fn build_timeline(objects: usize, keys: usize) -> Timeline {
    let mut tl = create_timeline("bench");
    for o in 0..objects {
        let id = format!("rect-{o}");
        let (next, pos) = tl.add_track(id.as_str(), Property::Position);
        let (next, opa) = next.add_track(id.as_str(), Property::Opacity);
        tl = next;
        for k in 0..keys {
            let t = k as f64 * 10.0 / keys as f64;
            let draft = KeyframeDraft::new(t, Vec2::new(k as f64, o as f64))
                .with_easing(Easing::EaseInOut);
            tl = tl.with_keyframe(pos, draft).0;
            tl = tl.with_keyframe(opa, KeyframeDraft::new(t, (k % 2) as f64)).0;
        }
    }
    tl
}

fn bench_sample_all(c: &mut Criterion) {
    let tl = build_timeline(100, 32);
    c.bench_function("sample_all_100_objects", |b| {
        let mut t = 0.0;
        b.iter(|| {
            t = (t + 0.016) % 10.0;
            black_box(sample_all(&tl, black_box(t)))
        })
    });
}

fn bench_engine_update(c: &mut Criterion) {
    let tl = build_timeline(50, 16).with_loop(true).play();
    let mut engine = match Engine::with_timeline(Default::default(), tl) {
        Ok(engine) => engine,
        Err(err) => panic!("bench timeline rejected: {err}"),
    };
    c.bench_function("engine_update_60fps", |b| {
        b.iter(|| {
            let out = engine.update(black_box(1.0 / 60.0), Inputs::default());
            black_box(out.scene.len());
        })
    });
}

criterion_group!(benches, bench_sample_all, bench_engine_update);
criterion_main!(benches);
