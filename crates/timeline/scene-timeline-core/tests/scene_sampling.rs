use scene_timeline_core::{
    apply_scene, create_timeline, sample_all, sample_object, AnimatedObject, KeyframeDraft,
    ObjectAnimationState, Property, Timeline, Track, Vec2,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Rect moves (0,0) → (100,50) over 2s while fading 1 → 0.
fn moving_rect() -> Timeline {
    let tl = create_timeline("scene");
    let (tl, pos) = tl.add_track("rect", Property::Position);
    let (tl, opa) = tl.add_track("rect", Property::Opacity);
    let (tl, _) = tl.with_keyframe(pos, KeyframeDraft::new(0.0, Vec2::new(0.0, 0.0)));
    let (tl, _) = tl.with_keyframe(pos, KeyframeDraft::new(2.0, Vec2::new(100.0, 50.0)));
    let (tl, _) = tl.with_keyframe(opa, KeyframeDraft::new(0.0, 1.0));
    let (tl, _) = tl.with_keyframe(opa, KeyframeDraft::new(2.0, 0.0));
    tl
}

#[test]
fn empty_timeline_samples_to_empty_scene() {
    let tl = create_timeline("empty");
    assert!(sample_all(&tl, 0.0).is_empty());
    assert!(tl.sample_current().is_empty());
}

#[test]
fn object_state_combines_tracks() {
    let scene = sample_all(&moving_rect(), 1.0);
    assert_eq!(scene.len(), 1);
    let rect = &scene["rect"];
    assert!(approx(rect.position.x, 50.0));
    assert!(approx(rect.position.y, 25.0));
    assert!(approx(rect.opacity, 0.5));
    // Untracked properties keep neutral values.
    assert_eq!(rect.rotation, 0.0);
    assert_eq!(rect.scale, Vec2::ONE);
    assert_eq!(rect.stroke_color, "#000000");
    assert_eq!(rect.fill_color, "transparent");
    assert_eq!(rect.stroke_width, 1.0);
}

#[test]
fn sampling_is_pure() {
    let tl = moving_rect();
    let before = tl.clone();
    let a = sample_all(&tl, 0.7);
    let b = sample_all(&tl, 0.7);
    assert_eq!(a, b);
    assert_eq!(tl, before);
}

#[test]
fn empty_tracks_leave_defaults() {
    let (tl, _) = create_timeline("scene").add_track("circle", Property::Rotation);
    let scene = sample_all(&tl, 3.0);
    assert_eq!(scene["circle"], ObjectAnimationState::neutral("circle".into()));
}

#[test]
fn later_duplicate_track_wins() {
    let tl = create_timeline("scene");
    let (tl, first) = tl.add_track("rect", Property::Rotation);
    let (tl, second) = tl.add_track("rect", Property::Rotation);
    let (tl, _) = tl.with_keyframe(first, KeyframeDraft::new(0.0, 10.0));
    let (tl, _) = tl.with_keyframe(second, KeyframeDraft::new(0.0, 20.0));
    assert_eq!(sample_all(&tl, 0.0)["rect"].rotation, 20.0);
}

#[test]
fn wrong_value_shape_keeps_default() {
    let mut track = Track::new("rect", Property::Opacity);
    track = scene_timeline_core::add_keyframe(&track, KeyframeDraft::new(0.0, "red"));
    let tl = create_timeline("scene").with_track(track);
    assert_eq!(sample_all(&tl, 0.0)["rect"].opacity, 1.0);
}

#[test]
fn colors_step_between_keyframes() {
    let (tl, fill) = create_timeline("scene").add_track("rect", Property::FillColor);
    let (tl, _) = tl.with_keyframe(fill, KeyframeDraft::new(0.0, "#ffffff"));
    let (tl, _) = tl.with_keyframe(fill, KeyframeDraft::new(1.0, "#ff0000"));
    assert_eq!(sample_all(&tl, 0.2)["rect"].fill_color, "#ffffff");
    assert_eq!(sample_all(&tl, 0.8)["rect"].fill_color, "#ff0000");
}

#[test]
fn single_object_sampling() {
    let tl = moving_rect();
    let rect = sample_object(&tl, "rect", 2.0).unwrap();
    assert!(approx(rect.opacity, 0.0));
    assert!(sample_object(&tl, "ghost", 2.0).is_none());
}

#[test]
fn hidden_tracks_are_still_sampled() {
    let tl = moving_rect();
    let pos = tl.find_track("rect", Property::Position).unwrap().id;
    let tl = tl.with_track_visible(pos, false);
    assert!(approx(sample_all(&tl, 2.0)["rect"].position.x, 100.0));
}

#[test]
fn scene_json_uses_host_field_names() {
    let scene = sample_all(&moving_rect(), 0.0);
    let json = serde_json::to_value(&scene).unwrap();
    let rect = &json["rect"];
    assert_eq!(rect["objectId"], "rect");
    assert_eq!(rect["backgroundColor"], "transparent");
    assert_eq!(rect["strokeWidth"], 1.0);
    assert_eq!(rect["position"]["x"], 0.0);
}

struct Shape {
    id: String,
    x: f64,
    opacity: f64,
    touched: bool,
}

impl Shape {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            x: -1.0,
            opacity: -1.0,
            touched: false,
        }
    }
}

impl AnimatedObject for Shape {
    fn object_id(&self) -> &str {
        &self.id
    }

    fn apply_animation(&mut self, state: &ObjectAnimationState) {
        self.x = state.position.x;
        self.opacity = state.opacity;
        self.touched = true;
    }
}

#[test]
fn apply_scene_updates_only_animated_objects() {
    let scene = sample_all(&moving_rect(), 2.0);
    let mut shapes = vec![Shape::new("rect"), Shape::new("label")];
    assert_eq!(apply_scene(&mut shapes, &scene), 1);
    assert!(approx(shapes[0].x, 100.0));
    assert!(approx(shapes[0].opacity, 0.0));
    assert!(!shapes[1].touched);
    assert_eq!(shapes[1].x, -1.0);
}
