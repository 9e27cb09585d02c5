use springfield::forces::pointer_force;
use springfield::{scatter, FieldConfig, NoOpStepObserver, PointerMode, SpringPointField, Vec2};
use test_case::test_case;

const EPS: f64 = 1e-3;

#[test_case(0.0 ; "exactly at radius")]
#[test_case(EPS ; "just outside")]
#[test_case(50.0 ; "far outside")]
fn no_force_at_or_beyond_influence_radius(beyond: f64) {
    let config = FieldConfig::<f64>::new();
    let pointer = Vec2::new(0.0, 0.0);
    let pos = Vec2::new(config.influence_radius + beyond, 0.0);
    assert_eq!(pointer_force(pos, pointer, &config), Vec2::zero());
}

#[test_case(EPS ; "just inside")]
#[test_case(60.0 ; "halfway")]
#[test_case(119.0 ; "near pointer")]
fn repulsive_force_inside_influence_radius(inside: f64) {
    let config = FieldConfig::<f64>::new();
    let pointer = Vec2::new(0.0, 0.0);
    let pos = Vec2::new(config.influence_radius - inside, 0.0);
    let f = pointer_force(pos, pointer, &config);
    assert!(f.x > 0.0, "expected push away from pointer, got {:?}", f);
    assert_eq!(f.y, 0.0);
}

#[test]
fn falloff_is_quadratic() {
    let config = FieldConfig::<f64>::new().with_max_force(1e9);
    let pointer = Vec2::new(0.0, 0.0);
    let r = config.influence_radius;
    let half = pointer_force(Vec2::new(r * 0.5, 0.0), pointer, &config).x;
    let three_quarters = pointer_force(Vec2::new(r * 0.75, 0.0), pointer, &config).x;
    assert!((half - 0.25 * config.push_strength).abs() < 1e-12);
    assert!((three_quarters - 0.0625 * config.push_strength).abs() < 1e-12);
}

#[test]
fn field_point_outside_radius_does_not_move() {
    let mut field = SpringPointField::new(scatter(&[Vec2::new(0.0f64, 0.0)]), FieldConfig::new()).unwrap();
    let pointer = Vec2::new(field.config().influence_radius + EPS, 0.0);
    field.step(1.0 / 60.0, Some(pointer), &mut NoOpStepObserver);
    assert_eq!(field.position(0), Some(Vec2::zero()));
}

#[test]
fn field_point_inside_radius_is_pushed() {
    let mut field = SpringPointField::new(scatter(&[Vec2::new(0.0f64, 0.0)]), FieldConfig::new()).unwrap();
    let pointer = Vec2::new(field.config().influence_radius - EPS, 0.0);
    field.step(1.0 / 60.0, Some(pointer), &mut NoOpStepObserver);
    assert!(field.position(0).unwrap().x < 0.0);
}

#[test]
fn attract_mode_pulls_toward_pointer() {
    let config = FieldConfig::new().with_pointer_mode(PointerMode::Attract);
    let mut field = SpringPointField::new(scatter(&[Vec2::new(0.0f64, 0.0)]), config).unwrap();
    field.step(1.0 / 60.0, Some(Vec2::new(30.0, 0.0)), &mut NoOpStepObserver);
    assert!(field.position(0).unwrap().x > 0.0);
}

#[test]
fn pointer_release_lets_point_return() {
    let mut field = SpringPointField::new(scatter(&[Vec2::new(0.0f64, 0.0)]), FieldConfig::new()).unwrap();
    for _ in 0..30 {
        field.step(1.0 / 60.0, Some(Vec2::new(10.0, 0.0)), &mut NoOpStepObserver);
    }
    assert!(field.max_displacement() > 1.0);
    for _ in 0..600 {
        field.step(1.0 / 60.0, None, &mut NoOpStepObserver);
    }
    assert!(field.is_settled(1e-3));
}
