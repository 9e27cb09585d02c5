use springfield::{
    scatter, FieldConfig, LogStepObserver, StepObserver, SpringPointField, StepStats, Vec2,
};

#[derive(Default)]
struct Recorder {
    pruned: usize,
    integrated: Vec<usize>,
    completed: Vec<StepStats<f64>>,
}

impl StepObserver<f64> for Recorder {
    fn on_impulses_pruned(&mut self, count: usize) {
        self.pruned += count;
    }

    fn on_integrate(&mut self, integrated: usize) {
        self.integrated.push(integrated);
    }

    fn on_step_complete(&mut self, stats: &StepStats<f64>) {
        self.completed.push(*stats);
    }
}

fn field() -> SpringPointField<f64> {
    let layout = vec![
        (Vec2::new(0.0, 0.0), true),
        (Vec2::new(10.0, 0.0), false),
        (Vec2::new(20.0, 0.0), false),
    ];
    SpringPointField::new(layout, FieldConfig::new()).unwrap()
}

#[test]
fn hooks_fire_once_per_step() {
    let mut field = field();
    let mut recorder = Recorder::default();
    field.trigger_impulse(Vec2::new(5.0, 0.0), 0.0);

    for _ in 0..3 {
        field.step(1.0, Some(Vec2::new(12.0, 0.0)), &mut recorder);
    }

    assert_eq!(recorder.integrated, vec![2, 2, 2]);
    assert_eq!(recorder.completed.len(), 3);
    // Expires at t = 2.0, dropped on the second step.
    assert_eq!(recorder.pruned, 1);
    assert_eq!(recorder.completed[1].pruned, 1);
}

#[test]
fn noop_tick_skips_hooks() {
    let mut field = field();
    let mut recorder = Recorder::default();
    let stats = field.step(0.0, None, &mut recorder);
    assert_eq!(stats.integrated, 0);
    assert!(recorder.integrated.is_empty());
    assert!(recorder.completed.is_empty());
}

#[test]
fn stats_match_field_queries() {
    let mut field = SpringPointField::new(scatter(&[Vec2::new(0.0, 0.0)]), FieldConfig::new()).unwrap();
    field.set_velocity(0, Vec2::new(3.0, 4.0)).unwrap();
    let stats = field.step(1.0 / 60.0, None, &mut LogStepObserver);
    assert_eq!(stats.kinetic_energy, field.kinetic_energy());
    assert_eq!(stats.spring_energy, field.spring_energy());
    assert_eq!(stats.max_displacement, field.max_displacement());
    assert!(stats.total_energy() > 0.0);
}
