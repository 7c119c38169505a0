use easings::TimingFunction;
use once_cell::sync::Lazy;

pub static TIMING_FUNCTIONS: Lazy<Vec<TimingFunction>> = Lazy::new(|| vec![
    TimingFunction::LINEAR,
    TimingFunction::EASE_IN_EASE_OUT,
    TimingFunction::new(0.25, 0.75, 0.75, 0.25),
    TimingFunction::new(0.3, 1.8, 0.6, 1.4),
    TimingFunction::new(-0.5, 0.2, 1.5, 0.8),
]);
