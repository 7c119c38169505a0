use criterion::{black_box, BenchmarkId, Criterion};
use easings::{ControlPoint, CurveEditor, PixelPoint, Size};
use crate::common::samples::TIMING_FUNCTIONS;

pub fn evaluate(c: &mut Criterion) {
    for timing in TIMING_FUNCTIONS.iter() {
        c.bench_with_input(BenchmarkId::new("evaluate", timing), timing, |b, timing| {
            b.iter(|| black_box(timing.evaluate(black_box(0.37))))
        });
    }
}

pub fn drag(c: &mut Criterion) {
    let mut editor = CurveEditor::default();
    editor.layout_changed(Size::new(400.0, 400.0));
    c.bench_function("drag", |b| {
        let mut x = 0.0;
        b.iter(|| {
            x = (x + 1.0) % 400.0;
            editor.on_drag_move(ControlPoint::End, PixelPoint::new(x, 400.0 - x));
        })
    });
    editor.on_drag_end(ControlPoint::End);
}

pub fn all(c: &mut Criterion) {
    evaluate(c);
    drag(c);
}
