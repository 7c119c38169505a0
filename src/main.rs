use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;
use std::time::Duration;

use easings::draw::svg::SVGAbsolutePath;
use easings::draw::DrawPath;
use easings::{AnimationDriver, ControlPoint, CurveEditor, EasingConfig, PixelPoint, Size};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = EasingConfig::default();
    let mut editor = CurveEditor::new(&config);
    let driver = Rc::new(RefCell::new(AnimationDriver::new(config)?));
    editor.set_observer(&driver);
    driver
        .borrow_mut()
        .layout_changed(&mut editor, Size::new(100.0, 100.0));

    // Pull the start handle up towards the top left corner
    editor.on_drag_begin(ControlPoint::Start);
    for step in 1..=5 {
        let t = step as f64 / 5.0;
        let position = PixelPoint::new(25.0 - 15.0 * t, 25.0 - 15.0 * t);
        editor.on_drag_move(ControlPoint::Start, position);
    }
    editor.on_drag_end(ControlPoint::Start);

    let mut d = String::new();
    SVGAbsolutePath::from(&mut d).add_path(editor.model().renderable_path());
    println!(
        "<svg viewBox=\"0 0 100 100\" xmlns=\"http://www.w3.org/2000/svg\">\
         <path d=\"{}\" fill=\"none\" stroke=\"black\"/></svg>",
        d
    );
    println!("{}", editor.timing_function());

    let driver = driver.borrow();
    for millis in (0..=2000).step_by(250) {
        let frame = driver.frame(&editor, Duration::from_millis(millis));
        println!(
            "{:>5}ms scale={:.3} color={:?} marker={:?}",
            millis,
            frame.scale.unwrap_or_default(),
            frame.fill_color,
            frame.marker.map(|p| (p.x, p.y))
        );
    }
    Ok(())
}
