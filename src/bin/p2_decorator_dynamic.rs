// Pattern 2: Decorator (trait objects)
// Wrappers own a Box<dyn Shape> and can be stacked at run time.

use design_patterns::structural::decorator::{Circle, ColouredShape, Shape, Square, TransparentShape};
use design_patterns::{demo, Result};

fn main() -> Result<()> {
    demo::start("Pattern 2: Decorator (Dynamic Composition)")?;

    demo::section("Plain shape");
    let circle = Circle::new(10.0);
    println!("{}", circle.info());

    demo::section("Coloured shape");
    let red_square = ColouredShape::new(Square::new(5.0), "red");
    println!("{}", red_square.info());

    demo::section("Coloured transparent shape");
    let trans_green_circle = TransparentShape::new(ColouredShape::new(Circle::new(7.0), "green"), 25);
    println!("{}", trans_green_circle.info());
    // trans_green_circle.scale(2.0) does not exist: only Shape is forwarded.

    demo::section("Decorating a borrowed shape");
    let blue = ColouredShape::new(&circle, "blue");
    println!("{}", blue.info());
    println!("{}", circle.info());

    demo::key_points(&[
        "Adds behaviour without touching Circle or Square",
        "Any Shape can be wrapped, to any depth",
        "Methods outside the Shape trait are not reachable through a wrapper",
    ]);
    Ok(())
}
