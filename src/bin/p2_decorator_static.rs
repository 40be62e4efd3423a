// Pattern 2: Decorator (generics)
// The decorated type is part of the wrapper's type; no boxing.

use design_patterns::structural::decorator::{Circle, Coloured, Shape, Square, Transparent};
use design_patterns::{demo, Result};

fn main() -> Result<()> {
    demo::start("Pattern 2: Decorator (Static Composition)")?;

    demo::section("Plain shape");
    println!("{}", Circle::new(10.0).info());

    demo::section("Coloured<Square>");
    let red_square: Coloured<Square> = Coloured::new(Square::new(5.0), "red");
    println!("{}", red_square.info());

    demo::section("Transparent<Coloured<Circle>>");
    let trans_green_circle: Transparent<Coloured<Circle>> =
        Transparent::new(Coloured::new(Circle::new(7.0), "green"), 25);
    println!("{}", trans_green_circle.info());

    demo::key_points(&[
        "Composition is checked and monomorphised at compile time",
        "Same descriptions as the dynamic version, zero allocations",
    ]);
    Ok(())
}
