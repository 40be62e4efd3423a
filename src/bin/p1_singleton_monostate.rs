// Pattern 1: Monostate
// Many CEO values, one CEO state.

use design_patterns::creational::singleton::Ceo;
use design_patterns::{demo, Result};

fn main() -> Result<()> {
    demo::start("Pattern 1: Monostate")?;

    demo::section("Two instances");
    let ceo1 = Ceo::new();
    ceo1.set_name("Jon Doe");
    ceo1.set_age(55);
    println!("CEO 1\n{}", ceo1);

    let ceo2 = Ceo::new();
    ceo2.set_name("Don Joe");
    ceo2.set_age(52);
    println!("CEO 2\n{}", ceo2);

    demo::section("Checking back");
    println!("CEO 1\n{}", ceo1);
    println!("CEO 2\n{}", ceo2);

    demo::key_points(&[
        "Every Ceo value reads and writes the same storage",
        "Possibly deceptive: the call site looks like separate objects",
    ]);
    Ok(())
}
