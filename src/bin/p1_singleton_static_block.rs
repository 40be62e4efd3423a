// Pattern 1: Static Block Singleton
// The constructor can fail; failure is logged and the accessor stays empty.

use design_patterns::creational::singleton::StaticBlockSingleton;
use design_patterns::{demo, Result};

fn main() -> Result<()> {
    demo::start("Pattern 1: Static Block Singleton")?;

    demo::section("Fallible construction");
    match StaticBlockSingleton::instance() {
        Some(singleton) => {
            println!("{}", singleton);
            println!("Scratch file: {}", singleton.scratch_path().display());
        }
        None => println!("No instance: construction failed (see log)"),
    }

    demo::section("Forced failure");
    if let Err(err) = StaticBlockSingleton::new_in("/nonexistent/scratch") {
        println!("{}", err);
    }

    demo::key_points(&[
        "Construction is attempted exactly once",
        "A failed attempt is logged, never retried",
        "Callers must cope with an absent instance",
    ]);
    Ok(())
}
