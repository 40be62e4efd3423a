// Pattern 1: Simple Singleton
// Eager instance that resolves back to itself when restored from disk.

use design_patterns::creational::singleton::{SimpleSingleton, SimpleSnapshot};
use design_patterns::{demo, Result};

fn main() -> Result<()> {
    let config = demo::start("Pattern 1: Simple Singleton")?;

    demo::section("Get and mutate");
    let singleton = SimpleSingleton::instance();
    println!("Initial value: {}", singleton.val());
    singleton.set_val(394);
    println!("After set_val: {}", singleton.val());

    demo::section("Save, mutate, restore");
    let path = config.snapshot_path("singleton.bin");
    singleton.save_to_file(&path)?;
    singleton.set_val(343);

    let doubleton = SimpleSingleton::read_from_file(&path)?;
    println!("Live value:     {}", singleton.val());
    println!("Restored value: {}", doubleton.val());
    println!("Same instance:  {}", std::ptr::eq(singleton, doubleton));

    demo::section("Without resolution");
    let detached = SimpleSnapshot::read_from_file(&path)?;
    println!("Raw snapshot value: {} (stale copy)", detached.val);

    std::fs::remove_file(&path)?;

    demo::key_points(&[
        "The instance is a const-initialised static",
        "Deserialising is redirected to the live instance",
        "Reading the raw snapshot shows the copy you would otherwise get",
    ]);
    Ok(())
}
