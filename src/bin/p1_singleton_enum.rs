// Pattern 1: Enum Singleton
// A single-variant enum: only the variant is persisted.

use design_patterns::creational::singleton::SingletonEnum;
use design_patterns::{demo, Result};

fn main() -> Result<()> {
    let config = demo::start("Pattern 1: Enum Singleton")?;

    demo::section("Get and mutate");
    let singleton = SingletonEnum::Instance;
    println!("Initial value: {}", singleton.val());
    singleton.set_val(343);
    println!("After set_val: {}", singleton.val());

    demo::section("Save, mutate, restore");
    let path = config.snapshot_path("singleton_enum.bin");
    singleton.save_to_file(&path)?;
    singleton.set_val(2401);

    let doubleton = SingletonEnum::read_from_file(&path)?;
    println!("Live value:     {}", singleton.val());
    println!("Restored value: {}", doubleton.val());
    println!("Same instance:  {}", singleton == doubleton);

    std::fs::remove_file(&path)?;

    demo::key_points(&[
        "An enum with one variant cannot be instantiated twice",
        "Serialisation stores the variant, not the state",
    ]);
    Ok(())
}
