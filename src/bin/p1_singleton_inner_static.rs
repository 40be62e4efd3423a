// Pattern 1: Inner Static Singleton
// Storage lives inside the accessor; OnceLock does the synchronisation.

use std::thread;

use design_patterns::creational::singleton::InnerStaticSingleton;
use design_patterns::{demo, Result};

fn main() -> Result<()> {
    let config = demo::start("Pattern 1: Inner Static Singleton")?;

    demo::section("Parallel access");
    thread::scope(|scope| {
        for i in 1..=config.threads {
            scope.spawn(move || {
                println!("Thread {} running...", i);
                println!("{}", InnerStaticSingleton::instance());
            });
        }
    });

    println!("\nConstructions: {}", InnerStaticSingleton::constructions());

    demo::key_points(&[
        "A static inside the function is invisible to the rest of the module",
        "OnceLock makes it lazy and thread-safe",
    ]);
    Ok(())
}
