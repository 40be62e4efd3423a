// Pattern 1: Lazy Singleton
// Several threads race on first access; double-checked locking builds once.

use std::thread;

use design_patterns::creational::singleton::LazySingleton;
use design_patterns::{demo, Result};

fn main() -> Result<()> {
    let config = demo::start("Pattern 1: Lazy Singleton")?;

    demo::section("Racing first access");
    let handles = (1..=config.threads)
        .map(|i| {
            thread::Builder::new()
                .name(format!("thread-{}", i))
                .spawn(move || {
                    println!("Thread {} running...", i);
                    let instance = LazySingleton::instance();
                    println!("Thread {} got {}", i, instance);
                })
        })
        .collect::<std::io::Result<Vec<_>>>()?;

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("a worker thread panicked");
        }
    }

    println!();
    println!("Constructions: {}", LazySingleton::constructions());
    println!("Built by:      {}", LazySingleton::instance().initialised_by());

    demo::key_points(&[
        "First check is a lock-free atomic load",
        "The lock is only taken while the instance is missing",
        "The re-check under the lock stops a second construction",
    ]);
    Ok(())
}
