// Pattern 1: Multiton
// One printer per subsystem, each created on first request.

use std::sync::Arc;

use rayon::prelude::*;

use design_patterns::creational::singleton::{Printer, Subsystem};
use design_patterns::{demo, Result};

fn main() -> Result<()> {
    demo::start("Pattern 1: Multiton")?;

    demo::section("Sequential requests");
    let main = Printer::instance(Subsystem::Primary);
    let aux = Printer::instance(Subsystem::Aux);
    let aux2 = Printer::instance(Subsystem::Aux);
    println!("main is printer #{}", main.serial());
    println!("aux is printer #{}", aux.serial());
    println!("aux == aux2: {}", Arc::ptr_eq(&aux, &aux2));
    println!("Printers so far: {}", Printer::created());

    demo::section("Parallel requests");
    let serials: Vec<usize> = (0..100)
        .into_par_iter()
        .map(|i| Printer::instance(Subsystem::ALL[i % Subsystem::ALL.len()]).serial())
        .collect();
    let mut distinct = serials.clone();
    distinct.sort_unstable();
    distinct.dedup();
    println!("100 requests saw printers {:?}", distinct);
    println!("Printers so far: {}", Printer::created());

    demo::key_points(&[
        "A closed key set bounds the number of instances",
        "Each key's instance is built lazily, exactly once",
    ]);
    Ok(())
}
