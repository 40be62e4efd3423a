// Pattern 2: String Decorator
// A newtype adds vowel counting; Deref forwards the rest of str.

use design_patterns::structural::decorator::RichString;
use design_patterns::{demo, Result};

fn main() -> Result<()> {
    demo::start("Pattern 2: String Decorator")?;

    demo::section("Extra behaviour");
    let s = RichString::new("hEllO sOme RanDoM STriNg");
    println!("{} {} vowels.", s, s.vowel_count());

    demo::section("Delegated behaviour");
    println!("len: {}", s.len());
    println!("lowercase: {}", s.to_lowercase());
    println!("words: {}", s.split_whitespace().count());

    demo::key_points(&[
        "String cannot be extended, so wrap it",
        "Deref<Target = str> exposes every str method for free",
    ]);
    Ok(())
}
