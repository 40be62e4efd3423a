// Pattern 3: Iterator
// Walk a browse history without knowing how it is stored.

use itertools::Itertools;

use design_patterns::behavioural::{BrowseHistory, Cursor};
use design_patterns::{demo, Result};

fn main() -> Result<()> {
    demo::start("Pattern 3: Iterator")?;

    let mut history = BrowseHistory::new();
    for url in ["a", "b", "c", "d", "e"] {
        history.push(url);
    }

    demo::section("Cursor protocol");
    let mut cursor = history.create_iterator();
    while cursor.has_next() {
        if let Some(url) = cursor.current() {
            println!("{}", url);
        }
        cursor.advance();
    }

    demo::section("As a std Iterator");
    println!("{}", history.create_iterator().join(" -> "));

    demo::section("Pop");
    if let Some(last) = history.pop() {
        println!("Popped {}, {} left", last, history.len());
    }

    demo::key_points(&[
        "Only HistoryIterator knows the history is a Vec",
        "The cursor borrows the history, so it cannot change mid-walk",
        "Implementing Iterator unlocks for loops and adapters",
    ]);
    Ok(())
}
