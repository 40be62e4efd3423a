// Pattern 1: Creational Patterns - the Singleton family
// Components for which only one instance is sensible, or whose constructor
// is expensive. Each variant trades laziness, fallibility and identity
// differently.

pub mod singleton;
