// Pattern 2: Structural Patterns - Decorator
// Adds behaviour without altering a type or inheriting from it.

pub mod decorator;
