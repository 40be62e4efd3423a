// Pattern 3: Behavioural Patterns - Iterator, Mediator
// Demonstrates patterns for communication between objects.

pub mod event_broker;
pub mod iterator;
pub mod mediator;

pub use event_broker::{Coach, EventBroker, FootballPlayer, GoalScored};
pub use iterator::{BrowseHistory, Cursor, HistoryIterator};
pub use mediator::{ChatRoom, Message, Participant};
