// Mediator as an event broker: publishers and subscribers only know the
// broker. Players publish goals, coaches subscribe to them.

use std::sync::{Arc, Mutex, PoisonError};

use crossbeam::channel::{unbounded, Receiver, Sender};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalScored {
    pub player: String,
    /// The player's running total, including this goal.
    pub goals: u32,
}

#[derive(Debug, Default)]
pub struct EventBroker {
    subscribers: Mutex<Vec<Sender<GoalScored>>>,
}

impl EventBroker {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn subscribe(&self) -> Receiver<GoalScored> {
        let (tx, rx) = unbounded();
        self.lock_subscribers().push(tx);
        rx
    }

    /// Sends `event` to every live subscriber; dead ones are forgotten.
    pub fn publish(&self, event: GoalScored) -> usize {
        let mut subscribers = self.lock_subscribers();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        debug!(player = %event.player, goals = event.goals, receivers = subscribers.len(), "published");
        subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock_subscribers().len()
    }

    fn lock_subscribers(&self) -> std::sync::MutexGuard<'_, Vec<Sender<GoalScored>>> {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug)]
pub struct FootballPlayer {
    name: String,
    goals: u32,
    broker: Arc<EventBroker>,
}

impl FootballPlayer {
    pub fn new(name: impl Into<String>, broker: &Arc<EventBroker>) -> Self {
        Self {
            name: name.into(),
            goals: 0,
            broker: Arc::clone(broker),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn goals(&self) -> u32 {
        self.goals
    }

    /// Records a goal and tells whoever is listening. Returns the number of
    /// subscribers reached.
    pub fn score(&mut self) -> usize {
        self.goals += 1;
        self.broker.publish(GoalScored {
            player: self.name.clone(),
            goals: self.goals,
        })
    }
}

#[derive(Debug)]
pub struct Coach {
    events: Receiver<GoalScored>,
}

impl Coach {
    pub fn new(broker: &EventBroker) -> Self {
        Self {
            events: broker.subscribe(),
        }
    }

    /// Reactions to every goal published since the last review.
    pub fn review(&self) -> Vec<String> {
        self.events
            .try_iter()
            .map(|event| format!("{}, you scored: {} goals!", event.player, event.goals))
            .collect()
    }
}
