// Mediator: components talk through a coordinator and never hold each
// other. Direct references could go stale at any moment; the room is the
// only thing that knows who is present.
//
// Chat room example: each participant keeps a handle to the room plus its
// own inbox. The room keeps the sending half of every inbox.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crossbeam::channel::{unbounded, Receiver, Sender};
use tracing::debug;

pub const SERVER: &str = "Server:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: String,
    pub body: String,
}

impl Message {
    fn new(sender: &str, body: &str) -> Self {
        Self {
            sender: sender.to_string(),
            body: body.to_string(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: '{}'", self.sender, self.body)
    }
}

struct Member {
    name: String,
    inbox: Sender<Message>,
}

// ============================================================================
// Example: ChatRoom - the coordinator
// ============================================================================

#[derive(Default)]
pub struct ChatRoom {
    members: Mutex<Vec<Member>>,
}

impl ChatRoom {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Announces the newcomer to everyone already present, then registers it.
    pub fn join(self: &Arc<Self>, name: impl Into<String>) -> Participant {
        let name = name.into();
        self.broadcast(SERVER, &format!("{} has joined the room.", name));

        let (tx, rx) = unbounded();
        self.lock_members().push(Member {
            name: name.clone(),
            inbox: tx,
        });
        debug!(%name, "joined chat room");

        Participant {
            name,
            room: Arc::clone(self),
            inbox: rx,
            chat_log: Vec::new(),
        }
    }

    /// Delivers to every member except `src`. Returns the delivery count.
    pub fn broadcast(&self, src: &str, body: &str) -> usize {
        let mut delivered = 0;
        self.lock_members().retain(|member| {
            if member.name == src {
                return true;
            }
            let alive = member.inbox.send(Message::new(src, body)).is_ok();
            if alive {
                delivered += 1;
            } else {
                debug!(name = %member.name, "dropping member with closed inbox");
            }
            alive
        });
        delivered
    }

    /// Delivers to the first live member called `to`. Unknown names are
    /// ignored. Members with a closed inbox are pruned along the way.
    pub fn message(&self, src: &str, to: &str, body: &str) -> usize {
        let mut members = self.lock_members();
        let mut message = Some(Message::new(src, body));
        members.retain(|member| {
            if member.name != to {
                return true;
            }
            let Some(pending) = message.take() else {
                return true;
            };
            match member.inbox.send(pending) {
                Ok(()) => true,
                Err(returned) => {
                    debug!(name = %member.name, "dropping member with closed inbox");
                    message = Some(returned.into_inner());
                    false
                }
            }
        });

        if message.is_some() {
            debug!(%src, %to, "private message to unknown member ignored");
            0
        } else {
            1
        }
    }

    pub fn member_names(&self) -> Vec<String> {
        self.lock_members().iter().map(|m| m.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock_members().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_members().is_empty()
    }

    fn lock_members(&self) -> std::sync::MutexGuard<'_, Vec<Member>> {
        self.members.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// Example: Participant - knows the room, never another participant
// ============================================================================

pub struct Participant {
    name: String,
    room: Arc<ChatRoom>,
    inbox: Receiver<Message>,
    chat_log: Vec<String>,
}

impl Participant {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Say to all.
    pub fn say(&self, body: &str) -> usize {
        self.room.broadcast(&self.name, body)
    }

    /// Private message.
    pub fn pm(&self, to: &str, body: &str) -> usize {
        self.room.message(&self.name, to, body)
    }

    /// Moves everything delivered since the last call into the chat log and
    /// returns the new lines.
    pub fn receive(&mut self) -> &[String] {
        let start = self.chat_log.len();
        self.chat_log
            .extend(self.inbox.try_iter().map(|message| message.to_string()));
        &self.chat_log[start..]
    }

    pub fn chat_log(&self) -> &[String] {
        &self.chat_log
    }
}

impl fmt::Debug for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("name", &self.name)
            .field("chat_log", &self.chat_log)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_join_announced_to_existing_members() {
        let room = ChatRoom::new();
        let mut john = room.join("John");
        let mut jane = room.join("Jane");

        assert_eq!(john.receive(), ["Server:: 'Jane has joined the room.'"]);
        assert!(jane.receive().is_empty());
        assert_eq!(room.member_names(), vec!["John", "Jane"]);
    }

    #[test]
    fn test_broadcast_skips_sender() {
        let room = ChatRoom::new();
        let mut john = room.join("John");
        let mut jane = room.join("Jane");
        john.receive();

        assert_eq!(john.say("Howdy fellas?"), 1);
        assert_eq!(jane.receive(), ["John: 'Howdy fellas?'"]);
        assert!(john.receive().is_empty());
    }

    #[test]
    fn test_private_message() {
        let room = ChatRoom::new();
        let mut john = room.join("John");
        let ed = room.join("Ed");
        john.receive();

        assert_eq!(ed.pm("John", "Hey, how's it going?"), 1);
        assert_eq!(john.receive(), ["Ed: 'Hey, how's it going?'"]);
    }

    #[test]
    fn test_private_message_to_unknown_is_noop() {
        let room = ChatRoom::new();
        let mut john = room.join("John");
        let mut jane = room.join("Jane");
        john.receive();

        assert_eq!(john.pm("Nobody", "hello?"), 0);
        assert!(john.receive().is_empty());
        assert!(jane.receive().is_empty());
    }

    #[test]
    fn test_dropped_participant_is_pruned() {
        let room = ChatRoom::new();
        let john = room.join("John");
        let jane = room.join("Jane");
        drop(jane);

        assert_eq!(john.say("anyone?"), 0);
        assert_eq!(room.member_names(), vec!["John"]);
    }

    #[test]
    fn test_private_message_skips_dropped_namesake() {
        let room = ChatRoom::new();
        let ed = room.join("Ed");
        let first_john = room.join("John");
        let mut second_john = room.join("John");
        drop(first_john);
        second_john.receive();

        assert_eq!(ed.pm("John", "hi"), 1);
        assert_eq!(second_john.receive(), ["Ed: 'hi'"]);
        assert_eq!(room.member_names(), vec!["Ed", "John"]);
    }

    #[test]
    fn test_chat_log_accumulates() {
        let room = ChatRoom::new();
        let mut john = room.join("John");
        let jane = room.join("Jane");
        jane.say("one");
        john.receive();
        jane.say("two");
        john.receive();

        assert_eq!(john.chat_log().len(), 3);
        assert_eq!(john.chat_log()[2], "Jane: 'two'");
    }

    proptest! {
        #[test]
        fn test_broadcast_reaches_all_but_sender(members in 1usize..20, sender in 0usize..20) {
            let sender = sender % members;
            let room = ChatRoom::new();
            let mut participants: Vec<Participant> =
                (0..members).map(|i| room.join(format!("p{}", i))).collect();
            for p in participants.iter_mut() {
                p.receive();
            }

            let delivered = participants[sender].say("ping");
            prop_assert_eq!(delivered, members - 1);

            for (i, p) in participants.iter_mut().enumerate() {
                let expected = if i == sender { 0 } else { 1 };
                prop_assert_eq!(p.receive().len(), expected);
            }
        }
    }
}
