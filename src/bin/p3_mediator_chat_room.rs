// Pattern 3: Mediator (chat room)
// People talk through the room; nobody holds a reference to anybody else.

use itertools::Itertools;

use design_patterns::behavioural::{ChatRoom, Participant};
use design_patterns::{demo, Result};

fn show(participant: &mut Participant) {
    let name = participant.name().to_string();
    for line in participant.receive() {
        println!("[{}'s session] {}", name, line);
    }
}

fn main() -> Result<()> {
    demo::start("Pattern 3: Mediator (Chat Room)")?;

    let room = ChatRoom::new();

    demo::section("Two users join and chat");
    let mut john = room.join("John");
    let mut jane = room.join("Jane");
    john.say("Howdy fellas?");
    jane.say("Hey john!");
    show(&mut john);
    show(&mut jane);

    demo::section("A third user joins");
    let mut ed = room.join("Ed");
    ed.say("What'd I miss?");
    show(&mut john);
    show(&mut jane);

    demo::section("Private messages");
    ed.pm("John", "Hey, how's it going?");
    john.pm("Ed", "Glad to have you here!");
    let delivered = john.pm("Nobody", "Anyone there?");
    show(&mut john);
    show(&mut ed);
    println!("Messages delivered to 'Nobody': {}", delivered);

    println!("\nMembers: {}", room.member_names().iter().join(", "));

    demo::key_points(&[
        "Participants only hold the room and their own inbox",
        "Broadcast reaches everyone but the sender",
        "A private message to an unknown name is silently dropped",
    ]);
    Ok(())
}
