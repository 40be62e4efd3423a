// Pattern 3: Mediator (event broker)
// Players publish goals, the coach subscribes; neither knows the other.

use design_patterns::behavioural::{Coach, EventBroker, FootballPlayer};
use design_patterns::{demo, Result};

fn main() -> Result<()> {
    demo::start("Pattern 3: Mediator (Event Broker)")?;

    let broker = EventBroker::new();
    let mut will = FootballPlayer::new("Will", &broker);
    let mut nate = FootballPlayer::new("Nate", &broker);
    let coach = Coach::new(&broker);

    demo::section("Scoring");
    will.score();
    nate.score();
    nate.score();

    for line in coach.review() {
        println!("{}", line);
    }

    println!("\n{} scored {}, {} scored {}", will.name(), will.goals(), nate.name(), nate.goals());

    demo::key_points(&[
        "The broker is the only shared object",
        "Subscribers receive events over channels",
        "Dropped subscribers are forgotten on the next publish",
    ]);
    Ok(())
}
