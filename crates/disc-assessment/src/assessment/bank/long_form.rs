use super::{option, question, BankVariant, QuestionBank, ValidationPair};

pub(super) const VERSION: &str = "long-form/3.1.0";

pub(super) fn bank() -> QuestionBank {
    QuestionBank {
        variant: BankVariant::LongForm,
        version: VERSION.to_string(),
        questions: vec![
            question(
                "q01",
                "When a project stalls, I usually",
                [
                    option("Take over and push it across the line", [2.0, 0.5, 0.0, 0.0]),
                    option("Get everyone excited about it again", [0.5, 2.0, 0.0, 0.0]),
                    option("Keep the team steady until it recovers", [0.0, 0.0, 2.0, 0.5]),
                    option("Diagnose exactly where it went wrong", [0.0, 0.0, 0.5, 2.0]),
                ],
            ),
            question(
                "q02",
                "In team meetings I am the one who",
                [
                    option("Drives toward a decision", [2.0, 0.0, 0.0, 0.5]),
                    option("Keeps the energy up", [0.0, 2.0, 0.5, 0.0]),
                    option("Makes sure everyone is heard", [0.0, 0.5, 2.0, 0.0]),
                    option("Brings the data", [0.5, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q03",
                "Colleagues would describe me as",
                [
                    option("Direct", [2.0, 0.0, 0.0, 0.0]),
                    option("Enthusiastic", [0.0, 2.0, 0.0, 0.0]),
                    option("Dependable", [0.0, 0.0, 2.0, 0.0]),
                    option("Precise", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q04",
                "A new assignment lands on my desk. My first move is to",
                [
                    option("Set an aggressive deadline", [2.0, 0.0, 0.0, 0.5]),
                    option("Talk it through with people", [0.0, 2.0, 0.5, 0.0]),
                    option("Fit it into my existing routine", [0.0, 0.0, 2.0, 0.5]),
                    option("Read every requirement carefully", [0.0, 0.0, 0.5, 2.0]),
                ],
            ),
            question(
                "q05",
                "I feel most rewarded when I",
                [
                    option("Win against tough odds", [2.0, 0.5, 0.0, 0.0]),
                    option("Am recognized in front of others", [0.5, 2.0, 0.0, 0.0]),
                    option("Help a teammate succeed", [0.0, 0.5, 2.0, 0.0]),
                    option("Deliver flawless work", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q06",
                "When I disagree with my manager I",
                [
                    option("Say so plainly", [2.0, 0.0, 0.0, 0.0]),
                    option("Try to win them over", [0.5, 2.0, 0.0, 0.0]),
                    option("Go along to keep the peace", [0.0, 0.0, 2.0, 0.0]),
                    option("Prepare a documented counter-argument", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q07",
                "My ideal workday is",
                [
                    option("Packed with decisions to make", [2.0, 0.0, 0.0, 0.0]),
                    option("Full of conversations and new faces", [0.0, 2.0, 0.0, 0.0]),
                    option("Predictable and calm", [0.0, 0.0, 2.0, 0.5]),
                    option("Focused on one problem in depth", [0.0, 0.0, 0.5, 2.0]),
                ],
            ),
            question(
                "q08",
                "Under a tight deadline I",
                [
                    option("Cut scope and commit", [2.0, 0.0, 0.0, 0.0]),
                    option("Rally people to pitch in", [0.0, 2.0, 0.5, 0.0]),
                    option("Keep a steady pace and avoid panic", [0.0, 0.0, 2.0, 0.0]),
                    option("Check that quality does not slip", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q09",
                "The feedback I hear most often is that I am",
                [
                    option("Too blunt", [2.0, 0.0, 0.0, 0.0]),
                    option("Too talkative", [0.0, 2.0, 0.0, 0.0]),
                    option("Too accommodating", [0.0, 0.0, 2.0, 0.0]),
                    option("Too critical of details", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q10",
                "When joining a new team I start by",
                [
                    option("Finding out who makes the calls", [2.0, 0.0, 0.0, 0.5]),
                    option("Introducing myself to everyone", [0.0, 2.0, 0.0, 0.0]),
                    option("Learning how things are normally done", [0.0, 0.0, 2.0, 0.5]),
                    option("Reading the documentation", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "v01",
                "During a team discussion I tend to",
                [
                    option("Check everyone has had their say", [0.0, 0.5, 2.0, 0.0]),
                    option("Back points up with numbers", [0.5, 0.0, 0.0, 2.0]),
                    option("Push the group to a conclusion", [2.0, 0.0, 0.0, 0.5]),
                    option("Lift the mood of the room", [0.0, 2.0, 0.5, 0.0]),
                ],
            ),
            question(
                "q11",
                "I handle risk by",
                [
                    option("Taking it if the payoff is big", [2.0, 0.5, 0.0, 0.0]),
                    option("Trusting my instincts", [0.5, 2.0, 0.0, 0.0]),
                    option("Avoiding it where possible", [0.0, 0.0, 2.0, 0.5]),
                    option("Quantifying it first", [0.0, 0.0, 0.5, 2.0]),
                ],
            ),
            question(
                "q12",
                "Change at work makes me feel",
                [
                    option("Energized to lead it", [2.0, 0.5, 0.0, 0.0]),
                    option("Curious about the possibilities", [0.0, 2.0, 0.0, 0.0]),
                    option("Uneasy until things settle", [0.0, 0.0, 2.0, 0.0]),
                    option("Keen to understand the reasoning", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q13",
                "When I explain something I",
                [
                    option("Get straight to the point", [2.0, 0.0, 0.0, 0.0]),
                    option("Tell a story", [0.0, 2.0, 0.0, 0.0]),
                    option("Go slowly and check understanding", [0.0, 0.0, 2.0, 0.0]),
                    option("Lay out every step", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q14",
                "I am frustrated most by",
                [
                    option("Indecision", [2.0, 0.0, 0.0, 0.0]),
                    option("Isolation", [0.0, 2.0, 0.0, 0.0]),
                    option("Conflict", [0.0, 0.0, 2.0, 0.0]),
                    option("Sloppiness", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q15",
                "In a crisis people look to me to",
                [
                    option("Make the hard call", [2.0, 0.0, 0.0, 0.5]),
                    option("Keep spirits up", [0.0, 2.0, 0.5, 0.0]),
                    option("Stay calm and supportive", [0.0, 0.5, 2.0, 0.0]),
                    option("Work out what actually happened", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "sd01",
                "Which statement fits you best?",
                [
                    option("I have never once lost patience with a colleague", [0.0, 0.0, 1.5, 0.5]),
                    option("I push hard when a goal is on the line", [1.5, 0.0, 0.0, 0.0]),
                    option("I like being the one who lightens the mood", [0.0, 1.5, 0.0, 0.0]),
                    option("I double-check details before moving on", [0.0, 0.0, 0.0, 1.5]),
                ],
            ),
            question(
                "v02",
                "Given a free choice, my workday would be",
                [
                    option("Deep work on a single hard problem", [0.0, 0.0, 0.5, 2.0]),
                    option("A steady rhythm with few surprises", [0.0, 0.0, 2.0, 0.5]),
                    option("Meeting lots of different people", [0.0, 2.0, 0.0, 0.0]),
                    option("One decision after another", [2.0, 0.0, 0.0, 0.0]),
                ],
            ),
            question(
                "q16",
                "I prefer goals that are",
                [
                    option("Ambitious", [2.0, 0.0, 0.0, 0.0]),
                    option("Inspiring", [0.0, 2.0, 0.0, 0.0]),
                    option("Achievable", [0.0, 0.0, 2.0, 0.0]),
                    option("Clearly defined", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q17",
                "When a colleague struggles I",
                [
                    option("Tell them what to do", [2.0, 0.0, 0.0, 0.0]),
                    option("Cheer them on", [0.0, 2.0, 0.5, 0.0]),
                    option("Quietly help out", [0.0, 0.0, 2.0, 0.0]),
                    option("Show them the correct method", [0.5, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q18",
                "I make decisions",
                [
                    option("Quickly", [2.0, 0.5, 0.0, 0.0]),
                    option("Based on how people will react", [0.0, 2.0, 0.5, 0.0]),
                    option("After consulting the team", [0.0, 0.5, 2.0, 0.0]),
                    option("After analysing the options", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q19",
                "My workspace is usually",
                [
                    option("Set up for getting things done", [2.0, 0.0, 0.0, 0.0]),
                    option("Busy and full of reminders of people", [0.0, 2.0, 0.0, 0.0]),
                    option("Comfortable and familiar", [0.0, 0.0, 2.0, 0.0]),
                    option("Tidy and organized", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q20",
                "I would rather be known for",
                [
                    option("Results", [2.0, 0.0, 0.0, 0.0]),
                    option("Charisma", [0.0, 2.0, 0.0, 0.0]),
                    option("Loyalty", [0.0, 0.0, 2.0, 0.0]),
                    option("Accuracy", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "v03",
                "When the organization announces a restructure I",
                [
                    option("Want to see the rationale behind it", [0.0, 0.0, 0.0, 2.0]),
                    option("Step up to steer it", [2.0, 0.5, 0.0, 0.0]),
                    option("Feel unsettled for a while", [0.0, 0.0, 2.0, 0.0]),
                    option("Get excited about what could open up", [0.0, 2.0, 0.0, 0.0]),
                ],
            ),
            question(
                "q21",
                "Rules and procedures are",
                [
                    option("Guidelines I bend when needed", [2.0, 0.5, 0.0, 0.0]),
                    option("Less important than relationships", [0.0, 2.0, 0.5, 0.0]),
                    option("Helpful for keeping things stable", [0.0, 0.0, 2.0, 0.5]),
                    option("Essential for doing things right", [0.0, 0.0, 0.5, 2.0]),
                ],
            ),
            question(
                "q22",
                "When presenting to leadership I focus on",
                [
                    option("The bottom line", [2.0, 0.0, 0.0, 0.0]),
                    option("The vision", [0.0, 2.0, 0.0, 0.0]),
                    option("The impact on the team", [0.0, 0.0, 2.0, 0.0]),
                    option("The evidence", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q23",
                "I recharge by",
                [
                    option("Tackling a new challenge", [2.0, 0.0, 0.0, 0.0]),
                    option("Spending time with friends", [0.0, 2.0, 0.0, 0.0]),
                    option("Relaxing at home", [0.0, 0.0, 2.0, 0.0]),
                    option("Learning something in depth", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q24",
                "In negotiations I",
                [
                    option("Hold firm", [2.0, 0.0, 0.0, 0.0]),
                    option("Build rapport", [0.0, 2.0, 0.0, 0.0]),
                    option("Look for common ground", [0.0, 0.5, 2.0, 0.0]),
                    option("Know the numbers cold", [0.0, 0.0, 0.0, 2.0]),
                ],
            ),
            question(
                "q25",
                "Looking back on a finished project I think about",
                [
                    option("What we achieved", [2.0, 0.0, 0.0, 0.0]),
                    option("The people I worked with", [0.0, 2.0, 0.5, 0.0]),
                    option("Whether everyone was looked after", [0.0, 0.0, 2.0, 0.0]),
                    option("What could have been done better", [0.0, 0.0, 0.5, 2.0]),
                ],
            ),
            question(
                "v04",
                "When a choice has to be made I",
                [
                    option("Work through the alternatives methodically", [0.0, 0.0, 0.0, 2.0]),
                    option("Ask the team what they think", [0.0, 0.5, 2.0, 0.0]),
                    option("Consider how it will land with people", [0.0, 2.0, 0.5, 0.0]),
                    option("Decide on the spot", [2.0, 0.5, 0.0, 0.0]),
                ],
            ),
            question(
                "v05",
                "After a demanding week I prefer to",
                [
                    option("Have a quiet evening in", [0.0, 0.0, 2.0, 0.0]),
                    option("Dig into a subject that interests me", [0.0, 0.0, 0.0, 2.0]),
                    option("Go out with friends", [0.0, 2.0, 0.0, 0.0]),
                    option("Start on something new and difficult", [2.0, 0.0, 0.0, 0.0]),
                ],
            ),
        ],
        validation_pairs: vec![
            ValidationPair::new("q02", "v01"),
            ValidationPair::new("q07", "v02"),
            ValidationPair::new("q12", "v03"),
            ValidationPair::new("q18", "v04"),
            ValidationPair::new("q23", "v05"),
        ],
        social_desirability_probe: Some("sd01".to_string()),
    }
}
