//! Runs each scenario in the crate and prints what happens.
//!
//! `PATTERN_TOUR_LOG` sets the level of the crate's own log output, which goes to standard
//! error. It defaults to `warn`.

use std::{env, error::Error, io};

use log::LevelFilter;

use behavioral_patterns::{
    MoveRequest,
    behavioral::{
        chain_of_responsibility::send_message_chain,
        command::{AddShape, ClearAll, CommandHistory},
        greeting_cards::{GreetingCardGenerator, SignedCard},
        instant_replay::{CanvasHistory, RecordingCanvas, ReplayCanvas},
        interpreter::{self, Expression},
        iterator::NumberCollection,
        memento::{Canvas, render},
        null_object::{ApiLogger, ConsoleLogger, LogBridge, Stream, Task, stderr_logger},
        observer::{ChatNetwork, ChatUser},
        state::Purchase,
        strategy::{DynGreeter, Formal, Informal, Normal},
        template_method::{BirthdayCard, Generate, PongalCard, StandardCard},
        visitor::{Car, DatabaseVisitor, Landmark, Person, TextFileVisitor, Visitable},
    },
    move_bytes,
};

const LOG_VAR: &str = "PATTERN_TOUR_LOG";

type Scenario = fn() -> Result<(), Box<dyn Error>>;

/// Reads the log level from the value of `PATTERN_TOUR_LOG`, if it is set.
fn log_level(var: Result<String, env::VarError>) -> Result<LevelFilter, String> {
    match var {
        Ok(value) => value
            .parse()
            .map_err(|err| format!("{LOG_VAR}={value}: {err}")),
        Err(env::VarError::NotPresent) => Ok(LevelFilter::Warn),
        Err(err) => Err(format!("{LOG_VAR}: {err}")),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    LogBridge::new(stderr_logger(), log_level(env::var(LOG_VAR))?).install()?;

    for (title, scenario) in SCENARIOS {
        println!("== {title} ==\n");
        scenario()?;
        println!();
    }
    Ok(())
}

const SCENARIOS: [(&str, Scenario); 13] = [
    ("Moving bytes", moving_bytes),
    ("Template Method", template_method),
    ("Visitor", visitor),
    ("Greeting Cards", greeting_cards),
    ("Iterator", iterator),
    ("Memento", memento),
    ("Instant Replay", instant_replay),
    ("State", state),
    ("Strategy", strategy),
    ("Group Chat", group_chat),
    ("Null Object", null_object),
    ("Interpreter", interpreter),
    ("Command", command),
];

fn moving_bytes() -> Result<(), Box<dyn Error>> {
    for (src, dest) in [(0, 2), (2, 0)] {
        let mut buffer = [1u8, 2, 3, 4, 5, 6, 7];
        let before = buffer;
        let outcome = move_bytes(&mut buffer, MoveRequest::new(src, dest, 5))?;
        println!("{before:?} src={src} dest={dest} n=5 -> {buffer:?} ({outcome:?})");
    }
    Ok(())
}

fn template_method() -> Result<(), Box<dyn Error>> {
    println!("{}", StandardCard.generate("Sashwin", "Anand"));
    println!("{}", BirthdayCard.generate("Sashwin", "Anand"));
    println!("{}", PongalCard.generate("Sashwin", "Anand"));
    Ok(())
}

fn visitor() -> Result<(), Box<dyn Error>> {
    let person = Person::new("Anand", 30);
    let landmark = Landmark::new("Eiffel Tower", "Paris");
    let car = Car::new("Chevrolet", "Camaro");

    let mut database = DatabaseVisitor::default();
    person.accept(&mut database);
    landmark.accept(&mut database);
    car.accept(&mut database);
    for row in database.rows() {
        println!("{row}");
    }

    let mut text = TextFileVisitor::new(io::stdout().lock());
    person.accept(&mut text)?;
    landmark.accept(&mut text)?;
    car.accept(&mut text)?;
    Ok(())
}

fn greeting_cards() -> Result<(), Box<dyn Error>> {
    let mut generator = GreetingCardGenerator::new();
    generator.add_person(Person::new("Sashwin", 25));
    generator.add_person(Person::new("Anand", 30));
    generator.set_template(SignedCard::new(BirthdayCard, "Rishi"));
    for card in generator.create_greeting_cards()? {
        println!("{card}");
    }
    Ok(())
}

fn iterator() -> Result<(), Box<dyn Error>> {
    let fib = NumberCollection::fibonacci(9);
    println!("Iterating forward:\n{}\n", line(fib.forward()));
    println!("Iterating backward:\n{}", line(fib.backward()));
    Ok(())
}

fn line(numbers: impl Iterator<Item = i64>) -> String {
    numbers.map(|n| format!("{n} ")).collect()
}

fn memento() -> Result<(), Box<dyn Error>> {
    let mut canvas = Canvas::new();
    for shape in ["rhombus", "triangle", "square", "circle"] {
        canvas.add_shape(shape);
    }
    println!("Shapes: {}", render(canvas.shapes()));
    canvas.undo()?;
    println!("After undo: {}", render(canvas.shapes()));
    canvas.clear_all();
    canvas.undo()?;
    println!("Cleared, then undone: {}", render(canvas.shapes()));
    Ok(())
}

fn instant_replay() -> Result<(), Box<dyn Error>> {
    let mut canvas = RecordingCanvas::new(CanvasHistory::new());
    for shape in ["rhombus", "triangle", "square", "circle"] {
        canvas.add_shape(shape);
    }
    canvas.clear_all();
    canvas.add_shape("star");
    canvas.undo();

    let history = canvas.into_history();
    for frame in ReplayCanvas::new(&history) {
        println!("{frame}");
    }
    Ok(())
}

fn state() -> Result<(), Box<dyn Error>> {
    let mut purchase = Purchase::new("Shoes");
    while let Some(description) = purchase.description() {
        print!("{description}");
        purchase.advance();
    }
    // One step too many, to show what happens.
    purchase.advance();
    Ok(())
}

fn strategy() -> Result<(), Box<dyn Error>> {
    let mut politician = DynGreeter::new(Formal);
    let people = [
        ("businessperson", DynGreeter::new(Formal), "Sashwin"),
        ("normal person", DynGreeter::new(Normal), "Anand"),
        ("cool person", DynGreeter::new(Informal), "Anand"),
    ];
    for (who, greeter, name) in &people {
        println!("The {who} says: {}", greeter.greet(name));
    }
    println!("The politician says: {}", politician.greet("Anand"));
    politician.set_strategy(|name: &str| format!("My fellow citizen {name}!"));
    println!("The politician, on the campaign trail: {}", politician.greet("Anand"));
    Ok(())
}

fn group_chat() -> Result<(), Box<dyn Error>> {
    let jack = ChatUser::new("Jack");
    let jill = ChatUser::new("Jill");
    let rose = ChatUser::new("Rose");

    let mut network = ChatNetwork::new();
    network.join("Cooking", jack.clone());
    network.join("Cooking", jill.clone());
    network.join("Gardening", jill.clone());
    network.join("Gardening", rose.clone());

    println!("{} people in {} groups\n", network.members().len(), network.len());

    let chain = send_message_chain();
    let attempts = [
        ("Cooking", ""),
        ("Cooking", "Hi"),
        ("Cooking", "Hi there! in cooking group"),
        ("Gardening", "Hi there! in gardening group"),
    ];
    for (name, message) in attempts {
        let group = network.group_mut(name);
        match chain.handle(group, message) {
            Ok(reply) => println!("{name} <- {message:?}: {reply}"),
            Err(rejection) => println!("{name} <- {message:?}: {rejection}"),
        }
    }

    for user in [&jack, &jill, &rose] {
        for line in user.inbox() {
            println!("{line}");
        }
    }
    Ok(())
}

fn null_object() -> Result<(), Box<dyn Error>> {
    Task::new(ConsoleLogger::new(Stream::Stdout)).execute();

    let api = ApiLogger::new();
    Task::new(&api).execute();
    for entry in api.sent() {
        println!("{entry}");
    }

    let quiet: Task = Task::default();
    quiet.execute();
    println!("(the default task logged nothing)");
    Ok(())
}

fn interpreter() -> Result<(), Box<dyn Error>> {
    let sum = Expression::operation("plus", Expression::number("45"), Expression::number("37"));
    println!("{sum} = {}", sum.evaluate()?);

    let difference = interpreter::parse("(minus 63 (plus 45 37))")?;
    println!("{difference} = {}", difference.evaluate()?);

    let unknown = interpreter::parse("(times 2 3)")?;
    if let Err(err) = unknown.evaluate() {
        println!("{unknown}: {err}");
    }
    Ok(())
}

fn command() -> Result<(), Box<dyn Error>> {
    let mut history = CommandHistory::new();
    history.run(AddShape::new("rhombus"));
    history.run(AddShape::new("triangle"));
    history.run(ClearAll::new());
    println!("After clearing: {}", history.drawing());
    history.undo();
    println!("After undo: {}", history.drawing());
    history.redo();
    println!("After redo: {}", history.drawing());
    Ok(())
}
