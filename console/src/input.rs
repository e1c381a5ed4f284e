use puzzle2048_common::games::puzzle2048::Direction;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Maps one line of player input to a command. Surrounding whitespace is ignored.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "w" => Some(Command::Move(Direction::Up)),
        "a" => Some(Command::Move(Direction::Left)),
        "s" => Some(Command::Move(Direction::Down)),
        "d" => Some(Command::Move(Direction::Right)),
        "q" => Some(Command::Quit),
        _ => None,
    }
}
