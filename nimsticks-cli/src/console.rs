//! Console input provider for the human player

use std::io::{self, BufRead};

use nimsticks_core::{Board, HumanCommand, InputProvider};

/// Menu-driven provider reading from stdin
///
/// Blocks on every prompt; non-numeric input re-prompts, a closed stdin
/// aborts the process since no move can ever arrive.
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }

    fn read_number(&self) -> usize {
        loop {
            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => {
                    eprintln!("stdin closed, aborting");
                    std::process::exit(1);
                }
                Ok(_) => {}
            }
            match line.trim().parse() {
                Ok(number) => return number,
                Err(_) => println!("Please enter a number:"),
            }
        }
    }
}

impl InputProvider for ConsoleInput {
    fn request_display(&mut self, board: &Board) {
        print!("{}", board);
    }

    fn request_move(&mut self) -> HumanCommand {
        loop {
            println!("Press 1 to display the board. Press 2 to make a move:");
            match self.read_number() {
                1 => return HumanCommand::ShowBoard,
                2 => {
                    println!("Enter the row number:");
                    let row = self.read_number();
                    println!("Enter the index of the leftmost stick:");
                    let left = self.read_number();
                    println!("Enter the index of the rightmost stick:");
                    let right = self.read_number();
                    return HumanCommand::Mark { row, left, right };
                }
                _ => println!("Unknown input."),
            }
        }
    }
}
