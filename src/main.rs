use std::error::Error;
use std::io;

use log::warn;
use pixel_automata::{decode_rule, RuleCode};

mod auxiliary;
mod projects;

/// Prompts until the user types a valid rule code.
fn read_rule_code() -> io::Result<RuleCode> {
    loop {
        println!("Please specify a rule code between 0 and 255");
        let mut text = String::new();
        if io::stdin().read_line(&mut text)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        match text.parse::<RuleCode>() {
            Ok(code) => return Ok(code),
            Err(e) => {
                warn!("rejected rule code input: {}", e);
                println!("\nERROR: {}", e);
            }
        }
    }
}

fn select_animation(input: &str) -> Result<(), Box<dyn Error>> {
    match input {
        "1" => {
            println!("Elementary automata look at a cell and its two neighbours to decide its next state. Each row on screen is one generation.");
            let code = read_rule_code()?;
            let table = decode_rule(i64::from(code.value()))?;
            projects::elementary::run_elementary(table)
        }
        "2" => {
            println!("The evolution of the cells follows these rules:");
            println!("1. Any live cell with fewer than two live neighbours dies, as if by underpopulation.");
            println!("2. Any live cell with two or three live neighbours lives on to the next generation.");
            println!("3. Any live cell with more than three live neighbours dies, as if by overpopulation.");
            println!("4. Any dead cell with exactly three live neighbours becomes a live cell, as if by reproduction.");
            println!("\nDraw by clicking on the squares, then press P to watch it evolve.");
            projects::life::run_life()
        }
        _ => {
            println!("unknown project");
            Ok(())
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    println!("\nWelcome to the automata demo!\nType 'q' to quit.");
    loop {
        println!("\n\nWhat would you like to see?\n\n1) Elementary automaton\n2) Conway's Game of Life");
        let mut val = String::new();
        if io::stdin().read_line(&mut val)? == 0 {
            break;
        }

        let v = val.trim();

        if v == "q" || v == "quit" {
            break;
        }

        if !v.chars().all(char::is_numeric) {
            println!("\nERROR: Must input an integer or a valid command.");
            continue;
        }
        println!("\n\nControls for animation:\nC: clear screen\nP: pause\nR: randomize screen\nSPACE: frame by frame\nMOUSE: toggle and draw cells\nESC: close screen");
        // A window's event loop never hands control back, so this only
        // returns on errors and unknown choices.
        if let Err(e) = select_animation(v) {
            println!("{}", e)
        }
    }
    Ok(())
}
