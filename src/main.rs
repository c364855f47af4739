use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use chordgen::{realize, Realization, DEFAULT_DURATION_BEATS};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        // No arguments: interactive session
        if let Err(e) = run_interactive() {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        return;
    }

    if args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut json = false;
    let mut rest: Vec<&String> = Vec::new();
    for arg in &args[1..] {
        if arg == "--json" {
            json = true;
        } else {
            rest.push(arg);
        }
    }

    if rest.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let root = rest[0];
    let chord_type = rest[1];
    let inversion = match rest.get(2) {
        Some(s) => match s.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Invalid inversion '{}': expected a non-negative integer", s);
                process::exit(1);
            }
        },
        None => 0,
    };

    let realization = match realize(root, chord_type, inversion) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&realization) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error serializing chord: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let path = rest
        .get(3)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("{}.mid", realization.label)));

    if let Err(e) = chordgen::write_chord(&path, &realization.pitches, DEFAULT_DURATION_BEATS) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    println!("MIDI file '{}' has been created.", path.display());
    print_notes(&realization);
}

fn print_usage() {
    eprintln!("Usage: chordgen                                  interactive session");
    eprintln!("       chordgen <root> <type> [inversion] [out]  write one chord");
    eprintln!("       chordgen --json <root> <type> [inversion] print chord as JSON");
    eprintln!();
    eprintln!("Example: chordgen C4 maj 1");
}

fn print_notes(realization: &Realization) {
    println!(
        "The chord {} consists of the following notes: {}",
        realization.label,
        realization.note_names().join(" ")
    );
}

fn print_chord_type_menu() {
    println!("Chord types:");
    println!("- Major and Major nth: maj, maj7, maj9, maj11, maj13");
    println!("- Minor and Minor nth: m, m7, m9, m11, m13");
    println!("- Dominant 7th and Dominant nth: dom7, dom9, dom11, dom13");
    println!("- Suspended: sus2, sus4");
    println!("- Augmented: aug, aug7");
    println!("- Diminished: dim, dim7");
    println!("- Half diminished: m7b5");
    println!("- Added tone and sixth: add2, add6, m6");
}

/// Read one trimmed line from stdin after printing a prompt.
/// Returns None on end of input.
fn prompt(input: &mut impl BufRead, text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn run_interactive() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(root) = prompt(&mut input, "Enter the root note (e.g., F4, Bb3): ")? else {
            return Ok(());
        };

        print_chord_type_menu();
        let Some(chord_type) = prompt(&mut input, "Enter the chord type: ")? else {
            return Ok(());
        };

        let chord = match chordgen::Chord::build(&root, &chord_type) {
            Ok(chord) => chord,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let max_inversion = chord.pitches.len() - 1;
        let inversion = loop {
            let text = format!("Enter inversion (0 to {} for this chord): ", max_inversion);
            let Some(answer) = prompt(&mut input, &text)? else {
                return Ok(());
            };
            match answer.parse::<usize>() {
                Ok(n) if n <= max_inversion => break n,
                Ok(_) => println!(
                    "Invalid inversion. Please enter a number between 0 and {}.",
                    max_inversion
                ),
                Err(_) => println!("Invalid input. Please enter a valid integer."),
            }
        };

        let realization = match realize(&root, &chord_type, inversion) {
            Ok(r) => r,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let path = PathBuf::from(format!("{}.mid", realization.label));
        match chordgen::write_chord(&path, &realization.pitches, DEFAULT_DURATION_BEATS) {
            Ok(()) => println!("MIDI file '{}' has been created.", path.display()),
            Err(e) => {
                println!("{}", e);
                continue;
            }
        }
        print_notes(&realization);

        let Some(answer) = prompt(&mut input, "Type y to quit: ")? else {
            return Ok(());
        };
        if answer.eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}
