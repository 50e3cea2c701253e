use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process,
    time::Instant,
};

use pascal_interpreter::{
    display_error, interpreter::interpreter::Interpreter, parser::parser::parse, run,
    semantics::semantics::SemanticAnalyzer,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_repl(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("usage: {} [file]", args[0]);
            process::exit(2);
        }
    }
}

/// Interactive loop: one full cycle per line. The variable store lives in
/// `interpreter` and survives across lines; a failed cycle surfaces its
/// error and ends the session.
fn run_repl() {
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();

    loop {
        print!("calc> ");
        io::stdout().flush().expect("Failed to flush stdout!");

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        match run(text, &mut interpreter) {
            Ok(()) => print_bindings(&interpreter),
            Err(error) => {
                display_error(&error, text);
                process::exit(1);
            }
        }
    }
}

fn run_file(file_path: &str) {
    let source = read_to_string(file_path).expect("Failed to read file!");

    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap_or(file_path)
    } else {
        file_path
    };

    let start = Instant::now();

    let parsed = parse(&source, Some(String::from(file_name)));
    let program = match parsed {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    };

    println!("Parsed in {:?}", start.elapsed());

    let check_start = Instant::now();
    let mut analyzer = SemanticAnalyzer::new();
    if let Err(error) = analyzer.analyze(&program) {
        display_error(&error, &source);
        process::exit(1);
    }

    println!("Checked in {:?}", check_start.elapsed());

    let eval_start = Instant::now();
    let mut interpreter = Interpreter::new();
    if let Err(error) = interpreter.interpret(&program) {
        display_error(&error, &source);
        process::exit(1);
    }

    println!("Evaluated in {:?}", eval_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    print_bindings(&interpreter);
}

fn print_bindings(interpreter: &Interpreter) {
    let mut bindings: Vec<_> = interpreter.globals().iter().collect();
    bindings.sort_by_key(|(name, _)| name.clone());

    for (name, value) in bindings {
        println!("  {} = {}", name, value);
    }
}
