use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use declensor_core::logging::init_tracing;
use declensor_core::{Declensor, MorphologyVector};
use std::env;
use std::io::{stdin, stdout, Write};

const MODELS_PATH: &str = "models.bin";

fn main() -> std::io::Result<()> {
    init_tracing("warn");

    let path = env::args().nth(1).unwrap_or_else(|| MODELS_PATH.to_string());
    let mut declensor = match Declensor::from_file(&path) {
        Ok(declensor) => declensor,
        Err(e) => {
            eprintln!("{} could not load '{}': {}", "[ERROR]".red(), path, e);
            eprintln!("Build a model file first: train <training.json> [config.json] [{}]", MODELS_PATH);
            std::process::exit(1);
        }
    };
    let mut orthography = false;

    print_header(&path, declensor.models.len())?;

    loop {
        print!("{} ", ">".bold());
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.as_slice() {
            [] => continue,
            ["exit"] => break,
            [":clear"] => print_header(&path, declensor.models.len())?,
            [":ortho"] => {
                orthography = !orthography;
                declensor = declensor.with_orthography(orthography);
                println!("orthography fix-ups {}", if orthography { "on" } else { "off" });
            }
            [word] => match declensor.recognize(word, None) {
                Ok(found) => println!(
                    "  {} model #{} at {} (suffix '{}')",
                    "recognized".green(),
                    found.index,
                    found.vector,
                    found.suffix
                ),
                Err(e) => println!("  {} {}", "error:".red(), e),
            },
            [word, target, rest @ ..] if rest.len() <= 1 => {
                let target = match target.parse::<MorphologyVector>() {
                    Ok(target) => target,
                    Err(e) => {
                        println!("  {} bad target vector '{}': {}", "error:".red(), target, e);
                        continue;
                    }
                };
                let morphology = match rest.first().map(|m| m.parse::<MorphologyVector>()) {
                    None => None,
                    Some(Ok(morphology)) => Some(morphology),
                    Some(Err(e)) => {
                        println!("  {} bad morphology vector: {}", "error:".red(), e);
                        continue;
                    }
                };
                match declensor.declense(word, &target, morphology.as_ref()) {
                    Ok(result) => println!("  {} -> {}", word, result.as_str().bold().green()),
                    Err(e) => println!("  {} {}", "error:".red(), e),
                }
            }
            _ => println!("  usage: <word> [<target> [<morphology>]], e.g. 'сонцю 1,1 1,2'"),
        }
    }

    Ok(())
}

fn print_header(path: &str, models: usize) -> std::io::Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Suffix Declensor".bold());
    println!("---------------------------------------------------------------");
    println!("Loaded {} models from '{}'.", models, path);
    println!("Type '<word>' to recognize it, '<word> <target> [<morphology>]' to declense.");
    println!("Vectors are written like '1,2'. ':ortho' toggles spelling fix-ups, 'exit' quits.\n");
    Ok(())
}
