use exprtree::{ExprError, ExprTree};
use rustyline::error::ReadlineError;

fn evalexpr(input: &str) -> Result<String, ExprError> {
    let tree = ExprTree::parse_str(input)?;
    let result = tree.eval()?;
    Ok(format!("{} = {}", tree, result))
}

fn main() -> Result<(), String> {
    env_logger::init();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        println!("{}", evalexpr(&input).map_err(|e| e.to_string())?);
        return Ok(());
    }

    let histpath = dirs::home_dir().map(|h| h.join(".exprcalc_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match evalexpr(&line) {
                    Ok(output) => println!("{}", output),
                    Err(e) => println!("Error: {}", e),
                }
            }
        }
    }
    if let Some(path) = histpath {
        rl.save_history(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
