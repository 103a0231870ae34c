use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: richdoc-render <stored.json|fragment.html>...");
        eprintln!();
        eprintln!("Renders stored content values to sanitized HTML on stdout.");
        eprintln!("Examples:");
        eprintln!("  richdoc-render page-body.json");
        eprintln!("  richdoc-render posts/*.json");
        process::exit(1);
    }

    let mut exit_code = 0;
    let files: Vec<_> = args[1..].to_vec();
    let many = files.len() > 1;

    for file_path in files {
        match render_file(&file_path) {
            Ok(html) => {
                if many {
                    println!("--- {}", file_path);
                }
                if html.is_empty() {
                    println!("{}", richdoc::NO_CONTENT);
                } else {
                    println!("{}", html);
                }
            }
            Err(e) => {
                eprintln!("✗ {}: {}", file_path, e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn render_file(path: &str) -> Result<String, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    Ok(richdoc::render_stored_str(&content))
}
