use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use protoscribe::codegen;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<_> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return Ok(());
    }

    // Read descriptor bytes
    let descriptor_bytes = if args[1] == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(&args[1])?
    };

    eprintln!("Read descriptor ({} bytes)", descriptor_bytes.len());

    let files = codegen::generate(&descriptor_bytes)?;

    match args.get(2) {
        Some(out_dir) => {
            let out_dir = Path::new(out_dir);
            fs::create_dir_all(out_dir)?;
            for file in &files {
                fs::write(out_dir.join(&file.name), &file.content)?;
                eprintln!("Generated {}", file.name);
            }
        }
        None => {
            let mut stdout = io::stdout();
            for file in &files {
                stdout.write_all(file.content.as_bytes())?;
            }
        }
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Protoscribe Code Generator");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  {program} <descriptor.pb> [out_dir/]");
    eprintln!("  {program} - < descriptor.pb > output.rs");
    eprintln!();
    eprintln!("ARGUMENTS:");
    eprintln!("  descriptor.pb   FileDescriptorSet from protoc");
    eprintln!("  out_dir/        Directory for generated .rs files (default: stdout)");
    eprintln!();
    eprintln!("EXAMPLE:");
    eprintln!("  protoc --descriptor_set_out=desc.pb --include_imports my.proto");
    eprintln!("  {program} desc.pb src/pb/");
}
