//! tagdown CLI - print the block outline of a document

use std::io::{self, Read, Write};

use tagdown::{Outline, Parser, outline};

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    // Simple usage: read from stdin or file
    let input = if args.len() > 1 && args[1] != "-" {
        std::fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let doc = Parser::new()
        .parse(&input, &mut Outline)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

    io::stdout().write_all(outline::render(&doc).as_bytes())?;

    Ok(())
}
