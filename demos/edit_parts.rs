/// Editing URL parts by name.
/// Run with `RUST_LOG=debug` to see what each call does.
use urlparts::{Part, remove, set};

fn main() -> Result<(), urlparts::ParseError> {
    env_logger::init();

    let url = "https://www.test.com/test/a?query1=1&query2=2#hash1=1";

    for (name, value) in [("scheme", "http://"), ("path", "/docs"), ("query", "query3=3")] {
        let part: Part = name.parse()?;
        println!("set {part} {value:?}: {}", set(url, part, value));
    }

    println!("remove query2: {}", remove(url, Part::Query, Some(&["query2"])));
    println!("remove hash: {}", remove(url, Part::Hash, None));

    // Unknown names are rejected
    if let Err(e) = "port".parse::<Part>() {
        println!("port: {e}");
    }

    Ok(())
}
