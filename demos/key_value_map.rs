/// `KeyValueMap` usage example
use urlparts::KeyValueMap;

fn main() {
    // Parse a query fragment
    let mut params = KeyValueMap::parse("name=John&age=30&debug");

    // Get values: absent key, key without value, key with value
    println!("name: {:?}", params.get("name")); // Some(Some("John"))
    println!("debug: {:?}", params.get("debug")); // Some(None)
    println!("city: {:?}", params.get("city")); // None
    println!();

    // Insert overwrites in place, new keys go to the end
    params.insert("age", Some("31".to_string()));
    params.insert("city", Some("Tokyo".to_string()));
    println!("After insert: {}", params.serialize('?')); // ?name=John&age=31&debug&city=Tokyo
    println!();

    // Remove a key
    params.remove("debug");
    println!("After remove: {}", params.serialize('#')); // #name=John&age=31&city=Tokyo
    println!();

    // Iterate over all entries
    println!("All entries:");
    for (key, value) in params.iter() {
        println!("  {key} = {value:?}");
    }
}
