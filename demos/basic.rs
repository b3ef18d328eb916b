use urlparts::ParsedUrl;

fn main() {
    // Split a URL into its parts
    let url = ParsedUrl::parse("https://www.test.com/test/a?query1=1&query2=2#hash1=1");

    println!("URL: {url}"); // https://www.test.com/test/a?query1=1&query2=2#hash1=1
    println!("Scheme: {:?}", url.scheme); // Some("https://")
    println!("Host: {:?}", url.host); // Some("www.test.com")
    println!("Path: {:?}", url.path); // Some("test/a")
    println!("Query: {:?}", url.query.as_ref().map(ToString::to_string)); // Some("query1=1&query2=2")
    println!("Hash: {:?}", url.hash.as_ref().map(ToString::to_string)); // Some("hash1=1")

    // Missing parts are None
    let partial = ParsedUrl::parse("www.test.com/test");
    println!("Scheme of {partial}: {:?}", partial.scheme); // None
}
