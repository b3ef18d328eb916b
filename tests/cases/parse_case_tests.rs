use crate::case_loader::{ParseCase, load_parse_cases, to_map};
use urlparts::parse;

#[test]
fn test_parse_cases() {
    let mut checked = 0;

    for case in load_parse_cases() {
        let ParseCase::Expectation {
            input,
            scheme,
            host,
            path,
            query,
            hash,
            ..
        } = case
        else {
            continue;
        };

        let parsed = parse(&input);
        assert_eq!(parsed.scheme, scheme, "scheme of {input:?}");
        assert_eq!(parsed.host, host, "host of {input:?}");
        assert_eq!(parsed.path, path, "path of {input:?}");
        assert_eq!(parsed.query, query.as_ref().map(to_map), "query of {input:?}");
        assert_eq!(parsed.hash, hash.as_ref().map(to_map), "hash of {input:?}");
        checked += 1;
    }

    assert!(checked > 0, "no parse cases were loaded");
}

#[test]
fn test_parse_cases_are_stable_under_rebuild() {
    for case in load_parse_cases() {
        let ParseCase::Expectation { input, lossy, .. } = case else {
            continue;
        };
        if lossy {
            continue;
        }
        let once = parse(&input);
        assert_eq!(parse(&once.href()), once, "rebuild of {input:?}");
    }
}
