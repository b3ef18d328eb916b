use crate::case_loader::{EditCase, Operation, load_edit_cases, to_map};
use urlparts::{Part, PartValue, remove, set};

fn run(
    input: &str,
    op: &Operation,
    part: Part,
    text: Option<&String>,
    entries: Option<&crate::case_loader::Entries>,
    keys: Option<&Vec<String>>,
) -> String {
    match op {
        Operation::Set => {
            let value = match (text, entries) {
                (Some(text), _) => PartValue::from(text.as_str()),
                (None, Some(entries)) => PartValue::from(to_map(entries)),
                (None, None) => panic!("set case for {input:?} has no value"),
            };
            set(input, part, value)
        }
        Operation::Remove => {
            let keys: Option<Vec<&str>> =
                keys.map(|keys| keys.iter().map(String::as_str).collect());
            remove(input, part, keys.as_deref())
        }
    }
}

#[test]
fn test_edit_cases() {
    let mut checked = 0;

    for case in load_edit_cases() {
        let EditCase::Expectation {
            input,
            op,
            part,
            text,
            entries,
            keys,
            expected,
        } = case
        else {
            continue;
        };

        let part: Part = part
            .parse()
            .unwrap_or_else(|e| panic!("bad part name in case for {input:?}: {e}"));
        let actual = run(
            &input,
            &op,
            part,
            text.as_ref(),
            entries.as_ref(),
            keys.as_ref(),
        );
        assert_eq!(actual, expected, "{op:?} {part} on {input:?}");
        checked += 1;
    }

    assert!(checked > 0, "no edit cases were loaded");
}
